//! Port definitions for the interactive controller.
//!
//! Contains the traits the scheduler talks through: the presentation surface
//! that receives frames and the worker that renders them off the host thread.

pub mod presenter;
pub mod render_worker;

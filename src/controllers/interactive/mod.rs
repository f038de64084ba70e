//! Interactive controller for real-time fractal rendering.
//!
//! This module provides the application layer for interactive exploration,
//! turning view changes into render requests and delivering finished frames
//! to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `ExplorerSession` operations (zoom, palette, iterations)
//! - **Output**: `PresenterPort` trait for receiving rendered frames
//! - **Workers**: `RenderWorker` trait for off-thread rendering
//! - **Core**: Uses domain actions from `core/` for actual computation

pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod scheduler;
mod session;
pub mod worker;

pub use data::explorer_config::{ConfigError, ExplorerConfig, IterationBounds};
pub use data::frame_data::{FrameData, RenderStrategy};
pub use data::render_progress::RenderProgress;
pub use errors::worker::WorkerError;
pub use events::render::RenderEvent;
pub use ports::presenter::PresenterPort;
pub use ports::render_worker::{RenderWorker, WorkerEvent, WorkerJob};
pub use scheduler::{RenderPhase, RenderScheduler};
pub use session::{ExplorerSession, ViewSummary};
pub use worker::messages::WorkerRequest;
pub use worker::thread_worker::ThreadWorker;

use std::time::Duration;

use crate::controllers::interactive::errors::worker::WorkerError;
use crate::controllers::interactive::worker::messages::WorkerRequest;
use crate::core::data::pixel_buffer::PixelBuffer;

/// A request copied into the worker, tagged with the generation it was
/// dispatched under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerJob {
    pub generation: u64,
    pub request: WorkerRequest,
}

#[derive(Debug)]
pub enum WorkerEvent {
    Completed {
        generation: u64,
        pixel_buffer: PixelBuffer,
        render_duration: Duration,
    },
    Failed(WorkerError),
}

/// An independent execution context that renders whole frames out of band.
///
/// `dispatch` must not block on the render; results come back through `poll`.
pub trait RenderWorker: Send {
    fn dispatch(&mut self, job: WorkerJob) -> Result<(), WorkerError>;

    fn poll(&mut self) -> Option<WorkerEvent>;
}

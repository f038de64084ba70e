use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use tracing::debug;

use crate::controllers::interactive::errors::worker::WorkerError;
use crate::controllers::interactive::ports::render_worker::{RenderWorker, WorkerEvent, WorkerJob};
use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_frame::render_frame_rayon::render_frame_rayon_cancelable;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

const WORKER_THREAD_NAME: &str = "render-worker";

/// Cancels a job once a newer generation has been dispatched.
pub(crate) struct Superseded {
    latest: Arc<AtomicU64>,
    generation: u64,
}

impl CancelToken for Superseded {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.latest.load(Ordering::Relaxed) != self.generation
    }
}

pub(crate) type FrameRenderer = fn(&RenderRequest, &Superseded) -> Result<PixelBuffer, Cancelled>;

/// Renders frames on a dedicated thread, fanning rows out over rayon.
///
/// Jobs travel in by value over one channel and finished buffers travel back
/// over another, so the two sides share nothing but the latest dispatched
/// generation. A job that has been superseded by a newer dispatch is abandoned
/// at the next row boundary.
pub struct ThreadWorker {
    jobs: Option<Sender<WorkerJob>>,
    events: Receiver<WorkerEvent>,
    latest_generation: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl ThreadWorker {
    pub fn spawn() -> Result<Self, WorkerError> {
        Self::spawn_with(render_frame_rayon_cancelable::<Superseded>)
    }

    pub(crate) fn spawn_with(render: FrameRenderer) -> Result<Self, WorkerError> {
        let (job_tx, job_rx) = mpsc::channel::<WorkerJob>();
        let (event_tx, event_rx) = mpsc::channel::<WorkerEvent>();
        let latest_generation = Arc::new(AtomicU64::new(0));
        let worker_latest = Arc::clone(&latest_generation);

        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || Self::worker_loop(render, &job_rx, &event_tx, &worker_latest))?;

        Ok(Self {
            jobs: Some(job_tx),
            events: event_rx,
            latest_generation,
            handle: Some(handle),
        })
    }

    fn worker_loop(
        render: FrameRenderer,
        jobs: &Receiver<WorkerJob>,
        events: &Sender<WorkerEvent>,
        latest: &Arc<AtomicU64>,
    ) {
        while let Ok(mut job) = jobs.recv() {
            // Only the newest queued job can still be presented.
            while let Ok(newer) = jobs.try_recv() {
                job = newer;
            }

            let job_generation = job.generation;
            let cancel = Superseded {
                latest: Arc::clone(latest),
                generation: job_generation,
            };
            let request = RenderRequest::from(&job.request);

            let start = Instant::now();
            match render(&request, &cancel) {
                Ok(pixel_buffer) => {
                    let event = WorkerEvent::Completed {
                        generation: job_generation,
                        pixel_buffer,
                        render_duration: start.elapsed(),
                    };

                    if events.send(event).is_err() {
                        return;
                    }
                }
                Err(Cancelled) => {
                    debug!(generation = job_generation, "worker abandoned superseded job");
                }
            }
        }
    }

    fn take_failure(&mut self) -> WorkerError {
        match self.handle.take().map(JoinHandle::join) {
            Some(Err(payload)) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());

                WorkerError::Panicked(message)
            }
            _ => WorkerError::Disconnected,
        }
    }
}

impl RenderWorker for ThreadWorker {
    fn dispatch(&mut self, job: WorkerJob) -> Result<(), WorkerError> {
        let jobs = self.jobs.as_ref().ok_or(WorkerError::Disconnected)?;

        self.latest_generation
            .store(job.generation, Ordering::Relaxed);

        jobs.send(job).map_err(|_| WorkerError::Disconnected)
    }

    fn poll(&mut self) -> Option<WorkerEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(WorkerEvent::Failed(self.take_failure())),
        }
    }
}

impl Drop for ThreadWorker {
    fn drop(&mut self) {
        // Cancels whatever is running, then closing the job channel ends the loop.
        self.latest_generation.store(u64::MAX, Ordering::Relaxed);
        self.jobs.take();

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::worker::messages::WorkerRequest;
    use crate::core::actions::render_rows::render_rows::render_frame_serial;
    use crate::core::data::view::{Frame, View};
    use crate::core::fractals::mandelbrot::palettes::PaletteKind;
    use std::time::Duration;

    fn request(max_iterations: u32) -> RenderRequest {
        RenderRequest {
            view: View::new(-0.5, 0.0, 20.0),
            frame: Frame::new(40, 30, 1.0),
            max_iterations,
            palette: PaletteKind::Inferno,
        }
    }

    fn wait_for_event(worker: &mut ThreadWorker, timeout: Duration) -> Option<WorkerEvent> {
        let start = Instant::now();
        loop {
            if let Some(event) = worker.poll() {
                return Some(event);
            }
            if start.elapsed() >= timeout {
                return None;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_dispatch_returns_completed_frame() {
        let mut worker = ThreadWorker::spawn().unwrap();
        let req = request(50);

        worker
            .dispatch(WorkerJob {
                generation: 1,
                request: WorkerRequest::from(&req),
            })
            .unwrap();

        match wait_for_event(&mut worker, Duration::from_secs(5)) {
            Some(WorkerEvent::Completed {
                generation,
                pixel_buffer,
                ..
            }) => {
                assert_eq!(generation, 1);
                assert_eq!(pixel_buffer, render_frame_serial(&req));
            }
            other => panic!("expected a completed frame, got {:?}", other),
        }
    }

    #[test]
    fn test_poll_is_empty_before_dispatch() {
        let mut worker = ThreadWorker::spawn().unwrap();

        assert!(worker.poll().is_none());
    }

    #[test]
    fn test_newest_dispatch_is_the_last_completion() {
        let mut worker = ThreadWorker::spawn().unwrap();

        for generation in 1..=4 {
            worker
                .dispatch(WorkerJob {
                    generation,
                    request: WorkerRequest::from(&request(100)),
                })
                .unwrap();
        }

        let mut last_generation = 0;
        while let Some(event) = wait_for_event(&mut worker, Duration::from_millis(500)) {
            if let WorkerEvent::Completed { generation, .. } = event {
                assert!(generation > last_generation);
                last_generation = generation;
            }
        }

        assert_eq!(last_generation, 4);
    }

    fn exploding_renderer(
        _request: &RenderRequest,
        _cancel: &Superseded,
    ) -> Result<PixelBuffer, Cancelled> {
        panic!("renderer exploded");
    }

    #[test]
    fn test_panicking_render_surfaces_as_failure() {
        let mut worker = ThreadWorker::spawn_with(exploding_renderer).unwrap();
        worker
            .dispatch(WorkerJob {
                generation: 1,
                request: WorkerRequest::from(&request(50)),
            })
            .unwrap();

        match wait_for_event(&mut worker, Duration::from_secs(5)) {
            Some(WorkerEvent::Failed(WorkerError::Panicked(message))) => {
                assert_eq!(message, "renderer exploded");
            }
            other => panic!("expected a panicked worker, got {:?}", other),
        }

        assert!(matches!(worker.poll(), Some(WorkerEvent::Failed(WorkerError::Disconnected))));
        assert!(matches!(
            worker.dispatch(WorkerJob {
                generation: 2,
                request: WorkerRequest::from(&request(50)),
            }),
            Err(WorkerError::Disconnected)
        ));
    }

    #[test]
    fn test_drop_joins_worker_thread() {
        let mut worker = ThreadWorker::spawn().unwrap();
        worker
            .dispatch(WorkerJob {
                generation: 1,
                request: WorkerRequest::from(&request(1000)),
            })
            .unwrap();

        drop(worker);
    }
}

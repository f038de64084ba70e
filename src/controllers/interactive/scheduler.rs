use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::controllers::interactive::data::frame_data::{FrameData, RenderStrategy};
use crate::controllers::interactive::data::render_progress::RenderProgress;
use crate::controllers::interactive::errors::worker::WorkerError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::PresenterPort;
use crate::controllers::interactive::ports::render_worker::{RenderWorker, WorkerEvent, WorkerJob};
use crate::controllers::interactive::worker::messages::WorkerRequest;
use crate::controllers::interactive::worker::thread_worker::ThreadWorker;
use crate::core::actions::render_rows::render_rows::render_rows;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Rendering,
    Complete,
}

struct InFlight {
    generation: u64,
    request: RenderRequest,
    strategy: RenderStrategy,
}

struct CooperativeJob {
    generation: u64,
    request: RenderRequest,
    buffer: PixelBuffer,
    next_row: u32,
    batch_rows: u32,
    started: Instant,
}

/// Drives one full-frame render at a time.
///
/// Every [`start`](Self::start) bumps the generation. Work is either handed
/// to a [`RenderWorker`] or computed here in row batches, one batch per
/// [`tick`](Self::tick). Whatever finishes is presented only if it still
/// carries the live generation; anything older is dropped.
///
/// Once the worker fails, to spawn or at any later point, the scheduler stays
/// cooperative for the rest of its life.
pub struct RenderScheduler {
    presenter: Arc<dyn PresenterPort>,
    worker: Option<Box<dyn RenderWorker>>,
    batches_per_frame: u32,
    generation: u64,
    last_completed_generation: u64,
    phase: RenderPhase,
    in_flight: Option<InFlight>,
    cooperative: Option<CooperativeJob>,
}

impl RenderScheduler {
    #[must_use]
    pub fn new(
        presenter: Arc<dyn PresenterPort>,
        worker: Option<Box<dyn RenderWorker>>,
        batches_per_frame: u32,
    ) -> Self {
        Self {
            presenter,
            worker,
            batches_per_frame: batches_per_frame.max(1),
            generation: 0,
            last_completed_generation: 0,
            phase: RenderPhase::Idle,
            in_flight: None,
            cooperative: None,
        }
    }

    /// Builds the worker with `factory`, starting cooperative if that fails.
    pub fn with_worker_factory<F>(
        presenter: Arc<dyn PresenterPort>,
        batches_per_frame: u32,
        factory: F,
    ) -> Self
    where
        F: FnOnce() -> Result<Box<dyn RenderWorker>, WorkerError>,
    {
        let worker = match factory() {
            Ok(worker) => Some(worker),
            Err(err) => {
                warn!(error = %err, "render worker unavailable, rendering cooperatively");
                None
            }
        };

        Self::new(presenter, worker, batches_per_frame)
    }

    pub fn with_thread_worker(presenter: Arc<dyn PresenterPort>, batches_per_frame: u32) -> Self {
        Self::with_worker_factory(presenter, batches_per_frame, || {
            ThreadWorker::spawn().map(|worker| Box::new(worker) as Box<dyn RenderWorker>)
        })
    }

    #[must_use]
    pub fn cooperative(presenter: Arc<dyn PresenterPort>, batches_per_frame: u32) -> Self {
        Self::new(presenter, None, batches_per_frame)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    #[must_use]
    pub fn has_parallel_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Begins rendering `request`, superseding any render in progress.
    pub fn start(&mut self, request: RenderRequest) -> u64 {
        self.generation += 1;
        let generation = self.generation;

        self.phase = RenderPhase::Rendering;
        self.cooperative = None;

        if let Some(worker) = self.worker.as_mut() {
            let job = WorkerJob {
                generation,
                request: WorkerRequest::from(&request),
            };

            match worker.dispatch(job) {
                Ok(()) => {
                    debug!(generation, "dispatched render to worker");
                    self.in_flight = Some(InFlight {
                        generation,
                        request,
                        strategy: RenderStrategy::Parallel,
                    });

                    return generation;
                }
                Err(err) => self.abandon_worker(&err),
            }
        }

        self.begin_cooperative(generation, request);

        generation
    }

    /// Stops presenting the current render. A dispatched worker job keeps
    /// running but its result will be ignored.
    pub fn halt(&mut self) {
        self.phase = RenderPhase::Idle;
        self.in_flight = None;
        self.cooperative = None;
    }

    /// One host scheduling tick: collect worker output, then run at most one
    /// cooperative batch.
    pub fn tick(&mut self) -> RenderPhase {
        self.drain_worker();
        self.step_cooperative();

        self.phase
    }

    fn begin_cooperative(&mut self, generation: u64, request: RenderRequest) {
        let buffer = PixelBuffer::new(request.physical_width(), request.physical_height());
        let batch_rows = buffer.height().div_ceil(self.batches_per_frame).max(1);

        self.in_flight = Some(InFlight {
            generation,
            request,
            strategy: RenderStrategy::Cooperative,
        });
        self.cooperative = Some(CooperativeJob {
            generation,
            request,
            buffer,
            next_row: 0,
            batch_rows,
            started: Instant::now(),
        });
    }

    fn drain_worker(&mut self) {
        loop {
            let Some(worker) = self.worker.as_mut() else {
                return;
            };
            let Some(event) = worker.poll() else {
                return;
            };

            match event {
                WorkerEvent::Completed {
                    generation,
                    pixel_buffer,
                    render_duration,
                } => {
                    if self.is_live_parallel(generation) {
                        self.complete(generation, pixel_buffer, render_duration);
                    } else {
                        debug!(
                            generation,
                            live = self.generation,
                            "discarding stale worker frame"
                        );
                    }
                }
                WorkerEvent::Failed(err) => {
                    self.abandon_worker(&err);
                    self.restart_in_flight();
                    return;
                }
            }
        }
    }

    fn is_live_parallel(&self, generation: u64) -> bool {
        self.phase == RenderPhase::Rendering
            && generation == self.generation
            && self.in_flight.as_ref().is_some_and(|in_flight| {
                in_flight.generation == generation && in_flight.strategy == RenderStrategy::Parallel
            })
    }

    fn abandon_worker(&mut self, err: &WorkerError) {
        warn!(error = %err, "render worker failed, falling back to cooperative rendering");
        self.worker = None;
    }

    fn restart_in_flight(&mut self) {
        if self.phase != RenderPhase::Rendering {
            return;
        }

        let parallel_request = self
            .in_flight
            .as_ref()
            .filter(|in_flight| in_flight.strategy == RenderStrategy::Parallel)
            .map(|in_flight| in_flight.request);

        if let Some(request) = parallel_request {
            let generation = self.start(request);
            debug!(generation, "restarted in-flight render cooperatively");
        }
    }

    fn step_cooperative(&mut self) {
        let Some(job) = self.cooperative.as_mut() else {
            return;
        };

        if job.generation != self.generation || self.phase != RenderPhase::Rendering {
            debug!(generation = job.generation, "dropping superseded cooperative render");
            self.cooperative = None;
            return;
        }

        let end_row = render_rows(
            &job.request,
            &mut job.buffer,
            job.next_row,
            job.next_row.saturating_add(job.batch_rows),
        );
        job.next_row = end_row;

        let progress = RenderProgress {
            generation: job.generation,
            rows_completed: end_row,
            total_rows: job.buffer.height(),
        };
        debug!(
            generation = progress.generation,
            rows = progress.rows_completed,
            total = progress.total_rows,
            "cooperative batch done"
        );
        self.presenter.present(RenderEvent::Progress(progress));

        if progress.rows_completed >= progress.total_rows {
            if let Some(job) = self.cooperative.take() {
                let duration = job.started.elapsed();
                self.complete(job.generation, job.buffer, duration);
            }
        }
    }

    fn complete(
        &mut self,
        generation: u64,
        pixel_buffer: PixelBuffer,
        render_duration: std::time::Duration,
    ) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        self.phase = RenderPhase::Complete;
        self.last_completed_generation = generation;

        info!(
            generation,
            strategy = %in_flight.strategy,
            width = pixel_buffer.width(),
            height = pixel_buffer.height(),
            max_iterations = in_flight.request.max_iterations,
            ?render_duration,
            "frame complete"
        );

        self.presenter.present(RenderEvent::Frame(FrameData {
            generation,
            pixel_buffer,
            max_iterations: in_flight.request.max_iterations,
            strategy: in_flight.strategy,
            render_duration,
        }));
    }
}

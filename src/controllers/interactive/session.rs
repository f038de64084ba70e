use std::fmt;

use crate::controllers::interactive::data::explorer_config::ExplorerConfig;
use crate::controllers::interactive::scheduler::{RenderPhase, RenderScheduler};
use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::view::{Frame, View};
use crate::core::fractals::mandelbrot::palettes::PaletteKind;
use crate::core::util::pixel_to_complex_coords::map_logical_to_plane;

/// Position and scale readout for a HUD.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSummary {
    pub real: f64,
    pub imag: f64,
    pub zoom: f64,
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Re: {:.6}  Im: {:.6}  Zoom: {:.0}x",
            self.real, self.imag, self.zoom
        )
    }
}

/// View state for one explorer surface, plus the scheduler that renders it.
///
/// Every view-changing operation rebuilds a [`RenderRequest`] and restarts the
/// render, returning the new generation. While paused nothing starts and
/// operations return `None`, but state changes still apply.
pub struct ExplorerSession {
    config: ExplorerConfig,
    view: View,
    frame: Frame,
    max_iterations: u32,
    palette: PaletteKind,
    active: bool,
    scheduler: RenderScheduler,
}

impl ExplorerSession {
    #[must_use]
    pub fn new(config: ExplorerConfig, scheduler: RenderScheduler) -> Self {
        Self {
            view: config.default_view,
            frame: config.default_frame,
            max_iterations: config.default_max_iterations,
            palette: config.default_palette,
            active: true,
            config,
            scheduler,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKind {
        self.palette
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> RenderPhase {
        self.scheduler.phase()
    }

    #[must_use]
    pub fn scheduler(&self) -> &RenderScheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            view: self.view,
            frame: self.frame,
            max_iterations: self.max_iterations,
            palette: self.palette,
        }
    }

    pub fn start(&mut self) -> Option<u64> {
        if !self.active {
            return None;
        }

        Some(self.scheduler.start(self.request()))
    }

    /// Advances the render by one host frame.
    pub fn tick(&mut self) -> RenderPhase {
        self.scheduler.tick()
    }

    pub fn set_palette(&mut self, palette: PaletteKind) -> Option<u64> {
        self.palette = palette;
        self.start()
    }

    /// Like [`set_palette`](Self::set_palette), substituting inferno for unknown ids.
    pub fn set_palette_id(&mut self, id: &str) -> Option<u64> {
        self.set_palette(PaletteKind::from_id(id))
    }

    /// Recentres on logical position `(x, y)` and multiplies the zoom by `factor`.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64) -> Option<u64> {
        debug_assert!(factor > 0.0, "zoom factor must be positive");

        let centre = map_logical_to_plane(x, y, &self.frame, &self.view);
        self.view = View::new(centre.real, centre.imag, self.view.zoom * factor);
        self.start()
    }

    /// [`zoom_at`](Self::zoom_at) with the configured zoom factor.
    pub fn zoom_in_at(&mut self, x: f64, y: f64) -> Option<u64> {
        self.zoom_at(x, y, self.config.zoom_factor)
    }

    /// Divides the zoom by `factor`, never going below `min_zoom`.
    pub fn zoom_out(&mut self, factor: f64, min_zoom: f64) -> Option<u64> {
        self.view.zoom = (self.view.zoom / factor).max(min_zoom);
        self.start()
    }

    /// [`zoom_out`](Self::zoom_out) with the configured factor and floor.
    pub fn zoom_out_one_step(&mut self) -> Option<u64> {
        self.zoom_out(self.config.zoom_factor, self.config.min_zoom)
    }

    pub fn reset_view(&mut self) -> Option<u64> {
        self.view = self.config.default_view;
        self.start()
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Option<u64> {
        self.max_iterations = max_iterations;
        self.start()
    }

    /// Steps the iteration budget by `direction` steps within the configured bounds.
    pub fn adjust_iterations(&mut self, direction: i32) -> Option<u64> {
        let next = self
            .config
            .iteration_bounds
            .step_from(self.max_iterations, direction);

        self.set_max_iterations(next)
    }

    pub fn set_frame(&mut self, frame: Frame) -> Option<u64> {
        self.frame = frame;
        self.start()
    }

    /// Stops starting new renders. A worker render already dispatched keeps
    /// running but is not presented.
    pub fn pause(&mut self) {
        self.active = false;
        self.scheduler.halt();
    }

    pub fn resume(&mut self) -> Option<u64> {
        self.active = true;
        self.start()
    }

    /// Plane coordinates under a logical pointer position.
    #[must_use]
    pub fn plane_coords_at(&self, x: f64, y: f64) -> Complex {
        map_logical_to_plane(x, y, &self.frame, &self.view)
    }

    #[must_use]
    pub fn view_summary(&self) -> ViewSummary {
        ViewSummary {
            real: self.view.center_x,
            imag: self.view.center_y,
            zoom: self.view.zoom,
        }
    }

    #[must_use]
    pub fn pointer_summary(&self, x: f64, y: f64) -> ViewSummary {
        let c = self.plane_coords_at(x, y);

        ViewSummary {
            real: c.real,
            imag: c.imag,
            zoom: self.view.zoom,
        }
    }
}

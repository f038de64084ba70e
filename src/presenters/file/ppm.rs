use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{error, info};

use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::PresenterPort;
use crate::storage::write_ppm::write_ppm;

/// Presentation surface that saves every completed frame to one PPM file.
pub struct PpmFilePresenter {
    filepath: PathBuf,
    last_written_generation: Mutex<Option<u64>>,
}

impl PpmFilePresenter {
    pub fn new(filepath: impl AsRef<Path>) -> Self {
        Self {
            filepath: filepath.as_ref().to_path_buf(),
            last_written_generation: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    #[must_use]
    pub fn last_written_generation(&self) -> Option<u64> {
        self.last_written_generation
            .lock()
            .ok()
            .and_then(|guard| *guard)
    }
}

impl PresenterPort for PpmFilePresenter {
    fn present(&self, event: RenderEvent) {
        let RenderEvent::Frame(frame) = event else {
            return;
        };

        match write_ppm(&frame.pixel_buffer, &self.filepath) {
            Ok(()) => {
                info!(
                    generation = frame.generation,
                    path = %self.filepath.display(),
                    "saved frame"
                );
                if let Ok(mut guard) = self.last_written_generation.lock() {
                    *guard = Some(frame.generation);
                }
            }
            Err(err) => {
                error!(
                    generation = frame.generation,
                    path = %self.filepath.display(),
                    error = %err,
                    "failed to save frame"
                );
            }
        }
    }
}

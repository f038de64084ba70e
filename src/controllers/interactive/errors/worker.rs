use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn render worker: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("render worker disconnected")]
    Disconnected,
    #[error("render worker panicked: {0}")]
    Panicked(String),
}

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use escape_time_explorer::{
    ExplorerConfig, ExplorerSession, PpmFilePresenter, PresenterPort, RenderPhase,
    RenderScheduler,
};
use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "output/mandelbrot.ppm";
const HOST_FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    std::fs::create_dir_all("output")?;

    let config = ExplorerConfig::default();
    let presenter = Arc::new(PpmFilePresenter::new(OUTPUT_PATH));
    let scheduler = RenderScheduler::with_thread_worker(
        Arc::clone(&presenter) as Arc<dyn PresenterPort>,
        config.batches_per_frame,
    );
    let mut session = ExplorerSession::new(config, scheduler);

    session.start();
    while session.tick() == RenderPhase::Rendering {
        thread::sleep(HOST_FRAME_INTERVAL);
    }

    println!("{}", session.view_summary());
    match presenter.last_written_generation() {
        Some(_) => println!("Saved to {}", OUTPUT_PATH),
        None => return Err(format!("no frame was written to {}", OUTPUT_PATH).into()),
    }

    Ok(())
}

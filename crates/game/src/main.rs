mod app;

use engine::{run_app, LoopConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

use app::LightSpirits;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

fn main() {
    init_tracing();

    let config = LoopConfig::default();
    if let Err(err) = run_app(config, Box::new(LightSpirits::new())) {
        error!(error = %err, "startup_failed");
        std::process::exit(1);
    }
}

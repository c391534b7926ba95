pub mod client;
pub mod config;
pub mod event_loop;
pub mod listener;
pub mod notification;
pub mod shutdown;
pub mod sound;
pub mod surface;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use config::{AppConfig, SettingsManager};
use notification::position::Size;
use surface::TracingSurface;

/// Install the global `tracing` subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load settings and runtime config (fatal on error).
pub fn init_foundation(
    path: Option<PathBuf>,
) -> Result<(SettingsManager, AppConfig), anyhow::Error> {
    let path = path.unwrap_or_else(config::config_path);
    let settings = SettingsManager::load(&path)?;
    let config = AppConfig::load(&settings)?;
    tracing::info!("Settings loaded (port={})", config.port);
    Ok((settings, config))
}

/// Run the daemon until a shutdown signal arrives.
pub async fn run(settings: SettingsManager, config: AppConfig) -> Result<(), anyhow::Error> {
    let socket = listener::bind(&config.host, config.port).await?;

    let surface = TracingSurface::new(Size::new(config.screen_width, config.screen_height));
    let mut popup = notification::initialize(&config, &settings, surface);

    let stats = event_loop::run(&socket, &mut popup, shutdown::wait_for_signal()).await;
    shutdown::graceful_shutdown(&mut popup, stats);
    Ok(())
}

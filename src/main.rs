//! Tiny Pad - main entry point

use std::path::Path;
use tiny_pad::config::{AppConfig, SHORTCUTS_FILE};
use tiny_pad::shortcuts::ShortcutRegistry;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Tiny Pad...");

    let config = AppConfig::load()?;
    let shortcuts = ShortcutRegistry::load(Path::new(SHORTCUTS_FILE));

    tiny_pad::app::run(config, shortcuts)
}

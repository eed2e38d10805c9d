//! Application entry point for the random walk viewer.
//!
//! This binary loads the walk configuration, sets up logging and
//! eframe/egui, and delegates all interactive logic and rendering to
//! [`Viewer`] from the `viewer` module.

mod settings;
mod viewer;

use anyhow::{Result, anyhow};
use viewer::Viewer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cfg = settings::load_config()?;
    tracing::info!(policy = cfg.policy.label(), steps = cfg.steps, "starting viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Random Walks",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

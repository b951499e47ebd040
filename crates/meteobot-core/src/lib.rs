//! Core orchestration for meteobot: the chat event model, the coordinator
//! wiring events to the weather provider and history store, reply rendering,
//! and process configuration.

pub mod config;
pub mod coordinator;
pub mod event;
pub mod render;

pub use config::Config;
pub use coordinator::Coordinator;
pub use event::Event;

use anyhow::Result;

/// Initialize logging for the bot process.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("meteobot core initialized");
    Ok(())
}

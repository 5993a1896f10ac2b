//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the eventbook crate.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the worker guard for the file writer when one is configured; the
/// caller must keep it alive for buffered log lines to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.file_path {
        Some(file_path) => {
            let file_appender = tracing_appender::rolling::daily(file_path, "eventbook.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(admin: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin = admin,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

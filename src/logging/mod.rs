//! Logging initialization with environment-based formatters
//!
//! - Production: Structured JSON logs for cloud monitoring
//! - Development: Colorful, human-readable logs

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for a binary or test harness embedding this crate.
///
/// The formatter follows the `ENVIRONMENT` variable (JSON for
/// `production`/`prod`, ANSI otherwise); the filter follows `RUST_LOG`
/// and defaults to `info`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if is_production() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_ansi(true))
            .init();
    }
}

fn is_production() -> bool {
    matches!(
        std::env::var("ENVIRONMENT").as_deref(),
        Ok("production") | Ok("prod")
    )
}

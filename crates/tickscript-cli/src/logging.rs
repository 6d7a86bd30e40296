use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset. Anything on stderr counts as a failure for callers
/// that capture the scripts' output, so only errors are shown by default.
pub const DEFAULT_FILTER: &str = "error";

/// Install the global subscriber; logs go to stderr, stdout is kept for script output.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

use tracing_subscriber::{
    EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

const APP_DEBUG: &str = "bgneur=debug";

/// Builds the log filter from `RUST_LOG` directives, if any, with the crate
/// raised to debug level when `verbose` is set. Without either, logging is off.
pub fn build_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let base = rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .unwrap_or("off");
    let directives = if verbose {
        format!("{base},{APP_DEBUG}")
    } else {
        base.to_string()
    };

    EnvFilter::try_new(&directives).unwrap_or_else(|_| {
        // Malformed RUST_LOG falls back to the flag alone.
        EnvFilter::new(if verbose { APP_DEBUG } else { "off" })
    })
}

pub fn init_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(fmt::layer().pretty().without_time().with_writer(std::io::stderr))
        .with(build_filter(verbose, rust_log.as_deref()))
        .init();
}

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Report tables go to stdout and diagnostics to stderr, so the two can be
/// piped independently. The level can be overridden with the `RUST_LOG`
/// environment variable.
pub fn init(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("nestegg={level},nestegg_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(())
}

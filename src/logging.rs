use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a stderr subscriber. `RUST_LOG` wins over the configured level.
///
/// Stdout is reserved for the one-line confirmation callers parse.
pub fn init(default_level: &str) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

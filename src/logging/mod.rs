pub mod config;
pub mod middleware;
pub mod paths;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use config::{LogConfig, LogFormat};
pub use middleware::{access_log_middleware, request_id_middleware, RequestId};

/// Initialize logging
///
/// This sets up:
/// - Console logging on stderr (compact, pretty or JSON) filtered by `RUST_LOG`
/// - Optional JSON application log file with daily rotation
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let console_filter =
        EnvFilter::try_new(&config.console_log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed(),
    };

    let mut log_dir = None;
    let file_layer = if config.file_enabled {
        let dir = paths::get_log_directory(config.custom_log_dir.as_deref())?;
        let appender = tracing_appender::rolling::daily(&dir, "spoken_math.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);

        // Dropping the guard would close the log file
        std::mem::forget(guard);

        log_dir = Some(dir);
        Some(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(
                    EnvFilter::try_new(&config.file_log_level)?
                        .add_directive("access_log=off".parse()?),
                ),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    match log_dir {
        Some(dir) => tracing::info!(log_dir = ?dir, "Logging initialized with application log file"),
        None => tracing::debug!("Logging initialized (console only)"),
    }

    Ok(())
}

/// Log platform information on startup
pub fn log_platform_info() {
    tracing::info!(
        platform = std::env::consts::OS,
        architecture = std::env::consts::ARCH,
        version = env!("CARGO_PKG_VERSION"),
        "Starting spoken_math"
    );
}

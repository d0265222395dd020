use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Names a file that receives a copy of every log line.
pub const LOG_FILE_ENV: &str = "MOCKAPI_LOG";

/// Initialize tracing.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `info`). When
/// `MOCKAPI_LOG` is set, the same events are also written to that file
/// without ANSI colors.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let file_layer = std::env::var(LOG_FILE_ENV).ok().and_then(|path| {
        match std::fs::File::create(&path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true),
            ),
            Err(e) => {
                eprintln!("Warning: Failed to create log file {}: {}", path, e);
                None
            }
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
}

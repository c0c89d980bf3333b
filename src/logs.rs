//! # Worker log sink.
//!
//! One worker process logs into one file per protocol per day:
//! `<dir>/<protocol>.log.<yyyy-MM-dd>`. The rotation is date-keyed and
//! handled by the appender; the rest of the crate only emits leveled
//! `tracing` messages and never touches file handles.
//!
//! Level filtering honors `RUST_LOG` and defaults to `info`.
//!
//! ## Example
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let _guard = pollvisor::logs::init("modbus_rtu", "logs")?;
//! tracing::info!("worker starting");
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber writing to a daily-rotated,
/// protocol-named file under `dir`.
///
/// Returns the appender guard; hold it for the process lifetime or buffered
/// lines are lost on exit. Fails if a global subscriber is already set.
pub fn init(
    protocol: &str,
    dir: impl AsRef<Path>,
) -> Result<WorkerGuard, Box<dyn std::error::Error + Send + Sync>> {
    let appender = tracing_appender::rolling::daily(dir.as_ref(), format!("{protocol}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()?;

    Ok(guard)
}

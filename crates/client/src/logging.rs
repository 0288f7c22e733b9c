//! File logging for a client session.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Where a session writes its logs.
pub struct SessionLogs {
    pub session_id: String,
    pub dir: PathBuf,
    /// Keeps the background writer alive; drop it to flush.
    _guard: WorkerGuard,
}

/// Installs a stderr layer and a per-session file layer.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn setup_logging(session_id: Option<String>) -> Result<SessionLogs> {
    let session_id = session_id.unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&dir)?;

    let file_appender = tracing_appender::rolling::never(&dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", dir.display());

    Ok(SessionLogs {
        session_id,
        dir,
        _guard: guard,
    })
}

/// Platform cache directory, or `./logs` when none can be resolved.
fn log_directory() -> PathBuf {
    ProjectDirs::from("", "", "crawler")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

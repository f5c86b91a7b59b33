//! Tracing subscriber setup. The returned [`LogGuard`] must be held for the life of the process
//! so buffered file output is flushed on exit.

use crate::config::LogSettings;
use crate::error::ConfigError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Handle to the installed subscriber.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Install console logging, plus a file sink when `settings.file` is set.
pub fn init(settings: &LogSettings) -> Result<LogGuard, ConfigError> {
    let filter = EnvFilter::try_new(&settings.filter).map_err(|e| ConfigError::Invalid {
        key: "RUST_LOG",
        value: settings.filter.clone(),
        reason: e.to_string(),
    })?;

    let (file_layer, guard) = match &settings.file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => std::path::PathBuf::from("."),
            };
            let name = path
                .file_name()
                .ok_or_else(|| ConfigError::Invalid {
                    key: "LOG_FILE",
                    value: path.display().to_string(),
                    reason: "no file name".into(),
                })?
                .to_os_string();
            std::fs::create_dir_all(&dir).map_err(|e| ConfigError::Logging(e.to_string()))?;
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(LogGuard { _file: guard })
}

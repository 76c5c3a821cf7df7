use std::fs::OpenOptions;
use std::path::PathBuf;

use crate::config::LoggingSettings;

/// Default log location; stdout belongs to the terminal UI.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("music-builder.log")
}

/// Route `log` output to a file. `RUST_LOG` wins over `logging.level`.
pub fn init(settings: &LoggingSettings) {
    let path = settings.file.clone().unwrap_or_else(default_log_path);
    let level = settings.level.clone().unwrap_or_else(|| "info".to_string());

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("music-builder: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    match result {
        Ok(()) => log::info!("music-builder starting up, logging to {}", path.display()),
        Err(e) => eprintln!("music-builder: logger already initialised: {e}"),
    }
}

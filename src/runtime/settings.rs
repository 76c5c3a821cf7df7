use crate::config::Settings;

/// Effective settings plus a warning when the config file had to be ignored.
///
/// Config is optional: a missing, unreadable or invalid file never prevents
/// startup. The warning is reported once logging is up.
pub fn load_settings() -> (Settings, Option<String>) {
    let loaded = Settings::load()
        .map_err(|e| format!("failed to load config, using defaults: {e}"))
        .and_then(|s| {
            s.validate()
                .map(|()| s)
                .map_err(|msg| format!("invalid config, using defaults: {msg}"))
        });

    match loaded {
        Ok(s) => (s, None),
        Err(warning) => (Settings::default(), Some(warning)),
    }
}

use crate::config;

/// Load and validate settings. Config is optional, so any failure falls back to defaults.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(e) = s.validate() {
                eprintln!("encore: {e}, using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("encore: {e}, using defaults");
            config::Settings::default()
        }
    }
}

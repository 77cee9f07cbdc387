use std::{fs, path::Path};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
        }
    }
}

/// Layering: built-in defaults, then the settings file, then the
/// environment. A `--server-url` flag wins over all of these (see main).
pub fn load_settings(path: &Path) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<Settings>(&raw) {
            Ok(file_settings) => settings = file_settings,
            Err(err) => tracing::warn!(
                %err,
                path = %path.display(),
                "ignoring unreadable settings file"
            ),
        }
    }

    if let Ok(v) = std::env::var("PRODUCT_CONSOLE_SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

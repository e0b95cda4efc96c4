use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse `.env` content into key/value pairs.
///
/// Values may contain spaces without quotes; a single pair of surrounding
/// quotes is stripped. Blank lines and `#` comments are skipped.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let mut value = value.trim();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load environment variables from a `.env` file in the working directory.
/// Variables already present in the environment take precedence.
pub fn load_dotenv() {
    let Ok(content) = fs::read_to_string(Path::new(".env")) else {
        return;
    };

    for (key, value) in parse_dotenv(&content) {
        if std::env::var(&key).is_err() {
            // SAFETY: called from main before any other thread is spawned
            unsafe { std::env::set_var(&key, &value) };
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON file with extra spec records merged ahead of the built-in table
    pub extension_path: Option<PathBuf>,
    pub extensions_enabled: bool,
}

impl CatalogConfig {
    /// Default extension location: `<config_dir>/xdevice-info/devices.json`.
    pub fn default_extension_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xdevice-info").join("devices.json"))
    }

    /// Extension file to load, if extensions are enabled and a path is known.
    pub fn active_extension(&self) -> Option<&Path> {
        if self.extensions_enabled {
            self.extension_path.as_deref()
        } else {
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                extension_path: CatalogConfig::default_extension_path(),
                extensions_enabled: true,
            },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("XDEVICE_EXTENSION_PATH") {
            config.catalog.extension_path = Some(PathBuf::from(path));
        }
        if let Some(disabled) = lookup("XDEVICE_EXTENSIONS_DISABLED")
            && let Some(d) = parse_flag(&disabled)
        {
            config.catalog.extensions_enabled = !d;
        }

        config
    }
}

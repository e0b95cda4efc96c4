//! Ordered device spec table.
//!
//! The built-in table can be extended at startup with records loaded from a
//! JSON file. Extension records are placed in front of the built-in ones so
//! they win under first-match lookup. Loading is best effort: a missing file
//! is expected, anything else is logged and the built-in table is used as is.

use crate::config::Config;
use crate::devices::builtin_specs;
use crate::error::{CatalogError, Result};
use crate::spec::DeviceSpec;
use log::{debug, error, info};
use std::fs;
use std::io;
use std::path::Path;

/// Immutable, ordered collection of device specs.
#[derive(Debug, Clone, Default)]
pub struct DeviceCatalog {
    specs: Vec<DeviceSpec>,
}

impl DeviceCatalog {
    pub fn new(specs: Vec<DeviceSpec>) -> Self {
        Self { specs }
    }

    /// Catalog holding only the built-in table.
    pub fn builtin() -> Self {
        Self::new(builtin_specs())
    }

    /// Built-in table plus the extension file named by `config`, if any.
    pub fn from_config(config: &Config) -> Self {
        let catalog = Self::builtin();
        match config.catalog.active_extension() {
            Some(path) => catalog.with_extension(path),
            None => catalog,
        }
    }

    pub fn specs(&self) -> &[DeviceSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Put `extension` ahead of the current records.
    pub fn merge(mut self, extension: Vec<DeviceSpec>) -> Self {
        let builtin = std::mem::take(&mut self.specs);
        self.specs = extension;
        self.specs.extend(builtin);
        self
    }

    /// Merge the extension file at `path`, ignoring any failure.
    pub fn with_extension(self, path: &Path) -> Self {
        match load_extension(path) {
            Ok(extension) => {
                info!(
                    "Loaded {} extension device specs from {}",
                    extension.len(),
                    path.display()
                );
                self.merge(extension)
            }
            Err(CatalogError::ExtensionNotFound(_)) => {
                debug!("No extension device specs at {}", path.display());
                self
            }
            Err(e) => {
                error!(
                    "Can't load extension device specs from {}: {}",
                    path.display(),
                    e
                );
                self
            }
        }
    }
}

/// Read and validate extension spec records from a JSON file.
pub fn load_extension(path: &Path) -> Result<Vec<DeviceSpec>> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CatalogError::ExtensionNotFound(path.to_path_buf()),
        _ => CatalogError::IoError(e),
    })?;
    parse_extension(&raw)
}

/// Parse extension records from JSON text.
///
/// Every record must be reachable: at least one model key or a default
/// category.
pub fn parse_extension(raw: &str) -> Result<Vec<DeviceSpec>> {
    let specs: Vec<DeviceSpec> = serde_json::from_str(raw)?;
    for (index, spec) in specs.iter().enumerate() {
        if spec.models.is_empty() && spec.default.is_none() {
            return Err(CatalogError::UnreachableSpec(index));
        }
        if spec.models.keys().any(|k| k.is_empty()) {
            return Err(CatalogError::EmptyModelKey { index });
        }
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::DeviceCategory;
    use std::io::Write;

    const EXTENSION: &str = r#"[
        {
            "models": {
                "lumi.sensor_switch.v2": {
                    "manufacturer": "Aqara",
                    "name": "Custom Button",
                    "market": "WXKG01LM"
                }
            },
            "required": [{"attr": "button"}, {"attr": "button_long"}]
        }
    ]"#;

    #[test]
    fn test_parse_extension() {
        let specs = parse_extension(EXTENSION).unwrap();
        assert_eq!(specs.len(), 1);
        assert!(specs[0].contains_model("lumi.sensor_switch.v2"));
    }

    #[test]
    fn test_unreachable_spec_is_rejected() {
        let err = parse_extension(r#"[{"required": []}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnreachableSpec(0)));
    }

    #[test]
    fn test_empty_model_key_is_rejected() {
        let raw = r#"[
            {"default": "ble", "required": []},
            {"models": {"": {"manufacturer": "a", "name": "b", "market": "c"}}, "required": []}
        ]"#;
        let err = parse_extension(raw).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyModelKey { index: 1 }));
    }

    #[test]
    fn test_merge_puts_extension_first() {
        let builtin = DeviceCatalog::builtin();
        let builtin_len = builtin.len();
        let merged = builtin.merge(parse_extension(EXTENSION).unwrap());

        assert_eq!(merged.len(), builtin_len + 1);
        assert_eq!(merged.specs()[0].required[1].attr, "button_long");
    }

    #[test]
    fn test_missing_extension_keeps_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devices.json");

        assert!(matches!(
            load_extension(&path),
            Err(CatalogError::ExtensionNotFound(_))
        ));
        let catalog = DeviceCatalog::builtin().with_extension(&path);
        assert_eq!(catalog.len(), DeviceCatalog::builtin().len());
    }

    #[test]
    fn test_broken_extension_is_ignored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(
            load_extension(file.path()),
            Err(CatalogError::SerdeJsonError(_))
        ));
        let catalog = DeviceCatalog::builtin().with_extension(file.path());
        assert_eq!(catalog.len(), DeviceCatalog::builtin().len());
    }

    #[test]
    fn test_from_config_loads_extension() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"[{"default": "gateway", "required": []}]"#)
            .unwrap();

        let config = Config::from_lookup(|k| {
            (k == "XDEVICE_EXTENSION_PATH").then(|| file.path().display().to_string())
        });
        let catalog = DeviceCatalog::from_config(&config);
        assert_eq!(catalog.specs()[0].default, Some(DeviceCategory::Gateway));

        let disabled = Config::from_lookup(|k| match k {
            "XDEVICE_EXTENSION_PATH" => Some(file.path().display().to_string()),
            "XDEVICE_EXTENSIONS_DISABLED" => Some("1".to_string()),
            _ => None,
        });
        assert_eq!(
            DeviceCatalog::from_config(&disabled).len(),
            DeviceCatalog::builtin().len()
        );
    }
}

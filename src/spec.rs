//! Device specification records.
//!
//! A spec groups every model that shares the same converter set. It is
//! reached either through one of its model keys or, for catch-all specs,
//! through its `default` category.

use crate::category::DeviceCategory;
use crate::converter::{ConfigEntry, Converter};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Human-readable metadata for one model key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Manufacturer (e.g. "Aqara")
    pub manufacturer: String,
    /// Short product name (e.g. "Double Wall Button")
    pub name: String,
    /// Market model / type label (e.g. "WXKG02LM")
    pub market: String,
}

impl ModelInfo {
    pub fn new(
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        market: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            name: name.into(),
            market: market.into(),
        }
    }
}

/// One entry of the device spec table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Model key -> metadata
    #[serde(default)]
    pub models: HashMap<String, ModelInfo>,

    /// Category this spec answers for when no model key matched
    #[serde(default)]
    pub default: Option<DeviceCategory>,

    pub required: Vec<Converter>,

    #[serde(default)]
    pub optional: Vec<Converter>,

    #[serde(default)]
    pub config: Vec<ConfigEntry>,
}

impl DeviceSpec {
    pub fn new(required: Vec<Converter>) -> Self {
        Self {
            required,
            ..Self::default()
        }
    }

    /// Register a model key with its metadata.
    pub fn model(mut self, key: impl Into<String>, info: ModelInfo) -> Self {
        self.models.insert(key.into(), info);
        self
    }

    /// Mark this spec as the catch-all for `category`.
    pub fn default_for(mut self, category: DeviceCategory) -> Self {
        self.default = Some(category);
        self
    }

    pub fn with_optional(mut self, optional: Vec<Converter>) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_config(mut self, config: Vec<ConfigEntry>) -> Self {
        self.config = config;
        self
    }

    pub fn contains_model(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    pub fn info(&self, model: &str) -> Option<&ModelInfo> {
        self.models.get(model)
    }

    /// True if `classify` would stop at this spec for `model`/`category`.
    pub fn matches(&self, model: &str, category: &DeviceCategory) -> bool {
        self.contains_model(model) || self.default.as_ref() == Some(category)
    }
}

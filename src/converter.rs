//! Converter descriptors and per-spec configuration entries.
//!
//! A converter describes how a raw device signal maps to an integration
//! attribute. Only `attr` is interpreted here; the rest is passed through to
//! whoever instantiates the converters.

use serde::{Deserialize, Serialize};

/// Converter descriptor attached to a device spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Converter {
    /// Integration attribute name (e.g. "button_1", "temperature")
    pub attr: String,

    /// Entity domain the attribute is exposed as (e.g. "sensor")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Gateway property the value is read from (e.g. "0.1.85")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mi: Option<String>,
}

impl Converter {
    pub fn new(attr: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            domain: None,
            mi: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_mi(mut self, mi: impl Into<String>) -> Self {
        self.mi = Some(mi.into());
        self
    }

    /// True for button signal attributes ("button", "button_1", "button_both", ...).
    pub fn is_button(&self) -> bool {
        self.attr.starts_with("button")
    }
}

/// Opaque configuration item carried by a spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub attr: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

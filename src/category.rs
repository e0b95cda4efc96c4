//! Device category (the channel a device was discovered through).

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumString;

/// Transport/integration channel of a device.
///
/// Parsing never fails: anything that isn't one of the known lowercase names
/// (compared case-insensitively) becomes [`DeviceCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(from = "String", into = "String")]
pub enum DeviceCategory {
    /// Wi-Fi gateway itself
    Gateway,
    /// Zigbee sub-device
    Zigbee,
    /// Bluetooth LE advertisement device
    Ble,
    /// Bluetooth Mesh device
    Mesh,
    /// Unrecognized marker, kept verbatim
    #[strum(default)]
    Other(String),
}

impl DeviceCategory {
    /// Parse a category marker; unknown markers become [`DeviceCategory::Other`].
    pub fn from_marker(marker: &str) -> Self {
        marker
            .parse()
            .unwrap_or_else(|_| Self::Other(marker.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Gateway => "gateway",
            Self::Zigbee => "zigbee",
            Self::Ble => "ble",
            Self::Mesh => "mesh",
            Self::Other(marker) => marker.as_str(),
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for DeviceCategory {
    fn from(s: String) -> Self {
        Self::from_marker(&s)
    }
}

impl From<DeviceCategory> for String {
    fn from(category: DeviceCategory) -> Self {
        category.as_str().to_string()
    }
}

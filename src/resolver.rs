//! Model lookup against the device catalog.
//!
//! Resolves a model key plus discovery category to the metadata shown in the
//! device registry (manufacturer, market label, docs URL) and the converters
//! needed to run the device.

use crate::catalog::DeviceCatalog;
use crate::category::DeviceCategory;
use crate::converter::{ConfigEntry, Converter};
use crate::spec::ModelInfo;
use serde::Serialize;
use std::collections::BTreeSet;

const ZIGBEE2MQTT_CATALOG_URL: &str = "https://www.zigbee2mqtt.io/supported-devices/#s=";
const MIOT_SPEC_URL: &str = "https://home.miot-spec.com/s/";

/// Resolved device metadata. Built fresh for every lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XDeviceInfo {
    pub manufacturer: String,
    /// Market label, e.g. "Zigbee WXKG01LM (lumi.sensor_switch.v2)"
    pub model: String,
    pub name: String,
    pub url: String,
    pub req_converters: Vec<Converter>,
    pub opt_converters: Vec<Converter>,
    pub config: Vec<ConfigEntry>,
}

/// True for models from the Mi Home / Aqara / IKEA ecosystem, which are
/// documented in the MIoT spec catalog rather than zigbee2mqtt.
pub fn is_home_ecosystem_device(model: &str) -> bool {
    model.starts_with("lumi.") || model.starts_with("ikea.")
}

fn market_label(category: &DeviceCategory, market: &str, model: &str) -> String {
    match category {
        DeviceCategory::Gateway => format!("Wi-Fi {}", market),
        DeviceCategory::Zigbee => format!("Zigbee {} ({})", market, model),
        DeviceCategory::Ble => format!("BLE {}", market),
        DeviceCategory::Mesh => format!("Mesh {}", market),
        DeviceCategory::Other(marker) => {
            panic!("unsupported device category {:?} for model {}", marker, model)
        }
    }
}

fn docs_url(category: &DeviceCategory, market: &str, model: &str) -> String {
    if *category == DeviceCategory::Zigbee && !is_home_ecosystem_device(model) {
        format!("{}{}", ZIGBEE2MQTT_CATALOG_URL, market)
    } else {
        format!("{}{}", MIOT_SPEC_URL, model)
    }
}

/// Read-only resolver over a [`DeviceCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct DeviceInfoResolver<'a> {
    catalog: &'a DeviceCatalog,
}

impl<'a> DeviceInfoResolver<'a> {
    pub fn new(catalog: &'a DeviceCatalog) -> Self {
        Self { catalog }
    }

    /// Resolve `model` discovered via `category`.
    ///
    /// Specs are scanned in order and the first one that either lists
    /// `model` or is the catch-all for `category` wins. A catch-all match
    /// yields an "Unknown" manufacturer named after the category.
    ///
    /// Returns `None` when no spec matches.
    ///
    /// # Panics
    /// Panics if a spec matches and `category` is [`DeviceCategory::Other`].
    pub fn classify(&self, model: &str, category: &DeviceCategory) -> Option<XDeviceInfo> {
        let spec = self
            .catalog
            .specs()
            .iter()
            .find(|spec| spec.matches(model, category))?;

        let info = match spec.info(model) {
            Some(info) => info.clone(),
            None => ModelInfo::new("Unknown", category.as_str().to_uppercase(), model),
        };

        let market = market_label(category, &info.market, model);
        let url = docs_url(category, &info.market, model);

        Some(XDeviceInfo {
            name: format!("{} {}", info.manufacturer, info.name),
            manufacturer: info.manufacturer,
            model: market,
            url,
            req_converters: spec.required.clone(),
            opt_converters: spec.optional.clone(),
            config: spec.config.clone(),
        })
    }

    /// Button attributes of the first spec that lists `model` explicitly.
    ///
    /// Catch-all specs are never considered. Returns `None` if no spec has
    /// the model key.
    pub fn button_attributes(&self, model: &str) -> Option<BTreeSet<String>> {
        let spec = self
            .catalog
            .specs()
            .iter()
            .find(|spec| spec.contains_model(model))?;

        Some(
            spec.required
                .iter()
                .filter(|conv| conv.is_button())
                .map(|conv| conv.attr.clone())
                .collect(),
        )
    }
}

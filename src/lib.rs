//! Device info lookup for gateway integrations.
//!
//! This library resolves gateway, Zigbee, BLE and Mesh device models to
//! their registry metadata and converter sets using an ordered spec table.

pub mod catalog;
pub mod category;
pub mod config;
pub mod converter;
pub mod devices;
pub mod error;
pub mod resolver;
pub mod spec;

pub use catalog::DeviceCatalog;
pub use category::DeviceCategory;
pub use resolver::{DeviceInfoResolver, XDeviceInfo, is_home_ecosystem_device};

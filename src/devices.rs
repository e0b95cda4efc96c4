//! Built-in device spec table.
//!
//! Order matters: lookups stop at the first matching spec, so the
//! per-category catch-all specs must stay at the end.

use crate::category::DeviceCategory;
use crate::converter::{ConfigEntry, Converter};
use crate::spec::{DeviceSpec, ModelInfo};

fn battery() -> Converter {
    Converter::new("battery").with_domain("sensor").with_mi("8.0.2008")
}

fn action() -> Converter {
    Converter::new("action").with_domain("sensor")
}

fn button(attr: &str, mi: &str) -> Converter {
    Converter::new(attr).with_mi(mi)
}

fn gateway_specs() -> Vec<DeviceSpec> {
    vec![
        DeviceSpec::new(vec![
            Converter::new("pair").with_domain("switch"),
            Converter::new("alarm").with_domain("alarm_control_panel"),
            Converter::new("command").with_domain("select"),
            Converter::new("data").with_domain("text"),
        ])
        .model(
            "lumi.gateway.mgl03",
            ModelInfo::new("Xiaomi", "Multimode Gateway", "ZNDMWG03LM"),
        )
        .model(
            "lumi.gateway.aqcn02",
            ModelInfo::new("Aqara", "Hub E1", "ZHWG16LM"),
        )
        .with_optional(vec![
            Converter::new("led").with_domain("light"),
            Converter::new("cloud_link").with_domain("binary_sensor"),
        ]),
    ]
}

fn zigbee_specs() -> Vec<DeviceSpec> {
    vec![
        DeviceSpec::new(vec![action(), button("button", "13.1.85"), battery()]).model(
            "lumi.sensor_switch.v2",
            ModelInfo::new("Xiaomi", "Button", "WXKG01LM"),
        ),
        DeviceSpec::new(vec![
            action(),
            button("button_1", "4.1.85"),
            button("button_2", "4.2.85"),
            button("button_both", "4.10.85"),
            battery(),
        ])
        .model(
            "lumi.remote.b286acn01",
            ModelInfo::new("Aqara", "Double Wall Button", "WXKG02LM"),
        )
        .model(
            "lumi.remote.b286acn02",
            ModelInfo::new("Aqara", "Double Wall Button D1", "WXKG07LM"),
        )
        .with_config(vec![ConfigEntry {
            attr: "click_mode".to_string(),
            value: serde_json::json!("fast"),
        }]),
        DeviceSpec::new(vec![
            Converter::new("temperature").with_domain("sensor").with_mi("0.1.85"),
            Converter::new("humidity").with_domain("sensor").with_mi("0.2.85"),
            battery(),
        ])
        .model(
            "lumi.sensor_ht",
            ModelInfo::new("Xiaomi", "TH Sensor", "WSDCGQ01LM"),
        ),
        DeviceSpec::new(vec![
            Converter::new("light").with_domain("light"),
            Converter::new("brightness"),
            Converter::new("color_temp"),
        ])
        .model(
            "ikea.light.led1623g12",
            ModelInfo::new("IKEA", "Bulb E27 1000 lm", "LED1623G12"),
        ),
        // Tuya remotes report a separate attr per button plus a shared action.
        DeviceSpec::new(vec![
            action(),
            Converter::new("button_1"),
            Converter::new("button_2"),
            Converter::new("button_3"),
            Converter::new("button_4"),
            Converter::new("battery").with_domain("sensor"),
        ])
        .model(
            "TS0044",
            ModelInfo::new("Tuya", "Wireless Four Button", "RSH-Zigbee-SC04"),
        ),
    ]
}

fn ble_specs() -> Vec<DeviceSpec> {
    vec![
        DeviceSpec::new(vec![
            Converter::new("temperature").with_domain("sensor"),
            Converter::new("humidity").with_domain("sensor"),
            Converter::new("battery").with_domain("sensor"),
        ])
        .model(
            "1371",
            ModelInfo::new("Xiaomi", "TH Sensor 2", "LYWSD03MMC"),
        ),
    ]
}

fn mesh_specs() -> Vec<DeviceSpec> {
    vec![
        DeviceSpec::new(vec![
            Converter::new("light").with_domain("light").with_mi("2.1"),
            Converter::new("brightness").with_mi("2.2"),
            Converter::new("color_temp").with_mi("2.3"),
        ])
        .model(
            "1771",
            ModelInfo::new("Xiaomi", "Mesh Bulb", "MJDP09YL"),
        ),
    ]
}

fn default_specs() -> Vec<DeviceSpec> {
    vec![
        DeviceSpec::new(vec![Converter::new("zigbee").with_domain("sensor")])
            .default_for(DeviceCategory::Zigbee),
        DeviceSpec::new(vec![Converter::new("ble").with_domain("sensor")])
            .default_for(DeviceCategory::Ble),
        DeviceSpec::new(vec![Converter::new("mesh").with_domain("sensor")])
            .default_for(DeviceCategory::Mesh),
    ]
}

/// The full built-in table, catch-all specs last.
pub fn builtin_specs() -> Vec<DeviceSpec> {
    let mut specs = gateway_specs();
    specs.extend(zigbee_specs());
    specs.extend(ble_specs());
    specs.extend(mesh_specs());
    specs.extend(default_specs());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_last() {
        let specs = builtin_specs();
        let first_default = specs.iter().position(|s| s.default.is_some()).unwrap();
        assert!(specs[first_default..].iter().all(|s| s.default.is_some()));
        assert!(specs[..first_default].iter().all(|s| !s.models.is_empty()));
    }

    #[test]
    fn test_no_gateway_default() {
        assert!(
            builtin_specs()
                .iter()
                .all(|s| s.default != Some(DeviceCategory::Gateway))
        );
    }
}

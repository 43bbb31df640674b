//! Device descriptors — what discovery emits and the registry consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::LightId;

/// Capability kind a component exposes to the owning runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiKind {
    Switch,
    Discovery,
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Switch => "switch",
            Self::Discovery => "discovery",
        })
    }
}

/// Concrete implementation behind an [`ApiKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    HueLight,
    HueDiscovery,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::HueLight => "hue-light",
            Self::HueDiscovery => "hue-discovery",
        })
    }
}

/// A serializable record describing one configurable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Human-readable name; for discovered lights, the bridge's light name.
    pub name: String,
    pub api: ApiKind,
    pub model: ModelKind,
    pub attributes: Attributes,
}

/// Connection attributes carried by a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default)]
    pub bridge_host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_id: Option<LightId>,
}

impl DeviceDescriptor {
    /// Descriptor for one bridge light, driven by the `hue-light` model.
    #[must_use]
    pub fn hue_light(
        name: impl Into<String>,
        bridge_host: impl Into<String>,
        username: impl Into<String>,
        light_id: LightId,
    ) -> Self {
        Self {
            name: name.into(),
            api: ApiKind::Switch,
            model: ModelKind::HueLight,
            attributes: Attributes {
                bridge_host: bridge_host.into(),
                username: username.into(),
                light_id: Some(light_id),
            },
        }
    }

    /// Descriptor for the discovery service of one bridge.
    #[must_use]
    pub fn hue_discovery(
        name: impl Into<String>,
        bridge_host: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            api: ApiKind::Discovery,
            model: ModelKind::HueDiscovery,
            attributes: Attributes {
                bridge_host: bridge_host.into(),
                username: username.into(),
                light_id: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_discovery_descriptor_without_light_id() {
        let d = DeviceDescriptor::hue_discovery("finder", "", "abc");
        assert_eq!(d.api, ApiKind::Discovery);
        assert_eq!(d.model, ModelKind::HueDiscovery);
        assert!(d.attributes.light_id.is_none());
    }

    #[test]
    fn should_build_hue_light_descriptor() {
        let d = DeviceDescriptor::hue_light("Desk", "10.0.0.2", "abc", LightId::new(4));
        assert_eq!(d.api, ApiKind::Switch);
        assert_eq!(d.model, ModelKind::HueLight);
        assert_eq!(d.attributes.light_id, Some(LightId::new(4)));
    }

    #[test]
    fn should_serialize_kinds_in_kebab_case() {
        let d = DeviceDescriptor::hue_light("Desk", "10.0.0.2", "abc", LightId::new(4));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["api"], "switch");
        assert_eq!(json["model"], "hue-light");
        assert_eq!(json["attributes"]["light_id"], 4);
        assert_eq!(json["attributes"]["bridge_host"], "10.0.0.2");
    }

    #[test]
    fn should_omit_missing_light_id() {
        let d = DeviceDescriptor {
            name: "finder".to_string(),
            api: ApiKind::Discovery,
            model: ModelKind::HueDiscovery,
            attributes: Attributes {
                bridge_host: String::new(),
                username: "abc".to_string(),
                light_id: None,
            },
        };
        let json = serde_json::to_value(&d).unwrap();
        assert!(json["attributes"].get("light_id").is_none());
        assert_eq!(json["model"], "hue-discovery");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            name = "Kitchen"
            api = "switch"
            model = "hue-light"

            [attributes]
            bridge_host = "192.168.1.20"
            username = "secret"
            light_id = 2
        "#;
        let d: DeviceDescriptor = toml::from_str(toml).unwrap();
        assert_eq!(
            d,
            DeviceDescriptor::hue_light("Kitchen", "192.168.1.20", "secret", LightId::new(2))
        );
    }

    #[test]
    fn should_display_kinds_like_serde() {
        assert_eq!(ApiKind::Discovery.to_string(), "discovery");
        assert_eq!(ModelKind::HueLight.to_string(), "hue-light");
    }
}

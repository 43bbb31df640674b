//! Virtual bridge configuration.

use serde::Deserialize;

use hueswitch_domain::id::LightId;
use hueswitch_domain::light::{Light, LightState};

/// Seed data for a [`VirtualBridge`](crate::VirtualBridge).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualBridgeConfig {
    /// Address the simulated bridge answers on.
    pub host: String,
    /// Bridge name reported by its config endpoint.
    pub name: String,
    /// Usernames the bridge accepts.
    pub users: Vec<String>,
    /// Lights attached to the bridge, in the order it lists them.
    pub lights: Vec<Light>,
}

impl Default for VirtualBridgeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            name: "Virtual Hue bridge".to_string(),
            users: vec!["hueswitch".to_string()],
            lights: vec![
                demo_light(1, "Living room", true, 254),
                demo_light(2, "Kitchen", false, 127),
                demo_light(3, "Hallway", true, 1),
            ],
        }
    }
}

fn demo_light(id: u32, name: &str, on: bool, bri: u8) -> Light {
    Light {
        id: LightId::new(id),
        name: name.to_string(),
        light_type: "Dimmable light".to_string(),
        state: LightState {
            on,
            bri,
            reachable: true,
        },
    }
}

//! Light — a bulb attached to a bridge, as the bridge reports it.

use serde::{Deserialize, Serialize};

use crate::id::LightId;

/// Attributes of a light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    pub name: String,
    /// Bridge-reported product type (e.g. `"Extended color light"`).
    #[serde(rename = "type", default)]
    pub light_type: String,
    #[serde(default)]
    pub state: LightState,
}

/// Current state of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightState {
    pub on: bool,
    /// Brightness, `1..=254` when legal. Some bridges report `0` for lights
    /// that never had a brightness set.
    pub bri: u8,
    pub reachable: bool,
}

impl Default for LightState {
    fn default() -> Self {
        Self {
            on: false,
            bri: Brightness::MAX.get(),
            reachable: true,
        }
    }
}

/// A brightness value the bridge accepts: always within `1..=254`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(254);

    /// Accept `raw` only when it lies within `1..=254`.
    #[must_use]
    pub fn new(raw: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0).contains(&raw).then_some(Self(raw))
    }

    /// Force `raw` into `1..=254`.
    #[must_use]
    pub fn clamped(raw: u32) -> Self {
        let bounded = raw.clamp(u32::from(Self::MIN.0), u32::from(Self::MAX.0));
        Self(u8::try_from(bounded).unwrap_or(Self::MAX.0))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

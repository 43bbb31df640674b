//! Common error types used across the workspace.
//!
//! Each failure class has its own typed enum; [`HueError`] aggregates them
//! with `#[from]`/`#[source]` chaining so callers can walk the cause chain
//! down to the bridge error.

use std::fmt;

use crate::descriptor::{ApiKind, ModelKind};
use crate::id::LightId;

/// Top-level error returned by adapters, discovery, and the registry.
#[derive(Debug, thiserror::Error)]
pub enum HueError {
    /// A required configuration field is missing or invalid.
    #[error("invalid configuration")]
    Config(#[from] ConfigError),

    /// No bridge host was configured and locating one failed.
    #[error("failed to discover Hue bridge")]
    BridgeDiscovery(#[source] BridgeError),

    /// The construction-time probe against the bridge failed.
    #[error("cannot connect to Hue bridge at {host}")]
    Connectivity {
        host: String,
        #[source]
        source: BridgeError,
    },

    /// A single bridge call failed during an operation.
    #[error("failed to {operation}")]
    Transport {
        operation: Operation,
        #[source]
        source: BridgeError,
    },

    /// A requested position lies outside the switch scale.
    #[error("invalid position")]
    InvalidPosition(#[from] PositionError),

    /// A descriptor could not be wired into a component.
    #[error("contract violation")]
    Contract(#[from] ContractError),
}

impl HueError {
    /// Wrap a bridge failure for the given operation.
    #[must_use]
    pub fn transport(operation: Operation, source: BridgeError) -> Self {
        Self::Transport { operation, source }
    }

    /// Wrap a construction-time probe failure against `host`.
    #[must_use]
    pub fn connectivity(host: impl Into<String>, source: BridgeError) -> Self {
        Self::Connectivity {
            host: host.into(),
            source,
        }
    }
}

/// Configuration validation failures, detected before any bridge call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("need a username (API key) for the Hue bridge")]
    MissingUsername,

    #[error("need a light_id")]
    MissingLightId,
}

/// A position outside `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("position {0} is out of range 0..=100")]
    OutOfRange(u32),
}

/// Mismatch between a descriptor and the component it is wired into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("descriptor {name} has api {actual}, expected {expected}")]
    ApiMismatch {
        name: String,
        expected: ApiKind,
        actual: ApiKind,
    },

    #[error("descriptor {name} has model {actual}, expected {expected}")]
    ModelMismatch {
        name: String,
        expected: ModelKind,
        actual: ModelKind,
    },

    #[error("descriptor {name} carries no light_id")]
    MissingLightId { name: String },

    #[error("no constructor registered for {api}/{model}")]
    UnregisteredModel { api: ApiKind, model: ModelKind },

    #[error("component {name} is not a switch")]
    NotASwitch { name: String },

    #[error("component {name} is not a discovery service")]
    NotADiscovery { name: String },
}

/// Failures reported by a bridge session or connector.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("bridge at {host} is unreachable")]
    Unreachable { host: String },

    #[error("bridge rejected the username")]
    Unauthorized,

    #[error("light {0} not found on bridge")]
    LightNotFound(LightId),

    #[error("link button not pressed")]
    LinkButtonNotPressed,

    #[error("no bridge found on the network")]
    NoBridgeFound,

    /// Any other transport-level failure.
    #[error("bridge transport error")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Bridge operations, used to label transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetConfig,
    GetLight,
    ListLights,
    TurnOn,
    TurnOff,
    SetBrightness,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GetConfig => "get bridge config",
            Self::GetLight => "get light state",
            Self::ListLights => "get lights from Hue bridge",
            Self::TurnOn => "turn on light",
            Self::TurnOff => "turn off light",
            Self::SetBrightness => "set brightness",
        })
    }
}

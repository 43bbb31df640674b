//! Native configs for the two components, and their validation.
//!
//! Validation never touches the network: it runs before a session is opened.

use serde::{Deserialize, Serialize};

use crate::descriptor::{ApiKind, DeviceDescriptor, ModelKind};
use crate::error::{ConfigError, ContractError};
use crate::id::LightId;

/// Config for one light adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    /// Bridge address. Empty means "locate the bridge on the network".
    #[serde(default)]
    pub bridge_host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub light_id: LightId,
}

impl LightConfig {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUsername`] when `username` is empty and
    /// [`ConfigError::MissingLightId`] when `light_id` is `0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }
        if self.light_id.is_unset() {
            return Err(ConfigError::MissingLightId);
        }
        Ok(())
    }
}

impl TryFrom<&DeviceDescriptor> for LightConfig {
    type Error = ContractError;

    fn try_from(d: &DeviceDescriptor) -> Result<Self, Self::Error> {
        if d.api != ApiKind::Switch {
            return Err(ContractError::ApiMismatch {
                name: d.name.clone(),
                expected: ApiKind::Switch,
                actual: d.api,
            });
        }
        if d.model != ModelKind::HueLight {
            return Err(ContractError::ModelMismatch {
                name: d.name.clone(),
                expected: ModelKind::HueLight,
                actual: d.model,
            });
        }
        let light_id = d
            .attributes
            .light_id
            .ok_or_else(|| ContractError::MissingLightId {
                name: d.name.clone(),
            })?;
        Ok(Self {
            bridge_host: d.attributes.bridge_host.clone(),
            username: d.attributes.username.clone(),
            light_id,
        })
    }
}

/// Config for a discovery service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Bridge address. Empty means "locate the bridge on the network".
    #[serde(default)]
    pub bridge_host: String,
    #[serde(default)]
    pub username: String,
}

impl DiscoveryConfig {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUsername`] when `username` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }
        Ok(())
    }
}

impl TryFrom<&DeviceDescriptor> for DiscoveryConfig {
    type Error = ContractError;

    fn try_from(d: &DeviceDescriptor) -> Result<Self, Self::Error> {
        if d.api != ApiKind::Discovery {
            return Err(ContractError::ApiMismatch {
                name: d.name.clone(),
                expected: ApiKind::Discovery,
                actual: d.api,
            });
        }
        Ok(Self {
            bridge_host: d.attributes.bridge_host.clone(),
            username: d.attributes.username.clone(),
        })
    }
}

//! Bridge ports — the vendor bridge as seen by the use-cases.
//!
//! A [`BridgeConnector`] opens one [`BridgeSession`] per component. Sessions
//! are owned by exactly one adapter or discovery service and never pooled.
//! Implementations own transport concerns (timeouts, retries); the
//! use-cases issue each call once and propagate failures.

use std::future::Future;

use hueswitch_domain::error::BridgeError;
use hueswitch_domain::id::LightId;
use hueswitch_domain::light::{Brightness, Light};

/// Identity reported by a bridge's config endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeInfo {
    pub name: String,
    pub software_version: String,
}

/// An authenticated connection to one bridge.
pub trait BridgeSession: Send + Sync {
    /// Address this session talks to.
    fn host(&self) -> &str;

    /// Lightweight probe: fetch the bridge config.
    fn bridge_config(&self) -> impl Future<Output = Result<BridgeInfo, BridgeError>> + Send;

    /// Fetch one light, including its current state.
    fn get_light(&self, id: LightId) -> impl Future<Output = Result<Light, BridgeError>> + Send;

    /// Fetch every light, in the bridge's own order.
    fn list_lights(&self) -> impl Future<Output = Result<Vec<Light>, BridgeError>> + Send;

    fn turn_on(&self, id: LightId) -> impl Future<Output = Result<(), BridgeError>> + Send;

    fn turn_off(&self, id: LightId) -> impl Future<Output = Result<(), BridgeError>> + Send;

    fn set_brightness(
        &self,
        id: LightId,
        brightness: Brightness,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

/// Factory for bridge sessions, plus the pre-session bridge operations.
pub trait BridgeConnector: Send + Sync {
    type Session: BridgeSession + 'static;

    /// Locate a bridge on the local network and return its host.
    fn discover_bridge(&self) -> impl Future<Output = Result<String, BridgeError>> + Send;

    /// Register a new API user. The bridge's link button must be pressed
    /// first.
    fn create_user(
        &self,
        host: &str,
        device_type: &str,
    ) -> impl Future<Output = Result<String, BridgeError>> + Send;

    /// Open a session bound to `host` and `username`.
    fn connect(
        &self,
        host: &str,
        username: &str,
    ) -> impl Future<Output = Result<Self::Session, BridgeError>> + Send;
}

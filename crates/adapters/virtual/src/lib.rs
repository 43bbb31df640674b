//! # hueswitch-adapter-virtual
//!
//! A simulated Hue bridge living entirely in memory, for demos and tests.
//!
//! ## Behaviour
//!
//! | Bridge feature | Simulation |
//! |----------------|------------|
//! | Bridge lookup | Answers with its own host while reachable |
//! | User registration | Succeeds once after [`VirtualBridge::press_link_button`] |
//! | Authentication | Every session call checks the username against the registered users |
//! | Light commands | Mutate the shared light table; brightness survives turn-off |
//!
//! Every call that reaches the bridge is recorded (see [`VirtualBridge::calls`])
//! and individual operations can be made to fail with
//! [`VirtualBridge::fail_operation`].
//!
//! ## Dependency rule
//!
//! Depends on `hueswitch-app` (port traits) and `hueswitch-domain` only.

mod config;
mod error;

pub use config::VirtualBridgeConfig;
pub use error::SimulatedFault;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hueswitch_app::ports::{BridgeConnector, BridgeInfo, BridgeSession};
use hueswitch_domain::error::{BridgeError, Operation};
use hueswitch_domain::id::LightId;
use hueswitch_domain::light::{Brightness, Light, LightState};

const SOFTWARE_VERSION: &str = "1967054020";

/// A call that reached the virtual bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCall {
    DiscoverBridge,
    CreateUser { device_type: String },
    Connect { host: String, username: String },
    GetConfig,
    GetLight(LightId),
    ListLights,
    TurnOn(LightId),
    TurnOff(LightId),
    SetBrightness(LightId, Brightness),
}

struct BridgeState {
    name: String,
    users: Vec<String>,
    lights: Vec<Light>,
    reachable: bool,
    link_button_pressed: bool,
    failing: HashSet<Operation>,
    calls: Vec<BridgeCall>,
}

/// The simulated bridge. Cloning yields another handle to the same bridge.
#[derive(Clone)]
pub struct VirtualBridge {
    host: String,
    state: Arc<Mutex<BridgeState>>,
}

impl Default for VirtualBridge {
    fn default() -> Self {
        Self::new(VirtualBridgeConfig::default())
    }
}

impl VirtualBridge {
    /// Create a bridge seeded from `config`.
    #[must_use]
    pub fn new(config: VirtualBridgeConfig) -> Self {
        Self {
            host: config.host,
            state: Arc::new(Mutex::new(BridgeState {
                name: config.name,
                users: config.users,
                lights: config.lights,
                reachable: true,
                link_button_pressed: false,
                failing: HashSet::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Create a bridge with no lights that accepts `username`.
    #[must_use]
    pub fn empty(host: impl Into<String>, username: impl Into<String>) -> Self {
        Self::new(VirtualBridgeConfig {
            host: host.into(),
            users: vec![username.into()],
            lights: Vec::new(),
            ..VirtualBridgeConfig::default()
        })
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Attach a light at the end of the bridge's list.
    pub fn add_light(&self, light: Light) {
        self.lock().lights.push(light);
    }

    /// Current snapshot of one light.
    #[must_use]
    pub fn light(&self, id: LightId) -> Option<Light> {
        self.lock().lights.iter().find(|l| l.id == id).cloned()
    }

    /// Change a light behind the adapters' back (wall switch, other app…).
    pub fn set_light_state(&self, id: LightId, state: LightState) {
        if let Some(light) = self.lock().lights.iter_mut().find(|l| l.id == id) {
            light.state = state;
        }
    }

    /// Take the bridge off (or back onto) the network.
    pub fn set_reachable(&self, reachable: bool) {
        self.lock().reachable = reachable;
    }

    /// Allow exactly one user registration.
    pub fn press_link_button(&self) {
        self.lock().link_button_pressed = true;
    }

    /// Make every future `op` call fail with a [`SimulatedFault`].
    pub fn fail_operation(&self, op: Operation) {
        self.lock().failing.insert(op);
    }

    /// Undo every [`fail_operation`](Self::fail_operation).
    pub fn clear_failures(&self) {
        self.lock().failing.clear();
    }

    /// Calls received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<BridgeCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BridgeConnector for VirtualBridge {
    type Session = VirtualSession;

    async fn discover_bridge(&self) -> Result<String, BridgeError> {
        let mut state = self.lock();
        state.calls.push(BridgeCall::DiscoverBridge);
        if !state.reachable {
            return Err(BridgeError::NoBridgeFound);
        }
        Ok(self.host.clone())
    }

    async fn create_user(&self, host: &str, device_type: &str) -> Result<String, BridgeError> {
        let mut state = self.lock();
        state.calls.push(BridgeCall::CreateUser {
            device_type: device_type.to_string(),
        });
        if !state.reachable || host != self.host {
            return Err(BridgeError::Unreachable {
                host: host.to_string(),
            });
        }
        if !state.link_button_pressed {
            return Err(BridgeError::LinkButtonNotPressed);
        }
        state.link_button_pressed = false;

        let username = format!("{device_type}-{}", state.users.len() + 1);
        state.users.push(username.clone());
        tracing::info!(%username, "registered user on virtual bridge");
        Ok(username)
    }

    async fn connect(&self, host: &str, username: &str) -> Result<VirtualSession, BridgeError> {
        self.lock().calls.push(BridgeCall::Connect {
            host: host.to_string(),
            username: username.to_string(),
        });
        if host != self.host {
            return Err(BridgeError::Unreachable {
                host: host.to_string(),
            });
        }
        Ok(VirtualSession {
            bridge: self.clone(),
            username: username.to_string(),
        })
    }
}

/// A session on a [`VirtualBridge`], bound to one username.
pub struct VirtualSession {
    bridge: VirtualBridge,
    username: String,
}

impl VirtualSession {
    /// Record `call`, then check reachability, credentials, and injected
    /// failures, in that order.
    fn begin(&self, call: BridgeCall, op: Operation) -> Result<MutexGuard<'_, BridgeState>, BridgeError> {
        let mut state = self.bridge.lock();
        state.calls.push(call);
        if !state.reachable {
            return Err(BridgeError::Unreachable {
                host: self.bridge.host.clone(),
            });
        }
        if !state.users.contains(&self.username) {
            return Err(BridgeError::Unauthorized);
        }
        if state.failing.contains(&op) {
            return Err(SimulatedFault(op).into());
        }
        Ok(state)
    }

    fn update(
        &self,
        call: BridgeCall,
        op: Operation,
        id: LightId,
        apply: impl FnOnce(&mut LightState),
    ) -> Result<(), BridgeError> {
        let mut state = self.begin(call, op)?;
        let light = state
            .lights
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(BridgeError::LightNotFound(id))?;
        apply(&mut light.state);
        tracing::debug!(light_id = %id, state = ?light.state, "virtual light updated");
        Ok(())
    }
}

impl BridgeSession for VirtualSession {
    fn host(&self) -> &str {
        &self.bridge.host
    }

    async fn bridge_config(&self) -> Result<BridgeInfo, BridgeError> {
        let state = self.begin(BridgeCall::GetConfig, Operation::GetConfig)?;
        Ok(BridgeInfo {
            name: state.name.clone(),
            software_version: SOFTWARE_VERSION.to_string(),
        })
    }

    async fn get_light(&self, id: LightId) -> Result<Light, BridgeError> {
        let state = self.begin(BridgeCall::GetLight(id), Operation::GetLight)?;
        state
            .lights
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(BridgeError::LightNotFound(id))
    }

    async fn list_lights(&self) -> Result<Vec<Light>, BridgeError> {
        let state = self.begin(BridgeCall::ListLights, Operation::ListLights)?;
        Ok(state.lights.clone())
    }

    async fn turn_on(&self, id: LightId) -> Result<(), BridgeError> {
        self.update(BridgeCall::TurnOn(id), Operation::TurnOn, id, |s| s.on = true)
    }

    async fn turn_off(&self, id: LightId) -> Result<(), BridgeError> {
        self.update(BridgeCall::TurnOff(id), Operation::TurnOff, id, |s| s.on = false)
    }

    async fn set_brightness(&self, id: LightId, brightness: Brightness) -> Result<(), BridgeError> {
        self.update(
            BridgeCall::SetBrightness(id, brightness),
            Operation::SetBrightness,
            id,
            |s| s.bri = brightness.get(),
        )
    }
}

//! In-memory bridge fakes shared by the service and registry tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use hueswitch_domain::error::{BridgeError, Operation};
use hueswitch_domain::id::LightId;
use hueswitch_domain::light::{Brightness, Light, LightState};

use crate::ports::{BridgeConnector, BridgeInfo, BridgeSession};

pub(crate) const HOST: &str = "192.168.1.2";
pub(crate) const USERNAME: &str = "test-user";

/// Every call that reached the fake, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    DiscoverBridge,
    Connect(String),
    GetConfig,
    GetLight(LightId),
    ListLights,
    TurnOn(LightId),
    TurnOff(LightId),
    SetBrightness(LightId, u8),
}

#[derive(Default)]
struct State {
    lights: Vec<Light>,
    failing: HashSet<Operation>,
    unreachable: bool,
    calls: Vec<Call>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeBridge {
    state: Arc<Mutex<State>>,
}

impl FakeBridge {
    pub(crate) fn with_lights(lights: Vec<Light>) -> Self {
        let bridge = Self::default();
        bridge.state.lock().unwrap().lights = lights;
        bridge
    }

    pub(crate) fn fail(&self, op: Operation) {
        self.state.lock().unwrap().failing.insert(op);
    }

    pub(crate) fn set_unreachable(&self) {
        self.state.lock().unwrap().unreachable = true;
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub(crate) fn light_state(&self, id: LightId) -> LightState {
        let state = self.state.lock().unwrap();
        state.lights.iter().find(|l| l.id == id).unwrap().state
    }

    pub(crate) fn set_light_state(&self, id: LightId, light_state: LightState) {
        let mut state = self.state.lock().unwrap();
        state.lights.iter_mut().find(|l| l.id == id).unwrap().state = light_state;
    }

    fn record(&self, call: Call, op: Option<Operation>) -> Result<(), BridgeError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.unreachable {
            return Err(BridgeError::Unreachable {
                host: HOST.to_string(),
            });
        }
        if op.is_some_and(|op| state.failing.contains(&op)) {
            return Err(BridgeError::Other("injected failure".into()));
        }
        Ok(())
    }

    fn update(&self, id: LightId, f: impl FnOnce(&mut LightState)) -> Result<(), BridgeError> {
        let mut state = self.state.lock().unwrap();
        let light = state
            .lights
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(BridgeError::LightNotFound(id))?;
        f(&mut light.state);
        Ok(())
    }
}

pub(crate) fn light(id: u32, name: &str, on: bool, bri: u8) -> Light {
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

pub(crate) struct FakeSession {
    bridge: FakeBridge,
    host: String,
}

impl BridgeSession for FakeSession {
    fn host(&self) -> &str {
        &self.host
    }

    async fn bridge_config(&self) -> Result<BridgeInfo, BridgeError> {
        self.bridge.record(Call::GetConfig, Some(Operation::GetConfig))?;
        Ok(BridgeInfo {
            name: "Fake bridge".to_string(),
            software_version: "1.0".to_string(),
        })
    }

    async fn get_light(&self, id: LightId) -> Result<Light, BridgeError> {
        self.bridge.record(Call::GetLight(id), Some(Operation::GetLight))?;
        let state = self.bridge.state.lock().unwrap();
        state
            .lights
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(BridgeError::LightNotFound(id))
    }

    async fn list_lights(&self) -> Result<Vec<Light>, BridgeError> {
        self.bridge.record(Call::ListLights, Some(Operation::ListLights))?;
        Ok(self.bridge.state.lock().unwrap().lights.clone())
    }

    async fn turn_on(&self, id: LightId) -> Result<(), BridgeError> {
        self.bridge.record(Call::TurnOn(id), Some(Operation::TurnOn))?;
        self.bridge.update(id, |s| s.on = true)
    }

    async fn turn_off(&self, id: LightId) -> Result<(), BridgeError> {
        self.bridge.record(Call::TurnOff(id), Some(Operation::TurnOff))?;
        self.bridge.update(id, |s| s.on = false)
    }

    async fn set_brightness(&self, id: LightId, brightness: Brightness) -> Result<(), BridgeError> {
        self.bridge.record(
            Call::SetBrightness(id, brightness.get()),
            Some(Operation::SetBrightness),
        )?;
        self.bridge.update(id, |s| s.bri = brightness.get())
    }
}

impl BridgeConnector for FakeBridge {
    type Session = FakeSession;

    async fn discover_bridge(&self) -> Result<String, BridgeError> {
        self.record(Call::DiscoverBridge, None)?;
        Ok(HOST.to_string())
    }

    async fn create_user(&self, _host: &str, _device_type: &str) -> Result<String, BridgeError> {
        Ok(USERNAME.to_string())
    }

    async fn connect(&self, host: &str, _username: &str) -> Result<FakeSession, BridgeError> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(Call::Connect(host.to_string()));
        Ok(FakeSession {
            bridge: self.clone(),
            host: host.to_string(),
        })
    }
}

/// Connector that fails the test if any bridge call is attempted.
#[derive(Clone, Copy)]
pub(crate) struct UnreachableConnector;

impl BridgeConnector for UnreachableConnector {
    type Session = FakeSession;

    async fn discover_bridge(&self) -> Result<String, BridgeError> {
        panic!("discover_bridge must not be called")
    }

    async fn create_user(&self, _host: &str, _device_type: &str) -> Result<String, BridgeError> {
        panic!("create_user must not be called")
    }

    async fn connect(&self, _host: &str, _username: &str) -> Result<FakeSession, BridgeError> {
        panic!("connect must not be called")
    }
}

//! Hue light as a positional switch.
//!
//! Position `0` is off; `1..=100` is on, scaled against the bridge's
//! `1..=254` brightness. Every operation re-reads the light from the bridge
//! first: a wall switch or another app may have changed it since the last
//! call.

use hueswitch_domain::config::LightConfig;
use hueswitch_domain::error::{HueError, Operation};
use hueswitch_domain::id::LightId;
use hueswitch_domain::light::LightState;
use hueswitch_domain::options::{CallOptions, Command};
use hueswitch_domain::position::{POSITION_COUNT, Position};

use crate::ports::{BridgeConnector, BridgeSession, PositionalSwitch};
use crate::services::session::open_session;

/// One bridge light behind the [`PositionalSwitch`] contract.
pub struct HueLight<S> {
    session: S,
    light_id: LightId,
}

impl<S: BridgeSession> HueLight<S> {
    /// Validate `config`, open a session, and check the light exists.
    ///
    /// # Errors
    ///
    /// Returns [`HueError::Config`] before any bridge call when the config is
    /// incomplete, [`HueError::BridgeDiscovery`] when no host is configured
    /// and none can be found, and [`HueError::Connectivity`] when the bridge
    /// is unreachable, rejects the username, or has no such light.
    #[tracing::instrument(skip_all, fields(light_id = %config.light_id))]
    pub async fn new<C>(connector: &C, config: LightConfig) -> Result<Self, HueError>
    where
        C: BridgeConnector<Session = S>,
    {
        config.validate()?;
        let session = open_session(connector, &config.bridge_host, &config.username).await?;

        let light = session
            .get_light(config.light_id)
            .await
            .map_err(|source| HueError::connectivity(session.host(), source))?;
        tracing::info!(
            host = session.host(),
            name = %light.name,
            "connected to Hue light"
        );

        Ok(Self {
            session,
            light_id: config.light_id,
        })
    }

    #[must_use]
    pub fn light_id(&self) -> LightId {
        self.light_id
    }

    #[must_use]
    pub fn bridge_host(&self) -> &str {
        self.session.host()
    }

    async fn refresh(&self) -> Result<LightState, HueError> {
        self.session
            .get_light(self.light_id)
            .await
            .map(|light| light.state)
            .map_err(|source| HueError::transport(Operation::GetLight, source))
    }
}

impl<S: BridgeSession> PositionalSwitch for HueLight<S> {
    #[tracing::instrument(skip_all, fields(light_id = %self.light_id))]
    async fn get_position(&self, _options: &CallOptions) -> Result<u32, HueError> {
        let state = self.refresh().await?;
        Ok(Position::from_light_state(&state).get())
    }

    /// Positions above `100` are rejected before the bridge is contacted.
    ///
    /// `0` only turns the light off, so the bridge keeps its brightness for
    /// the next turn-on. `1` only turns it on at whatever brightness it had.
    #[tracing::instrument(skip(self, _options), fields(light_id = %self.light_id))]
    async fn set_position(&self, position: u32, _options: &CallOptions) -> Result<(), HueError> {
        let target = Position::new(position)?;
        let current = self.refresh().await?;
        tracing::debug!(
            from = %Position::from_light_state(&current),
            to = %target,
            "moving light"
        );

        if target.is_off() {
            return self
                .session
                .turn_off(self.light_id)
                .await
                .map_err(|source| HueError::transport(Operation::TurnOff, source));
        }

        self.session
            .turn_on(self.light_id)
            .await
            .map_err(|source| HueError::transport(Operation::TurnOn, source))?;

        if let Some(brightness) = target.target_brightness() {
            self.session
                .set_brightness(self.light_id, brightness)
                .await
                .map_err(|source| HueError::transport(Operation::SetBrightness, source))?;
        }
        Ok(())
    }

    fn number_of_positions(&self, _options: &CallOptions) -> (u32, Vec<String>) {
        (POSITION_COUNT, Vec::new())
    }

    async fn do_command(&self, _command: Command) -> Result<Option<Command>, HueError> {
        Ok(None)
    }
}

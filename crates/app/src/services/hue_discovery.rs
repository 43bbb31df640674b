//! Bridge inventory as device descriptors.

use hueswitch_domain::config::DiscoveryConfig;
use hueswitch_domain::descriptor::DeviceDescriptor;
use hueswitch_domain::error::{HueError, Operation};
use hueswitch_domain::options::{CallOptions, Command};

use crate::ports::{BridgeConnector, BridgeSession, DiscoveryService};
use crate::services::session::open_session;

/// Lists every light on one bridge as a `hue-light` descriptor.
pub struct HueDiscovery<S> {
    session: S,
    username: String,
}

impl<S: BridgeSession> HueDiscovery<S> {
    /// Validate `config`, open a session, and probe the bridge config.
    ///
    /// # Errors
    ///
    /// Returns [`HueError::Config`] before any bridge call when the username
    /// is empty, [`HueError::BridgeDiscovery`] when no host is configured and
    /// none can be found, and [`HueError::Connectivity`] when the probe fails.
    #[tracing::instrument(skip_all, fields(bridge_host = %config.bridge_host))]
    pub async fn new<C>(connector: &C, config: DiscoveryConfig) -> Result<Self, HueError>
    where
        C: BridgeConnector<Session = S>,
    {
        config.validate()?;
        let session = open_session(connector, &config.bridge_host, &config.username).await?;

        let info = session
            .bridge_config()
            .await
            .map_err(|source| HueError::connectivity(session.host(), source))?;
        tracing::info!(
            host = session.host(),
            bridge = %info.name,
            version = %info.software_version,
            "connected to Hue bridge"
        );

        Ok(Self {
            session,
            username: config.username,
        })
    }

    /// Host the descriptors will point at, after any bridge lookup.
    #[must_use]
    pub fn bridge_host(&self) -> &str {
        self.session.host()
    }
}

impl<S: BridgeSession> DiscoveryService for HueDiscovery<S> {
    /// One descriptor per light, in the bridge's order. Every light uses
    /// the `hue-light` model, whatever its color capabilities, and nothing
    /// is filtered out: unreachable lights are listed too.
    #[tracing::instrument(skip_all, fields(bridge_host = %self.bridge_host()))]
    async fn discover_devices(
        &self,
        _options: &CallOptions,
    ) -> Result<Vec<DeviceDescriptor>, HueError> {
        let lights = self
            .session
            .list_lights()
            .await
            .map_err(|source| HueError::transport(Operation::ListLights, source))?;

        let descriptors: Vec<_> = lights
            .into_iter()
            .map(|light| {
                tracing::debug!(
                    light_id = %light.id,
                    name = %light.name,
                    light_type = %light.light_type,
                    "discovery result light"
                );
                DeviceDescriptor::hue_light(
                    light.name,
                    self.session.host(),
                    self.username.as_str(),
                    light.id,
                )
            })
            .collect();

        tracing::info!(count = descriptors.len(), "Hue discovery complete");
        Ok(descriptors)
    }

    async fn do_command(&self, _command: Command) -> Result<Option<Command>, HueError> {
        Ok(None)
    }
}

//! Session opening shared by every component constructor.

use hueswitch_domain::error::HueError;

use crate::ports::BridgeConnector;

/// Open a session, locating the bridge first when no host is configured.
pub(crate) async fn open_session<C: BridgeConnector>(
    connector: &C,
    bridge_host: &str,
    username: &str,
) -> Result<C::Session, HueError> {
    let host = if bridge_host.is_empty() {
        tracing::info!("no bridge_host specified, discovering Hue bridge");
        let host = connector
            .discover_bridge()
            .await
            .map_err(HueError::BridgeDiscovery)?;
        tracing::info!(%host, "discovered Hue bridge");
        host
    } else {
        bridge_host.to_string()
    };

    connector
        .connect(&host, username)
        .await
        .map_err(|source| HueError::connectivity(&host, source))
}

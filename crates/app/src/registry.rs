//! Component registry — maps `(api, model)` pairs to constructors.
//!
//! The embedding application creates one [`Registry`] at start-up, fills it
//! (usually via [`register_hue_models`]) and then turns descriptors, either
//! discovered or read from config, into live components. Nothing here is
//! global: two registries never see each other's constructors.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use hueswitch_domain::config::{DiscoveryConfig, LightConfig};
use hueswitch_domain::descriptor::{ApiKind, DeviceDescriptor, ModelKind};
use hueswitch_domain::error::{ContractError, HueError};

use crate::ports::BridgeConnector;
use crate::services::{HueDiscovery, HueLight};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

type Constructor<C> = Box<
    dyn Fn(
            C,
            DeviceDescriptor,
        ) -> BoxFuture<Result<Component<<C as BridgeConnector>::Session>, HueError>>
        + Send
        + Sync,
>;

/// A component built from a descriptor.
pub enum Component<S> {
    Switch(HueLight<S>),
    Discovery(HueDiscovery<S>),
}

impl<S> Component<S> {
    #[must_use]
    pub fn api(&self) -> ApiKind {
        match self {
            Self::Switch(_) => ApiKind::Switch,
            Self::Discovery(_) => ApiKind::Discovery,
        }
    }

    /// Unwrap a switch.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotASwitch`] for any other component.
    pub fn into_switch(self, name: &str) -> Result<HueLight<S>, ContractError> {
        match self {
            Self::Switch(light) => Ok(light),
            Self::Discovery(_) => Err(ContractError::NotASwitch {
                name: name.to_string(),
            }),
        }
    }

    /// Unwrap a discovery service.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NotADiscovery`] for any other component.
    pub fn into_discovery(self, name: &str) -> Result<HueDiscovery<S>, ContractError> {
        match self {
            Self::Discovery(discovery) => Ok(discovery),
            Self::Switch(_) => Err(ContractError::NotADiscovery {
                name: name.to_string(),
            }),
        }
    }
}

/// Constructors keyed by `(api, model)`, all sharing one connector.
pub struct Registry<C: BridgeConnector> {
    connector: C,
    constructors: HashMap<(ApiKind, ModelKind), Constructor<C>>,
}

impl<C> Registry<C>
where
    C: BridgeConnector + Clone + 'static,
{
    /// Create an empty registry whose components connect through `connector`.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            constructors: HashMap::new(),
        }
    }

    /// Bind a constructor to `(api, model)`, replacing any previous one.
    pub fn register<F, Fut>(&mut self, api: ApiKind, model: ModelKind, constructor: F)
    where
        F: Fn(C, DeviceDescriptor) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Component<C::Session>, HueError>> + Send + 'static,
    {
        tracing::debug!(%api, %model, "registering constructor");
        let boxed: Constructor<C> = Box::new(move |connector, descriptor| {
            Box::pin(constructor(connector, descriptor)) as BoxFuture<_>
        });
        self.constructors.insert((api, model), boxed);
    }

    #[must_use]
    pub fn is_registered(&self, api: ApiKind, model: ModelKind) -> bool {
        self.constructors.contains_key(&(api, model))
    }

    /// Build whatever component `descriptor` names.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::UnregisteredModel`] when nothing is bound to
    /// the descriptor's `(api, model)`, or the constructor's own error.
    #[tracing::instrument(skip_all, fields(name = %descriptor.name, api = %descriptor.api, model = %descriptor.model))]
    pub async fn build(&self, descriptor: DeviceDescriptor) -> Result<Component<C::Session>, HueError> {
        let constructor = self
            .constructors
            .get(&(descriptor.api, descriptor.model))
            .ok_or(ContractError::UnregisteredModel {
                api: descriptor.api,
                model: descriptor.model,
            })?;
        constructor(self.connector.clone(), descriptor).await
    }

    /// Build a switch adapter from a descriptor.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), plus [`ContractError::NotASwitch`]
    /// when the constructor produced something else.
    pub async fn build_adapter(
        &self,
        descriptor: DeviceDescriptor,
    ) -> Result<HueLight<C::Session>, HueError> {
        let name = descriptor.name.clone();
        let component = self.build(descriptor).await?;
        Ok(component.into_switch(&name)?)
    }
}

/// Register the `hue-light` switch and `hue-discovery` service.
pub fn register_hue_models<C>(registry: &mut Registry<C>)
where
    C: BridgeConnector + Clone + 'static,
{
    registry.register(ApiKind::Switch, ModelKind::HueLight, build_hue_light::<C>);
    registry.register(
        ApiKind::Discovery,
        ModelKind::HueDiscovery,
        build_hue_discovery::<C>,
    );
}

async fn build_hue_light<C: BridgeConnector>(
    connector: C,
    descriptor: DeviceDescriptor,
) -> Result<Component<C::Session>, HueError> {
    let config = LightConfig::try_from(&descriptor)?;
    let light = HueLight::new(&connector, config).await?;
    Ok(Component::Switch(light))
}

async fn build_hue_discovery<C: BridgeConnector>(
    connector: C,
    descriptor: DeviceDescriptor,
) -> Result<Component<C::Session>, HueError> {
    let config = DiscoveryConfig::try_from(&descriptor)?;
    let discovery = HueDiscovery::new(&connector, config).await?;
    Ok(Component::Discovery(discovery))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{DiscoveryService, PositionalSwitch};
    use crate::testing::{FakeBridge, FakeSession, HOST, USERNAME, light};
    use hueswitch_domain::descriptor::Attributes;
    use hueswitch_domain::id::LightId;
    use hueswitch_domain::options::CallOptions;

    fn registry(bridge: FakeBridge) -> Registry<FakeBridge> {
        let mut registry = Registry::new(bridge);
        register_hue_models(&mut registry);
        registry
    }

    fn discovery_descriptor() -> DeviceDescriptor {
        DeviceDescriptor {
            name: "hue-finder".to_string(),
            api: ApiKind::Discovery,
            model: ModelKind::HueDiscovery,
            attributes: Attributes {
                bridge_host: HOST.to_string(),
                username: USERNAME.to_string(),
                light_id: None,
            },
        }
    }

    #[test]
    fn should_register_both_hue_models() {
        let registry = registry(FakeBridge::default());
        assert!(registry.is_registered(ApiKind::Switch, ModelKind::HueLight));
        assert!(registry.is_registered(ApiKind::Discovery, ModelKind::HueDiscovery));
        assert!(!registry.is_registered(ApiKind::Switch, ModelKind::HueDiscovery));
    }

    #[tokio::test]
    async fn should_build_adapters_from_discovered_descriptors() {
        let bridge = FakeBridge::with_lights(vec![light(1, "Desk", true, 254), light(2, "Hall", false, 3)]);
        let registry = registry(bridge);

        let discovery = registry
            .build(discovery_descriptor())
            .await
            .unwrap()
            .into_discovery("hue-finder")
            .unwrap();
        let descriptors = discovery
            .discover_devices(&CallOptions::default())
            .await
            .unwrap();

        let desk = registry.build_adapter(descriptors[0].clone()).await.unwrap();
        assert_eq!(desk.light_id(), LightId::new(1));
        assert_eq!(desk.get_position(&CallOptions::default()).await.unwrap(), 100);

        let hall = registry.build_adapter(descriptors[1].clone()).await.unwrap();
        assert_eq!(hall.get_position(&CallOptions::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reject_unregistered_model() {
        let registry = Registry::new(FakeBridge::default());
        let descriptor = DeviceDescriptor::hue_light("Desk", HOST, USERNAME, LightId::new(1));
        let result = registry.build(descriptor).await;
        assert!(matches!(
            result,
            Err(HueError::Contract(ContractError::UnregisteredModel {
                api: ApiKind::Switch,
                model: ModelKind::HueLight,
            }))
        ));
    }

    #[tokio::test]
    async fn should_refuse_discovery_service_as_switch() {
        let registry = registry(FakeBridge::default());
        let result = registry.build_adapter(discovery_descriptor()).await;
        assert!(matches!(
            result,
            Err(HueError::Contract(ContractError::NotASwitch { .. }))
        ));
    }

    #[tokio::test]
    async fn should_refuse_switch_descriptor_without_light_id() {
        let registry = registry(FakeBridge::with_lights(vec![light(1, "Desk", true, 254)]));
        let mut descriptor = DeviceDescriptor::hue_light("Desk", HOST, USERNAME, LightId::new(1));
        descriptor.attributes.light_id = None;
        let result = registry.build_adapter(descriptor).await;
        assert!(matches!(
            result,
            Err(HueError::Contract(ContractError::MissingLightId { .. }))
        ));
    }

    #[tokio::test]
    async fn should_replace_previous_registration() {
        let mut registry = registry(FakeBridge::default());
        registry.register(
            ApiKind::Switch,
            ModelKind::HueLight,
            |_, descriptor: DeviceDescriptor| async move {
                Err::<Component<FakeSession>, _>(HueError::Contract(ContractError::NotASwitch {
                    name: descriptor.name,
                }))
            },
        );
        let descriptor = DeviceDescriptor::hue_light("Desk", HOST, USERNAME, LightId::new(1));
        let result = registry.build(descriptor).await;
        assert!(matches!(
            result,
            Err(HueError::Contract(ContractError::NotASwitch { .. }))
        ));
    }

    #[tokio::test]
    async fn should_report_component_api() {
        let bridge = FakeBridge::with_lights(vec![light(1, "Desk", true, 254)]);
        let registry = registry(bridge);
        let descriptor = DeviceDescriptor::hue_light("Desk", HOST, USERNAME, LightId::new(1));
        let switch = registry.build(descriptor).await.unwrap();
        assert_eq!(switch.api(), ApiKind::Switch);
        let discovery = registry.build(discovery_descriptor()).await.unwrap();
        assert_eq!(discovery.api(), ApiKind::Discovery);
        assert!(discovery.into_switch("hue-finder").is_err());
    }
}

//! # hueswitch — Hue lights as positional switches
//!
//! Composition root that wires the Hue services to a bridge and drives them
//! from the command line.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars, CLI flags)
//! - Install the tracing subscriber
//! - Construct the bridge connector and the component registry
//! - Register a bridge user, or discover lights and drive one of them
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::path::PathBuf;

use clap::Parser;
use hueswitch_adapter_virtual::VirtualBridge;
use hueswitch_app::ports::{BridgeConnector, DiscoveryService, PositionalSwitch};
use hueswitch_app::registry::{Registry, register_hue_models};
use hueswitch_domain::descriptor::DeviceDescriptor;
use hueswitch_domain::error::{BridgeError, ConfigError, HueError};
use hueswitch_domain::options::CallOptions;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

const DEVICE_TYPE: &str = "hueswitch";
const DISCOVERY_NAME: &str = "hue-discovery";

#[derive(Parser)]
#[command(name = "hueswitch")]
#[command(about = "Drive Philips Hue lights as positional switches", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = config::DEFAULT_PATH)]
    config: PathBuf,

    /// Bridge host; located on the network when empty
    #[arg(short, long)]
    bridge: Option<String>,

    /// API username registered on the bridge
    #[arg(short, long)]
    username: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Name of the light to drive
    #[arg(long)]
    device: Option<String>,

    /// Position to move the light to (0-100)
    #[arg(long, requires = "device")]
    set: Option<u32>,

    /// Register a new API user (press the bridge's link button first)
    #[arg(long, conflicts_with_all = ["device", "set"])]
    register: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Hue(#[from] HueError),
    #[error("failed to register a user on bridge {host}")]
    Register {
        host: String,
        #[source]
        source: BridgeError,
    },
    #[error("no light named {0:?} on the bridge")]
    UnknownDevice(String),
    #[error("failed to render descriptors")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(host) = cli.bridge.clone() {
        config.bridge.host = host;
    }
    if let Some(username) = cli.username.clone() {
        config.bridge.username = username;
    }
    if cli.debug {
        config.logging.filter = "debug".to_string();
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let bridge = VirtualBridge::new(config.virtual_bridge.clone());
    run(&cli, &config, bridge).await?;
    Ok(())
}

async fn run(cli: &Cli, config: &Config, bridge: VirtualBridge) -> Result<(), CliError> {
    if cli.register {
        // The simulated bridge has no physical button.
        bridge.press_link_button();
        let username = register(&bridge, &config.bridge.host).await?;
        println!("{username}");
        return Ok(());
    }

    if config.bridge.username.is_empty() {
        tracing::error!("no username configured; run with --register to create one");
        return Err(HueError::Config(ConfigError::MissingUsername).into());
    }

    let mut registry = Registry::new(bridge);
    register_hue_models(&mut registry);

    let options = CallOptions::default();
    let discovery = registry
        .build(DeviceDescriptor::hue_discovery(
            DISCOVERY_NAME,
            config.bridge.host.as_str(),
            config.bridge.username.as_str(),
        ))
        .await?
        .into_discovery(DISCOVERY_NAME)
        .map_err(HueError::from)?;

    let descriptors = discovery.discover_devices(&options).await?;
    println!("{}", serde_json::to_string_pretty(&descriptors)?);

    let Some(name) = cli.device.as_deref() else {
        return Ok(());
    };
    let descriptor = descriptors
        .into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| CliError::UnknownDevice(name.to_string()))?;

    let light = registry.build_adapter(descriptor).await?;
    let position = light.get_position(&options).await?;
    let (count, _labels) = light.number_of_positions(&options);
    tracing::info!(device = name, position, count, "current position");

    if let Some(target) = cli.set {
        light.set_position(target, &options).await?;
        let position = light.get_position(&options).await?;
        tracing::info!(device = name, position, "position set");
    }
    Ok(())
}

async fn register<C: BridgeConnector>(connector: &C, host: &str) -> Result<String, CliError> {
    let host = if host.is_empty() {
        connector
            .discover_bridge()
            .await
            .map_err(HueError::BridgeDiscovery)?
    } else {
        host.to_string()
    };
    tracing::info!(%host, "registering new user");
    connector
        .create_user(&host, DEVICE_TYPE)
        .await
        .map_err(|source| CliError::Register { host, source })
}

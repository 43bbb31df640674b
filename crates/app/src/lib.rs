//! # hueswitch-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `BridgeConnector` — locate a bridge, register a user, open sessions
//!   - `BridgeSession` — read and command lights on one bridge
//! - Define **driving/inbound ports** the owning runtime calls:
//!   - `PositionalSwitch` — get/set a 0..=100 position
//!   - `DiscoveryService` — list configurable devices
//! - Implement the use-cases: `HueLight` (light as switch), `HueDiscovery`
//!   (bridge inventory as descriptors), and the `Registry` that turns
//!   descriptors into components
//!
//! ## Dependency rule
//! Depends on `hueswitch-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod registry;
pub mod services;

#[cfg(test)]
mod testing;

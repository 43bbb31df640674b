//! Port definitions — traits that adapters implement or the runtime calls.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod bridge;
pub mod component;

pub use bridge::{BridgeConnector, BridgeInfo, BridgeSession};
pub use component::{DiscoveryService, PositionalSwitch};

//! Virtual bridge error types.

use hueswitch_domain::error::{BridgeError, Operation};

/// A failure injected with [`VirtualBridge::fail_operation`](crate::VirtualBridge::fail_operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("simulated failure: {0}")]
pub struct SimulatedFault(pub Operation);

impl From<SimulatedFault> for BridgeError {
    fn from(fault: SimulatedFault) -> Self {
        Self::Other(Box::new(fault))
    }
}

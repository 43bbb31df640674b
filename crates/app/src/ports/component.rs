//! Component ports — what the owning runtime calls.

use std::future::Future;

use hueswitch_domain::descriptor::DeviceDescriptor;
use hueswitch_domain::error::HueError;
use hueswitch_domain::options::{CallOptions, Command};

/// A device controlled through a discrete position scale.
pub trait PositionalSwitch: Send + Sync {
    /// Read the current position from the device.
    fn get_position(
        &self,
        options: &CallOptions,
    ) -> impl Future<Output = Result<u32, HueError>> + Send;

    /// Move the device to `position`.
    fn set_position(
        &self,
        position: u32,
        options: &CallOptions,
    ) -> impl Future<Output = Result<(), HueError>> + Send;

    /// Number of positions and their optional labels. Never touches the
    /// device.
    fn number_of_positions(&self, options: &CallOptions) -> (u32, Vec<String>);

    /// Vendor-specific extension point.
    fn do_command(
        &self,
        command: Command,
    ) -> impl Future<Output = Result<Option<Command>, HueError>> + Send;
}

/// A service that lists devices ready to be configured.
pub trait DiscoveryService: Send + Sync {
    fn discover_devices(
        &self,
        options: &CallOptions,
    ) -> impl Future<Output = Result<Vec<DeviceDescriptor>, HueError>> + Send;

    fn do_command(
        &self,
        command: Command,
    ) -> impl Future<Output = Result<Option<Command>, HueError>> + Send;
}

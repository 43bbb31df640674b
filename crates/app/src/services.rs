//! Use-cases built on the bridge ports.

pub mod hue_discovery;
pub mod hue_light;
mod session;

pub use hue_discovery::HueDiscovery;
pub use hue_light::HueLight;

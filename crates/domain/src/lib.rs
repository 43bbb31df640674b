//! # hueswitch-domain
//!
//! Pure domain model for adapting Hue bridge lights to positional switches.
//!
//! ## Responsibilities
//! - Foundational types: light identifiers, error conventions
//! - Define **Lights** as reported by a bridge (on/off + brightness)
//! - Define **Positions** (the 0..=100 switch scale) and the mapping between
//!   positions and bridge brightness
//! - Define **Device descriptors** emitted by discovery and the configs
//!   built from them
//! - Contain all invariant enforcement (config validation, position bounds)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod config;
pub mod descriptor;
pub mod light;
pub mod options;
pub mod position;

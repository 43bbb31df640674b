//! Per-call options and free-form commands.

use serde::{Deserialize, Serialize};

/// Options accepted by every switch and discovery operation.
///
/// The set of recognized keys is closed; none are defined yet. Unknown keys
/// are rejected when deserializing rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct CallOptions {}

/// Free-form vendor command passed to `do_command`.
pub type Command = serde_json::Map<String, serde_json::Value>;

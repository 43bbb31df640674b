//! Bridge-native light identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric key of a light within one bridge.
///
/// Bridges number their lights from `1`; `0` is never a valid id and is
/// used by configs to mean "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LightId(u32);

impl LightId {
    /// Wrap a raw bridge id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw bridge id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this id is the unset sentinel `0`.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for LightId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LightId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_zero_as_unset() {
        assert!(LightId::default().is_unset());
        assert!(!LightId::new(3).is_unset());
    }

    #[test]
    fn should_serialize_as_plain_number() {
        let json = serde_json::to_string(&LightId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_parse_from_str() {
        let id: LightId = "12".parse().unwrap();
        assert_eq!(id.get(), 12);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_id() {
        assert!(LightId::from_str("lamp").is_err());
    }
}

//! Position — the switch scale `0..=100` and its mapping to bridge state.
//!
//! `0` means the light is off. `1..=100` means it is on, with the value
//! scaled linearly from the bridge brightness range `1..=254`. Both
//! directions round half up, so a round trip lands within one step of the
//! starting position.

use std::fmt;

use crate::error::PositionError;
use crate::light::{Brightness, LightState};

/// Number of distinct positions: `0..=100`.
pub const POSITION_COUNT: u32 = 101;

const MAX_POSITION: u32 = 100;
const BRIGHTNESS_SPAN: u32 = 254;

/// A validated switch position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    pub const OFF: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Validate a raw position.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] when `raw > 100`.
    pub fn new(raw: u32) -> Result<Self, PositionError> {
        if raw > MAX_POSITION {
            return Err(PositionError::OutOfRange(raw));
        }
        u8::try_from(raw)
            .map(Self)
            .map_err(|_| PositionError::OutOfRange(raw))
    }

    /// Derive the position a light currently sits at.
    ///
    /// An "on" light never maps to `0`, even when the bridge reports a
    /// brightness of `0`.
    #[must_use]
    pub fn from_light_state(state: &LightState) -> Self {
        if !state.on {
            return Self::OFF;
        }
        let bri = u32::from(state.bri);
        let scaled = (bri * MAX_POSITION + BRIGHTNESS_SPAN / 2) / BRIGHTNESS_SPAN;
        Self(u8::try_from(scaled.clamp(1, MAX_POSITION)).unwrap_or(Self::MAX.0))
    }

    /// Brightness to send when moving to this position.
    ///
    /// `None` for `0` (turn off) and `1` (turn on, keep brightness).
    #[must_use]
    pub fn target_brightness(self) -> Option<Brightness> {
        if self.0 <= 1 {
            return None;
        }
        let pos = u32::from(self.0);
        let scaled = (pos * BRIGHTNESS_SPAN + MAX_POSITION / 2) / MAX_POSITION;
        Some(Brightness::clamped(scaled))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    #[must_use]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u32> for Position {
    type Error = PositionError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

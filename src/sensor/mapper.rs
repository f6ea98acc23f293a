//! Motion mapper: sensor samples to pointer deltas and tilt.
//!
//! Mapping, per channel:
//!
//! - Angular velocity: rotating the wrist around Z (yaw) moves the
//!   pointer horizontally, rotating around X (pitch) moves it
//!   vertically. `dx = round(-yaw * sensitivity)`,
//!   `dy = round(-pitch * sensitivity)`; the signs give natural
//!   pointer directions. Samples where both deltas round to zero emit
//!   nothing, which suppresses idle-jitter noise. Roll is unused.
//! - Acceleration: passthrough as a tilt vector, no transform, no
//!   effect on pointer motion.

use crate::config;
use crate::sensor::{Acceleration, AngularVelocity, PointerDelta, TiltVector};

/// Map one gyroscope sample to a pointer delta.
///
/// Returns `None` when both deltas round to zero (no movement event).
pub fn map_angular_velocity(
    sample: &AngularVelocity,
    sensitivity: f32,
) -> Option<PointerDelta> {
    let dx = round_to_i32(-sample.yaw * sensitivity);
    let dy = round_to_i32(-sample.pitch * sensitivity);
    if dx == 0 && dy == 0 {
        return None;
    }
    Some(PointerDelta { dx, dy })
}

/// Map one accelerometer sample to a tilt vector (identity).
pub fn map_acceleration(sample: &Acceleration) -> TiltVector {
    TiltVector {
        x: sample.x,
        y: sample.y,
    }
}

/// Round to the nearest integer, ties toward positive infinity
/// (half-up, `floor(v + 0.5)`).
///
/// `no_std`-safe replacement for `f32::round`, which also differs on
/// ties: `round(-7.5)` is `-8`, half-up gives `-7`.
fn round_to_i32(v: f32) -> i32 {
    let shifted = v + 0.5;
    let truncated = shifted as i32;
    if (truncated as f32) > shifted {
        truncated - 1
    } else {
        truncated
    }
}

/// Stateful mapper: sensitivity plus the caller's enable gate.
///
/// While disabled, both channels are dropped, mirroring the caller
/// stopping sensor delivery.
pub struct MotionMapper {
    sensitivity: f32,
    enabled: bool,
}

impl MotionMapper {
    /// Mapper with the default sensitivity, disabled.
    pub const fn new() -> Self {
        Self {
            sensitivity: config::POINTER_SENSITIVITY,
            enabled: false,
        }
    }

    /// Mapper with a custom sensitivity, disabled.
    pub const fn with_sensitivity(sensitivity: f32) -> Self {
        Self {
            sensitivity,
            enabled: false,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Feed one gyroscope sample.
    pub fn angular_velocity(&self, sample: &AngularVelocity) -> Option<PointerDelta> {
        if !self.enabled {
            return None;
        }
        map_angular_velocity(sample, self.sensitivity)
    }

    /// Feed one accelerometer sample.
    pub fn acceleration(&self, sample: &Acceleration) -> Option<TiltVector> {
        if !self.enabled {
            return None;
        }
        Some(map_acceleration(sample))
    }
}

impl Default for MotionMapper {
    fn default() -> Self {
        Self::new()
    }
}

//! Inertial sensor subsystem.
//!
//! Two independent input channels feed the motion mapper:
//!
//! 1. **Angular velocity** (gyroscope, rad/s, 3 axes) - mapped to
//!    relative pointer deltas.
//! 2. **Acceleration** (accelerometer, m/s², gravity-inclusive) -
//!    passed through unchanged as a 2D tilt vector for orientation
//!    feedback.
//!
//! The channels may be sampled at different, independently configured
//! rates; nothing here assumes a 1:1 interleaving between them.

pub mod mapper;

/// One gyroscope sample, in rad/s per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AngularVelocity {
    /// Rotation around the device X axis.
    pub pitch: f32,
    /// Rotation around the device Y axis. Unused by the mapping.
    pub roll: f32,
    /// Rotation around the device Z axis.
    pub yaw: f32,
}

/// One accelerometer sample, in m/s², gravity included.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
}

/// Discrete relative pointer movement produced by the mapper.
///
/// Deltas are not yet clamped to the report range; saturation happens
/// at encode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerDelta {
    pub dx: i32,
    pub dy: i32,
}

/// 2D tilt vector, the acceleration channel passed through unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltVector {
    pub x: f32,
    pub y: f32,
}

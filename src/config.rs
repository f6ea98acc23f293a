//! Application-wide constants and compile-time configuration.
//!
//! All protocol constants and tuning parameters live here so they can
//! be adjusted in one place.

// SDP record
//
// These strings identify the emulated peripheral to the host during
// service discovery. Changing them changes nothing functionally but
// alters what the host shows in its device list.

/// Service name advertised in the SDP record.
pub const SDP_SERVICE_NAME: &str = "Wear Mouse";

/// Service description advertised in the SDP record.
pub const SDP_SERVICE_DESCRIPTION: &str = "Wear OS Mouse";

/// Provider string advertised in the SDP record.
pub const SDP_PROVIDER: &str = "Google";

/// HID device subclass: pointing device (mouse).
pub const SDP_SUBCLASS_MOUSE: u8 = 0x80;

// Link quality of service
//
// Registered alongside the SDP record. The service level is
// best-effort: the stack may drop reports under pressure and we never
// retry, which keeps input latency minimal.

/// QoS service level: best-effort delivery.
pub const QOS_SERVICE_BEST_EFFORT: u8 = 1;

/// QoS token rate (bytes/second).
pub const QOS_TOKEN_RATE: u32 = 800;

/// QoS token bucket size (bytes).
pub const QOS_TOKEN_BUCKET_SIZE: u32 = 9;

/// QoS peak bandwidth (bytes/second, 0 = unspecified).
pub const QOS_PEAK_BANDWIDTH: u32 = 0;

/// QoS latency bound (microseconds).
pub const QOS_LATENCY_US: u32 = 11_250;

/// QoS delay variation ceiling (microseconds, maximum allowed).
pub const QOS_DELAY_VARIATION: u32 = u32::MAX;

// Motion mapping

/// Scale factor from angular velocity (rad/s) to pointer counts.
pub const POINTER_SENSITIVITY: f32 = 15.0;

/// Pointer-count dead band under which no movement direction is
/// reported in the human-readable status line.
pub const DIRECTION_DEAD_BAND: i32 = 2;

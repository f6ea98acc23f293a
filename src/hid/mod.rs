//! Bluetooth HID device subsystem.
//!
//! This module emulates a standard wireless mouse peripheral:
//!
//! 1. **Report** ([`report`]) - the fixed report descriptor for a
//!    3-button relative mouse and the matching 4-byte wire encoding.
//! 2. **Session** ([`session`]) - the state machine owning profile
//!    registration, host binding, and report transmission.
//!
//! The descriptor bytes, SDP record, and QoS parameters must be
//! reproduced bit-exact for host interoperability; they are built from
//! the constants in [`crate::config`] and never mutated afterwards.

pub mod report;
pub mod session;


use heapless::String;

use crate::config;
use crate::hid::report::MOUSE_REPORT_DESCRIPTOR;

/// The host computer currently bound to the emulated peripheral.
///
/// Exclusively owned by the session: set only on the transition into
/// `Connected`, cleared on `Disconnected`, at most one live at a time.
/// Other components only ever see cloned snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HostDevice {
    /// Stack-level device address.
    pub address: [u8; 6],
    /// Human-readable name (truncated to 32 bytes).
    pub name: String<32>,
}

impl HostDevice {
    /// Build a host identity from its address and display name.
    ///
    /// Names longer than the fixed capacity are truncated.
    pub fn new(address: [u8; 6], name: &str) -> Self {
        let mut truncated = String::new();
        for c in name.chars() {
            if truncated.push(c).is_err() {
                break;
            }
        }
        Self {
            address,
            name: truncated,
        }
    }

    /// Whether two host references denote the same physical device.
    pub fn same_device(&self, other: &HostDevice) -> bool {
        self.address == other.address
    }
}

/// Link state reported by the platform stack for a host connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
}

/// SDP record describing the emulated service to the host.
///
/// Constructed once ([`SdpSettings::mouse`]) and never mutated.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SdpSettings {
    pub service_name: &'static str,
    pub service_description: &'static str,
    pub provider: &'static str,
    /// HID device subclass byte.
    pub subclass: u8,
    /// HID report descriptor paired with the record.
    pub descriptor: &'static [u8],
}

impl SdpSettings {
    /// The fixed record for the emulated mouse.
    pub const fn mouse() -> Self {
        Self {
            service_name: config::SDP_SERVICE_NAME,
            service_description: config::SDP_SERVICE_DESCRIPTION,
            provider: config::SDP_PROVIDER,
            subclass: config::SDP_SUBCLASS_MOUSE,
            descriptor: MOUSE_REPORT_DESCRIPTOR,
        }
    }
}

/// Link quality-of-service parameters supplied at registration.
///
/// Constructed once ([`QosSettings::best_effort`]) and never mutated.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QosSettings {
    /// Service level (best-effort).
    pub service_type: u8,
    /// Token rate (bytes/second).
    pub token_rate: u32,
    /// Token bucket size (bytes).
    pub token_bucket_size: u32,
    /// Peak bandwidth (bytes/second, 0 = unspecified).
    pub peak_bandwidth: u32,
    /// Latency bound (microseconds).
    pub latency: u32,
    /// Delay variation ceiling (microseconds).
    pub delay_variation: u32,
}

impl QosSettings {
    /// The fixed best-effort link parameters for the emulated mouse.
    pub const fn best_effort() -> Self {
        Self {
            service_type: config::QOS_SERVICE_BEST_EFFORT,
            token_rate: config::QOS_TOKEN_RATE,
            token_bucket_size: config::QOS_TOKEN_BUCKET_SIZE,
            peak_bandwidth: config::QOS_PEAK_BANDWIDTH,
            latency: config::QOS_LATENCY_US,
            delay_variation: config::QOS_DELAY_VARIATION,
        }
    }
}

//! wearmouse - air-mouse core for wrist-worn devices.
//!
//! Turns a watch's inertial sensors into relative pointer motion and
//! emulates a standard Bluetooth HID mouse toward a paired host:
//!
//! 1. **Report encoder** ([`hid::report`]) - fixed report descriptor for a
//!    3-button relative mouse plus the matching 4-byte wire encoding.
//! 2. **Device session** ([`hid::session`]) - state machine owning profile
//!    registration, host binding, and best-effort report transmission.
//! 3. **Motion mapper** ([`sensor::mapper`]) - converts angular-velocity
//!    samples into clamped pointer deltas and passes acceleration through
//!    as a tilt vector.
//! 4. **Controller** ([`controller`]) - glue facade owning button state and
//!    wiring mapper output into the session.
//!
//! The platform wireless stack is reached exclusively through the
//! [`hid::session::HidAdapter`] and [`hid::session::HidDeviceProxy`] trait
//! seams; everything else is pure logic and runs on the host for testing.
//!
//! The link is declared best-effort: sends never block, never queue, and
//! never retry. Dropped reports are an accepted outcome, not a fault.

#![cfg_attr(not(test), no_std)]

// Must come first so the log shim macros are visible to all modules.
#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod error;
pub mod hid;
pub mod sensor;

pub use controller::AirMouse;
pub use error::Error;

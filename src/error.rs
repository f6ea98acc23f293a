//! Unified error type for wearmouse.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Nothing in this crate surfaces these as hard failures toward the
//! caller: by policy, best-effort operations return a `Result` the
//! caller is permitted to discard, and the session swallows transport
//! errors internally. The type exists so the trait seams toward the
//! platform stack can report *why* an operation did nothing.

/// Top-level error type used across the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The wireless stack exposes no HID device profile on this platform.
    ProfileUnavailable,

    /// The runtime permission needed to reach the adapter is missing.
    PermissionDenied,

    /// The stack refused to register the HID app.
    RegistrationFailed,

    /// The stack refused or dropped a report transmission.
    SendFailed,
}

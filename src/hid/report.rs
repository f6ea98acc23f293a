//! HID mouse report encoding.
//!
//! Layout (4 bytes, report ID 0):
//! ```text
//! Byte 0: Button bitfield
//!         Bit 0 = Left, Bit 1 = Right, Bit 2 = reserved (always 0)
//! Byte 1: X displacement (signed, -127..127)
//! Byte 2: Y displacement (signed, -127..127)
//! Byte 3: Scroll wheel  (never driven, always 0)
//! ```
//!
//! The descriptor below and this encoding are a single wire contract:
//! any change to the field order or widths on one side requires the
//! identical change on the other, or the host will misinterpret the
//! payload.

/// Mouse report size in bytes.
pub const MOUSE_REPORT_SIZE: usize = 4;

/// Report ID used for every transmission (the descriptor declares none,
/// so the stack-level ID is 0).
pub const REPORT_ID: u8 = 0;

/// Button bit for the left button.
pub const BUTTON_LEFT: u8 = 0x01;
/// Button bit for the right button.
pub const BUTTON_RIGHT: u8 = 0x02;
/// Mask of the three button bits the descriptor declares.
pub const BUTTON_MASK: u8 = 0x07;

/// Left/right button state, owned by the calling layer.
///
/// The session reads it at report-build time so clicks and motion are
/// always sent together in one report, never queued independently.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    pub left: bool,
    pub right: bool,
}

impl ButtonState {
    /// Pack into the report's button bitfield.
    pub fn bits(&self) -> u8 {
        (if self.left { BUTTON_LEFT } else { 0 }) | (if self.right { BUTTON_RIGHT } else { 0 })
    }
}

/// Standard relative mouse report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MouseReport {
    /// Button bitfield (bit 0 = left, bit 1 = right, bit 2 reserved).
    pub buttons: u8,
    /// Relative X movement (signed).
    pub x: i8,
    /// Relative Y movement (signed).
    pub y: i8,
    /// Scroll wheel delta. No sensor drives the wheel; this is an
    /// intentionally unimplemented capability and stays 0.
    pub wheel: i8,
}

impl MouseReport {
    /// Build a report from raw pointer deltas.
    ///
    /// Deltas outside the descriptor's logical range are saturated to
    /// [-127, 127] - clamped, never rejected or wrapped.
    pub fn new(buttons: u8, dx: i32, dy: i32) -> Self {
        Self {
            buttons: buttons & BUTTON_MASK,
            x: clamp_delta(dx),
            y: clamp_delta(dy),
            wheel: 0,
        }
    }

    /// An idle (no movement, no buttons) report.
    pub const fn empty() -> Self {
        Self {
            buttons: 0,
            x: 0,
            y: 0,
            wheel: 0,
        }
    }

    /// Serialise into a byte slice for transmission.
    /// Returns the number of bytes written (4, or 0 if `buf` is too small).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < MOUSE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.buttons;
        buf[1] = self.x as u8;
        buf[2] = self.y as u8;
        buf[3] = self.wheel as u8;
        MOUSE_REPORT_SIZE
    }

    /// Parse wire bytes back into a report (used by tests and host-side
    /// diagnostics).
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < MOUSE_REPORT_SIZE {
            return None;
        }
        Some(Self {
            buttons: data[0],
            x: data[1] as i8,
            y: data[2] as i8,
            wheel: data[3] as i8,
        })
    }
}

/// Saturate a pointer delta to the descriptor's logical range.
pub fn clamp_delta(v: i32) -> i8 {
    v.clamp(-127, 127) as i8
}

/// HID report descriptor for a 3-button relative mouse.
///
/// Generic Desktop / Mouse usage, three 1-bit buttons plus a 5-bit
/// constant pad, then three signed 8-bit relative fields (X, Y, Wheel)
/// declared together with logical range -127..127.
pub const MOUSE_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x02, // Usage (Mouse)
    0xA1, 0x01, // Collection (Application)
    0x09, 0x01, //   Usage (Pointer)
    0xA1, 0x00, //   Collection (Physical)
    //
    //   - Buttons (3 bits + 5 padding) -
    0x05, 0x09, //     Usage Page (Buttons)
    0x19, 0x01, //     Usage Minimum (Button 1)
    0x29, 0x03, //     Usage Maximum (Button 3)
    0x15, 0x00, //     Logical Minimum (0)
    0x25, 0x01, //     Logical Maximum (1)
    0x95, 0x03, //     Report Count (3)
    0x75, 0x01, //     Report Size (1)
    0x81, 0x02, //     Input (Data, Variable, Absolute)
    0x95, 0x01, //     Report Count (1)
    0x75, 0x05, //     Report Size (5)
    0x81, 0x03, //     Input (Constant, Variable) - padding
    //
    //   - X, Y displacement and wheel -
    0x05, 0x01, //     Usage Page (Generic Desktop)
    0x09, 0x30, //     Usage (X)
    0x09, 0x31, //     Usage (Y)
    0x09, 0x38, //     Usage (Wheel)
    0x15, 0x81, //     Logical Minimum (-127)
    0x25, 0x7F, //     Logical Maximum (127)
    0x75, 0x08, //     Report Size (8)
    0x95, 0x03, //     Report Count (3)
    0x81, 0x06, //     Input (Data, Variable, Relative)
    //
    0xC0, //   End Collection (Physical)
    0xC0, // End Collection (Application)
];

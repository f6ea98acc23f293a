//! Caller-facing controller glue.
//!
//! [`AirMouse`] is the boundary the UI / lifecycle layer talks to:
//! `set_enabled` gates sensor delivery, `click` updates button state,
//! sensor samples are fed in and come back out as pointer deltas and
//! tilt vectors, and session status notifications pass through for
//! display. It owns the [`ButtonState`] and re-sends it with every
//! movement report, so clicks and motion always travel together.

use core::fmt::Write;

use heapless::String;

use crate::config;
use crate::hid::report::ButtonState;
use crate::hid::session::{HidAdapter, HidDeviceProxy, HidSession, SessionEvent, SessionStatus};
use crate::sensor::mapper::MotionMapper;
use crate::sensor::{Acceleration, AngularVelocity, PointerDelta, TiltVector};

/// Air-mouse facade wiring the motion mapper into the HID session.
pub struct AirMouse<P: HidDeviceProxy> {
    session: HidSession<P>,
    mapper: MotionMapper,
    buttons: ButtonState,
}

impl<P: HidDeviceProxy> AirMouse<P> {
    pub const fn new() -> Self {
        Self {
            session: HidSession::new(),
            mapper: MotionMapper::new(),
            buttons: ButtonState {
                left: false,
                right: false,
            },
        }
    }

    /// Request the platform profile proxy. See [`HidSession::init`].
    pub fn init(&mut self, adapter: &mut impl HidAdapter) -> Option<SessionStatus> {
        self.session.init(adapter)
    }

    /// Deliver one platform callback to the session.
    pub fn handle(&mut self, event: SessionEvent<P>) -> Option<SessionStatus> {
        self.session.handle(event)
    }

    /// Tear the session down. Idempotent.
    pub fn cleanup(&mut self) {
        self.session.cleanup();
    }

    /// Read access to the underlying session (state, host snapshot).
    pub fn session(&self) -> &HidSession<P> {
        &self.session
    }

    /// Gate sensor-driven pointer motion on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.mapper.set_enabled(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.mapper.is_enabled()
    }

    /// Current button state, as it will be sent with the next report.
    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// Update the caller-owned button state.
    ///
    /// While enabled, a button edge is reported immediately with a
    /// zero-motion report rather than waiting for the next sensor
    /// sample; the result of that best-effort send is discarded.
    pub fn click(&mut self, left: bool, right: bool) {
        self.buttons = ButtonState { left, right };
        if self.mapper.is_enabled() {
            let _ = self.session.send_report(0, 0, &self.buttons);
        }
    }

    /// Feed one gyroscope sample.
    ///
    /// A resulting movement is transmitted with the current buttons and
    /// also returned to the caller for its own feedback (the upstream
    /// `onMove` notification).
    pub fn on_angular_velocity(&mut self, sample: AngularVelocity) -> Option<PointerDelta> {
        let delta = self.mapper.angular_velocity(&sample)?;
        let _ = self.session.send_report(delta.dx, delta.dy, &self.buttons);
        Some(delta)
    }

    /// Feed one accelerometer sample; the tilt vector goes back to the
    /// caller unchanged (the upstream `onTilt` notification).
    pub fn on_acceleration(&mut self, sample: Acceleration) -> Option<TiltVector> {
        self.mapper.acceleration(&sample)
    }
}

impl<P: HidDeviceProxy> Default for AirMouse<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable movement summary for the status line.
///
/// Uses a small dead band so idle drift does not flicker the display.
/// Display-only; never feeds back into control decisions.
pub fn direction_label(dx: i32, dy: i32) -> String<48> {
    let mut s = String::new();
    if dy < -config::DIRECTION_DEAD_BAND {
        let _ = write!(&mut s, "Moving Up ");
    }
    if dy > config::DIRECTION_DEAD_BAND {
        let _ = write!(&mut s, "Moving Down ");
    }
    if dx < -config::DIRECTION_DEAD_BAND {
        let _ = write!(&mut s, "Moving Left ");
    }
    if dx > config::DIRECTION_DEAD_BAND {
        let _ = write!(&mut s, "Moving Right ");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_label_reads_axes() {
        assert_eq!(direction_label(0, -5).as_str(), "Moving Up ");
        assert_eq!(direction_label(0, 5).as_str(), "Moving Down ");
        assert_eq!(direction_label(-5, 0).as_str(), "Moving Left ");
        assert_eq!(direction_label(5, 0).as_str(), "Moving Right ");
        assert_eq!(direction_label(5, -5).as_str(), "Moving Up Moving Right ");
    }

    #[test]
    fn direction_label_dead_band() {
        assert_eq!(direction_label(0, 0).as_str(), "");
        assert_eq!(direction_label(2, -2).as_str(), "");
        assert_eq!(direction_label(-2, 2).as_str(), "");
    }
}

//! End-to-end tests for the air-mouse core: platform events in,
//! wire bytes out, driven through the public `AirMouse` facade.

use std::cell::RefCell;
use std::rc::Rc;

use wearmouse::hid::report::REPORT_ID;
use wearmouse::hid::session::{
    DeviceState, HidAdapter, HidDeviceProxy, SessionEvent, SessionStatus,
};
use wearmouse::hid::{ConnectionState, HostDevice, QosSettings, SdpSettings};
use wearmouse::sensor::{Acceleration, AngularVelocity};
use wearmouse::{AirMouse, Error};

/// Payloads captured by the fake platform proxy.
type SentReports = Rc<RefCell<Vec<Vec<u8>>>>;

struct StackAdapter {
    grant: bool,
}

impl HidAdapter for StackAdapter {
    fn request_proxy(&mut self) -> Result<(), Error> {
        if self.grant {
            Ok(())
        } else {
            Err(Error::ProfileUnavailable)
        }
    }
}

struct StackProxy {
    sent: SentReports,
}

impl HidDeviceProxy for StackProxy {
    fn register_app(&mut self, sdp: &SdpSettings, qos: &QosSettings) -> Result<(), Error> {
        // The registration must carry the fixed interoperability
        // parameters exactly.
        assert_eq!(sdp.service_name, "Wear Mouse");
        assert_eq!(sdp.service_description, "Wear OS Mouse");
        assert_eq!(sdp.provider, "Google");
        assert_eq!(sdp.subclass, 0x80);
        assert!(!sdp.descriptor.is_empty());
        assert_eq!(qos.service_type, 1);
        assert_eq!(qos.token_rate, 800);
        assert_eq!(qos.token_bucket_size, 9);
        assert_eq!(qos.peak_bandwidth, 0);
        assert_eq!(qos.latency, 11_250);
        assert_eq!(qos.delay_variation, u32::MAX);
        Ok(())
    }

    fn unregister_app(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn send_report(
        &mut self,
        _host: &HostDevice,
        report_id: u8,
        payload: &[u8],
    ) -> Result<(), Error> {
        assert_eq!(report_id, REPORT_ID);
        self.sent.borrow_mut().push(payload.to_vec());
        Ok(())
    }
}

fn host() -> HostDevice {
    HostDevice::new([0x10, 0x20, 0x30, 0x40, 0x50, 0x60], "Workstation")
}

/// Bring a facade up to Connected and return it with the capture log.
fn connected_mouse() -> (AirMouse<StackProxy>, SentReports) {
    let sent: SentReports = Rc::new(RefCell::new(Vec::new()));
    let mut mouse = AirMouse::new();
    let mut adapter = StackAdapter { grant: true };

    assert!(mouse.init(&mut adapter).is_none());
    let status = mouse.handle(SessionEvent::ServiceConnected(StackProxy {
        sent: Rc::clone(&sent),
    }));
    assert_eq!(status, Some(SessionStatus::ServiceConnected));
    mouse.handle(SessionEvent::AppStatusChanged { registered: true });
    let status = mouse.handle(SessionEvent::ConnectionStateChanged {
        host: Some(host()),
        state: ConnectionState::Connected,
    });
    assert_eq!(
        status.unwrap().message().as_str(),
        "Connected to Workstation"
    );

    (mouse, sent)
}

#[test]
fn gyro_sample_becomes_a_wire_report_with_current_buttons() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);
    mouse.click(true, false);
    sent.borrow_mut().clear(); // drop the click-edge report

    let delta = mouse
        .on_angular_velocity(AngularVelocity {
            pitch: 0.0,
            roll: 0.7,
            yaw: -1.0,
        })
        .expect("movement event");
    assert_eq!((delta.dx, delta.dy), (15, 0));

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    // buttons = left, dx = 15, dy = 0, wheel never driven.
    assert_eq!(sent[0].as_slice(), &[0x01, 15, 0, 0]);
}

#[test]
fn click_edges_are_reported_immediately() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    mouse.click(true, false);
    mouse.click(false, false);

    let sent = sent.borrow();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].as_slice(), &[0x01, 0, 0, 0]);
    assert_eq!(sent[1].as_slice(), &[0x00, 0, 0, 0]);
}

#[test]
fn disabled_mouse_sends_nothing() {
    let (mut mouse, sent) = connected_mouse();

    mouse.click(true, true);
    assert!(mouse
        .on_angular_velocity(AngularVelocity {
            pitch: 1.0,
            roll: 0.0,
            yaw: 1.0,
        })
        .is_none());
    assert!(mouse
        .on_acceleration(Acceleration { x: 1.0, y: 2.0 })
        .is_none());

    assert!(sent.borrow().is_empty());
}

#[test]
fn still_wrist_sends_nothing() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    assert!(mouse
        .on_angular_velocity(AngularVelocity {
            pitch: 0.0,
            roll: 0.0,
            yaw: 0.0,
        })
        .is_none());
    assert!(sent.borrow().is_empty());
}

#[test]
fn tilt_feedback_does_not_touch_the_wire() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    let tilt = mouse
        .on_acceleration(Acceleration { x: 3.0, y: -4.0 })
        .expect("tilt event");
    assert_eq!((tilt.x, tilt.y), (3.0, -4.0));
    assert!(sent.borrow().is_empty());
}

#[test]
fn oversized_deltas_saturate_on_the_wire() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    // 20 rad/s * 15 = 300 counts, beyond the report range.
    mouse.on_angular_velocity(AngularVelocity {
        pitch: 20.0,
        roll: 0.0,
        yaw: -20.0,
    });

    let sent = sent.borrow();
    assert_eq!(sent[0].as_slice(), &[0x00, 127, 0x81, 0]);
}

#[test]
fn motion_after_disconnect_is_dropped() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    let status = mouse.handle(SessionEvent::ConnectionStateChanged {
        host: None,
        state: ConnectionState::Disconnected,
    });
    assert_eq!(status, Some(SessionStatus::Disconnected));

    // The mapper still reports movement upstream, but nothing reaches
    // the wire without a bound host.
    let delta = mouse.on_angular_velocity(AngularVelocity {
        pitch: 0.0,
        roll: 0.0,
        yaw: -1.0,
    });
    assert!(delta.is_some());
    assert!(sent.borrow().is_empty());
}

#[test]
fn denied_adapter_leaves_a_working_but_silent_facade() {
    let mut mouse: AirMouse<StackProxy> = AirMouse::new();
    let mut adapter = StackAdapter { grant: false };

    let status = mouse.init(&mut adapter);
    assert_eq!(status, Some(SessionStatus::PermissionsMissing));
    assert_eq!(status.unwrap().message().as_str(), "Permissions Missing");
    assert_eq!(mouse.session().state(), DeviceState::Uninitialized);

    // Everything downstream is a silent no-op, never a fault.
    mouse.set_enabled(true);
    mouse.click(true, true);
    assert!(mouse
        .on_angular_velocity(AngularVelocity {
            pitch: 0.0,
            roll: 0.0,
            yaw: -1.0,
        })
        .is_some());
    mouse.cleanup();
}

#[test]
fn full_session_teardown_and_rebind() {
    let (mut mouse, sent) = connected_mouse();
    mouse.set_enabled(true);

    let status = mouse.handle(SessionEvent::ServiceDisconnected);
    assert_eq!(status, Some(SessionStatus::ServiceDisconnected));
    assert_eq!(mouse.session().state(), DeviceState::Uninitialized);

    // A fresh init + bind cycle works on the same facade.
    let mut adapter = StackAdapter { grant: true };
    assert!(mouse.init(&mut adapter).is_none());
    mouse.handle(SessionEvent::ServiceConnected(StackProxy {
        sent: Rc::clone(&sent),
    }));
    mouse.handle(SessionEvent::AppStatusChanged { registered: true });
    mouse.handle(SessionEvent::ConnectionStateChanged {
        host: Some(host()),
        state: ConnectionState::Connected,
    });

    mouse.on_angular_velocity(AngularVelocity {
        pitch: 0.0,
        roll: 0.0,
        yaw: -1.0,
    });
    assert_eq!(sent.borrow().len(), 1);
}

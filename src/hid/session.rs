//! HID device session state machine.
//!
//! Owns profile registration, host binding, and report transmission.
//! All platform callbacks are funneled into one closed event type
//! ([`SessionEvent`]) consumed by a single transition function
//! ([`HidSession::handle`]), so the whole state machine lives in one
//! place instead of being scattered across callback objects.
//!
//! The session tolerates arbitrary interleavings of platform callbacks
//! and caller operations: duplicate or out-of-order events are
//! self-loops, not errors, and the host binding has a single
//! authoritative writer (the transition function). Every externally
//! facing call either completes immediately or no-ops; there are no
//! timeouts, queues, or retries anywhere in this module.

use core::fmt::Write;

use heapless::String;

use crate::error::Error;
use crate::hid::report::{ButtonState, MouseReport, MOUSE_REPORT_SIZE, REPORT_ID};
use crate::hid::{ConnectionState, HostDevice, QosSettings, SdpSettings};

/// Platform adapter seam: acquisition of the HID device profile proxy.
///
/// `request_proxy` models the asynchronous proxy acquisition of the
/// platform stack: on success the proxy itself arrives later through
/// [`SessionEvent::ServiceConnected`]. Loss of permission or of adapter
/// capability manifests here as an error, after which all session
/// operations silently no-op.
pub trait HidAdapter {
    fn request_proxy(&mut self) -> Result<(), Error>;
}

/// Platform profile proxy seam: the registered HID device service.
///
/// All three operations are best-effort toward the stack; the session
/// is the only caller and swallows every error, surfacing state only
/// through status notifications.
pub trait HidDeviceProxy {
    /// Register the HID app with its SDP record and QoS parameters.
    /// The registration result arrives later through
    /// [`SessionEvent::AppStatusChanged`].
    fn register_app(&mut self, sdp: &SdpSettings, qos: &QosSettings) -> Result<(), Error>;

    /// Unregister the HID app.
    fn unregister_app(&mut self) -> Result<(), Error>;

    /// Transmit one input report to the bound host. Fire-and-forget.
    fn send_report(&mut self, host: &HostDevice, report_id: u8, payload: &[u8])
        -> Result<(), Error>;
}

/// Session lifecycle state. Exactly one active instance per process;
/// transitions happen only inside [`HidSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// No proxy requested, or the service went away.
    Uninitialized,
    /// Proxy acquisition requested and granted at the adapter level.
    ProxyBound,
    /// The HID app is registered with the stack.
    AppRegistered,
    /// A host is negotiating a connection.
    Connecting,
    /// A host is bound and reports can flow.
    Connected,
    /// The host went away; still registered, no host bound.
    Disconnected,
}

/// Closed set of platform callbacks driving the state machine.
pub enum SessionEvent<P> {
    /// The profile service bound; carries the live proxy.
    ServiceConnected(P),
    /// The profile service went away; the proxy is dead.
    ServiceDisconnected,
    /// Result of a prior `register_app` call.
    AppStatusChanged { registered: bool },
    /// A host connection changed state.
    ConnectionStateChanged {
        host: Option<HostDevice>,
        state: ConnectionState,
    },
}

/// Human-readable status notification, for display purposes only -
/// never used for control decisions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionStatus {
    ServiceConnected,
    ServiceDisconnected,
    Registered,
    RegistrationFailed,
    Connecting,
    Connected(String<32>),
    Disconnected,
    PermissionsMissing,
}

impl SessionStatus {
    /// The display string for this status.
    pub fn message(&self) -> String<64> {
        let mut s = String::new();
        match self {
            Self::ServiceConnected => {
                let _ = s.push_str("Service Connected");
            }
            Self::ServiceDisconnected => {
                let _ = s.push_str("Service Disconnected");
            }
            Self::Registered => {
                let _ = s.push_str("Registered");
            }
            Self::RegistrationFailed => {
                let _ = s.push_str("Registration Failed");
            }
            Self::Connecting => {
                let _ = s.push_str("Connecting...");
            }
            Self::Connected(name) => {
                let _ = write!(&mut s, "Connected to {}", name.as_str());
            }
            Self::Disconnected => {
                let _ = s.push_str("Disconnected");
            }
            Self::PermissionsMissing => {
                let _ = s.push_str("Permissions Missing");
            }
        }
        s
    }
}

/// The HID device session.
///
/// Exclusive owner of the [`DeviceState`] / [`HostDevice`] pair. Other
/// components only pass derived values (deltas, buttons) in and read
/// immutable snapshots out.
pub struct HidSession<P: HidDeviceProxy> {
    proxy: Option<P>,
    state: DeviceState,
    host: Option<HostDevice>,
    /// Latch suppressing re-entrant `register_app` calls while a prior
    /// registration is still in flight.
    registration_pending: bool,
    sdp: SdpSettings,
    qos: QosSettings,
}

impl<P: HidDeviceProxy> HidSession<P> {
    /// Create an uninitialized session with the fixed mouse SDP/QoS
    /// configuration.
    pub const fn new() -> Self {
        Self {
            proxy: None,
            state: DeviceState::Uninitialized,
            host: None,
            registration_pending: false,
            sdp: SdpSettings::mouse(),
            qos: QosSettings::best_effort(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Immutable snapshot of the bound host, if any.
    pub fn host(&self) -> Option<&HostDevice> {
        self.host.as_ref()
    }

    /// Whether the HID app is currently registered with the stack.
    pub fn is_registered(&self) -> bool {
        !matches!(
            self.state,
            DeviceState::Uninitialized | DeviceState::ProxyBound
        )
    }

    /// Request the profile proxy from the adapter.
    ///
    /// On success the session moves to `ProxyBound` and waits for
    /// [`SessionEvent::ServiceConnected`]. On failure (missing
    /// permission, no HID profile) it stays `Uninitialized` and every
    /// subsequent operation silently no-ops. Calling `init` again after
    /// a successful call is a no-op.
    pub fn init(&mut self, adapter: &mut impl HidAdapter) -> Option<SessionStatus> {
        if self.state != DeviceState::Uninitialized {
            return None;
        }
        match adapter.request_proxy() {
            Ok(()) => {
                debug!("hid profile proxy requested");
                self.state = DeviceState::ProxyBound;
                None
            }
            Err(_) => {
                warn!("hid profile proxy unavailable");
                Some(SessionStatus::PermissionsMissing)
            }
        }
    }

    /// Single transition function consuming platform events.
    ///
    /// Runs inline on the delivering context; never defers work.
    /// Returns the status notification the change warrants, if any.
    pub fn handle(&mut self, event: SessionEvent<P>) -> Option<SessionStatus> {
        match event {
            SessionEvent::ServiceConnected(proxy) => self.on_service_connected(proxy),
            SessionEvent::ServiceDisconnected => self.on_service_disconnected(),
            SessionEvent::AppStatusChanged { registered } => self.on_app_status(registered),
            SessionEvent::ConnectionStateChanged { host, state } => {
                self.on_connection_state(host, state)
            }
        }
    }

    fn on_service_connected(&mut self, mut proxy: P) -> Option<SessionStatus> {
        // Registration happens exactly once per ProxyBound→AppRegistered
        // transition; a duplicate ServiceConnected while one is pending
        // (or after it completed) only refreshes the proxy handle.
        if self.registration_pending || self.is_registered() {
            self.proxy = Some(proxy);
            return None;
        }

        let result = proxy.register_app(&self.sdp, &self.qos);
        self.proxy = Some(proxy);
        match result {
            Ok(()) => {
                self.registration_pending = true;
                info!("hid service connected, app registration requested");
                Some(SessionStatus::ServiceConnected)
            }
            Err(_) => {
                warn!("hid app registration call refused");
                Some(SessionStatus::RegistrationFailed)
            }
        }
    }

    fn on_service_disconnected(&mut self) -> Option<SessionStatus> {
        // The proxy is dead regardless of what sub-state we were in.
        self.proxy = None;
        self.host = None;
        self.registration_pending = false;
        self.state = DeviceState::Uninitialized;
        info!("hid service disconnected");
        Some(SessionStatus::ServiceDisconnected)
    }

    fn on_app_status(&mut self, registered: bool) -> Option<SessionStatus> {
        self.registration_pending = false;
        if registered {
            if !self.is_registered() {
                self.state = DeviceState::AppRegistered;
            }
            info!("hid app registered");
            Some(SessionStatus::Registered)
        } else {
            warn!("hid app registration failed");
            Some(SessionStatus::RegistrationFailed)
        }
    }

    fn on_connection_state(
        &mut self,
        host: Option<HostDevice>,
        state: ConnectionState,
    ) -> Option<SessionStatus> {
        match state {
            ConnectionState::Connecting => {
                self.state = DeviceState::Connecting;
                Some(SessionStatus::Connecting)
            }
            ConnectionState::Connected => {
                let host = host?;
                if let Some(bound) = &self.host {
                    if bound.same_device(&host) {
                        // Duplicate Connected for the host we already
                        // track: self-loop, not an error.
                        return None;
                    }
                }
                info!("host connected");
                let name = host.name.clone();
                self.host = Some(host);
                self.state = DeviceState::Connected;
                Some(SessionStatus::Connected(name))
            }
            ConnectionState::Disconnected => {
                let had_host = self.host.take().is_some();
                if !had_host && self.state == DeviceState::Disconnected {
                    return None;
                }
                if self.is_registered() {
                    self.state = DeviceState::Disconnected;
                }
                info!("host disconnected");
                Some(SessionStatus::Disconnected)
            }
        }
    }

    /// Encode and transmit one movement report with the caller's
    /// current button state.
    ///
    /// Guarded: a silent no-op (`Ok`) while no host is bound or the app
    /// is unregistered. Never blocks, never queues, never retries.
    /// A transmit refusal comes back as [`Error::SendFailed`], which
    /// callers are permitted by policy to discard - the link is
    /// best-effort and dropped reports are an accepted outcome.
    pub fn send_report(&mut self, dx: i32, dy: i32, buttons: &ButtonState) -> Result<(), Error> {
        if !self.is_registered() {
            return Ok(());
        }
        let (Some(proxy), Some(host)) = (self.proxy.as_mut(), self.host.as_ref()) else {
            return Ok(());
        };

        let report = MouseReport::new(buttons.bits(), dx, dy);
        let mut buf = [0u8; MOUSE_REPORT_SIZE];
        let n = report.serialize(&mut buf);
        proxy.send_report(host, REPORT_ID, &buf[..n]).map_err(|e| {
            warn!("mouse report transmit failed");
            e
        })
    }

    /// Tear the session down: unregister the app if registered and
    /// release the proxy if bound.
    ///
    /// Valid from any state; calling it from `Uninitialized`, or
    /// calling it twice, is a no-op, never an error.
    pub fn cleanup(&mut self) {
        let unregister = self.is_registered() || self.registration_pending;
        if let Some(proxy) = self.proxy.as_mut() {
            if unregister {
                let _ = proxy.unregister_app();
            }
        }
        self.proxy = None;
        self.host = None;
        self.registration_pending = false;
        self.state = DeviceState::Uninitialized;
    }
}

impl<P: HidDeviceProxy> Default for HidSession<P> {
    fn default() -> Self {
        Self::new()
    }
}

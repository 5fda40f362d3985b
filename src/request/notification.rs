//! The notification record and its building blocks

mod alert;
mod options;

pub use self::alert::Alert;
pub use self::options::{Priority, PRIORITY_IMMEDIATE, PRIORITY_POWER_CONSERVE};

use crate::error::Error;
use crate::frame::Encoder;
use crate::request::payload::Payload;
use std::time::SystemTime;

/// A push notification for the legacy binary provider interface.
///
/// # Example
///
/// ```rust
/// # use apns_legacy::request::notification::{Alert, Notification, Priority};
/// # use apns_legacy::request::payload::APS;
/// # fn main() {
/// let mut notification = Notification::new()
///     .set_device_token("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
///     .set_identifier(42)
///     .set_priority(Priority::High);
///
/// notification.payload.aps = APS::new()
///     .set_alert(Alert::new().set_body("Ch-check it out!"))
///     .set_sound("default");
///
/// let frame = notification.to_binary().unwrap();
/// assert_eq!(2, frame[0]);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Notification {
    /// Bookkeeping id of the caller, never sent.
    pub id: String,
    /// Hexadecimal string of the device token for the target device.
    pub device_token: String,
    /// Echoed back by the gateway in error responses.
    pub identifier: u32,
    /// When the gateway may discard the notification. `None` is sent as 0.
    pub expiration: Option<SystemTime>,
    /// See [Priority](enum.Priority.html).
    pub priority: u8,
    /// The JSON body, owned by the notification.
    pub payload: Payload,
}

impl Notification {
    /// An empty notification with a fresh payload.
    pub fn new() -> Notification {
        Notification::default()
    }

    pub fn set_id<S>(mut self, id: S) -> Self
    where
        S: Into<String>,
    {
        self.id = id.into();
        self
    }

    pub fn set_device_token<S>(mut self, device_token: S) -> Self
    where
        S: Into<String>,
    {
        self.device_token = device_token.into();
        self
    }

    pub fn set_identifier(mut self, identifier: u32) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn set_expiration(mut self, expiration: SystemTime) -> Self {
        self.expiration = Some(expiration);
        self
    }

    /// Takes a [Priority](enum.Priority.html) or a raw value. Raw values are
    /// sent as they are.
    pub fn set_priority<P>(mut self, priority: P) -> Self
    where
        P: Into<u8>,
    {
        self.priority = priority.into();
        self
    }

    pub fn set_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Encodes the notification into a binary frame with the default
    /// [EncodeOptions](../../frame/struct.EncodeOptions.html).
    pub fn to_binary(&self) -> Result<Vec<u8>, Error> {
        Encoder::default().encode(self)
    }

    /// Like [to_binary](#method.to_binary), but hands the notification back
    /// in a failed [NotificationResult](struct.NotificationResult.html) if it
    /// cannot be encoded.
    pub fn into_frame(self) -> Result<Vec<u8>, NotificationResult> {
        match self.to_binary() {
            Ok(frame) => Ok(frame),
            Err(e) => Err(NotificationResult::failed(self, e)),
        }
    }
}

/// The outcome for a single notification, reported back by whoever sends it.
#[derive(Debug)]
pub struct NotificationResult {
    pub notification: Notification,
    pub error: Option<Error>,
}

impl NotificationResult {
    pub fn new(notification: Notification) -> NotificationResult {
        NotificationResult {
            notification,
            error: None,
        }
    }

    pub fn failed(notification: Notification, error: Error) -> NotificationResult {
        NotificationResult {
            notification,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

//! # apns-legacy
//!
//! Encodes push notifications into the legacy binary provider protocol of
//! Apple Push Notification service, the frame format with command byte 2.
//!
//! The crate does not open connections. The frames it produces are written
//! as they are into a TLS connection to the gateway by the caller, and reading
//! the error responses is also left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use apns_legacy::{Alert, Notification, Priority, APS};
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! let mut notification = Notification::new()
//!     .set_device_token("00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff")
//!     .set_identifier(1)
//!     .set_expiration(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
//!     .set_priority(Priority::High);
//!
//! notification.payload.aps = APS::new()
//!     .set_alert(Alert::new().set_body("Hello"))
//!     .set_badge(0)
//!     .set_sound("default");
//! notification.payload.set_custom_value("acme", &"foo").unwrap();
//!
//! assert_eq!(
//!     "{\"acme\":\"foo\",\"aps\":{\"alert\":{\"body\":\"Hello\"},\"badge\":0,\"sound\":\"default\"}}",
//!     &notification.payload.to_json_string().unwrap()
//! );
//!
//! let frame = notification.to_binary().unwrap();
//! assert_eq!(2, frame[0]);
//! ```
//!
//! ## Tracing
//!
//! With the `tracing` feature the encoder emits spans and events through the
//! [tracing](https://docs.rs/tracing) crate.

#[macro_use]
extern crate serde;

#[cfg(test)]
#[macro_use]
extern crate serde_json;

pub mod error;
pub mod frame;
pub mod request;

pub use crate::error::Error;
pub use crate::frame::{EncodeOptions, Encoder, ItemId};
pub use crate::request::notification::{
    Alert, Notification, NotificationResult, Priority, PRIORITY_IMMEDIATE, PRIORITY_POWER_CONSERVE,
};
pub use crate::request::payload::{Payload, APS};

//! Binary framing of the legacy provider protocol (command 2)
//!
//! A frame is a command byte, a 32-bit length and five items:
//!
//! ```text
//! frame := command:u8(=2) length:u32 item[5]
//! item  := id:u8 length:u16 value
//! ```
//!
//! All integers are big-endian.

use crate::error::Error;
use crate::request::notification::{Notification, NotificationResult};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Command byte of the frame format.
pub const COMMAND: u8 = 2;

/// The size of a decoded device token.
pub const DEVICE_TOKEN_LENGTH: usize = 32;

const FRAME_HEADER_LENGTH: usize = 5;
const ITEM_HEADER_LENGTH: usize = 3;

const IDENTIFIER_LENGTH: usize = 4;
const EXPIRATION_LENGTH: usize = 4;
const PRIORITY_LENGTH: usize = 1;

/// The item ids, in the order they appear in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ItemId {
    DeviceToken = 1,
    Payload = 2,
    Identifier = 3,
    Expiration = 4,
    Priority = 5,
}

/// Settings for the [Encoder](struct.Encoder.html). Nothing is validated by
/// default.
#[derive(Debug, Default, Clone)]
pub struct EncodeOptions {
    /// Reject device tokens that do not decode to exactly 32 bytes.
    pub validate_token_length: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_length_validation(mut self) -> Self {
        self.validate_token_length = true;
        self
    }
}

/// Turns notifications into binary frames.
///
/// ```rust
/// # use apns_legacy::frame::{EncodeOptions, Encoder};
/// # use apns_legacy::request::notification::Notification;
/// # fn main() {
/// let encoder = Encoder::new(EncodeOptions::new().with_token_length_validation());
/// let notification = Notification::new().set_device_token("abcd");
///
/// assert!(encoder.encode(&notification).is_err());
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    pub fn new(options: EncodeOptions) -> Encoder {
        Encoder { options }
    }

    /// Encode one notification into a new frame.
    pub fn encode(&self, notification: &Notification) -> Result<Vec<u8>, Error> {
        let mut frame = Vec::new();
        self.encode_into(notification, &mut frame)?;

        Ok(frame)
    }

    /// Append the frame of one notification to `buf`, returning the number of
    /// bytes written. Nothing is appended if encoding fails.
    #[cfg_attr(
        feature = "tracing",
        ::tracing::instrument(level = "debug", skip_all, fields(identifier = notification.identifier))
    )]
    pub fn encode_into(&self, notification: &Notification, buf: &mut Vec<u8>) -> Result<usize, Error> {
        let items = match self.encode_items(notification) {
            Ok(items) => items,
            Err(e) => {
                #[cfg(feature = "tracing")]
                ::tracing::debug!(error = %e, "notification could not be encoded");

                return Err(e);
            }
        };

        let mut frame = Vec::with_capacity(FRAME_HEADER_LENGTH + items.len());
        frame.write_u8(COMMAND)?;
        // five items, each at most 3 + u16::MAX bytes
        frame.write_u32::<BigEndian>(items.len() as u32)?;
        frame.write_all(&items)?;

        #[cfg(feature = "tracing")]
        ::tracing::trace!(frame_length = frame.len(), "notification encoded");

        buf.extend_from_slice(&frame);

        Ok(frame.len())
    }

    /// Append a frame for every notification that can be encoded. The ones
    /// that fail are returned with their error and leave no bytes in `buf`.
    pub fn encode_all<I>(&self, notifications: I, buf: &mut Vec<u8>) -> Vec<NotificationResult>
    where
        I: IntoIterator<Item = Notification>,
    {
        notifications
            .into_iter()
            .filter_map(|notification| match self.encode_into(&notification, buf) {
                Ok(_) => None,
                Err(e) => Some(NotificationResult::failed(notification, e)),
            })
            .collect()
    }

    fn encode_items(&self, notification: &Notification) -> Result<Vec<u8>, Error> {
        let token = hex_simd::decode_to_vec(&notification.device_token)?;

        if self.options.validate_token_length && token.len() != DEVICE_TOKEN_LENGTH {
            return Err(Error::InvalidTokenLength(token.len()));
        }

        let payload = notification.payload.to_json_vec()?;
        let expiration = expiration_secs(notification.expiration)?;

        let mut items = Vec::with_capacity(
            5 * ITEM_HEADER_LENGTH
                + token.len()
                + payload.len()
                + IDENTIFIER_LENGTH
                + EXPIRATION_LENGTH
                + PRIORITY_LENGTH,
        );

        write_item_header(&mut items, ItemId::DeviceToken, token.len())?;
        items.write_all(&token)?;

        write_item_header(&mut items, ItemId::Payload, payload.len())?;
        items.write_all(&payload)?;

        write_item_header(&mut items, ItemId::Identifier, IDENTIFIER_LENGTH)?;
        items.write_u32::<BigEndian>(notification.identifier)?;

        write_item_header(&mut items, ItemId::Expiration, EXPIRATION_LENGTH)?;
        items.write_u32::<BigEndian>(expiration)?;

        write_item_header(&mut items, ItemId::Priority, PRIORITY_LENGTH)?;
        items.write_u8(notification.priority)?;

        Ok(items)
    }
}

fn write_item_header<W: Write>(writer: &mut W, item: ItemId, len: usize) -> Result<(), Error> {
    if len > u16::MAX as usize {
        return Err(Error::ItemTooLarge { item, len });
    }

    writer.write_u8(item as u8)?;
    writer.write_u16::<BigEndian>(len as u16)?;

    Ok(())
}

/// Unset expirations are sent as zero, same as the epoch itself.
fn expiration_secs(expiration: Option<SystemTime>) -> Result<u32, Error> {
    let Some(expiration) = expiration else {
        return Ok(0);
    };

    let secs = expiration
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::InvalidExpiration)?
        .as_secs();

    u32::try_from(secs).map_err(|_| Error::InvalidExpiration)
}

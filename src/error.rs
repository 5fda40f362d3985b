//! Error and result module

use crate::frame::ItemId;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The device token string could not be decoded as hexadecimal.
    #[error("Device token is not valid hexadecimal: {0}")]
    TokenDecodeError(#[from] hex_simd::Error),

    /// The decoded device token was not 32 bytes long. Only reported when
    /// [EncodeOptions](frame/struct.EncodeOptions.html) asks for it.
    #[error("Device token must be 32 bytes, got {0}")]
    InvalidTokenLength(usize),

    /// Tried to set a custom value under a key the payload reserves for
    /// itself.
    #[error("Cannot assign a custom value to the reserved key `{0}`")]
    ReservedKey(String),

    /// The payload or a custom value could not be serialized to JSON.
    #[error("Error serializing to JSON: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// An item value does not fit into the 16-bit length field of the frame.
    #[error("Frame item {item:?} is {len} bytes, maximum is 65535")]
    ItemTooLarge { item: ItemId, len: usize },

    /// The expiration is before the Unix epoch or past what fits into 32
    /// bits of seconds.
    #[error("Expiration cannot be represented as 32-bit Unix seconds")]
    InvalidExpiration,

    /// Writing into the frame buffer failed.
    #[error("Error writing the frame: {0}")]
    WriteError(#[from] io::Error),
}

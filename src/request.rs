//! The notification record and its JSON payload

pub mod notification;
pub mod payload;

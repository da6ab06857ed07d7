//! Typed Rust client for the Pushover push-notification HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a small client layer orchestrating requests.
//! A client carries session-wide defaults: values set once through
//! [`PushoverClient::set_defaults`] fill in whatever an individual send leaves
//! unset, so scripts can configure credentials a single time.
//!
//! ```rust,no_run
//! use pushover::{
//!     AppToken, DefaultsUpdate, MessageText, PushoverClient, SendMessage, SendOptions, UserKey,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushover::PushoverError> {
//!     let client = PushoverClient::new();
//!     client.set_defaults(
//!         DefaultsUpdate::new()
//!             .token(AppToken::new("...")?)
//!             .user(UserKey::new("...")?),
//!     )?;
//!     let request = SendMessage::new(MessageText::new("hello")?, SendOptions::default());
//!     let _resp = client.send_message(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{PushoverClient, PushoverClientBuilder, PushoverError};
pub use domain::{
    AppToken, CONFIRMATION_PRIORITY, CheckReceipt, DefaultsUpdate, DeviceName, ExpireSeconds,
    MessageResponse, MessageText, MessageTimestamp, MessageTitle, OutboundMessage, Priority,
    PriorityInput, ReceiptId, ReceiptResponse, RetrySeconds, SendMessage, SendOptions,
    SessionDefaults, Sound, Status, SupplementaryUrl, UrlTitle, UserKey, ValidationError,
    from_epoch_seconds, to_epoch_seconds,
};

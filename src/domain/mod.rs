//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod session;
mod time;
mod validation;
mod value;

pub use request::{CONFIRMATION_PRIORITY, CheckReceipt, OutboundMessage, SendMessage, SendOptions};
pub use response::{MessageResponse, ReceiptResponse, Status};
pub use session::{DefaultsUpdate, SessionDefaults};
pub use time::{from_epoch_seconds, to_epoch_seconds};
pub use validation::ValidationError;
pub use value::{
    AppToken, DeviceName, ExpireSeconds, MessageText, MessageTimestamp, MessageTitle, Priority,
    PriorityInput, ReceiptId, RetrySeconds, Sound, SupplementaryUrl, UrlTitle, UserKey,
};

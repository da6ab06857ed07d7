//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod receipt;
mod send_message;

pub use receipt::{decode_receipt_json_response, receipt_url};
pub use send_message::{decode_message_json_response, encode_message_form};

use chrono::NaiveDateTime;

use crate::domain::value::ReceiptId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Top-level outcome reported by Pushover (`status`: 1 is success).
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a message send.
pub struct MessageResponse {
    pub status: Status,
    /// Request id echoed by the service for support inquiries.
    pub request: Option<String>,
    /// Present only when the message was sent with priority 2.
    pub receipt: Option<ReceiptId>,
    /// Remote error descriptions; empty on success.
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Acknowledgement state of an emergency message, reshaped from the receipt
/// endpoint's integer flags and epoch fields.
pub struct ReceiptResponse {
    pub status: Status,
    /// The receipt id that was queried, echoed back.
    pub receipt: ReceiptId,
    pub acknowledged: bool,
    pub acknowledged_at: Option<NaiveDateTime>,
    pub last_delivered_at: Option<NaiveDateTime>,
    pub expired: bool,
    pub expires_at: Option<NaiveDateTime>,
    pub called_back: bool,
    pub called_back_at: Option<NaiveDateTime>,
    /// Remote error descriptions; empty on success.
    pub errors: Vec<String>,
}

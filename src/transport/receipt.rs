use serde::Deserialize;
use url::Url;

use crate::domain::{AppToken, ReceiptId, ReceiptResponse, Status, from_epoch_seconds};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct ReceiptJsonResponse {
    status: i64,
    #[serde(default)]
    acknowledged: i64,
    #[serde(default)]
    acknowledged_at: i64,
    #[serde(default)]
    last_delivered_at: i64,
    #[serde(default)]
    expired: i64,
    #[serde(default)]
    expires_at: i64,
    #[serde(default)]
    called_back: i64,
    #[serde(default)]
    called_back_at: i64,
    #[serde(default)]
    errors: Vec<String>,
}

fn status_from_flag(value: i64) -> Status {
    if value == 1 { Status::Ok } else { Status::Error }
}

/// Build the receipt-status URL: `{endpoint}/{receipt}.json?token={token}`.
pub fn receipt_url(
    endpoint: &str,
    receipt: &ReceiptId,
    token: &AppToken,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!(
        "{}/{}.json",
        endpoint.trim_end_matches('/'),
        receipt.as_str()
    ))?;
    url.query_pairs_mut()
        .append_pair(AppToken::FIELD, token.as_str());
    Ok(url)
}

/// Decode a receipt body, reshaping 1/0 flags into booleans and epoch fields
/// into calendar timestamps. The queried receipt id is echoed into the result.
pub fn decode_receipt_json_response(
    receipt: &ReceiptId,
    json: &str,
) -> Result<ReceiptResponse, TransportError> {
    let parsed: ReceiptJsonResponse = serde_json::from_str(json)?;

    Ok(ReceiptResponse {
        status: status_from_flag(parsed.status),
        receipt: receipt.clone(),
        acknowledged: parsed.acknowledged == 1,
        acknowledged_at: from_epoch_seconds(parsed.acknowledged_at),
        last_delivered_at: from_epoch_seconds(parsed.last_delivered_at),
        expired: parsed.expired == 1,
        expires_at: from_epoch_seconds(parsed.expires_at),
        called_back: parsed.called_back == 1,
        called_back_at: from_epoch_seconds(parsed.called_back_at),
        errors: parsed.errors,
    })
}

use serde::Deserialize;

use crate::domain::{
    AppToken, DeviceName, ExpireSeconds, MessageResponse, MessageText, MessageTimestamp,
    MessageTitle, OutboundMessage, PriorityInput, ReceiptId, RetrySeconds, Sound, Status,
    SupplementaryUrl, UrlTitle, UserKey,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJsonResponse {
    status: i64,
    #[serde(default)]
    request: Option<String>,
    #[serde(default)]
    receipt: Option<String>,
    #[serde(default)]
    errors: Vec<String>,
}

fn status_from_flag(value: i64) -> Status {
    if value == 1 { Status::Ok } else { Status::Error }
}

/// Encode a resolved message as ordered form pairs.
///
/// Absent optional fields are left off the wire entirely. A timestamp whose text
/// does not parse is omitted rather than failing the send.
pub fn encode_message_form(message: &OutboundMessage) -> Vec<(String, String)> {
    let mut params = Vec::<(String, String)>::new();

    params.push((AppToken::FIELD.to_owned(), message.token().as_str().to_owned()));
    params.push((UserKey::FIELD.to_owned(), message.user().as_str().to_owned()));
    params.push((
        MessageText::FIELD.to_owned(),
        message.message().as_str().to_owned(),
    ));

    if let Some(device) = message.device() {
        params.push((DeviceName::FIELD.to_owned(), device.as_str().to_owned()));
    }
    if let Some(title) = message.title() {
        params.push((MessageTitle::FIELD.to_owned(), title.as_str().to_owned()));
    }
    if let Some(sound) = message.sound() {
        params.push((Sound::FIELD.to_owned(), sound.as_str().to_owned()));
    }
    if let Some(url) = message.url() {
        params.push((SupplementaryUrl::FIELD.to_owned(), url.as_str().to_owned()));
    }
    if let Some(url_title) = message.url_title() {
        params.push((UrlTitle::FIELD.to_owned(), url_title.as_str().to_owned()));
    }
    if let Some(priority) = message.priority() {
        params.push((PriorityInput::FIELD.to_owned(), priority.to_string()));
    }
    if let Some(epoch) = message.timestamp().and_then(MessageTimestamp::epoch_seconds) {
        params.push((MessageTimestamp::FIELD.to_owned(), epoch.to_string()));
    }
    if let Some(retry) = message.retry() {
        params.push((RetrySeconds::FIELD.to_owned(), retry.value().to_string()));
    }
    if let Some(expire) = message.expire() {
        params.push((ExpireSeconds::FIELD.to_owned(), expire.value().to_string()));
    }

    params
}

pub fn decode_message_json_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageJsonResponse = serde_json::from_str(json)?;

    Ok(MessageResponse {
        status: status_from_flag(parsed.status),
        request: parsed.request,
        receipt: parsed
            .receipt
            .and_then(|receipt| ReceiptId::new(receipt).ok()),
        errors: parsed.errors,
    })
}

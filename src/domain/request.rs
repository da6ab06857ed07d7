use crate::domain::session::SessionDefaults;
use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AppToken, DeviceName, ExpireSeconds, MessageText, MessageTimestamp, MessageTitle,
    PriorityInput, ReceiptId, RetrySeconds, Sound, SupplementaryUrl, UrlTitle, UserKey,
};

/// Priority code that requires acknowledgement tracking (`retry` + `expire`).
pub const CONFIRMATION_PRIORITY: i32 = 2;

#[derive(Debug, Clone, Default)]
/// Optional per-message parameters for [`SendMessage`].
///
/// `priority`, `device`, `title`, `sound`, `retry`, and `expire` fall back to the
/// session defaults when unset; `url`, `url_title`, and `timestamp` are per-message
/// only.
pub struct SendOptions {
    pub priority: Option<PriorityInput>,
    pub device: Option<DeviceName>,
    pub title: Option<MessageTitle>,
    pub sound: Option<Sound>,
    pub url: Option<SupplementaryUrl>,
    pub url_title: Option<UrlTitle>,
    pub timestamp: Option<MessageTimestamp>,
    pub retry: Option<RetrySeconds>,
    pub expire: Option<ExpireSeconds>,
}

#[derive(Debug, Clone)]
/// A message to deliver, before session defaults have been applied.
pub struct SendMessage {
    message: MessageText,
    token: Option<AppToken>,
    user: Option<UserKey>,
    options: SendOptions,
}

impl SendMessage {
    /// Build a request that takes its credentials from the session defaults.
    pub fn new(message: MessageText, options: SendOptions) -> Self {
        Self {
            message,
            token: None,
            user: None,
            options,
        }
    }

    /// Build a request with explicit credentials, overriding any session defaults.
    pub fn with_credentials(
        message: MessageText,
        token: AppToken,
        user: UserKey,
        options: SendOptions,
    ) -> Self {
        Self {
            message,
            token: Some(token),
            user: Some(user),
            options,
        }
    }

    /// Override the application token for this request only.
    pub fn token(mut self, token: AppToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Override the user key for this request only.
    pub fn user(mut self, user: UserKey) -> Self {
        self.user = Some(user);
        self
    }

    /// The message body.
    pub fn message(&self) -> &MessageText {
        &self.message
    }

    /// The per-message options.
    pub fn options(&self) -> &SendOptions {
        &self.options
    }

    /// Merge this request with a snapshot of the session defaults.
    ///
    /// Call-level values win over defaults. Fails before any I/O when the merged
    /// credentials are missing, the priority does not resolve, or the priority
    /// resolves to [`CONFIRMATION_PRIORITY`] without both `retry` and `expire`.
    pub fn resolve(&self, defaults: &SessionDefaults) -> Result<OutboundMessage, ValidationError> {
        let token = self
            .token
            .clone()
            .or_else(|| defaults.token.clone())
            .ok_or(ValidationError::MissingCredential {
                field: AppToken::FIELD,
            })?;
        let user = self
            .user
            .clone()
            .or_else(|| defaults.user.clone())
            .ok_or(ValidationError::MissingCredential {
                field: UserKey::FIELD,
            })?;

        let priority = self
            .options
            .priority
            .clone()
            .or_else(|| defaults.priority.clone())
            .map(|input| input.resolve())
            .transpose()?;

        let retry = self.options.retry.or(defaults.retry);
        let expire = self.options.expire.or(defaults.expire);

        if priority == Some(CONFIRMATION_PRIORITY) {
            if retry.is_none() {
                return Err(ValidationError::EmergencyParamMissing {
                    field: RetrySeconds::FIELD,
                });
            }
            if expire.is_none() {
                return Err(ValidationError::EmergencyParamMissing {
                    field: ExpireSeconds::FIELD,
                });
            }
        }

        Ok(OutboundMessage {
            token,
            user,
            message: self.message.clone(),
            device: self.options.device.clone().or_else(|| defaults.device.clone()),
            title: self.options.title.clone().or_else(|| defaults.title.clone()),
            sound: self.options.sound.or(defaults.sound),
            url: self.options.url.clone(),
            url_title: self.options.url_title.clone(),
            priority,
            timestamp: self.options.timestamp.clone(),
            retry,
            expire,
        })
    }
}

#[derive(Debug, Clone)]
/// The fully-merged, validated parameter set handed to the transport layer.
///
/// Only [`SendMessage::resolve`] constructs this, so holding one implies the
/// credential and emergency-pairing invariants already passed.
pub struct OutboundMessage {
    token: AppToken,
    user: UserKey,
    message: MessageText,
    device: Option<DeviceName>,
    title: Option<MessageTitle>,
    sound: Option<Sound>,
    url: Option<SupplementaryUrl>,
    url_title: Option<UrlTitle>,
    priority: Option<i32>,
    timestamp: Option<MessageTimestamp>,
    retry: Option<RetrySeconds>,
    expire: Option<ExpireSeconds>,
}

impl OutboundMessage {
    pub fn token(&self) -> &AppToken {
        &self.token
    }

    pub fn user(&self) -> &UserKey {
        &self.user
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn device(&self) -> Option<&DeviceName> {
        self.device.as_ref()
    }

    pub fn title(&self) -> Option<&MessageTitle> {
        self.title.as_ref()
    }

    pub fn sound(&self) -> Option<Sound> {
        self.sound
    }

    pub fn url(&self) -> Option<&SupplementaryUrl> {
        self.url.as_ref()
    }

    pub fn url_title(&self) -> Option<&UrlTitle> {
        self.url_title.as_ref()
    }

    /// The resolved numeric priority code, if any was supplied.
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    pub fn timestamp(&self) -> Option<&MessageTimestamp> {
        self.timestamp.as_ref()
    }

    pub fn retry(&self) -> Option<RetrySeconds> {
        self.retry
    }

    pub fn expire(&self) -> Option<ExpireSeconds> {
        self.expire
    }
}

#[derive(Debug, Clone)]
/// A receipt-status query, before session defaults have been applied.
pub struct CheckReceipt {
    receipt: ReceiptId,
    token: Option<AppToken>,
}

impl CheckReceipt {
    /// Query a receipt using the session default token.
    pub fn new(receipt: ReceiptId) -> Self {
        Self {
            receipt,
            token: None,
        }
    }

    /// Query a receipt with an explicit token.
    pub fn with_token(receipt: ReceiptId, token: AppToken) -> Self {
        Self {
            receipt,
            token: Some(token),
        }
    }

    /// The receipt id being queried.
    pub fn receipt(&self) -> &ReceiptId {
        &self.receipt
    }

    /// Resolve the token from this request or the session defaults.
    pub fn resolve(&self, defaults: &SessionDefaults) -> Result<AppToken, ValidationError> {
        self.token
            .clone()
            .or_else(|| defaults.token.clone())
            .ok_or(ValidationError::MissingCredential {
                field: AppToken::FIELD,
            })
    }
}

use crate::domain::time;
use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pushover application token (`token`).
///
/// Invariant: non-empty after trimming.
pub struct AppToken(String);

impl AppToken {
    /// Form field name used by Pushover (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`AppToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCredential { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pushover user (or group) key (`user`).
///
/// Invariant: non-empty after trimming.
pub struct UserKey(String);

impl UserKey {
    /// Form field name used by Pushover (`user`).
    pub const FIELD: &'static str = "user";

    /// Create a validated [`UserKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCredential { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Form field name used by Pushover (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Target device name (`device`). When absent the message goes to all of the user's devices.
///
/// Invariant: non-empty after trimming.
pub struct DeviceName(String);

impl DeviceName {
    /// Form field name used by Pushover (`device`).
    pub const FIELD: &'static str = "device";

    /// Create a validated [`DeviceName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated device name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message title (`title`). When absent the application's name is shown instead.
///
/// Invariant: non-empty after trimming.
pub struct MessageTitle(String);

impl MessageTitle {
    /// Form field name used by Pushover (`title`).
    pub const FIELD: &'static str = "title";

    /// Create a validated [`MessageTitle`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated title.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Supplementary URL shown with the message (`url`).
///
/// Invariant: non-empty after trimming. The value is forwarded verbatim; Pushover
/// renders it as a link under the message body.
pub struct SupplementaryUrl(String);

impl SupplementaryUrl {
    /// Form field name used by Pushover (`url`).
    pub const FIELD: &'static str = "url";

    /// Create a validated [`SupplementaryUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Link label for the supplementary URL (`url_title`).
///
/// Invariant: non-empty after trimming.
pub struct UrlTitle(String);

impl UrlTitle {
    /// Form field name used by Pushover (`url_title`).
    pub const FIELD: &'static str = "url_title";

    /// Create a validated [`UrlTitle`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated link label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Receipt identifier returned for priority-2 sends (`receipt`).
///
/// Invariant: non-empty after trimming.
pub struct ReceiptId(String);

impl ReceiptId {
    /// Form field name used by Pushover (`receipt`).
    pub const FIELD: &'static str = "receipt";

    /// Create a validated [`ReceiptId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated receipt id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Retry interval in seconds for emergency sends (`retry`).
///
/// Invariant: at least 30. Pushover re-notifies the user at this interval until the
/// message is acknowledged or expires.
pub struct RetrySeconds(u32);

impl RetrySeconds {
    /// Form field name used by Pushover (`retry`).
    pub const FIELD: &'static str = "retry";

    /// Minimum allowed retry interval.
    pub const MIN: u32 = 30;

    /// Create a validated retry interval.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::RetryOutOfRange {
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying second count.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Expiration window in seconds for emergency sends (`expire`).
///
/// Invariant: at most 86400 (24 hours). Pushover stops re-notifying once the window
/// has elapsed.
pub struct ExpireSeconds(u32);

impl ExpireSeconds {
    /// Form field name used by Pushover (`expire`).
    pub const FIELD: &'static str = "expire";

    /// Maximum allowed expiration window.
    pub const MAX: u32 = 86400;

    /// Create a validated expiration window.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::ExpireOutOfRange {
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying second count.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Calendar timestamp attached to a message (`timestamp`).
///
/// The raw text is kept as provided and resolved to epoch seconds only when the
/// message is encoded. Text that does not parse as a calendar date/time resolves to
/// `None` and the field is silently left off the wire; this mirrors the service
/// binding's long-standing behavior and is intentional, not an error path. Use
/// [`MessageTimestamp::epoch_seconds`] up front if you need to know whether the
/// value will be sent.
pub struct MessageTimestamp(String);

impl MessageTimestamp {
    /// Form field name used by Pushover (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    /// Create a timestamp from calendar text.
    ///
    /// Only emptiness is rejected here; parseability is decided at encode time.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the raw calendar text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve the text to whole epoch seconds, or `None` if it does not parse.
    pub fn epoch_seconds(&self) -> Option<i64> {
        time::to_epoch_seconds(&self.0)
    }
}

impl From<chrono::NaiveDateTime> for MessageTimestamp {
    fn from(value: chrono::NaiveDateTime) -> Self {
        Self(value.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Notification sounds supported by Pushover (`sound`).
///
/// The set is closed: values outside it are rejected at construction. `Sound::None`
/// is the literal `none`, which silences the notification.
pub enum Sound {
    Pushover,
    Bike,
    Bugle,
    CashRegister,
    Classical,
    Cosmic,
    Falling,
    Gamelan,
    Incoming,
    Intermission,
    Magic,
    Mechanical,
    PianoBar,
    Siren,
    SpaceAlarm,
    Tugboat,
    Alien,
    Climb,
    Persistent,
    Echo,
    UpDown,
    None,
}

impl Sound {
    /// Form field name used by Pushover (`sound`).
    pub const FIELD: &'static str = "sound";

    /// Every supported sound, in wire-name order.
    pub const ALL: [Self; 22] = [
        Self::Pushover,
        Self::Bike,
        Self::Bugle,
        Self::CashRegister,
        Self::Classical,
        Self::Cosmic,
        Self::Falling,
        Self::Gamelan,
        Self::Incoming,
        Self::Intermission,
        Self::Magic,
        Self::Mechanical,
        Self::PianoBar,
        Self::Siren,
        Self::SpaceAlarm,
        Self::Tugboat,
        Self::Alien,
        Self::Climb,
        Self::Persistent,
        Self::Echo,
        Self::UpDown,
        Self::None,
    ];

    /// Look up a sound by its wire name.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|sound| sound.as_str() == name)
            .ok_or_else(|| ValidationError::InvalidEnumValue {
                field: Self::FIELD,
                input: name.to_owned(),
            })
    }

    /// Wire name of this sound.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pushover => "pushover",
            Self::Bike => "bike",
            Self::Bugle => "bugle",
            Self::CashRegister => "cashregister",
            Self::Classical => "classical",
            Self::Cosmic => "cosmic",
            Self::Falling => "falling",
            Self::Gamelan => "gamelan",
            Self::Incoming => "incoming",
            Self::Intermission => "intermission",
            Self::Magic => "magic",
            Self::Mechanical => "mechanical",
            Self::PianoBar => "pianobar",
            Self::Siren => "siren",
            Self::SpaceAlarm => "spacealarm",
            Self::Tugboat => "tugboat",
            Self::Alien => "alien",
            Self::Climb => "climb",
            Self::Persistent => "persistent",
            Self::Echo => "echo",
            Self::UpDown => "updown",
            Self::None => "none",
        }
    }

    /// Wire names of every supported sound, for caller discovery.
    pub fn names() -> [&'static str; 22] {
        Self::ALL.map(Self::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message urgency (`priority`).
///
/// `Confirmation` (code 2) requires [`RetrySeconds`] and [`ExpireSeconds`] and makes
/// the send return a [`ReceiptId`] for acknowledgement polling.
pub enum Priority {
    Quiet,
    Normal,
    Emergency,
    Confirmation,
}

impl Priority {
    /// Form field name used by Pushover (`priority`).
    pub const FIELD: &'static str = "priority";

    /// Every named priority, in ascending code order.
    pub const ALL: [Self; 4] = [Self::Quiet, Self::Normal, Self::Emergency, Self::Confirmation];

    /// Look up a priority by its canonical name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.name() == name)
    }

    /// Look up a priority by its numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|priority| priority.code() == code)
    }

    /// Canonical name of this priority.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quiet => "Quiet",
            Self::Normal => "Normal",
            Self::Emergency => "Emergency",
            Self::Confirmation => "Confirmation",
        }
    }

    /// Numeric code sent on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::Quiet => -1,
            Self::Normal => 0,
            Self::Emergency => 1,
            Self::Confirmation => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A caller-supplied priority: either a canonical name or a raw numeric code.
///
/// Both shapes go through [`PriorityInput::resolve`], the single place where
/// priority values are checked and mapped to their wire code.
pub enum PriorityInput {
    Named(String),
    Numeric(i32),
}

impl PriorityInput {
    /// Form field name used by Pushover (`priority`).
    pub const FIELD: &'static str = "priority";

    /// Resolve to the numeric wire code.
    ///
    /// Names are matched case-sensitively against the canonical set; numeric codes
    /// must be one of the known codes. Anything else is rejected.
    pub fn resolve(&self) -> Result<i32, ValidationError> {
        match self {
            Self::Named(name) => Priority::from_name(name)
                .map(Priority::code)
                .ok_or_else(|| ValidationError::InvalidEnumValue {
                    field: Self::FIELD,
                    input: name.clone(),
                }),
            Self::Numeric(code) => {
                if Priority::from_code(*code).is_none() {
                    return Err(ValidationError::InvalidEnumValue {
                        field: Self::FIELD,
                        input: code.to_string(),
                    });
                }
                Ok(*code)
            }
        }
    }
}

impl From<Priority> for PriorityInput {
    fn from(value: Priority) -> Self {
        Self::Numeric(value.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let token = AppToken::new("  abc123 ").unwrap();
        assert_eq!(token.as_str(), "abc123");
        assert!(matches!(
            AppToken::new("   "),
            Err(ValidationError::MissingCredential {
                field: AppToken::FIELD
            })
        ));

        let user = UserKey::new(" ukey ").unwrap();
        assert_eq!(user.as_str(), "ukey");
        assert!(matches!(
            UserKey::new(""),
            Err(ValidationError::MissingCredential {
                field: UserKey::FIELD
            })
        ));

        let msg = MessageText::new(" hi ").unwrap();
        assert_eq!(msg.as_str(), " hi ");
        assert!(MessageText::new("  ").is_err());

        let device = DeviceName::new(" phone ").unwrap();
        assert_eq!(device.as_str(), "phone");
        assert!(DeviceName::new("").is_err());

        let title = MessageTitle::new(" Alert ").unwrap();
        assert_eq!(title.as_str(), "Alert");

        let url = SupplementaryUrl::new(" https://example.invalid/x ").unwrap();
        assert_eq!(url.as_str(), "https://example.invalid/x");

        let url_title = UrlTitle::new(" details ").unwrap();
        assert_eq!(url_title.as_str(), "details");

        let receipt = ReceiptId::new(" abc123 ").unwrap();
        assert_eq!(receipt.as_str(), "abc123");
        assert!(ReceiptId::new("  ").is_err());
    }

    #[test]
    fn retry_seconds_enforces_minimum() {
        assert!(RetrySeconds::new(29).is_err());
        assert_eq!(RetrySeconds::new(30).unwrap().value(), 30);
        assert_eq!(RetrySeconds::new(RetrySeconds::MIN).unwrap().value(), 30);
    }

    #[test]
    fn expire_seconds_enforces_maximum() {
        assert_eq!(ExpireSeconds::new(86400).unwrap().value(), 86400);
        assert!(matches!(
            ExpireSeconds::new(86401),
            Err(ValidationError::ExpireOutOfRange {
                max: ExpireSeconds::MAX,
                actual: 86401
            })
        ));
    }

    #[test]
    fn sound_round_trips_every_wire_name() {
        for sound in Sound::ALL {
            assert_eq!(Sound::from_name(sound.as_str()).unwrap(), sound);
        }
        assert!(Sound::names().contains(&"none"));
        assert_eq!(Sound::names().len(), Sound::ALL.len());
    }

    #[test]
    fn sound_rejects_unknown_names() {
        let err = Sound::from_name("kazoo").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidEnumValue {
                field: Sound::FIELD,
                ..
            }
        ));
    }

    #[test]
    fn priority_name_and_code_mapping() {
        assert_eq!(Priority::Quiet.code(), -1);
        assert_eq!(Priority::Normal.code(), 0);
        assert_eq!(Priority::Emergency.code(), 1);
        assert_eq!(Priority::Confirmation.code(), 2);

        assert_eq!(Priority::from_name("Emergency"), Some(Priority::Emergency));
        assert_eq!(Priority::from_name("emergency"), None);
        assert_eq!(Priority::from_code(2), Some(Priority::Confirmation));
        assert_eq!(Priority::from_code(5), None);
    }

    #[test]
    fn priority_input_resolves_names_and_codes() {
        assert_eq!(PriorityInput::Named("Quiet".to_owned()).resolve().unwrap(), -1);
        assert_eq!(PriorityInput::Numeric(0).resolve().unwrap(), 0);
        assert_eq!(PriorityInput::from(Priority::Confirmation).resolve().unwrap(), 2);

        assert!(matches!(
            PriorityInput::Named("quiet".to_owned()).resolve(),
            Err(ValidationError::InvalidEnumValue {
                field: PriorityInput::FIELD,
                ..
            })
        ));
        assert!(PriorityInput::Numeric(3).resolve().is_err());
        assert!(PriorityInput::Numeric(-2).resolve().is_err());
    }

    #[test]
    fn message_timestamp_keeps_raw_text_and_resolves_lazily() {
        let ts = MessageTimestamp::new(" 2024-05-01 12:00:00 ").unwrap();
        assert_eq!(ts.as_str(), "2024-05-01 12:00:00");
        assert!(ts.epoch_seconds().is_some());

        let bad = MessageTimestamp::new("next tuesday-ish").unwrap();
        assert_eq!(bad.epoch_seconds(), None);

        assert!(MessageTimestamp::new("  ").is_err());
    }
}

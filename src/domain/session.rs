//! Session-wide default values applied when a send call omits a parameter.

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    AppToken, DeviceName, ExpireSeconds, MessageTitle, PriorityInput, RetrySeconds, Sound, UserKey,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The eight fallback values a client carries between calls.
///
/// Starts empty; fields are only ever written through [`SessionDefaults::apply`],
/// which merges rather than replaces. A snapshot of this record is taken at the
/// start of every send, so later updates never affect an in-flight call.
pub struct SessionDefaults {
    pub token: Option<AppToken>,
    pub user: Option<UserKey>,
    pub priority: Option<PriorityInput>,
    pub device: Option<DeviceName>,
    pub title: Option<MessageTitle>,
    pub sound: Option<Sound>,
    pub retry: Option<RetrySeconds>,
    pub expire: Option<ExpireSeconds>,
}

impl SessionDefaults {
    /// Merge an update into this record.
    ///
    /// Supplied fields overwrite; absent fields are left untouched, so defaults
    /// can be layered across several calls and are never cleared. The priority
    /// value goes through the same resolution check a send would apply.
    pub fn apply(&mut self, update: DefaultsUpdate) -> Result<(), ValidationError> {
        if let Some(priority) = update.priority.as_ref() {
            priority.resolve()?;
        }

        if update.token.is_some() {
            self.token = update.token;
        }
        if update.user.is_some() {
            self.user = update.user;
        }
        if update.priority.is_some() {
            self.priority = update.priority;
        }
        if update.device.is_some() {
            self.device = update.device;
        }
        if update.title.is_some() {
            self.title = update.title;
        }
        if update.sound.is_some() {
            self.sound = update.sound;
        }
        if update.retry.is_some() {
            self.retry = update.retry;
        }
        if update.expire.is_some() {
            self.expire = update.expire;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// A partial update to [`SessionDefaults`]; unset fields leave the stored value alone.
pub struct DefaultsUpdate {
    token: Option<AppToken>,
    user: Option<UserKey>,
    priority: Option<PriorityInput>,
    device: Option<DeviceName>,
    title: Option<MessageTitle>,
    sound: Option<Sound>,
    retry: Option<RetrySeconds>,
    expire: Option<ExpireSeconds>,
}

impl DefaultsUpdate {
    /// Start an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default application token.
    pub fn token(mut self, token: AppToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Set the default user key.
    pub fn user(mut self, user: UserKey) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the default priority (name or numeric code).
    pub fn priority(mut self, priority: PriorityInput) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the default target device.
    pub fn device(mut self, device: DeviceName) -> Self {
        self.device = Some(device);
        self
    }

    /// Set the default message title.
    pub fn title(mut self, title: MessageTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the default notification sound.
    pub fn sound(mut self, sound: Sound) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Set the default emergency retry interval.
    pub fn retry(mut self, retry: RetrySeconds) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Set the default emergency expiration window.
    pub fn expire(mut self, expire: ExpireSeconds) -> Self {
        self.expire = Some(expire);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_without_clearing() {
        let mut defaults = SessionDefaults::default();

        defaults
            .apply(DefaultsUpdate::new().token(AppToken::new("A").unwrap()))
            .unwrap();
        defaults
            .apply(DefaultsUpdate::new().user(UserKey::new("B").unwrap()))
            .unwrap();

        assert_eq!(defaults.token.as_ref().unwrap().as_str(), "A");
        assert_eq!(defaults.user.as_ref().unwrap().as_str(), "B");
        assert!(defaults.title.is_none());

        defaults
            .apply(DefaultsUpdate::new().title(MessageTitle::new("hi").unwrap()))
            .unwrap();

        assert_eq!(defaults.token.as_ref().unwrap().as_str(), "A");
        assert_eq!(defaults.user.as_ref().unwrap().as_str(), "B");
        assert_eq!(defaults.title.as_ref().unwrap().as_str(), "hi");
    }

    #[test]
    fn apply_overwrites_supplied_fields() {
        let mut defaults = SessionDefaults::default();
        defaults
            .apply(DefaultsUpdate::new().token(AppToken::new("first").unwrap()))
            .unwrap();
        defaults
            .apply(DefaultsUpdate::new().token(AppToken::new("second").unwrap()))
            .unwrap();
        assert_eq!(defaults.token.as_ref().unwrap().as_str(), "second");
    }

    #[test]
    fn apply_validates_priority_before_storing() {
        let mut defaults = SessionDefaults::default();
        let err = defaults
            .apply(DefaultsUpdate::new().priority(PriorityInput::Named("loud".to_owned())))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEnumValue { .. }));
        assert!(defaults.priority.is_none());

        defaults
            .apply(DefaultsUpdate::new().priority(PriorityInput::Named("Emergency".to_owned())))
            .unwrap();
        assert_eq!(defaults.priority.as_ref().unwrap().resolve().unwrap(), 1);
    }
}

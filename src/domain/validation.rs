use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCredential { field: &'static str },
    Empty { field: &'static str },
    InvalidEnumValue { field: &'static str, input: String },
    RetryOutOfRange { min: u32, actual: u32 },
    ExpireOutOfRange { max: u32, actual: u32 },
    EmergencyParamMissing { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential { field } => {
                write!(f, "{field} is required; pass it or set a session default")
            }
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEnumValue { field, input } => {
                let hint = match *field {
                    "sound" => "Sound::names() lists the supported sounds",
                    "priority" => "Priority::ALL lists the known names and codes",
                    _ => "see the matching enumeration accessor",
                };
                write!(f, "unsupported {field} value: {input} ({hint})")
            }
            Self::RetryOutOfRange { min, actual } => {
                write!(f, "retry seconds out of range: {actual} (expected at least {min})")
            }
            Self::ExpireOutOfRange { max, actual } => {
                write!(f, "expire seconds out of range: {actual} (expected at most {max})")
            }
            Self::EmergencyParamMissing { field } => {
                write!(f, "{field} is required when priority resolves to 2")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::MissingCredential { field: "token" };
        assert_eq!(
            err.to_string(),
            "token is required; pass it or set a session default"
        );

        let err = ValidationError::Empty { field: "message" };
        assert_eq!(err.to_string(), "message must not be empty");

        let err = ValidationError::InvalidEnumValue {
            field: "sound",
            input: "kazoo".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported sound value: kazoo (Sound::names() lists the supported sounds)"
        );

        let err = ValidationError::RetryOutOfRange { min: 30, actual: 29 };
        assert_eq!(
            err.to_string(),
            "retry seconds out of range: 29 (expected at least 30)"
        );

        let err = ValidationError::ExpireOutOfRange {
            max: 86400,
            actual: 86401,
        };
        assert_eq!(
            err.to_string(),
            "expire seconds out of range: 86401 (expected at most 86400)"
        );

        let err = ValidationError::EmergencyParamMissing { field: "expire" };
        assert_eq!(
            err.to_string(),
            "expire is required when priority resolves to 2"
        );
    }
}

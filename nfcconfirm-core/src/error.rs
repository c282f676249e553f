use thiserror::Error;

/// Why a fetch produced no record set.
///
/// `Display` is the text the session shows in its error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered 2xx but the body held no usable line. Never retried.
    #[error("The member list is empty.")]
    EmptyRecordSet,

    /// Every attempt failed with a transport error or a non-2xx status.
    #[error("Login failed.")]
    Exhausted { attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid records endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("unsupported endpoint scheme: {0}")]
    UnsupportedScheme(String),

    #[error("max_attempts must be at least 1")]
    NoAttempts,

    #[error("missing configuration value: {0}")]
    Missing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{LOGIN_FAILED, RECORDS_EMPTY};

    #[test]
    fn fetch_error_text_matches_user_messages() {
        assert_eq!(FetchError::EmptyRecordSet.to_string(), RECORDS_EMPTY);
        assert_eq!(FetchError::Exhausted { attempts: 3 }.to_string(), LOGIN_FAILED);
    }
}

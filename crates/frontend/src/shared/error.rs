use thiserror::Error;

/// Fallback text when the API gives no usable `error` field.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

pub const CONNECTION_ERROR: &str = "Could not reach the server. Check your connection.";

/// Everything that can go wrong between a user action and a rendered result.
///
/// Only `Validation` is raised before a request is sent; all other variants are
/// recoverable network failures reported once at the call site.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("could not encode request: {0}")]
    Encode(String),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Text shown to the user in toasts, inline messages and placeholders.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => CONNECTION_ERROR.to_string(),
            ApiError::Encode(_) => GENERIC_ERROR.to_string(),
            ApiError::Http { message, .. }
            | ApiError::Rejected(message)
            | ApiError::Validation(message) => message.clone(),
        }
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> String {
        err.user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".into()).user_message(),
            CONNECTION_ERROR
        );
        assert_eq!(
            ApiError::Http {
                status: 401,
                message: "Wrong email or password".into()
            }
            .user_message(),
            "Wrong email or password"
        );
        assert_eq!(ApiError::Encode("x".into()).user_message(), GENERIC_ERROR);
    }
}

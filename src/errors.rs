use thiserror::Error;

/// Failures talking to the news API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },

    #[error("Request build error: {0}")]
    Serialization(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

fn status_message(status: &u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

/// Failures of the Google sign-in flow; the Display text is what the user sees
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("Missing authorization code")]
    MissingCode,

    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Invalid server response format")]
    InvalidResponse,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not save the session: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_shows_body_text() {
        let err = ApiError::Status { status: 500, body: "server error".to_string() };
        assert_eq!(err.to_string(), "server error");
    }

    #[test]
    fn test_status_error_without_body_shows_code() {
        let err = ApiError::Status { status: 502, body: "  ".to_string() };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::MissingCode.to_string(), "Missing authorization code");
        assert_eq!(AuthError::InvalidResponse.to_string(), "Invalid server response format");
        let wrapped: AuthError = ApiError::Network("Failed to fetch".to_string()).into();
        assert_eq!(wrapped.to_string(), "Network error: Failed to fetch");
    }
}

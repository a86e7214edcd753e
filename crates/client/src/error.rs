use thiserror::Error;

/// Everything that can go wrong between triggering a query and having a
/// decoded payload: transport failure, non-2xx status, undecodable body, or
/// a 2xx body carrying an explicit `error` member.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

impl FetchError {
    /// Message suitable for an inline error state shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(e) if e.is_timeout() => "The request timed out.".to_string(),
            Self::Network(_) => "Could not reach the server.".to_string(),
            Self::Status { status } => {
                format!("The server returned an error (HTTP {}).", status.as_u16())
            }
            Self::Decode(_) => "The server response could not be read.".to_string(),
            Self::Api(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_passed_through() {
        let error = FetchError::Api("empty_text".to_string());
        assert_eq!(error.user_message(), "empty_text");
    }

    #[test]
    fn test_status_message_names_code() {
        let error = FetchError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert!(error.user_message().contains("404"));
    }
}

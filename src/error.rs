use std::path::PathBuf;

use crate::responses::StatusCode;

/// Errors surfaced by the client.
///
/// Configuration variants are only produced while constructing a client.
/// Every other variant is returned to the caller of the failing call and
/// leaves the client usable for subsequent calls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no credentials were discovered, please set {0:?} in your environment")]
    MissingCredentialsVar(&'static str),

    #[error("failed to read credentials file {path:?}: {source}")]
    CredentialsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse credentials file {path:?}: {source}")]
    CredentialsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credentials contain an empty api_key")]
    EmptyApiKey,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("unsupported route {0:?}")]
    UnsupportedRoute(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a non-empty `message`; Display is the message verbatim.
    #[error("{message}")]
    Api {
        code: Option<StatusCode>,
        message: String,
    },
}

impl Error {
    /// Whether this error was raised while resolving configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingCredentialsVar(_)
                | Error::CredentialsRead { .. }
                | Error::CredentialsParse { .. }
                | Error::EmptyApiKey
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = Error::Api {
            code: Some(StatusCode::InvalidApiKey),
            message: "API key is invalid".to_string(),
        };
        assert_eq!(err.to_string(), "API key is invalid");
    }

    #[test]
    fn test_missing_var_mentions_variable() {
        let err = Error::MissingCredentialsVar("YANDEX_API_CREDENTIALS");
        assert!(err.to_string().contains("YANDEX_API_CREDENTIALS"));
        assert!(err.is_config());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = serde_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!err.is_config());
    }

    #[test]
    fn test_transport_is_not_config() {
        assert!(!Error::Transport("connection refused".to_string()).is_config());
        assert!(!Error::UnsupportedRoute("bogus".to_string()).is_config());
    }
}

//! Response bodies returned by the remote service.

use std::fmt;

use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};
use crate::language::Language;

/// Status codes reported in the `code` field of response bodies.
///
/// Used for diagnostics only; callers branch on `message`, not on the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u16")]
pub enum StatusCode {
    Success,
    InvalidApiKey,
    BlockedApiKey,
    DailyLimitExceeded,
    TextTooLong,
    TextCannotBeTranslated,
    DirectionNotSupported,
    Other(u16),
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Success => 200,
            StatusCode::InvalidApiKey => 401,
            StatusCode::BlockedApiKey => 402,
            StatusCode::DailyLimitExceeded => 404,
            StatusCode::TextTooLong => 413,
            StatusCode::TextCannotBeTranslated => 422,
            StatusCode::DirectionNotSupported => 501,
            StatusCode::Other(code) => *code,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatusCode::Success => "operation completed successfully",
            StatusCode::InvalidApiKey => "invalid API key",
            StatusCode::BlockedApiKey => "blocked API key",
            StatusCode::DailyLimitExceeded => "daily limit on translated text exceeded",
            StatusCode::TextTooLong => "maximum text size exceeded",
            StatusCode::TextCannotBeTranslated => "text cannot be translated",
            StatusCode::DirectionNotSupported => "translation direction not supported",
            StatusCode::Other(_) => "unrecognized status",
        }
    }

    pub fn is_success(&self) -> bool {
        *self == StatusCode::Success
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        match code {
            200 => StatusCode::Success,
            401 => StatusCode::InvalidApiKey,
            402 => StatusCode::BlockedApiKey,
            404 => StatusCode::DailyLimitExceeded,
            413 => StatusCode::TextTooLong,
            422 => StatusCode::TextCannotBeTranslated,
            501 => StatusCode::DirectionNotSupported,
            other => StatusCode::Other(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u16(), self.description())
    }
}

/// `getLangs` body: the edge list of permitted directions.
#[derive(Debug, Default, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub dirs: Vec<String>,
    #[serde(default)]
    pub code: Option<StatusCode>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub lang: Option<Language>,
    #[serde(default)]
    pub code: Option<StatusCode>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranslationResponse {
    #[serde(default)]
    pub text: Vec<String>,
    /// Direction the service actually used, e.g. `"en-ru"`.
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub code: Option<StatusCode>,
    #[serde(default)]
    pub message: String,
}

/// Turn a non-empty `message` into [`Error::Api`], logging unexpected codes.
pub(crate) fn check_message(route: &str, code: Option<StatusCode>, message: String) -> Result<()> {
    if let Some(code) = code.filter(|c| !c.is_success()) {
        warn!("{} returned status {}", route, code);
    }
    if message.is_empty() {
        return Ok(());
    }
    Err(Error::Api { code, message })
}

/// Decode a raw body into a typed response.
pub(crate) fn decode<T: for<'de> Deserialize<'de>>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

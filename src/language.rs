//! Language codes and the per-call request payload.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::Format;

/// An opaque language code such as `"en"` or `"ru"`.
///
/// Equality is an exact string match. No case or whitespace normalization
/// is performed, so callers must pass canonical codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    /// Returned by detection when there was no text to inspect.
    pub const UNKNOWN: Language = Language(Cow::Borrowed(""));

    pub fn new(code: impl Into<String>) -> Self {
        Language(Cow::Owned(code.into()))
    }

    pub const fn from_static(code: &'static str) -> Self {
        Language(Cow::Borrowed(code))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::new(code)
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language(Cow::Owned(code))
    }
}

impl Borrow<str> for Language {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Text and direction for a single detect or translate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub text: Vec<String>,
    pub from: Option<Language>,
    pub to: Option<Language>,
    pub format: Format,
}

impl Context {
    pub fn new<I, S>(text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn from(mut self, lang: impl Into<Language>) -> Self {
        self.from = Some(lang.into());
        self
    }

    pub fn to(mut self, lang: impl Into<Language>) -> Self {
        self.to = Some(lang.into());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// `from-to` when both ends are non-empty, otherwise `None`.
    pub fn direction(&self) -> Option<String> {
        match (&self.from, &self.to) {
            (Some(from), Some(to)) if !from.is_unknown() && !to.is_unknown() => {
                Some(format!("{}-{}", from, to))
            }
            _ => None,
        }
    }
}

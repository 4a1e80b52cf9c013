//! Request descriptors and rendering them into request URLs.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::config::DEFAULT_API_VERSION;
use crate::error::{Error, Result};

/// Remote operation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Detect,
    Translate,
    GetLangs,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Detect => "detect",
            Route::Translate => "translate",
            Route::GetLangs => "getLangs",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "detect" => Ok(Route::Detect),
            "translate" => Ok(Route::Translate),
            "getLangs" => Ok(Route::GetLangs),
            other => Err(Error::UnsupportedRoute(other.to_string())),
        }
    }
}

/// Markup of the text being translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Plain => "plain",
            Format::Html => "html",
        }
    }
}

/// Encoding of the response body, selected by the interface path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
}

impl ResponseFormat {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "tr.json",
        }
    }
}

/// Join text segments with `+` and replace every space with `+`.
///
/// `["a b", "c"]` flattens to `"a+b+c"`.
pub fn flatten_text<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("+")
        .replace(' ', "+")
}

/// Everything needed to render one request target. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub route: Route,
    pub api_version: Option<String>,
    pub api_key: String,
    pub response_format: ResponseFormat,
    pub text: Option<String>,
    pub lang: Option<String>,
    pub format: Option<Format>,
}

impl ApiRequest {
    pub fn new(route: Route, api_key: impl Into<String>) -> Self {
        Self {
            route,
            api_version: None,
            api_key: api_key.into(),
            response_format: ResponseFormat::default(),
            text: None,
            lang: None,
            format: None,
        }
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn response_format(mut self, response_format: ResponseFormat) -> Self {
        self.response_format = response_format;
        self
    }

    /// Attach already flattened text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn lang(mut self, direction: Option<String>) -> Self {
        self.lang = direction.filter(|d| !d.is_empty());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    fn version(&self) -> &str {
        match self.api_version.as_deref() {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_API_VERSION,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::InvalidRequest("api key is empty".to_string()));
        }
        match self.route {
            Route::GetLangs => Ok(()),
            Route::Detect | Route::Translate => match self.text.as_deref() {
                Some(text) if !text.is_empty() => Ok(()),
                _ => Err(Error::InvalidRequest(format!(
                    "route {} requires text",
                    self.route
                ))),
            },
        }
    }

    /// Render `<base>/<version>/<interface>/<route>?key=..[&text=..][&lang=..][&format=..]`.
    ///
    /// Pure: the same descriptor and base always render the same URL.
    pub fn render(&self, base_url: &str) -> Result<Url> {
        self.validate()?;

        let mut url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| Error::InvalidRequest(format!("bad base url {:?}: {}", base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidRequest(format!("base url {:?} cannot be a base", base_url))
            })?
            .pop_if_empty()
            .extend([
                self.version(),
                self.response_format.path_segment(),
                self.route.as_str(),
            ]);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", &self.api_key);
            if matches!(self.route, Route::Detect | Route::Translate) {
                if let Some(text) = &self.text {
                    // Spaces serialize as `+`, so the flattened `+` survives on the wire.
                    query.append_pair("text", &text.replace('+', " "));
                }
            }
            if self.route == Route::Translate {
                if let Some(lang) = &self.lang {
                    query.append_pair("lang", lang);
                }
                if let Some(format) = self.format {
                    query.append_pair("format", format.as_str());
                }
            }
        }

        Ok(url)
    }
}

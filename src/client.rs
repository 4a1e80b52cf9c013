use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::api::ApiInvoker;
use crate::config::{ClientConfig, Credentials};
use crate::directory::LanguageDirectory;
use crate::error::Result;
use crate::language::{Context, Language};
use crate::request::{flatten_text, ApiRequest, ResponseFormat, Route};
use crate::responses::{check_message, decode, DetectionResponse, TranslationResponse};

/// Result of a translate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    /// Translated segments, in the order the service returned them.
    pub text: Vec<String>,
    /// Direction reported by the service, e.g. `"en-ru"`.
    pub lang: Option<String>,
}

impl Translation {
    /// True when there was nothing to translate.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Mutable state shared by all callers of one client.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) directory: Option<Arc<LanguageDirectory>>,
    pub(crate) primary_language: Option<Language>,
}

/// Client for the Yandex Translate API.
///
/// Owns its credentials and its own language directory cache. Safe to share
/// between tasks behind an `Arc`; the state lock is never held across a
/// network call.
#[derive(Debug)]
pub struct Client {
    pub(crate) invoker: ApiInvoker,
    credentials: Credentials,
    api_version: String,
    response_format: ResponseFormat,
    state: Mutex<State>,
}

impl Client {
    /// Discover credentials and endpoint settings from the environment.
    pub fn new() -> Result<Self> {
        let credentials = Credentials::discover()?;
        Ok(Self::from_config(ClientConfig::from_env(), credentials))
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::from_config(ClientConfig::default(), credentials)
    }

    pub fn from_config(config: ClientConfig, credentials: Credentials) -> Self {
        info!(
            "Creating Yandex client (base_url={}, api_version={})",
            config.base_url, config.api_version
        );
        Self {
            invoker: ApiInvoker::new(reqwest::Client::new(), config.base_url),
            credentials,
            api_version: config.api_version,
            response_format: config.response_format,
            state: Mutex::new(State::default()),
        }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Set the default language. Not validated against the directory.
    pub fn set_primary_language(&self, lang: impl Into<Language>) {
        self.lock_state().primary_language = Some(lang.into());
    }

    pub fn primary_language(&self) -> Option<Language> {
        self.lock_state().primary_language.clone()
    }

    /// Detect the language of `ctx.text`.
    ///
    /// Text that flattens to nothing returns [`Language::UNKNOWN`] without
    /// calling the service.
    pub async fn detect(&self, ctx: &Context) -> Result<Language> {
        let text = flatten_text(&ctx.text);
        if text.is_empty() {
            debug!("detect: empty text, skipping request");
            return Ok(Language::UNKNOWN);
        }

        let body = self
            .invoker
            .invoke(&self.request(Route::Detect).text(text))
            .await?;
        let response: DetectionResponse = decode(&body)?;
        check_message(Route::Detect.as_str(), response.code, response.message)?;

        Ok(response.lang.unwrap_or(Language::UNKNOWN))
    }

    /// Translate `ctx.text` along `ctx.from`-`ctx.to`.
    ///
    /// Text that flattens to nothing returns an empty [`Translation`] without
    /// calling the service.
    pub async fn translate(&self, ctx: &Context) -> Result<Translation> {
        let text = flatten_text(&ctx.text);
        if text.is_empty() {
            debug!("translate: empty text, skipping request");
            return Ok(Translation::default());
        }

        let request = self
            .request(Route::Translate)
            .text(text)
            .lang(ctx.direction())
            .format(ctx.format);
        let body = self.invoker.invoke(&request).await?;
        let response: TranslationResponse = decode(&body)?;
        check_message(Route::Translate.as_str(), response.code, response.message)?;

        Ok(Translation {
            text: response.text,
            lang: response.lang,
        })
    }

    pub(crate) fn request(&self, route: Route) -> ApiRequest {
        ApiRequest::new(route, self.credentials.api_key.as_str())
            .api_version(self.api_version.as_str())
            .response_format(self.response_format)
    }

    // Fields are only ever assigned whole, so a poisoned lock still holds valid state.
    pub(crate) fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

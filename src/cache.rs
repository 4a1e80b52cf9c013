//! Lazily populated language directory, owned by each [`Client`].
//!
//! The directory is fetched on first use and kept for the lifetime of the
//! client. There is no expiry and no invalidation.
//!
//! The populated check and the store each take the state lock briefly; the
//! fetch in between runs unlocked. Concurrent first callers may therefore each
//! fetch, and the last store wins. Every caller answers its own query from the
//! directory it fetched, so results stay consistent.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::Client;
use crate::directory::LanguageDirectory;
use crate::error::Result;
use crate::request::Route;
use crate::responses::{check_message, decode, LanguagesResponse};

impl Client {
    /// Return the cached directory, fetching it from the service if needed.
    ///
    /// A failed fetch is returned to the caller and leaves the cache empty,
    /// so the next call retries.
    pub async fn fetch_directory(&self) -> Result<Arc<LanguageDirectory>> {
        let cached = self.lock_state().directory.clone();
        if let Some(directory) = cached {
            return Ok(directory);
        }

        debug!("Language directory not cached, fetching");
        let body = self.invoker.invoke(&self.request(Route::GetLangs)).await?;
        let response: LanguagesResponse = decode(&body)?;
        check_message(Route::GetLangs.as_str(), response.code, response.message)?;

        let directory = Arc::new(LanguageDirectory::from_edges(&response.dirs));
        info!(
            "Fetched language directory: {} primaries, {} directions ({} entries received)",
            directory.len(),
            directory.edge_count(),
            response.dirs.len()
        );

        self.lock_state().directory = Some(Arc::clone(&directory));
        Ok(directory)
    }

    /// The cached directory, without fetching.
    pub fn cached_directory(&self) -> Option<Arc<LanguageDirectory>> {
        self.lock_state().directory.clone()
    }

    /// Whether `lang` can be translated from. Fetch failures read as `false`.
    pub async fn is_valid_primary(&self, lang: &str) -> bool {
        self.try_valid_primary(lang).await.unwrap_or_else(|e| {
            warn!("Could not fetch language directory to check {:?}: {}", lang, e);
            false
        })
    }

    /// Whether `from` can be translated into `to`. Fetch failures read as `false`.
    pub async fn is_valid_transition(&self, from: &str, to: &str) -> bool {
        self.try_valid_transition(from, to)
            .await
            .unwrap_or_else(|e| {
                warn!(
                    "Could not fetch language directory to check {:?} -> {:?}: {}",
                    from, to, e
                );
                false
            })
    }

    /// Like [`Client::is_valid_primary`], but surfaces fetch errors.
    pub async fn try_valid_primary(&self, lang: &str) -> Result<bool> {
        Ok(self.fetch_directory().await?.is_primary(lang))
    }

    /// Like [`Client::is_valid_transition`], but surfaces fetch errors.
    pub async fn try_valid_transition(&self, from: &str, to: &str) -> Result<bool> {
        Ok(self.fetch_directory().await?.allows(from, to))
    }
}

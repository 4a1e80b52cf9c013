//! Client for the Yandex Translate API.
//!
//! Detection and translation calls go straight to the service. Validation of
//! language directions is answered from a directory of permitted
//! `from -> to` pairs that each [`Client`] fetches once and keeps.
//!
//! ```rust,ignore
//! use yandex_translate::{Client, Context};
//!
//! let client = Client::new()?;
//! if client.is_valid_transition("en", "ru").await {
//!     let out = client.translate(&Context::new(["good morning"]).from("en").to("ru")).await?;
//!     println!("{:?}", out.text);
//! }
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod language;
pub mod request;
pub mod responses;

pub use client::{Client, Translation};
pub use config::{ClientConfig, Credentials};
pub use directory::LanguageDirectory;
pub use error::{Error, Result};
pub use language::{Context, Language};
pub use request::{Format, Route};
pub use responses::StatusCode;

//! REST adapters for the Doudou backend.
//!
//! Adapters return `Result<T, NetworkError>`; pages recover explicitly with
//! [`FallbackExt::or_fallback`], which records whether the value came from the
//! backend or from local data.

pub mod backend;
pub mod config;
pub mod error;
pub mod fallback;
pub mod http;
pub mod wire;

pub use backend::{AdminBackend, CatalogBackend};
pub use config::ApiConfig;
pub use error::NetworkError;
pub use fallback::{FallbackExt, Sourced};
pub use http::HttpBackend;
pub use wire::{AdminUser, AuthGrant};

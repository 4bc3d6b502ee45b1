//! Doudou storefront and back-office application layer.
//!
//! Page controllers, session stores (cart, locale, theme, admin session), their
//! key-value persistence, the client routes and application bootstrap.

pub mod app;
pub mod cart;
pub mod config;
pub mod locale;
pub mod pages;
pub mod routes;
pub mod session;
pub mod store;
pub mod theme;

pub use app::App;
pub use cart::{Cart, CartItem};
pub use config::AppConfig;
pub use locale::{Language, Locale, Translations};
pub use routes::{AdminPage, Route};
pub use session::{AdminSession, LoginError};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use theme::Theme;

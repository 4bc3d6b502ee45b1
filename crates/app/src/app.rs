//! Application state: configuration, the backend client and every session store.

use anyhow::Context;
use tracing::info;

use doudou_admin::AdminStore;
use doudou_client::HttpBackend;

use crate::cart::Cart;
use crate::config::AppConfig;
use crate::locale::{Locale, Translations};
use crate::routes::Route;
use crate::session::AdminSession;
use crate::store::KeyValueStore;
use crate::theme::Theme;

#[derive(Debug)]
pub struct App<S> {
    pub config: AppConfig,
    pub backend: HttpBackend,
    pub store: S,
    pub cart: Cart,
    pub locale: Locale,
    pub theme: Theme,
    pub session: AdminSession,
    pub admin: AdminStore,
}

impl<S: KeyValueStore> App<S> {
    /// Restore every store from `store` and build the backend client.
    pub fn bootstrap(config: AppConfig, mut store: S) -> anyhow::Result<Self> {
        let session = AdminSession::restore(&mut store).context("restoring admin session")?;
        let cart = Cart::restore(&store);
        let locale = Locale::restore(&store, Translations::builtin());
        let theme = Theme::restore(&store);
        let backend = HttpBackend::new(config.api.clone());

        info!(
            api = config.api.base_url(),
            language = locale.language().code(),
            cart_items = cart.total_items(),
            admin = session.is_authenticated(),
            "application state restored"
        );

        Ok(Self {
            config,
            backend,
            store,
            cart,
            locale,
            theme,
            session,
            admin: AdminStore::with_mock_data(),
        })
    }

    /// The page to show for `target`, after the admin guard.
    pub fn resolve(&self, target: &str) -> Option<Route> {
        Route::parse(target).map(|route| route.guard(&self.session))
    }

    /// Persist cart, language and theme.
    pub fn save(&mut self) -> anyhow::Result<()> {
        self.cart.save(&mut self.store).context("saving cart")?;
        self.locale.save(&mut self.store).context("saving language")?;
        self.theme.save(&mut self.store).context("saving theme")?;
        Ok(())
    }
}

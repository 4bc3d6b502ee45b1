use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{load_json, save_json, KeyValueStore, StoreResult};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        load_json(store, THEME_KEY)
            .unwrap_or_else(|error| {
                warn!(%error, "ignoring stored theme");
                None
            })
            .unwrap_or_default()
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &mut S) -> StoreResult<()> {
        save_json(store, THEME_KEY, &self)
    }
}

//! Active language and translation lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use doudou_catalog::DisplayText;

use crate::store::{load_json, save_json, KeyValueStore, StoreResult};

pub const LANGUAGE_KEY: &str = "language";

const BUILTIN: &str = include_str!("../locales/builtin.json");

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ro,
    Ru,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ro, Language::Ru, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ro => "ro",
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct Entry {
    ro: Option<String>,
    ru: Option<String>,
    en: Option<String>,
}

impl Entry {
    fn get(&self, language: Language) -> Option<&str> {
        match language {
            Language::Ro => self.ro.as_deref(),
            Language::Ru => self.ru.as_deref(),
            Language::En => self.en.as_deref(),
        }
    }
}

/// `key -> {ro, ru, en}` translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, Entry>,
}

impl Translations {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN).unwrap_or_else(|error| {
            warn!(%error, "built-in translation table is unreadable");
            Self::default()
        })
    }

    /// Entries from `other` replace entries with the same key.
    pub fn merge(mut self, other: Translations) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|e| e.get(language))
    }
}

#[derive(Debug, Clone)]
pub struct Locale {
    language: Language,
    translations: Translations,
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(Language::default(), Translations::builtin())
    }
}

impl Locale {
    pub fn new(language: Language, translations: Translations) -> Self {
        Self { language, translations }
    }

    /// Stored language, or the default when nothing usable is stored.
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S, translations: Translations) -> Self {
        let language = load_json::<Language, _>(store, LANGUAGE_KEY).unwrap_or_else(|error| {
            warn!(%error, "ignoring stored language");
            None
        });
        Self::new(language.unwrap_or_default(), translations)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> StoreResult<()> {
        save_json(store, LANGUAGE_KEY, &self.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Translation of `key` in the active language, or `key` itself.
    pub fn t(&self, key: &str) -> String {
        self.translations
            .lookup(self.language, key)
            .unwrap_or(key)
            .to_string()
    }

    pub fn text(&self, text: &DisplayText) -> String {
        text.resolve(|key| self.t(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn builtin_covers_option_labels() {
        let table = Translations::builtin();
        assert!(!table.is_empty());
        assert_eq!(table.lookup(Language::En, "age.0-6"), Some("0-6 months"));
        assert_eq!(table.lookup(Language::Ro, "color.roz"), Some("Roz"));
        assert!(table.lookup(Language::Ru, "cart.title").is_some());
    }

    #[test]
    fn missing_key_falls_back_to_the_key() {
        let locale = Locale::default();
        assert_eq!(locale.t("nope.missing"), "nope.missing");
    }

    #[test]
    fn partial_entries_fall_back_per_language() {
        let raw = r#"{"greeting": {"ro": "Salut", "en": "Hi"}}"#;
        let table = Translations::from_json(raw).unwrap();
        let mut locale = Locale::new(Language::Ru, table);
        assert_eq!(locale.t("greeting"), "greeting");
        locale.set_language(Language::En);
        assert_eq!(locale.t("greeting"), "Hi");
    }

    #[test]
    fn display_text_resolves_keys_only() {
        let locale = Locale::new(Language::En, Translations::builtin());
        assert_eq!(locale.text(&DisplayText::key("common.sale")), locale.t("common.sale"));
        assert_eq!(locale.text(&DisplayText::literal("common.sale")), "common.sale");
    }

    #[test]
    fn merge_overrides_builtin() {
        let custom = Translations::from_json(r#"{"age.0-6": {"en": "Newborn"}}"#).unwrap();
        let table = Translations::builtin().merge(custom);
        assert_eq!(table.lookup(Language::En, "age.0-6"), Some("Newborn"));
    }

    #[test]
    fn language_persists_on_save() {
        let mut store = MemoryStore::new();
        assert_eq!(Locale::restore(&store, Translations::default()).language(), Language::Ro);

        let mut locale = Locale::restore(&store, Translations::default());
        locale.set_language(Language::Ru);
        locale.save(&mut store).unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("\"ru\""));
        assert_eq!(Locale::restore(&store, Translations::default()).language(), Language::Ru);

        store.set(LANGUAGE_KEY, "\"de\"".to_string()).unwrap();
        assert_eq!(Locale::restore(&store, Translations::default()).language(), Language::Ro);
    }
}

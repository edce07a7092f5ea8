//! Translation catalog for spoken feedback
//!
//! Ships with French and English tables; French is the fallback locale.

use std::collections::HashMap;
use std::sync::RwLock;

use shared::{Component, component_info, component_warn};

use crate::error::{ConferenceError, ConferenceResult};
use crate::traits::Translator;

pub const FALLBACK_LOCALE: &str = "fr";

const BUNDLED: [(&str, &str); 2] = [
    ("fr", include_str!("../../locales/fr.json")),
    ("en", include_str!("../../locales/en.json")),
];

/// In-memory translation tables keyed by locale
pub struct LocaleCatalog {
    tables: HashMap<String, HashMap<String, String>>,
    locale: RwLock<String>,
}

impl LocaleCatalog {
    /// Catalog with the bundled tables, set to the fallback locale
    pub fn bundled() -> ConferenceResult<Self> {
        let mut catalog = Self::empty();
        for (lang, raw) in BUNDLED {
            catalog.add_table(lang, raw)?;
        }
        Ok(catalog)
    }

    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
            locale: RwLock::new(FALLBACK_LOCALE.to_string()),
        }
    }

    /// Add or replace the table for `lang` from a flat JSON object
    pub fn add_table(&mut self, lang: &str, raw: &str) -> ConferenceResult<()> {
        let table: HashMap<String, String> = serde_json::from_str(raw)?;
        self.tables.insert(lang.to_string(), table);
        Ok(())
    }

    pub fn has_locale(&self, lang: &str) -> bool {
        self.tables.contains_key(lang)
    }

    /// Switch the active locale; unknown locales leave it unchanged
    pub fn change_locale(&self, lang: &str) -> ConferenceResult<()> {
        if !self.has_locale(lang) {
            component_warn!(Component::Conference, "Locale {} not available, keeping {}", lang, self.locale());
            return Err(ConferenceError::UnknownLocale { lang: lang.to_string() });
        }

        let mut locale = self.locale.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *locale = lang.to_string();
        component_info!(Component::Conference, "🌐 Locale set to {}", lang);
        Ok(())
    }
}

impl Translator for LocaleCatalog {
    fn translate(&self, key: &str) -> Option<String> {
        let locale = self.locale();
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .or_else(|| self.tables.get(FALLBACK_LOCALE).and_then(|table| table.get(key)))
            .cloned()
    }

    fn locale(&self) -> String {
        self.locale.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

//! Multi-locale field storage and resolution
//!
//! Every localized attribute of a submission is a [`LocalizedMap`] keyed by
//! locale code. [`resolve_localized`] picks the value a reader should see:
//! the preferred locale first, then the record's own locale, then whatever
//! locale happens to carry data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A locale code such as `en_US` or `fr_CA`. Not validated.
pub type Locale = String;

/// Values that count as "no data" when blank.
///
/// Blank values are stored as written but skipped by the resolver.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for u32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl Blank for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

/// Per-locale values of a single logical field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedMap<T> {
    values: BTreeMap<Locale, T>,
}

impl<T> Default for LocalizedMap<T> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<T> LocalizedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored for exactly this locale
    pub fn get(&self, locale: &str) -> Option<&T> {
        self.values.get(locale)
    }

    /// Store a value for a locale, replacing any previous one
    pub fn set(&mut self, locale: impl Into<Locale>, value: T) {
        self.values.insert(locale.into(), value);
    }

    pub fn remove(&mut self, locale: &str) -> Option<T> {
        self.values.remove(locale)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Locales that have an entry, blank or not
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(locale, value)| (locale.as_str(), value))
    }
}

impl<T, L: Into<Locale>> FromIterator<(L, T)> for LocalizedMap<T> {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(locale, value)| (locale.into(), value))
                .collect(),
        }
    }
}

/// Source of the locale a caller is currently working in
pub trait LocaleProvider {
    fn active_locale(&self) -> Locale;
}

/// A provider that always answers with the same locale
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedLocale(pub Locale);

impl FixedLocale {
    pub fn new(locale: impl Into<Locale>) -> Self {
        Self(locale.into())
    }
}

impl LocaleProvider for FixedLocale {
    fn active_locale(&self) -> Locale {
        self.0.clone()
    }
}

/// Pick the best available value of a localized field.
///
/// Order: `preferred`, then `record_locale`, then the first non-blank value in
/// the map. Empty locale codes are skipped. The fallback locale is whichever
/// the map yields first; callers must not rely on which one that is.
pub fn resolve_localized<'a, T: Blank>(
    field: &'a LocalizedMap<T>,
    preferred: &str,
    record_locale: Option<&str>,
) -> Option<&'a T> {
    let precedence = [Some(preferred), record_locale];
    for locale in precedence.into_iter().flatten() {
        if locale.is_empty() {
            continue;
        }
        if let Some(value) = field.get(locale) {
            if !value.is_blank() {
                return Some(value);
            }
        }
    }

    let (locale, value) = field.iter().find(|(_, value)| !value.is_blank())?;
    tracing::debug!(
        preferred,
        fallback = locale,
        "no value in preferred or record locale, using fallback"
    );
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(entries: &[(&str, &str)]) -> LocalizedMap<String> {
        entries
            .iter()
            .map(|(locale, value)| (*locale, value.to_string()))
            .collect()
    }

    #[test]
    fn test_preferred_locale_wins() {
        let field = titles(&[("en_US", "Study"), ("fr_CA", "Étude")]);
        let value = resolve_localized(&field, "fr_CA", Some("en_US"));
        assert_eq!(value.map(String::as_str), Some("Étude"));
    }

    #[test]
    fn test_record_locale_used_when_preferred_missing() {
        let field = titles(&[("en_US", "Study"), ("fr_CA", "Étude")]);
        let value = resolve_localized(&field, "de_DE", Some("fr_CA"));
        assert_eq!(value.map(String::as_str), Some("Étude"));
    }

    #[test]
    fn test_blank_preferred_is_skipped() {
        let field = titles(&[("en_US", ""), ("fr_CA", "Étude")]);
        let value = resolve_localized(&field, "en_US", Some("fr_CA"));
        assert_eq!(value.map(String::as_str), Some("Étude"));
    }

    #[test]
    fn test_empty_locale_codes_are_skipped() {
        let field = titles(&[("", "Keyless"), ("en_US", "Study")]);
        let value = resolve_localized(&field, "", Some(""));
        // Falls through to the fallback, which may pick either populated entry
        assert!(value.is_some());
    }

    #[test]
    fn test_fallback_to_any_populated_locale() {
        let field = titles(&[("de_DE", ""), ("es_ES", "Estudio")]);
        let value = resolve_localized(&field, "en_US", Some("fr_CA"));
        assert_eq!(value.map(String::as_str), Some("Estudio"));
    }

    #[test]
    fn test_all_blank_yields_none() {
        let field = titles(&[("en_US", ""), ("fr_CA", "")]);
        assert!(resolve_localized(&field, "en_US", Some("fr_CA")).is_none());
        assert!(resolve_localized(&LocalizedMap::<String>::new(), "en_US", None).is_none());
    }

    #[test]
    fn test_blank_numbers_and_flags() {
        let mut width = LocalizedMap::new();
        width.set("en_US", 0u32);
        width.set("fr_CA", 640u32);
        assert_eq!(resolve_localized(&width, "en_US", None), Some(&640));

        let mut shown = LocalizedMap::new();
        shown.set("en_US", false);
        assert!(resolve_localized(&shown, "en_US", None).is_none());
    }

    #[test]
    fn test_map_set_replaces() {
        let mut field = LocalizedMap::new();
        field.set("en_US", "One".to_string());
        field.set("en_US", "Two".to_string());
        assert_eq!(field.len(), 1);
        assert_eq!(field.get("en_US").map(String::as_str), Some("Two"));
        assert_eq!(field.remove("en_US").as_deref(), Some("Two"));
        assert!(field.is_empty());
    }

    #[test]
    fn test_fixed_locale_provider() {
        let provider = FixedLocale::new("pt_BR");
        assert_eq!(provider.active_locale(), "pt_BR");
    }
}

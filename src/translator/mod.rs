//! Translator backend contract.
//!
//! The facade delegates every lookup to a [`Translator`]. Backends answer
//! with a tagged [`Lookup`] rather than in-band sentinel strings; the raw
//! catalog convention (`"="`, `"+"`, empty) is decoded once at the edge by
//! [`Lookup::from_raw`].

pub mod memory;

use crate::domain::TextDomain;
use crate::error::TranslatorError;

/// Raw catalog value meaning "keep the caller's original text".
const USE_ORIGINAL_SENTINEL: &str = "=";

/// Raw catalog value meaning "consult the shared translation file".
const USE_COMMON_SENTINEL: &str = "+";

/// Outcome of a single catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// A real translation, subject to HTML-attribute escaping.
    Translated(String),
    /// Keep the caller's original text, unescaped.
    UseOriginal,
    /// Fall back to the shared translation for the same text.
    UseCommon,
    /// No entry for this text.
    Missing,
}

impl Lookup {
    /// Decodes a raw catalog value.
    ///
    /// Catalogs reserve `"="` (keep the original) and `"+"` (consult the
    /// shared file) as control values; an empty value means the entry is
    /// missing.
    #[must_use]
    pub fn from_raw(value: &str) -> Self {
        match value {
            "" => Self::Missing,
            USE_ORIGINAL_SENTINEL => Self::UseOriginal,
            USE_COMMON_SENTINEL => Self::UseCommon,
            translated => Self::Translated(translated.to_string()),
        }
    }
}

/// Lookup backend consulted by the facade.
///
/// Implementations are expected to be read-mostly and cheap to call; the
/// facade performs no caching of its own, and it swallows backend errors
/// rather than surfacing them to callers.
pub trait Translator {
    /// Looks up `text` within `domain`, disambiguated by `context`.
    /// An empty `context` means no context.
    fn get_translation(
        &self,
        domain: &TextDomain,
        text: &str,
        context: &str,
    ) -> Result<Lookup, TranslatorError>;

    /// Looks up `text` in the shared translation file.
    fn common_translation(&self, text: &str) -> Result<Option<String>, TranslatorError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("", Lookup::Missing)]
    #[case("=", Lookup::UseOriginal)]
    #[case("+", Lookup::UseCommon)]
    #[case("Bonjour", Lookup::Translated("Bonjour".to_string()))]
    // Sentinels are exact matches, not prefixes.
    #[case("==", Lookup::Translated("==".to_string()))]
    #[case("+1", Lookup::Translated("+1".to_string()))]
    #[case(" = ", Lookup::Translated(" = ".to_string()))]
    fn test_from_raw(#[case] raw: &str, #[case] expected: Lookup) {
        assert_eq!(Lookup::from_raw(raw), expected);
    }
}

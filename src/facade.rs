//! The translation facade.
//!
//! Three entry points funnel into one resolution routine: look the text up
//! in the caller's textdomain, then post-process the outcome (escaping or
//! the original/shared-text fallbacks). Nothing here is ever fatal: every
//! unmet precondition and every backend failure degrades to returning the
//! caller's original text, so page rendering never breaks over a missing
//! translation.

use std::borrow::Cow;

use serde::{
    Deserialize,
    Serialize,
};

use crate::domain::TextDomain;
use crate::escape::escape_attribute;
use crate::translator::{
    Lookup,
    Translator,
};

/// An active language selection, typically the current user's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Numeric language id; `0` is the default/unset language.
    pub id: u32,
    /// Language code, e.g. `"en"` or `"fr-FR"`.
    pub code: String,
}

impl Language {
    /// Creates a language selection.
    #[must_use]
    pub fn new(id: u32, code: impl Into<String>) -> Self {
        Self { id, code: code.into() }
    }

    /// Returns true for the default/unset language, for which no lookups
    /// are performed.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.id == 0
    }
}

/// Explicit translation context threaded through calls.
///
/// Carries the active language and the translator backend as a value
/// instead of process-wide state. The three passthrough preconditions map
/// onto its fields: translator absent (subsystem not configured), language
/// absent (the user has none assigned), and the default language.
#[derive(Debug)]
pub struct LanguageContext<T> {
    /// The assigned language, if any.
    language: Option<Language>,
    /// The lookup backend, if configured.
    translator: Option<T>,
}

impl<T: Translator> LanguageContext<T> {
    /// Creates a fully configured context.
    #[must_use]
    pub const fn new(language: Language, translator: T) -> Self {
        Self { language: Some(language), translator: Some(translator) }
    }

    /// A context with no translation subsystem; every call passes the
    /// original text through.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { language: None, translator: None }
    }

    /// A configured context for a user with no assigned language.
    #[must_use]
    pub const fn without_language(translator: T) -> Self {
        Self { language: None, translator: Some(translator) }
    }

    /// The assigned language, if any.
    #[must_use]
    pub const fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Translates `text` within `domain`.
    ///
    /// A missing `domain` falls back to [`TextDomain::Site`]; callers that
    /// want their own source file as the domain go through
    /// [`tr!`](crate::tr!) instead.
    #[must_use]
    pub fn translate<'a>(&self, text: &'a str, domain: Option<&TextDomain>) -> Cow<'a, str> {
        self.resolve(text, "", domain)
    }

    /// Translates `text` disambiguated by `context`.
    ///
    /// Parameter reordering only; funnels into the same resolution routine
    /// as [`Self::translate`].
    #[must_use]
    pub fn translate_with_context<'a>(
        &self,
        text: &'a str,
        context: &str,
        domain: Option<&TextDomain>,
    ) -> Cow<'a, str> {
        self.resolve(text, context, domain)
    }

    /// Selects `singular` when `count == 1`, otherwise `plural`, and
    /// translates the chosen form with no context.
    ///
    /// `count` is not otherwise validated; negative counts select the
    /// plural form.
    #[must_use]
    pub fn translate_plural<'a>(
        &self,
        singular: &'a str,
        plural: &'a str,
        count: i64,
        domain: Option<&TextDomain>,
    ) -> Cow<'a, str> {
        let chosen = if count == 1 { singular } else { plural };
        self.resolve(chosen, "", domain)
    }

    /// The single resolution routine behind all three entry points.
    fn resolve<'a>(
        &self,
        text: &'a str,
        context: &str,
        domain: Option<&TextDomain>,
    ) -> Cow<'a, str> {
        let Some(translator) = self.active_translator() else {
            return Cow::Borrowed(text);
        };

        let site = TextDomain::Site;
        let domain = domain.unwrap_or(&site);

        let lookup = match translator.get_translation(domain, text, context) {
            Ok(lookup) => lookup,
            Err(err) => {
                tracing::warn!(domain = %domain, %err, "Translation lookup failed");
                return Cow::Borrowed(text);
            }
        };

        match lookup {
            Lookup::Translated(value) => Cow::Owned(escape_attribute(&value).into_owned()),
            // Fallback paths return the text/common value unescaped.
            Lookup::UseOriginal => Cow::Borrowed(text),
            Lookup::UseCommon => self.common_fallback(translator, text),
            Lookup::Missing => {
                tracing::trace!(domain = %domain, "No translation entry");
                Cow::Borrowed(text)
            }
        }
    }

    /// Resolves the shared translation for `text`, keeping the original
    /// when the shared file has nothing either.
    fn common_fallback<'a>(&self, translator: &T, text: &'a str) -> Cow<'a, str> {
        match translator.common_translation(text) {
            Ok(Some(common)) => Cow::Owned(common),
            Ok(None) => Cow::Borrowed(text),
            Err(err) => {
                tracing::warn!(%err, "Shared translation lookup failed");
                Cow::Borrowed(text)
            }
        }
    }

    /// Returns the backend only when every lookup precondition holds.
    fn active_translator(&self) -> Option<&T> {
        let Some(translator) = self.translator.as_ref() else {
            tracing::trace!("Translation subsystem not configured");
            return None;
        };
        let Some(language) = self.language.as_ref() else {
            tracing::trace!("No language assigned");
            return None;
        };
        if language.is_default() {
            tracing::trace!(language = %language.code, "Default language, lookups skipped");
            return None;
        }
        Some(translator)
    }
}

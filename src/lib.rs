//! i18n-textdomain
//!
//! A textdomain-resolving translation facade. The three entry points
//! ([`LanguageContext::translate`], [`LanguageContext::translate_with_context`]
//! and [`LanguageContext::translate_plural`]) resolve the calling code's
//! textdomain, delegate to a [`Translator`] backend, and post-process the
//! result: HTML-attribute escaping for real translations, unescaped
//! original-text and shared-translation fallbacks otherwise.
//!
//! The [`tr!`], [`tr_x!`] and [`tr_n!`] macros capture the caller's source
//! file as its textdomain at compile time.

pub mod domain;
pub mod error;
pub mod escape;
pub mod facade;
mod macros;
pub mod translator;

pub use domain::TextDomain;
pub use error::TranslatorError;
pub use facade::{
    Language,
    LanguageContext,
};
pub use translator::memory::MemoryTranslator;
pub use translator::{
    Lookup,
    Translator,
};

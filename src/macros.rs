//! Caller-side convenience macros.
//!
//! These mirror the classic `__` / `_x` / `_n` entry points: the caller's
//! textdomain is resolved at compile time from `file!()` instead of
//! inspecting the call stack at runtime.

/// Expands to the invoking source file's [`TextDomain`](crate::TextDomain).
#[macro_export]
macro_rules! textdomain {
    () => {
        $crate::TextDomain::from_file(file!())
    };
}

/// Translates `text`, defaulting the textdomain to the caller's file.
///
/// ```
/// # use i18n_textdomain::{tr, LanguageContext, MemoryTranslator, TextDomain};
/// # let ctx = LanguageContext::<MemoryTranslator>::disabled();
/// let label = tr!(ctx, "Save");
/// assert_eq!(label, "Save");
/// let label = tr!(ctx, "Save", TextDomain::Site);
/// assert_eq!(label, "Save");
/// ```
#[macro_export]
macro_rules! tr {
    ($ctx:expr, $text:expr) => {
        $ctx.translate($text, Some(&$crate::textdomain!()))
    };
    ($ctx:expr, $text:expr, $domain:expr) => {
        $ctx.translate($text, Some(&$domain))
    };
}

/// Context-disambiguated translation: `tr_x!(ctx, "May", "month")`.
#[macro_export]
macro_rules! tr_x {
    ($ctx:expr, $text:expr, $context:expr) => {
        $ctx.translate_with_context($text, $context, Some(&$crate::textdomain!()))
    };
    ($ctx:expr, $text:expr, $context:expr, $domain:expr) => {
        $ctx.translate_with_context($text, $context, Some(&$domain))
    };
}

/// Plural-selecting translation: `tr_n!(ctx, "one item", "%d items", n)`.
#[macro_export]
macro_rules! tr_n {
    ($ctx:expr, $singular:expr, $plural:expr, $count:expr) => {
        $ctx.translate_plural($singular, $plural, $count, Some(&$crate::textdomain!()))
    };
    ($ctx:expr, $singular:expr, $plural:expr, $count:expr, $domain:expr) => {
        $ctx.translate_plural($singular, $plural, $count, Some(&$domain))
    };
}

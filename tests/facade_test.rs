//! End-to-end tests for the translation facade.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use i18n_textdomain::{
    Language,
    LanguageContext,
    MemoryTranslator,
    TextDomain,
    tr,
    tr_n,
    tr_x,
};
use pretty_assertions::assert_eq;

fn create_test_context() -> LanguageContext<MemoryTranslator> {
    let mut translator = MemoryTranslator::new();
    translator
        .load_json_catalog(
            &TextDomain::Site,
            r#"{
                "Hello": "Bonjour",
                "Quote": "He said \"hi\"",
                "Code": "=",
                "He said \"hi\"": "=",
                "Save": "+",
                "Terms": "+",
                "one item": "un élément",
                "%d items": "%d éléments"
            }"#,
        )
        .unwrap();
    translator
        .load_json_catalog(
            &TextDomain::Common,
            r#"{"Save": "Enregistrer", "Terms": "Ts & Cs \"final\""}"#,
        )
        .unwrap();
    translator.insert_with_context(&TextDomain::from_file(file!()), "May", "month", "Mai");
    LanguageContext::new(Language::new(2, "fr"), translator)
}

#[test]
fn test_translate_full_flow() {
    let ctx = create_test_context();

    // Plain lookup in the default domain.
    assert_eq!(ctx.translate("Hello", None), "Bonjour");
    // Missing entries pass the original through.
    assert_eq!(ctx.translate("Goodbye", None), "Goodbye");
    // Translated values are attribute-escaped; "=" short-circuits to the
    // original unescaped; "+" consults the shared file, also unescaped.
    assert_eq!(ctx.translate("Quote", None), "He said &quot;hi&quot;");
    assert_eq!(ctx.translate("Code", None), "Code");
    assert_eq!(ctx.translate("He said \"hi\"", None), "He said \"hi\"");
    assert_eq!(ctx.translate("Save", None), "Enregistrer");
    assert_eq!(ctx.translate("Terms", None), "Ts & Cs \"final\"");
}

#[test]
fn test_macros_use_caller_file_as_domain() {
    let ctx = create_test_context();

    // tr_x! resolves this file's domain at compile time, where the
    // context-qualified entry was inserted.
    assert_eq!(tr_x!(ctx, "May", "month"), "Mai");
    // Without the matching context the entry is not found.
    assert_eq!(tr_x!(ctx, "May", "verb"), "May");
    // tr! in this file looks up this file's domain, not "site".
    assert_eq!(tr!(ctx, "Hello"), "Hello");
    assert_eq!(tr!(ctx, "Hello", TextDomain::Site), "Bonjour");
}

#[test]
fn test_plural_selection() {
    let ctx = create_test_context();

    assert_eq!(tr_n!(ctx, "one item", "%d items", 1, TextDomain::Site), "un élément");
    assert_eq!(tr_n!(ctx, "one item", "%d items", 2, TextDomain::Site), "%d éléments");
    assert_eq!(tr_n!(ctx, "one item", "%d items", 0, TextDomain::Site), "%d éléments");
}

#[test]
fn test_common_name_remaps_to_shared_domain() {
    let ctx = create_test_context();

    // The literal name "common" addresses the shared file, so entries
    // loaded there are found under it.
    let domain = TextDomain::from_name("common");
    assert_eq!(domain, TextDomain::Common);
    assert_eq!(ctx.translate("Save", Some(&domain)), "Enregistrer");
}

#[test]
fn test_disabled_context_passes_everything_through() {
    let ctx = LanguageContext::<MemoryTranslator>::disabled();

    assert_eq!(ctx.translate("Hello", None), "Hello");
    assert_eq!(tr_x!(ctx, "May", "month"), "May");
    assert_eq!(tr_n!(ctx, "one item", "%d items", 5), "%d items");
}

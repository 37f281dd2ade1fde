//! In-memory translator backend.
//!
//! A flat, `HashMap`-backed catalog for embedders and tests. Nested JSON
//! catalog documents are flattened into dot-separated keys on load. This is
//! a lookup table, not a storage engine.

use std::collections::HashMap;

use serde_json::Value;

use super::{
    Lookup,
    Translator,
};
use crate::domain::TextDomain;
use crate::error::TranslatorError;

/// Separator between nested catalog keys after flattening.
const KEY_SEPARATOR: &str = ".";

/// Separator between context and text in a catalog key, following the
/// gettext `msgctxt` convention.
const CONTEXT_SEPARATOR: char = '\u{4}';

/// An in-memory catalog keyed by textdomain.
///
/// The shared translation file lives in its own map: lookups against
/// [`TextDomain::Common`] and [`Translator::common_translation`] both
/// resolve there.
#[derive(Debug, Default)]
pub struct MemoryTranslator {
    /// Domain name to context-qualified text to raw catalog value.
    domains: HashMap<String, HashMap<String, String>>,
    /// The shared translation file.
    common: HashMap<String, String>,
}

impl MemoryTranslator {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a single entry without context.
    pub fn insert(&mut self, domain: &TextDomain, text: &str, value: &str) {
        self.insert_with_context(domain, text, "", value);
    }

    /// Inserts a single context-qualified entry.
    pub fn insert_with_context(
        &mut self,
        domain: &TextDomain,
        text: &str,
        context: &str,
        value: &str,
    ) {
        let key = catalog_key(text, context);
        match domain {
            TextDomain::Common => {
                self.common.insert(key, value.to_string());
            }
            other => {
                self.domains.entry(other.as_str().to_string()).or_default().insert(
                    key,
                    value.to_string(),
                );
            }
        }
    }

    /// Loads a JSON catalog document into `domain`.
    ///
    /// Nested objects are flattened into dot-separated keys; non-string
    /// scalar values are stringified. Returns the number of entries loaded.
    pub fn load_json_catalog(
        &mut self,
        domain: &TextDomain,
        document: &str,
    ) -> Result<usize, TranslatorError> {
        let json: Value = serde_json::from_str(document)?;
        if !json.is_object() {
            return Err(TranslatorError::InvalidCatalog(
                "top-level value must be an object".to_string(),
            ));
        }

        let entries = flatten_json(&json, KEY_SEPARATOR, None);
        let count = entries.len();
        for (text, value) in entries {
            self.insert(domain, &text, &value);
        }

        tracing::debug!(domain = %domain, count, "Loaded JSON catalog");
        Ok(count)
    }
}

impl Translator for MemoryTranslator {
    fn get_translation(
        &self,
        domain: &TextDomain,
        text: &str,
        context: &str,
    ) -> Result<Lookup, TranslatorError> {
        let key = catalog_key(text, context);
        let raw = match domain {
            TextDomain::Common => self.common.get(&key),
            other => self.domains.get(other.as_str()).and_then(|entries| entries.get(&key)),
        };

        Ok(raw.map_or(Lookup::Missing, |value| Lookup::from_raw(value)))
    }

    fn common_translation(&self, text: &str) -> Result<Option<String>, TranslatorError> {
        Ok(self.common.get(text).filter(|value| !value.is_empty()).cloned())
    }
}

/// Builds the catalog key for a context-qualified text.
fn catalog_key(text: &str, context: &str) -> String {
    if context.is_empty() {
        text.to_string()
    } else {
        format!("{context}{CONTEXT_SEPARATOR}{text}")
    }
}

/// Flattens a nested JSON object into `separator`-joined keys.
fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> HashMap<String, String> {
    let mut result = HashMap::new();

    if let Value::Object(map) = json {
        for (key, value) in map {
            let full_key = match prefix {
                Some(prefix) => format!("{prefix}{separator}{key}"),
                None => key.clone(),
            };

            match value {
                Value::Object(_) => {
                    result.extend(flatten_json(value, separator, Some(&full_key)));
                }
                Value::String(s) => {
                    result.insert(full_key, s.clone());
                }
                other => {
                    result.insert(full_key, other.to_string());
                }
            }
        }
    }

    result
}

//! Textdomain resolution.
//!
//! A textdomain is a namespace identifying the logical source of a
//! translatable string, commonly a source file path. Callers normally
//! capture theirs at compile time via [`textdomain!`](crate::textdomain!);
//! two fixed domains exist besides file-based ones.

use std::fmt;

/// Name of the site-wide default domain, used when a caller supplies none.
pub const SITE_DOMAIN: &str = "site";

/// Name reserved for the shared translation file.
pub const COMMON_DOMAIN: &str = "common";

/// A namespace identifying the logical source of a translatable string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TextDomain {
    /// The site-wide default domain.
    #[default]
    Site,
    /// The shared translation file, also consulted by common fallbacks.
    Common,
    /// A caller source file path.
    File(String),
}

impl TextDomain {
    /// Resolves a domain from its string name.
    ///
    /// The reserved name `"common"` always maps to the shared domain,
    /// bypassing file-based resolution.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            COMMON_DOMAIN => Self::Common,
            SITE_DOMAIN => Self::Site,
            path => Self::File(path.to_string()),
        }
    }

    /// Builds a domain from a caller source path, as produced by `file!()`.
    #[must_use]
    pub fn from_file(path: &str) -> Self {
        Self::File(path.to_string())
    }

    /// The domain name handed to the translator backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Site => SITE_DOMAIN,
            Self::Common => COMMON_DOMAIN,
            Self::File(path) => path,
        }
    }
}

impl fmt::Display for TextDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

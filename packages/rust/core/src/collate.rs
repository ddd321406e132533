//! Locale-aware string ordering for bank names.
//!
//! Bank names span many European languages, so plain byte comparison would
//! push every accented name behind the ASCII range ("Ångström" after "Zenith").
//! The ICU4X root collator orders accented characters in their natural
//! alphabetic position.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

/// A reusable collator for sorting display names.
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    /// Build a root-locale collator. Collation data is compiled into the
    /// binary, so construction cannot fail at runtime.
    pub fn new() -> Self {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .expect("root collation data is compiled in");
        Self { collator }
    }

    /// Compare two names with locale-aware collation.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

//! Canonical lookup key derivation.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use stockbook_core::ValueObject;

/// Canonical form of a product name: NFD-decomposed, combining marks
/// stripped, lowercased.
///
/// This is the identity under which records are stored and compared; two
/// display names differing only by case or accents map to the same key.
/// Never used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Derive the canonical key from any text. Deterministic, pure, total.
    pub fn of(text: &str) -> Self {
        let folded: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
        Self(folded.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for CanonicalName {}

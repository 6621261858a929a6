//! Validated product display name.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::ValueObject;

use crate::canonical::CanonicalName;

/// Maximum length of a display name, in characters, after whitespace collapsing.
pub const MAX_NAME_CHARS: usize = 25;

/// Accented letters accepted in addition to ASCII letters.
const ACCENTED_LETTERS: &str = "ÁÉÍÓÚáéíóúÑñ";

/// Why a raw name was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    #[error("product name must not exceed {MAX_NAME_CHARS} characters")]
    TooLong,

    /// Empty after collapsing, or contains a character outside the alphabet.
    #[error("only letters and spaces are allowed")]
    Invalid,
}

/// A product's display name.
///
/// Construction collapses internal whitespace to single spaces and enforces
/// the length and alphabet rules; the original case is preserved. Identity
/// comparisons go through [`CanonicalName`], never this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Parse a raw input line into a valid display name.
    ///
    /// Length is checked before the alphabet, matching the order the user
    /// sees the two error messages in.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() > MAX_NAME_CHARS {
            return Err(NameError::TooLong);
        }
        if collapsed.is_empty() || !collapsed.chars().all(is_allowed) {
            return Err(NameError::Invalid);
        }
        Ok(Self(collapsed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical lookup key for this name.
    pub fn canonical(&self) -> CanonicalName {
        CanonicalName::of(&self.0)
    }

    /// Display form: first character uppercased, the rest lowercased.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

fn is_allowed(c: char) -> bool {
    c == ' ' || c.is_ascii_alphabetic() || ACCENTED_LETTERS.contains(c)
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ValueObject for ProductName {}

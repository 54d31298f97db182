//! Core types shared by both conversion directions.
//! Parsers decode into these; writers serialize these.

use std::collections::HashMap;

use serde::Serialize;
use unic_langid::LanguageIdentifier;

/// Key prefix that marks a tabular row as a comment. Such rows are never emitted.
pub const COMMENT_MARKER: &str = "//";

/// A language column of a tabular header.
///
/// `index` is the position among the language columns, i.e. after the leading `Key` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageColumn {
    pub language: String,
    pub index: usize,
}

impl LanguageColumn {
    pub fn new(language: impl Into<String>, index: usize) -> Self {
        Self {
            language: language.into(),
            index,
        }
    }

    pub fn parse_language_identifier(&self) -> Option<LanguageIdentifier> {
        self.language.parse().ok()
    }

    /// Whether the identifier is a well-formed BCP 47 tag.
    ///
    /// Bundles such as `Base.lproj` are legitimate but not BCP 47, so callers only warn on this.
    pub fn is_well_formed(&self) -> bool {
        self.parse_language_identifier().is_some()
    }
}

/// One data row of a tabular source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRow {
    /// The key with every whitespace character removed.
    pub key: String,
    /// Values positionally aligned with the header's language columns.
    pub values: Vec<String>,
    /// 1-based line number in the source file.
    pub line: u64,
}

impl TranslationRow {
    /// Creates a row, normalizing the raw key with [`normalize_key`].
    pub fn new(raw_key: &str, values: Vec<String>, line: u64) -> Self {
        Self {
            key: normalize_key(raw_key),
            values,
            line,
        }
    }

    pub fn is_comment(&self) -> bool {
        self.key.starts_with(COMMENT_MARKER)
    }

    pub fn value_for(&self, column: &LanguageColumn) -> Option<&str> {
        self.values.get(column.index).map(String::as_str)
    }
}

/// Removes all whitespace from a raw tabular key.
pub fn normalize_key(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// All key/value pairs read from one language's bundle file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBundle {
    pub language: String,
    pub entries: HashMap<String, String>,
}

impl LanguageBundle {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            entries: HashMap::new(),
        }
    }

    /// Inserts a pair; a later duplicate key replaces the earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

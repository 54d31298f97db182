//! Resolved run configuration handed to the converters.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{error::Error, formats::table::DelimitedLineCodec};

pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_TABLE_EXTENSION: &str = "csv";
pub const DEFAULT_BUNDLE_EXTENSION: &str = "lproj";
pub const DEFAULT_BUNDLE_FILE_NAME: &str = "Localizable.strings";
pub const DEFAULT_TABLE_FILE_NAME: &str = "output.csv";

/// Which way a run converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Tabular sources into one `.lproj` bundle per language.
    #[default]
    TableToBundles,
    /// `.lproj` bundles into a single tabular file.
    BundlesToTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Field separator of tabular files. Never empty.
    pub delimiter: String,
    pub direction: Direction,
    /// Extension (without dot) that marks a file as a tabular source.
    pub table_extension: String,
    /// Extension (without dot) of per-language bundle directories.
    pub bundle_extension: String,
    /// Name of the key/value file inside each bundle directory.
    pub bundle_file_name: String,
    /// Name of the aggregated tabular file written by [`Direction::BundlesToTable`].
    pub table_file_name: String,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            direction: Direction::default(),
            table_extension: DEFAULT_TABLE_EXTENSION.to_string(),
            bundle_extension: DEFAULT_BUNDLE_EXTENSION.to_string(),
            bundle_file_name: DEFAULT_BUNDLE_FILE_NAME.to_string(),
            table_file_name: DEFAULT_TABLE_FILE_NAME.to_string(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_table_extension(mut self, extension: impl Into<String>) -> Self {
        self.table_extension = strip_leading_dot(extension.into());
        self
    }

    pub fn with_bundle_extension(mut self, extension: impl Into<String>) -> Self {
        self.bundle_extension = strip_leading_dot(extension.into());
        self
    }

    pub fn with_bundle_file_name(mut self, name: impl Into<String>) -> Self {
        self.bundle_file_name = name.into();
        self
    }

    pub fn with_table_file_name(mut self, name: impl Into<String>) -> Self {
        self.table_file_name = name.into();
        self
    }

    pub fn codec(&self) -> DelimitedLineCodec {
        DelimitedLineCodec::new(self.delimiter.as_str())
    }

    /// `<language>.<bundle_extension>`
    pub fn bundle_dir_name(&self, language: &str) -> String {
        format!("{}.{}", language, self.bundle_extension)
    }

    /// The language a directory name stands for, if it follows the bundle naming convention.
    pub fn language_of_bundle_dir<'a>(&self, dir_name: &'a str) -> Option<&'a str> {
        dir_name
            .strip_suffix(self.bundle_extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
    }

    /// `<output>/<language>.<bundle_extension>/<bundle_file_name>`
    pub fn bundle_file_path(&self, language: &str) -> PathBuf {
        self.output
            .join(self.bundle_dir_name(language))
            .join(&self.bundle_file_name)
    }

    pub fn table_file_path(&self) -> PathBuf {
        self.output.join(&self.table_file_name)
    }

    pub fn is_table_source(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.table_extension)
    }
}

fn strip_leading_dot(extension: String) -> String {
    match extension.strip_prefix('.') {
        Some(stripped) => stripped.to_string(),
        None => extension,
    }
}

/// Parses a user-supplied delimiter.
///
/// Any non-empty string is taken literally, except `\t` and `tab`, which mean a tab.
pub fn parse_delimiter(s: &str) -> Result<String, Error> {
    match s {
        "" => Err(Error::InvalidDelimiter(s.to_string())),
        "\\t" | "tab" => Ok("\t".to_string()),
        _ => Ok(s.to_string()),
    }
}

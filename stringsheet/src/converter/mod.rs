//! The two conversion directions and the entry point that picks one.
//!
//! ```rust,no_run
//! use stringsheet::{Config, Direction, converter::convert};
//!
//! let report = convert(&Config::new("Translations", "App/Resources"))?;
//! println!("wrote {} languages", report.languages.len());
//!
//! let back = Config::new("App/Resources", "Exports").with_direction(Direction::BundlesToTable);
//! convert(&back)?;
//! # Ok::<(), stringsheet::Error>(())
//! ```

pub mod to_bundles;
pub mod to_table;

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    config::{Config, Direction},
    error::Error,
};

pub use to_bundles::{BundleWriterSet, tabular_to_bundles};
pub use to_table::bundles_to_tabular;

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub direction: Direction,
    /// Languages in output order.
    pub languages: Vec<String>,
    /// Tabular files read, or bundle directories scanned.
    pub sources: Vec<PathBuf>,
    /// Files written.
    pub outputs: Vec<PathBuf>,
    /// Data rows emitted to bundles, or key rows written to the table.
    pub entries: usize,
    /// Tabular rows dropped because their key is a comment.
    pub comments_skipped: usize,
}

impl ConversionReport {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }
}

/// Runs the conversion selected by `config.direction`.
pub fn convert(config: &Config) -> Result<ConversionReport, Error> {
    match config.direction {
        Direction::TableToBundles => tabular_to_bundles(config),
        Direction::BundlesToTable => bundles_to_tabular(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_snake_case_direction() {
        let mut report = ConversionReport::new(Direction::BundlesToTable);
        report.languages = vec!["en".to_string(), "sv".to_string()];
        report.outputs = vec![PathBuf::from("out/output.csv")];
        report.entries = 2;

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["direction"], "bundles_to_table");
        assert_eq!(value["languages"], serde_json::json!(["en", "sv"]));
        assert_eq!(value["outputs"], serde_json::json!(["out/output.csv"]));
        assert_eq!(value["entries"], 2);
        assert_eq!(value["comments_skipped"], 0);
    }
}

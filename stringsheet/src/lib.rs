#![forbid(unsafe_code)]
//! Convert translation spreadsheets into Apple `.lproj` string bundles, and back.
//!
//! A tabular source has a `Key` header followed by one column per language:
//!
//! ```text
//! Key,en,sv
//! hello,Hello,Hej
//! world,World,Världen
//! ```
//!
//! Converting it produces `en.lproj/Localizable.strings` and `sv.lproj/Localizable.strings`.
//! The inverse direction scans a tree for `*.lproj` directories and writes a single table
//! whose rows are the sorted union of every key.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stringsheet::{Config, Direction, convert};
//!
//! convert(&Config::new("Translations", "Resources"))?;
//! convert(&Config::new("Resources", "Exports").with_direction(Direction::BundlesToTable))?;
//! # Ok::<(), stringsheet::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod path;
pub mod types;
pub mod walk;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::BundleCatalog,
    config::{Config, Direction, parse_delimiter},
    converter::{ConversionReport, bundles_to_tabular, convert, tabular_to_bundles},
    error::{Error, PathRole},
    formats::DelimitedLineCodec,
    path::validate_path,
    types::{LanguageBundle, LanguageColumn, TranslationRow},
};

//! The two file formats stringsheet converts between.
//!
//! - [`table`]: delimited spreadsheets with one column per language.
//! - [`strings`]: Apple `.strings` files inside `<language>.lproj` bundles.

pub mod strings;
pub mod table;

pub use strings::{Format as StringsFormat, Pair};
pub use table::{DelimitedLineCodec, KEY_LABEL, TableHeader, TableReader};

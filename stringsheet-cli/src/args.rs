use std::path::PathBuf;

use clap::Parser;
use stringsheet::{Config, Direction, config, parse_delimiter};

/// Convert translation spreadsheets to .lproj string bundles, and back.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input source path: a tabular file or directory, or a directory of bundles with --to-table
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path: the bundle root, or the directory receiving the table with --to-table
    #[arg(short, long)]
    pub output: PathBuf,

    /// Delimiter used as separation of values (any non-empty string, `\t` or `tab` for a tab)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Convert from .lproj bundles to a table (default is table to bundles)
    #[arg(long, visible_alias = "tocsv")]
    pub to_table: bool,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,

    /// Extension of tabular source files
    #[arg(long, default_value = config::DEFAULT_TABLE_EXTENSION)]
    pub extension: String,

    /// Extension of per-language bundle directories
    #[arg(long, default_value = config::DEFAULT_BUNDLE_EXTENSION)]
    pub bundle_extension: String,

    /// Name of the strings file inside each bundle directory
    #[arg(long, default_value = config::DEFAULT_BUNDLE_FILE_NAME)]
    pub bundle_file: String,

    /// Name of the table written with --to-table
    #[arg(long, default_value = config::DEFAULT_TABLE_FILE_NAME)]
    pub table_file: String,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub report_json: Option<PathBuf>,
}

impl Args {
    pub fn direction(&self) -> Direction {
        if self.to_table {
            Direction::BundlesToTable
        } else {
            Direction::TableToBundles
        }
    }

    /// Resolves the arguments into a library configuration.
    pub fn to_config(&self) -> Result<Config, String> {
        let delimiter = parse_delimiter(&self.delimiter).map_err(|e| e.to_string())?;
        Ok(Config::new(&self.input, &self.output)
            .with_delimiter(delimiter)
            .with_direction(self.direction())
            .with_table_extension(self.extension.as_str())
            .with_bundle_extension(self.bundle_extension.as_str())
            .with_bundle_file_name(self.bundle_file.as_str())
            .with_table_file_name(self.table_file.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults_map_to_config() {
        let args = Args::try_parse_from(["stringsheet", "-i", "in", "-o", "out"]).unwrap();
        let config = args.to_config().unwrap();
        assert_eq!(config.input, Path::new("in"));
        assert_eq!(config.output, Path::new("out"));
        assert_eq!(config.delimiter, ",");
        assert_eq!(config.direction, Direction::TableToBundles);
        assert_eq!(config.bundle_file_name, "Localizable.strings");
        assert_eq!(config.table_file_name, "output.csv");
    }

    #[test]
    fn test_to_table_and_legacy_alias() {
        for flag in ["--to-table", "--tocsv"] {
            let args =
                Args::try_parse_from(["stringsheet", "-i", "in", "-o", "out", flag]).unwrap();
            assert_eq!(args.direction(), Direction::BundlesToTable, "{flag}");
        }
    }

    #[test]
    fn test_tab_delimiter() {
        let args =
            Args::try_parse_from(["stringsheet", "-i", "in", "-o", "out", "-d", "\\t", "-v"])
                .unwrap();
        let config = args.to_config().unwrap();
        assert_eq!(config.delimiter, "\t");
        assert!(args.verbose);
    }

    #[test]
    fn test_multi_character_delimiter_is_kept() {
        let args =
            Args::try_parse_from(["stringsheet", "-i", "in", "-o", "out", "-d", "::"]).unwrap();
        assert_eq!(args.to_config().unwrap().delimiter, "::");
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        let args =
            Args::try_parse_from(["stringsheet", "-i", "in", "-o", "out", "-d", ""]).unwrap();
        let err = args.to_config().unwrap_err();
        assert!(err.contains("invalid delimiter"));
    }

    #[test]
    fn test_input_and_output_are_required() {
        assert!(Args::try_parse_from(["stringsheet", "-i", "in"]).is_err());
        assert!(Args::try_parse_from(["stringsheet", "-o", "out"]).is_err());
    }
}

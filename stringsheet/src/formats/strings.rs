//! Support for the Apple `.strings` key/value format found in `<language>.lproj` bundles.
//!
//! Only single-line `"key" = "value";` pairs are understood. Blank lines and lines starting
//! with `/*` or `//` are comments; anything else that lacks the ` = ` separator is skipped.

use std::{
    fmt,
    fs::File,
    io::{BufRead, Cursor, Read},
    path::Path,
    str::FromStr,
};

use crate::{error::Error, types::LanguageBundle};

/// Separator between the quoted key and the quoted value.
pub const SEPARATOR: &str = " = ";

/// The comment written before the lines contributed by one tabular source file.
pub fn section_marker(source_name: &str) -> String {
    format!("\n/* {} */\n", source_name)
}

/// An Apple `.strings` file reduced to its key/value pairs, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    pub pairs: Vec<Pair>,
}

impl Format {
    /// Collects the pairs into a bundle for `language`. Later duplicates win.
    pub fn into_bundle(self, language: impl Into<String>) -> LanguageBundle {
        let mut bundle = LanguageBundle::new(language);
        for pair in self.pairs {
            bundle.insert(pair.key, pair.value);
        }
        bundle
    }

    /// Parses already decoded text, skipping every line that is not a pair.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut pairs = Vec::new();
        for line in reader.lines() {
            if let Some(pair) = Pair::parse_line(&line?) {
                pairs.push(pair);
            }
        }
        Ok(Format { pairs })
    }

    /// Decodes UTF-16 files with a BOM; everything else is read as (lossy) UTF-8.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .encoding(Some(encoding_rs::UTF_8))
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        decoded.parse()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(Cursor::new(s))
    }
}

/// A single `"key" = "value";` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses one line. Returns `None` for blank lines, comments and malformed lines.
    pub fn parse_line(line: &str) -> Option<Pair> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("/*") || trimmed.starts_with("//") {
            return None;
        }

        let (key, value) = trimmed.split_once(SEPARATOR)?;
        let key = key.trim_matches('"');
        let value = value.strip_suffix(';').unwrap_or(value).trim_matches('"');

        Some(Pair::new(key, value))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"{}\"{}\";", self.key, SEPARATOR, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parse_basic_pairs_and_section_marker() {
        let content = indoc! {r#"

            /* test.csv */
            "hello" = "Hello";
            "world" = "World";
        "#};
        let parsed = content.parse::<Format>().unwrap();
        assert_eq!(
            parsed.pairs,
            vec![Pair::new("hello", "Hello"), Pair::new("world", "World")]
        );
    }

    #[test]
    fn test_blank_lines_comments_and_malformed_lines_are_skipped() {
        let content = indoc! {r#"
            // Comment
            "good" = "yes";
            bad line without separator
            "tight"="nope";
              "indented" = "ok";
        "#};
        let parsed = content.parse::<Format>().unwrap();
        assert_eq!(
            parsed.pairs,
            vec![Pair::new("good", "yes"), Pair::new("indented", "ok")]
        );
    }

    #[test]
    fn test_split_happens_on_first_separator_only() {
        let pair = Pair::parse_line(r#""equation" = "a = b";"#).unwrap();
        assert_eq!(pair.key, "equation");
        assert_eq!(pair.value, "a = b");
    }

    #[test]
    fn test_missing_semicolon_and_empty_value() {
        assert_eq!(
            Pair::parse_line(r#""k" = "v""#),
            Some(Pair::new("k", "v"))
        );
        assert_eq!(Pair::parse_line(r#""empty" = "";"#), Some(Pair::new("empty", "")));
    }

    #[test]
    fn test_display_matches_bundle_line() {
        assert_eq!(
            Pair::new("world", "Världen").to_string(),
            r#""world" = "Världen";"#
        );
    }

    #[test]
    fn test_into_bundle_keeps_last_duplicate() {
        let content = "\"k\" = \"one\";\n\"k\" = \"two\";\n";
        let bundle = content.parse::<Format>().unwrap().into_bundle("en");
        assert_eq!(bundle.language, "en");
        assert_eq!(bundle.get("k"), Some("two"));
    }

    #[test]
    fn test_displayed_pairs_parse_back() {
        let pairs = vec![Pair::new("a", "A"), Pair::new("b", "B b")];
        let text: String = pairs.iter().map(|pair| format!("{pair}\n")).collect();
        assert_eq!(text, "\"a\" = \"A\";\n\"b\" = \"B b\";\n");
        assert_eq!(text.parse::<Format>().unwrap().pairs, pairs);
    }

    #[test]
    fn test_read_from_decodes_utf16le_with_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Localizable.strings");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "\"hello\" = \"Hej\";\n".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        std::fs::File::create(&path)
            .unwrap()
            .write_all(&bytes)
            .unwrap();

        let parsed = Format::read_from(&path).unwrap();
        assert_eq!(parsed.pairs, vec![Pair::new("hello", "Hej")]);
    }

    #[test]
    fn test_read_from_strips_utf8_bom() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Localizable.strings");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("\"world\" = \"Världen\";".as_bytes());
        std::fs::write(&path, bytes).unwrap();

        let parsed = Format::read_from(&path).unwrap();
        assert_eq!(parsed.pairs, vec![Pair::new("world", "Världen")]);
    }

    #[test]
    fn test_section_marker() {
        assert_eq!(section_marker("a.csv"), "\n/* a.csv */\n");
    }
}

//! Delimited tabular sources: a `Key` header followed by one column per language.
//!
//! Fields are split on a configurable delimiter with no quoting or escaping, so a value
//! can never contain the delimiter. A single-byte delimiter goes through the `csv` crate;
//! longer delimiters such as `||` or `§` split and join each line on the whole string.

use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read, Write},
    path::{Path, PathBuf},
};

use csv::{QuoteStyle, StringRecord};

use crate::{
    error::Error,
    types::{LanguageColumn, TranslationRow},
};

/// Label of the first header column.
pub const KEY_LABEL: &str = "Key";

/// Splits and joins lines on one delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedLineCodec {
    delimiter: String,
}

impl Default for DelimitedLineCodec {
    fn default() -> Self {
        Self::new(",")
    }
}

impl DelimitedLineCodec {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    fn single_byte(&self) -> Option<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Some(*byte),
            _ => None,
        }
    }

    fn records<R: Read>(&self, reader: R) -> Records<R> {
        match self.single_byte() {
            Some(delimiter) => Records::Csv(
                csv::ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .quoting(false)
                    .delimiter(delimiter)
                    .from_reader(reader),
            ),
            None => Records::Split {
                lines: BufReader::new(reader).lines(),
                delimiter: self.delimiter.clone(),
                line: 0,
            },
        }
    }

    /// A writer that joins fields verbatim and ends every record with `\n`.
    pub fn writer<W: Write>(&self, writer: W) -> TableWriter<W> {
        match self.single_byte() {
            Some(delimiter) => TableWriter::Csv(
                csv::WriterBuilder::new()
                    .delimiter(delimiter)
                    .quote_style(QuoteStyle::Never)
                    .from_writer(writer),
            ),
            None => TableWriter::Joined {
                writer,
                delimiter: self.delimiter.clone(),
            },
        }
    }
}

/// Line-by-line field source behind a [`TableReader`]. Blank lines are skipped either way.
enum Records<R: Read> {
    Csv(csv::Reader<R>),
    Split {
        lines: Lines<BufReader<R>>,
        delimiter: String,
        line: u64,
    },
}

impl<R: Read> Records<R> {
    /// The next non-blank record and its 1-based line number.
    fn next_record(&mut self) -> Result<Option<(u64, Vec<String>)>, Error> {
        match self {
            Records::Csv(reader) => {
                let mut record = StringRecord::new();
                if !reader.read_record(&mut record)? {
                    return Ok(None);
                }
                let line = record.position().map_or(0, |pos| pos.line());
                Ok(Some((line, record.iter().map(str::to_string).collect())))
            }
            Records::Split {
                lines,
                delimiter,
                line,
            } => {
                for text in lines.by_ref() {
                    let text = text?;
                    *line += 1;
                    if text.is_empty() {
                        continue;
                    }
                    let fields = text.split(delimiter.as_str()).map(str::to_string).collect();
                    return Ok(Some((*line, fields)));
                }
                Ok(None)
            }
        }
    }
}

/// Writes delimited records produced by [`DelimitedLineCodec::writer`].
pub enum TableWriter<W: Write> {
    Csv(csv::Writer<W>),
    Joined { writer: W, delimiter: String },
}

impl<W: Write> TableWriter<W> {
    pub fn write_record<I, T>(&mut self, fields: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        match self {
            TableWriter::Csv(writer) => {
                for field in fields {
                    writer.write_field(field.as_ref())?;
                }
                writer.write_record(None::<&[u8]>)?;
            }
            TableWriter::Joined { writer, delimiter } => {
                for (index, field) in fields.into_iter().enumerate() {
                    if index > 0 {
                        writer.write_all(delimiter.as_bytes())?;
                    }
                    writer.write_all(field.as_ref().as_bytes())?;
                }
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        match self {
            TableWriter::Csv(writer) => writer.flush()?,
            TableWriter::Joined { writer, .. } => writer.flush()?,
        }
        Ok(())
    }
}

/// The first row of a tabular source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    /// Whatever the first field says; conventionally [`KEY_LABEL`].
    pub label: String,
    pub languages: Vec<LanguageColumn>,
}

impl TableHeader {
    fn from_fields(fields: Vec<String>) -> Self {
        let mut fields = fields.into_iter();
        let label = fields.next().unwrap_or_default();
        let languages = fields
            .enumerate()
            .map(|(index, language)| LanguageColumn::new(language.trim(), index))
            .collect();
        TableHeader { label, languages }
    }

    pub fn language_names(&self) -> Vec<&str> {
        self.languages.iter().map(|c| c.language.as_str()).collect()
    }

    /// Whether both headers declare the same languages in the same order.
    pub fn same_languages(&self, other: &TableHeader) -> bool {
        self.language_names() == other.language_names()
    }
}

/// An open tabular source positioned after its header.
pub struct TableReader<R: Read> {
    header: TableHeader,
    records: Records<R>,
}

impl TableReader<File> {
    pub fn open(path: impl AsRef<Path>, codec: &DelimitedLineCodec) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::from_reader(path, file, codec)
    }
}

impl<R: Read> TableReader<R> {
    /// Reads the header row. `path` is only used for diagnostics.
    ///
    /// Fails with [`Error::EmptyTable`] when there is no header row.
    pub fn from_reader(
        path: impl Into<PathBuf>,
        reader: R,
        codec: &DelimitedLineCodec,
    ) -> Result<Self, Error> {
        let mut records = codec.records(reader);
        let Some((_, fields)) = records.next_record()? else {
            return Err(Error::EmptyTable(path.into()));
        };
        Ok(TableReader {
            header: TableHeader::from_fields(fields),
            records,
        })
    }

    pub fn into_header(self) -> TableHeader {
        self.header
    }

    /// The remaining data rows, comments included.
    pub fn rows(&mut self) -> impl Iterator<Item = Result<TranslationRow, Error>> + '_ {
        std::iter::from_fn(move || self.records.next_record().transpose()).map(|record| {
            let (line, fields) = record?;
            let mut fields = fields.into_iter();
            let key = fields.next().unwrap_or_default();
            Ok(TranslationRow::new(&key, fields.collect(), line))
        })
    }
}

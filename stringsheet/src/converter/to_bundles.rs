//! Tabular sources → one `.strings` file per language.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};

use crate::{
    config::{Config, Direction},
    error::{Error, PathRole},
    formats::{Pair, TableHeader, TableReader, strings::section_marker},
    path::{file_name_lossy, validate_path},
    types::{LanguageColumn, TranslationRow},
    walk,
};

use super::ConversionReport;

struct BundleOutput {
    column: LanguageColumn,
    path: PathBuf,
    writer: BufWriter<File>,
}

/// The per-language output files of one run, open from creation until [`finish`].
///
/// Dropping the set closes every file, so early returns never leak handles.
///
/// [`finish`]: BundleWriterSet::finish
pub struct BundleWriterSet {
    outputs: Vec<BundleOutput>,
}

impl BundleWriterSet {
    /// Creates (or truncates) `<output>/<language>.<ext>/<file>` for every language.
    pub fn create(config: &Config, languages: &[LanguageColumn]) -> Result<Self, Error> {
        let mut outputs = Vec::with_capacity(languages.len());
        for column in languages {
            let path = config.bundle_file_path(&column.language);
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let file = File::create(&path)?;
            debug!(language = %column.language, path = %path.display(), "opened bundle file");
            outputs.push(BundleOutput {
                column: column.clone(),
                path,
                writer: BufWriter::new(file),
            });
        }
        Ok(BundleWriterSet { outputs })
    }

    /// Writes the section marker for `source_name` into every file.
    pub fn write_section(&mut self, source_name: &str) -> Result<(), Error> {
        let marker = section_marker(source_name);
        for output in &mut self.outputs {
            output.writer.write_all(marker.as_bytes())?;
        }
        Ok(())
    }

    /// Writes one `"key" = "value";` line per language.
    ///
    /// A row with fewer values than languages fails with [`Error::ShortRow`] before anything
    /// is written; extra trailing values are ignored.
    pub fn write_row(&mut self, source: &Path, row: &TranslationRow) -> Result<(), Error> {
        if row.values.len() < self.outputs.len() {
            return Err(Error::ShortRow {
                path: source.to_path_buf(),
                line: row.line,
                expected: self.outputs.len(),
                found: row.values.len(),
            });
        }
        for output in &mut self.outputs {
            let value = row.value_for(&output.column).unwrap_or_default();
            writeln!(output.writer, "{}", Pair::new(row.key.as_str(), value))?;
        }
        Ok(())
    }

    /// Flushes and closes every file, returning their paths.
    pub fn finish(self) -> Result<Vec<PathBuf>, Error> {
        let mut paths = Vec::with_capacity(self.outputs.len());
        for mut output in self.outputs {
            output.writer.flush()?;
            paths.push(output.path);
        }
        Ok(paths)
    }
}

/// Converts every tabular source under `config.input` into per-language bundles under
/// `config.output`.
///
/// The first source's header fixes the languages for the whole run. Later sources are
/// written positionally against those languages even if their own header differs.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %config.input.display(), output = %config.output.display())
)]
pub fn tabular_to_bundles(config: &Config) -> Result<ConversionReport, Error> {
    validate_path(&config.input, PathRole::Source)
        .map_err(|e| Error::in_stage("source path validation failed", e))?;
    validate_path(&config.output, PathRole::Output)
        .map_err(|e| Error::in_stage("output path validation failed", e))?;

    fs::create_dir_all(&config.output).map_err(|e| {
        Error::in_stage(
            format!("failed to create output directory {}", config.output.display()),
            e,
        )
    })?;

    let mut report = ConversionReport::new(Direction::TableToBundles);
    let sources = walk::table_sources(&config.input, config)
        .map_err(|e| Error::in_stage("error walking source directory", e))?;
    if sources.is_empty() {
        warn!(extension = %config.table_extension, "no tabular sources found");
        return Ok(report);
    }

    let headers = read_headers(config, &sources)?;
    let languages = headers[0].languages.clone();
    check_headers(&sources, &headers);

    let mut writers = BundleWriterSet::create(config, &languages)
        .map_err(|e| Error::in_stage("failed to create bundle files", e))?;
    info!(languages = languages.len(), "created bundle files");

    let codec = config.codec();
    for source in &sources {
        let name = file_name_lossy(source);
        info!(source = %name, "localizing");
        let stage = || format!("failed to localize {}", source.display());

        writers
            .write_section(&name)
            .map_err(|e| Error::in_stage(stage(), e))?;
        let mut table =
            TableReader::open(source, &codec).map_err(|e| Error::in_stage(stage(), e))?;
        for row in table.rows() {
            let row = row.map_err(|e| Error::in_stage(stage(), e))?;
            if row.is_comment() {
                debug!(key = %row.key, line = row.line, "skipping comment row");
                report.comments_skipped += 1;
                continue;
            }
            writers
                .write_row(source, &row)
                .map_err(|e| Error::in_stage(stage(), e))?;
            report.entries += 1;
        }
    }

    report.outputs = writers
        .finish()
        .map_err(|e| Error::in_stage("failed to flush bundle files", e))?;
    report.languages = languages.into_iter().map(|c| c.language).collect();
    report.sources = sources;
    info!(
        entries = report.entries,
        comments_skipped = report.comments_skipped,
        "generated bundles"
    );
    Ok(report)
}

/// Reads every header up front so an empty source fails the run before any output exists.
fn read_headers(config: &Config, sources: &[PathBuf]) -> Result<Vec<TableHeader>, Error> {
    let codec = config.codec();
    sources
        .iter()
        .map(|source| {
            TableReader::open(source, &codec)
                .map(TableReader::into_header)
                .map_err(|e| {
                    Error::in_stage(format!("failed to read header of {}", source.display()), e)
                })
        })
        .collect()
}

fn check_headers(sources: &[PathBuf], headers: &[TableHeader]) {
    let first = &headers[0];
    for column in first.languages.iter().filter(|c| !c.is_well_formed()) {
        warn!(language = %column.language, "header language is not a BCP 47 identifier");
    }
    for (source, header) in sources.iter().zip(headers).skip(1) {
        if !header.same_languages(first) {
            warn!(
                source = %source.display(),
                expected = ?first.language_names(),
                found = ?header.language_names(),
                "header differs from the first source; values are written by position"
            );
        }
    }
}

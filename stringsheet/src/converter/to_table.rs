//! `.lproj` bundles → one tabular file.

use std::{
    fs::{self, File},
    io::BufWriter,
};

use tracing::{info, instrument, warn};

use crate::{
    catalog::BundleCatalog,
    config::{Config, Direction},
    error::{Error, PathRole},
    path::validate_path,
    walk,
};

use super::ConversionReport;

/// Collects every bundle under `config.input` into `<output>/<table_file_name>`.
///
/// Columns follow directory discovery order; rows are the sorted union of all keys.
/// Malformed bundle lines are skipped.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %config.input.display(), output = %config.output.display())
)]
pub fn bundles_to_tabular(config: &Config) -> Result<ConversionReport, Error> {
    validate_path(&config.input, PathRole::Source)
        .map_err(|e| Error::in_stage("source path validation failed", e))?;

    fs::create_dir_all(&config.output).map_err(|e| {
        Error::in_stage(
            format!("failed to create output directory {}", config.output.display()),
            e,
        )
    })?;
    let table_path = config.table_file_path();
    let file = File::create(&table_path).map_err(|e| {
        Error::in_stage(
            format!("failed to create output file {}", table_path.display()),
            e,
        )
    })?;

    let dirs = walk::bundle_dirs(&config.input, config)
        .map_err(|e| Error::in_stage("error walking source directory", e))?;
    if dirs.is_empty() {
        warn!(extension = %config.bundle_extension, "no bundle directories found");
    }
    let catalog = BundleCatalog::load(&dirs, &config.bundle_file_name)
        .map_err(|e| Error::in_stage("error processing localized files", e))?;
    for column in catalog.languages().iter().filter(|c| !c.is_well_formed()) {
        warn!(language = %column.language, "bundle language is not a BCP 47 identifier");
    }

    let entries = catalog
        .write_table(&config.codec(), BufWriter::new(file))
        .map_err(|e| Error::in_stage("error writing table", e))?;
    info!(
        path = %table_path.display(),
        languages = catalog.bundles().len(),
        entries,
        "generated table"
    );

    Ok(ConversionReport {
        direction: Direction::BundlesToTable,
        languages: catalog.languages().into_iter().map(|c| c.language).collect(),
        sources: dirs.into_iter().map(|d| d.path).collect(),
        outputs: vec![table_path],
        entries,
        comments_skipped: 0,
    })
}

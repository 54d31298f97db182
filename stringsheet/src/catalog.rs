//! Accumulates language bundles before they are written as one table.

use std::{collections::BTreeSet, io::Write};

use tracing::{debug, warn};

use crate::{
    error::Error,
    formats::{DelimitedLineCodec, KEY_LABEL, StringsFormat},
    types::{LanguageBundle, LanguageColumn},
    walk::BundleDir,
};

/// Language bundles in discovery order.
///
/// A language seen twice keeps its first column position; pairs from the later bundle are
/// merged in and win on conflicting keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleCatalog {
    bundles: Vec<LanguageBundle>,
}

impl BundleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `<dir>/<file_name>` for every directory. A bundle without that file still
    /// contributes its (empty) column.
    pub fn load(dirs: &[BundleDir], file_name: &str) -> Result<Self, Error> {
        let mut catalog = BundleCatalog::new();
        for dir in dirs {
            let path = dir.strings_file(file_name);
            let bundle = if path.exists() {
                StringsFormat::read_from(&path)
                    .map_err(|e| Error::in_stage(format!("reading {}", path.display()), e))?
                    .into_bundle(dir.language.as_str())
            } else {
                debug!(path = %path.display(), "bundle has no strings file");
                LanguageBundle::new(dir.language.as_str())
            };
            debug!(language = %bundle.language, keys = bundle.len(), "loaded bundle");
            catalog.push(bundle);
        }
        Ok(catalog)
    }

    pub fn push(&mut self, bundle: LanguageBundle) {
        match self
            .bundles
            .iter_mut()
            .find(|existing| existing.language == bundle.language)
        {
            Some(existing) => {
                warn!(language = %bundle.language, "language appears in several bundles, merging");
                existing.entries.extend(bundle.entries);
            }
            None => self.bundles.push(bundle),
        }
    }

    pub fn bundles(&self) -> &[LanguageBundle] {
        &self.bundles
    }

    pub fn languages(&self) -> Vec<LanguageColumn> {
        self.bundles
            .iter()
            .enumerate()
            .map(|(index, bundle)| LanguageColumn::new(bundle.language.as_str(), index))
            .collect()
    }

    /// The union of keys across every language, ascending by byte order.
    pub fn sorted_keys(&self) -> BTreeSet<&str> {
        self.bundles.iter().flat_map(LanguageBundle::keys).collect()
    }

    /// One row per key: the key, then each language's value or `""`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> {
        self.sorted_keys().into_iter().map(move |key| {
            std::iter::once(key)
                .chain(self.bundles.iter().map(|b| b.get(key).unwrap_or_default()))
                .collect()
        })
    }

    /// Writes the header and every row. Returns the number of key rows written.
    pub fn write_table<W: Write>(
        &self,
        codec: &DelimitedLineCodec,
        writer: W,
    ) -> Result<usize, Error> {
        let mut wtr = codec.writer(writer);
        wtr.write_record(
            std::iter::once(KEY_LABEL).chain(self.bundles.iter().map(|b| b.language.as_str())),
        )?;

        let mut written = 0;
        for row in self.rows() {
            wtr.write_record(&row)?;
            written += 1;
        }
        wtr.flush()?;
        Ok(written)
    }
}

//! Deterministic directory traversal.
//!
//! Both directions walk depth-first with siblings sorted by file name, so discovery order
//! (and therefore column and section order) is stable across runs and platforms.
//! Nothing is skipped: hidden files and ignore files have no effect.

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::debug;

use crate::{config::Config, error::Error};

fn walk(root: &Path) -> impl Iterator<Item = Result<DirEntry, ignore::Error>> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
}

/// Every regular file under `root` carrying the configured tabular extension.
pub fn table_sources(root: &Path, config: &Config) -> Result<Vec<PathBuf>, Error> {
    let mut sources = Vec::new();
    for dent in walk(root) {
        let dent = dent?;
        let is_file = dent.file_type().is_some_and(|t| t.is_file());
        if is_file && config.is_table_source(dent.path()) {
            debug!(path = %dent.path().display(), "found tabular source");
            sources.push(dent.into_path());
        }
    }
    Ok(sources)
}

/// A `<language>.<ext>` directory found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDir {
    pub language: String,
    pub path: PathBuf,
}

impl BundleDir {
    pub fn new(language: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            language: language.into(),
            path: path.into(),
        }
    }

    pub fn strings_file(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

/// Every bundle directory under `root` (including `root` itself), in discovery order.
pub fn bundle_dirs(root: &Path, config: &Config) -> Result<Vec<BundleDir>, Error> {
    let mut dirs = Vec::new();
    for dent in walk(root) {
        let dent = dent?;
        if !dent.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        let name = dent.file_name().to_string_lossy();
        if let Some(language) = config.language_of_bundle_dir(&name) {
            debug!(language, path = %dent.path().display(), "found bundle directory");
            dirs.push(BundleDir::new(language, dent.path()));
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_table_sources_sorted_and_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("b.csv"), "Key,en\n").unwrap();
        fs::write(root.join("a.csv"), "Key,en\n").unwrap();
        fs::write(root.join("nested/c.csv"), "Key,en\n").unwrap();
        fs::write(root.join("notes.txt"), "ignored").unwrap();
        fs::write(root.join(".hidden.csv"), "Key,en\n").unwrap();

        let config = Config::new(root, root);
        let sources = table_sources(root, &config).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from(".hidden.csv"),
                PathBuf::from("a.csv"),
                PathBuf::from("b.csv"),
                PathBuf::from("nested").join("c.csv"),
            ]
        );
    }

    #[test]
    fn test_single_file_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("only.csv");
        fs::write(&file, "Key,en\n").unwrap();
        let config = Config::new(&file, temp_dir.path());
        assert_eq!(table_sources(&file, &config).unwrap(), vec![file]);
    }

    #[test]
    fn test_bundle_dirs_in_discovery_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("sv.lproj")).unwrap();
        fs::create_dir_all(root.join("en.lproj")).unwrap();
        fs::create_dir_all(root.join("App/de.lproj")).unwrap();
        fs::create_dir_all(root.join("Assets.xcassets")).unwrap();
        fs::write(root.join("fr.lproj"), "a file, not a bundle").unwrap();

        let config = Config::new(root, root);
        let dirs = bundle_dirs(root, &config).unwrap();
        let languages: Vec<_> = dirs.iter().map(|d| d.language.as_str()).collect();
        assert_eq!(languages, vec!["de", "en", "sv"]);
        assert_eq!(dirs[1].path, root.join("en.lproj"));
        assert_eq!(
            dirs[1].strings_file("Localizable.strings"),
            root.join("en.lproj").join("Localizable.strings")
        );
    }
}

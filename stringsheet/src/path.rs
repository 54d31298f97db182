//! Path checks performed before any conversion I/O.

use std::path::Path;

use crate::error::{Error, PathRole};

/// Fails with [`Error::PathNotFound`] if `path` does not exist.
pub fn validate_path(path: impl AsRef<Path>, role: PathRole) -> Result<(), Error> {
    let path = path.as_ref();
    if path.exists() {
        Ok(())
    } else {
        Err(Error::PathNotFound {
            role,
            path: path.to_path_buf(),
        })
    }
}

/// The final component of `path` as UTF-8, or the whole path if it has none.
pub(crate) fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

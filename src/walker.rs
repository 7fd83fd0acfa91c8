//! Lazy traversal of a template directory tree.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every non-directory entry anywhere beneath `root`, yielded lazily.
///
/// Entries that cannot be read are skipped. A missing root yields nothing.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .map(|entry| entry.into_path())
}

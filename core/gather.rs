use crate::classify::{FileKind, classify_file};
use crate::error::{AppError, Result};
use crate::pattern::PatternSet;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Result of one walk: every non-ignored regular file under the root, sorted
/// lexicographically by relative path string, plus the subsequence classified
/// as text. Immutable after construction.
#[derive(Debug, Clone)]
pub struct FileCollection {
    root: PathBuf,
    all_files: Vec<PathBuf>,
    text_files: Vec<PathBuf>,
}

impl FileCollection {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Relative paths of all non-ignored regular files, in sorted order.
    pub fn all_files(&self) -> &[PathBuf] {
        &self.all_files
    }

    /// The text-classified subsequence of [`Self::all_files`], same order.
    pub fn text_files(&self) -> &[PathBuf] {
        &self.text_files
    }

    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}

/// Recursively collects the non-ignored regular files under `root`.
///
/// Ignored directories are pruned, never descended into. Symlinks are not
/// traversed as directories; a symlink whose target is a regular file is
/// followed and treated as one. Errors on individual entries are logged and
/// skipped; an unreadable root fails the walk.
pub fn collect_files(root: &Path, patterns: &PatternSet) -> Result<FileCollection> {
    if !root.is_dir() {
        return Err(AppError::InvalidArgument(format!(
            "Not a directory: {}",
            root.display()
        )));
    }

    log::info!("Walking directory: {}", root.display());

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, root, patterns));

    let mut all_files: Vec<PathBuf> = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                // A root we cannot open at all is fatal; anything deeper is a
                // per-entry failure and the walk continues.
                if e.depth() == 0 {
                    return Err(e.into());
                }
                log::warn!("Error walking directory: {}", e);
                continue;
            }
        };

        if entry.depth() == 0 || !is_regular_file(&entry) {
            continue;
        }

        let relative = relative_to(entry.path(), root);
        log::trace!("Collected file: {}", relative.display());
        all_files.push(relative);
    }

    all_files.par_sort_unstable_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let kinds: Vec<FileKind> = all_files
        .par_iter()
        .map(|relative| classify_file(&root.join(relative)))
        .collect();
    let text_files: Vec<PathBuf> = all_files
        .iter()
        .zip(&kinds)
        .filter(|(_, kind)| **kind == FileKind::Text)
        .map(|(path, _)| path.clone())
        .collect();

    log::info!(
        "Walk complete: {} files, {} classified as text",
        all_files.len(),
        text_files.len()
    );

    Ok(FileCollection {
        root: root.to_path_buf(),
        all_files,
        text_files,
    })
}

/// Whether a walk entry is excluded by the pattern set. Matching a directory
/// here prunes its entire subtree from traversal.
fn is_pruned(entry: &DirEntry, root: &Path, patterns: &PatternSet) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let relative = relative_to(entry.path(), root);
    let is_dir = entry.file_type().is_dir();
    let pruned = patterns.is_ignored(&relative, is_dir);
    if pruned {
        log::trace!("Pruned: {}", relative.display());
    }
    pruned
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        // Resolve the link target; only symlinks to regular files count.
        return fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false);
    }
    false
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .or_else(|_| pathdiff::diff_paths(path, root).ok_or(()))
        .unwrap_or_else(|_| path.to_path_buf())
}

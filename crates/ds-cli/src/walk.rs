//! File walker for Go source discovery.
//!
//! Uses the `ignore` crate with every standard filter disabled: hidden files,
//! `.gitignore`d paths and vendored trees are all visited. Entries within a
//! directory come back sorted by file name, so traversal order is lexical
//! and stable across runs.

use std::path::{Component, Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use regex::Regex;

/// Build a file walker over `root`.
pub fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));
    builder.build()
}

/// Path of a walked entry relative to how the root was given: the root
/// itself as written, everything below it lexically cleaned (`./gen/g.go`
/// becomes `gen/g.go`).
pub fn display_path(entry: &DirEntry) -> PathBuf {
    if entry.depth() == 0 {
        entry.path().to_path_buf()
    } else {
        clean(entry.path())
    }
}

/// Lexical path cleaning: drops `.` components, folds `name/..` pairs and
/// discards `..` directly under the filesystem root. An empty result is `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Path named by a walk error, looking through depth and line wrappers.
pub fn error_path(error: &ignore::Error) -> Option<&Path> {
    match error {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::Loop { child, .. } => Some(child),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Partial(errors) => errors.iter().find_map(error_path),
        _ => None,
    }
}

/// Whether the exclude pattern matches a walked path.
pub fn is_excluded(exclude: Option<&Regex>, path: &Path) -> bool {
    exclude.is_some_and(|re| re.is_match(&path.to_string_lossy()))
}

use std::path::{Component, Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::errors::GitDepError;

/// Walk up from `start` looking for an entry (file or directory) named `marker`.
/// Returns the path to the directory containing it, or `None`.
pub fn find_ancestor_with(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(marker).exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Lexically normalize a path: drop `.` components and fold `..` into
/// the preceding component. The filesystem is never consulted.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Resolve `path` against `base` and normalize the result.
///
/// An absolute `path` replaces `base` entirely.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Make `path` absolute relative to the current working directory.
pub fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(resolve_against(&std::env::current_dir()?, path))
    }
}

/// List the files under `dir` whose file name matches the glob `pattern`,
/// sorted by path. A missing `dir` yields an empty list.
pub fn find_files(dir: &Path, pattern: &str, recursive: bool) -> Result<Vec<PathBuf>, GitDepError> {
    let matcher = Glob::new(pattern)
        .map_err(|e| GitDepError::Generic {
            message: format!("Invalid file pattern '{pattern}': {e}"),
        })?
        .compile_matcher();

    let mut walker = WalkDir::new(dir).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| matcher.is_match(entry.file_name()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    Ok(files)
}

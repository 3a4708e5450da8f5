//! Artifact filename parsing.
//!
//! Package artifacts are named `<id>.<version>.<ext>`, for example
//! `MyLib.1.2.3-beta1.nupkg`. The id itself may contain dots, so the split
//! point is the leftmost dot after which the remainder is a valid version.

use std::path::{Path, PathBuf};

/// File extension of package artifacts harvested from dependency builds.
pub const ARTIFACT_EXTENSION: &str = "nupkg";

/// Package id and version recovered from an artifact file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub id: String,
    pub version: String,
    pub path: PathBuf,
}

impl ArtifactDescriptor {
    /// Parse the artifact at `path`. Returns `None` when the file stem has no
    /// version-shaped suffix; such files are not artifacts.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        let (id, version) = extract_version(stem)?;
        Some(Self {
            id: id.to_string(),
            version: version.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Split `name` (without extension) into `(id, version)`.
///
/// A version is two to four dot-separated numeric groups, optionally
/// followed by `-<prerelease>`. The id is the shortest non-empty prefix that
/// leaves a valid version, so the longest trailing version wins.
pub fn extract_version(name: &str) -> Option<(&str, &str)> {
    name.match_indices('.').find_map(|(i, _)| {
        let (id, version) = (&name[..i], &name[i + 1..]);
        (!id.is_empty() && is_version(version)).then_some((id, version))
    })
}

fn is_version(s: &str) -> bool {
    let (release, prerelease) = match s.split_once('-') {
        Some((release, prerelease)) => (release, Some(prerelease)),
        None => (s, None),
    };
    if prerelease.is_some_and(str::is_empty) {
        return false;
    }

    let groups = release.split('.').collect::<Vec<_>>();
    (2..=4).contains(&groups.len())
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()))
}

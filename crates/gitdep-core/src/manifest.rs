use serde::{Deserialize, Serialize};

use gitdep_util::errors::GitDepError;

/// The parsed representation of a `GitDepend.json` file.
///
/// Paths are kept exactly as written; they become absolute only when the
/// resolver turns a manifest into a [`crate::configuration::Configuration`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub packages: PackagesSection,

    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

/// Build script invocation from the `build` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSection {
    #[serde(default = "default_script")]
    pub script: String,
    #[serde(default)]
    pub arguments: String,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            script: default_script(),
            arguments: String::new(),
        }
    }
}

fn default_script() -> String {
    "make.bat".to_string()
}

/// Build output location from the `packages` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagesSection {
    #[serde(default = "default_packages_dir")]
    pub directory: String,
}

impl Default for PackagesSection {
    fn default() -> Self {
        Self {
            directory: default_packages_dir(),
        }
    }
}

fn default_packages_dir() -> String {
    "artifacts/NuGet/Debug".to_string()
}

/// One entry of the `dependencies` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub directory: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Manifest {
    /// Parse a manifest from a JSON string.
    pub fn parse(content: &str) -> Result<Self, GitDepError> {
        serde_json::from_str(content).map_err(|e| GitDepError::Manifest {
            message: format!("Failed to parse {}: {e}", crate::MANIFEST_FILE),
        })
    }

    /// Serialize as indented JSON, the form written to disk.
    pub fn to_json_pretty(&self) -> Result<String, GitDepError> {
        serde_json::to_string_pretty(self).map_err(|e| GitDepError::Manifest {
            message: format!("Failed to serialize {}: {e}", crate::MANIFEST_FILE),
        })
    }
}

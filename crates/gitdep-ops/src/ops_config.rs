//! Operation: show the resolved configuration.

use gitdep_core::configuration::ConfigTree;

/// The root configuration as manifest JSON, with every path absolute.
pub fn manifest_json(tree: &ConfigTree) -> miette::Result<String> {
    Ok(tree.root().to_manifest().to_json_pretty()?)
}

//! Visitor contract and the traversal driver.

use std::path::Path;

use gitdep_core::configuration::{ConfigTree, Dependency};
use gitdep_core::return_code::ReturnCode;

/// A strategy run once per top-level dependency and once for the root project.
pub trait Visitor {
    /// Visit one dependency of the root project.
    fn visit_dependency(&mut self, dependency: &Dependency) -> ReturnCode;

    /// Visit the root project after every dependency succeeded.
    fn visit_project(&mut self, directory: &Path, tree: &ConfigTree) -> ReturnCode;
}

/// Drive `visitor` over the root configuration of `tree`.
///
/// Dependencies are visited in declaration order. The first non-success code
/// stops the traversal and is returned; the project is then never visited.
/// Only the root's own dependency list is walked: nested configurations are
/// left to the visitor.
pub fn traverse<V: Visitor + ?Sized>(visitor: &mut V, tree: &ConfigTree) -> ReturnCode {
    for dependency in &tree.root().dependencies {
        let code = visitor.visit_dependency(dependency);
        if !code.is_success() {
            tracing::info!(
                "Stopping after {}: {code}",
                dependency.directory.display()
            );
            return code;
        }
    }
    visitor.visit_project(tree.root_dir(), tree)
}

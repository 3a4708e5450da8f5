//! Operation: display the repository dependency tree.

use std::collections::HashSet;

use gitdep_core::configuration::{ConfigId, ConfigTree, Dependency};

/// Render the tree rooted at the resolved repository.
///
/// A repository already shown elsewhere is marked `(*)` and not expanded
/// again; a dependency that failed to resolve is marked `(unresolved)`.
pub fn render(tree: &ConfigTree, max_depth: Option<usize>) -> String {
    let mut output = format!("{}\n", tree.root_dir().display());
    let mut printed = HashSet::new();
    printed.insert(tree.root_id());

    let deps = &tree.root().dependencies;
    for (i, dep) in deps.iter().enumerate() {
        let is_last = i == deps.len() - 1;
        print_subtree(tree, &mut output, dep, "", is_last, 1, max_depth, &mut printed);
    }
    output
}

#[allow(clippy::too_many_arguments)]
fn print_subtree(
    tree: &ConfigTree,
    output: &mut String,
    dep: &Dependency,
    prefix: &str,
    is_last: bool,
    depth: usize,
    max_depth: Option<usize>,
    printed: &mut HashSet<ConfigId>,
) {
    let connector = if is_last { "└── " } else { "├── " };
    let mut label = dep.directory.display().to_string();
    if let Some(ref branch) = dep.branch {
        label.push_str(&format!(" [{branch}]"));
    }

    let Some(id) = dep.configuration else {
        output.push_str(&format!("{prefix}{connector}{label} (unresolved)\n"));
        return;
    };
    if !printed.insert(id) {
        output.push_str(&format!("{prefix}{connector}{label} (*)\n"));
        return;
    }
    output.push_str(&format!("{prefix}{connector}{label}\n"));

    if let Some(max) = max_depth {
        if depth >= max {
            return;
        }
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    let deps = &tree.get(id).dependencies;
    for (i, child) in deps.iter().enumerate() {
        let is_last = i == deps.len() - 1;
        print_subtree(
            tree,
            output,
            child,
            &child_prefix,
            is_last,
            depth + 1,
            max_depth,
            printed,
        );
    }
}

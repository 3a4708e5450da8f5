//! Handler for `gitdep tree`.

use std::path::Path;

use miette::Result;

use gitdep_core::return_code::ReturnCode;
use gitdep_ops::ops_tree;

pub fn exec(start: &Path, depth: Option<usize>) -> Result<ReturnCode> {
    let tree = match super::resolve_or_report(start) {
        Ok(tree) => tree,
        Err(code) => return Ok(code),
    };
    print!("{}", ops_tree::render(&tree, depth));
    Ok(ReturnCode::Success)
}

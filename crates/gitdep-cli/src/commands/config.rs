use std::path::Path;

use miette::Result;

use gitdep_core::return_code::ReturnCode;
use gitdep_ops::ops_config;

pub fn exec(start: &Path) -> Result<ReturnCode> {
    let tree = match super::resolve_or_report(start) {
        Ok(tree) => tree,
        Err(code) => return Ok(code),
    };
    println!("{}", ops_config::manifest_json(&tree)?);
    Ok(ReturnCode::Success)
}

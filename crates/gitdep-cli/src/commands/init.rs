use std::path::Path;

use miette::Result;

use gitdep_core::return_code::ReturnCode;

pub fn exec(start: &Path) -> Result<ReturnCode> {
    let path = gitdep_ops::ops_init::init(start)?;
    println!("Created {}", path.display());
    Ok(ReturnCode::Success)
}

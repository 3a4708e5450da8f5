use std::path::{Path, PathBuf};

use miette::Result;

use gitdep_core::config::GlobalConfig;
use gitdep_core::return_code::ReturnCode;
use gitdep_ops::ops_update::{self, UpdateOptions};
use gitdep_util::progress::{status, status_error};

pub fn exec(start: &Path, cache_dir: Option<PathBuf>) -> Result<ReturnCode> {
    let tree = match super::resolve_or_report(start) {
        Ok(tree) => tree,
        Err(code) => return Ok(code),
    };

    let config = GlobalConfig::load()?;
    let mut opts = UpdateOptions::from_config(&config);
    if let Some(dir) = cache_dir {
        opts.cache_dir = dir;
    }

    let code = ops_update::update(&tree, &opts);
    if code.is_success() {
        status("Finished", &format!("updated {}", tree.root_dir().display()));
    } else {
        status_error("Failed", &code.to_string());
    }
    Ok(code)
}

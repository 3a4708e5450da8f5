//! Cache command implementation.

use miette::Result;

use gitdep_core::config::GlobalConfig;
use gitdep_core::return_code::ReturnCode;
use gitdep_ops::cache::ArtifactCache;
use gitdep_ops::ops_cache::{self, CleanResult};

use crate::cli::CacheAction;

pub fn exec(action: CacheAction) -> Result<ReturnCode> {
    let config = GlobalConfig::load()?;
    let cache = ArtifactCache::open(config.cache_dir());

    match action {
        CacheAction::Dir => match cache.dir() {
            Some(dir) => println!("{}", dir.display()),
            None => println!("Artifact cache is unavailable"),
        },
        CacheAction::List => {
            let entries = ops_cache::list(&cache);
            if entries.is_empty() {
                println!("Artifact cache is empty");
            }
            for entry in entries {
                match entry.artifact {
                    Some(artifact) => println!("{} {}", artifact.id, artifact.version),
                    None => println!("{}", entry.name),
                }
            }
        }
        CacheAction::Clean => match ops_cache::clean(&cache)? {
            CleanResult::Cleaned(n) => println!("Removed {n} cached packages"),
            CleanResult::NothingToClean => println!("Nothing to clean"),
        },
    }
    Ok(ReturnCode::Success)
}

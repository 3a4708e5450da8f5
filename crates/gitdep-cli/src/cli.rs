//! CLI argument definitions for gitdep.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gitdep",
    version,
    about = "Build dependent git repositories and update the project to their new packages",
    long_about = "gitdep reads GitDepend.json at the repository root, builds every declared \
                  dependency repository, collects the packages they produce into a shared \
                  cache, and updates the project's solutions to consume the new versions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory to start from (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build all dependencies and update the project to their new packages
    Update {
        /// Artifact cache directory (overrides the global config)
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },

    /// Print the resolved configuration as JSON
    Config,

    /// Display the dependency tree
    Tree {
        /// Maximum depth to display
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Write a default GitDepend.json at the repository root
    Init,

    /// Inspect or clear the artifact cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Print the cache directory
    Dir,
    /// List cached packages
    List,
    /// Remove all cached packages
    Clean,
}

pub fn parse() -> Cli {
    Cli::parse()
}

//! Core data types for gitdep.
//!
//! This crate defines the types that describe a tree of inter-dependent
//! repositories: the `GitDepend.json` manifest, the resolved configuration
//! arena, the recursive configuration resolver, artifact filename version
//! extraction, run return codes, and the global user configuration.
//!
//! This crate never spawns processes or writes outside of what it is asked to read.

/// Name of the per-repository manifest file.
pub const MANIFEST_FILE: &str = "GitDepend.json";

/// Entry marking a repository root (directory, or file for worktrees and submodules).
pub const REPOSITORY_MARKER: &str = ".git";

pub mod artifact;
pub mod config;
pub mod configuration;
pub mod manifest;
pub mod resolver;
pub mod return_code;

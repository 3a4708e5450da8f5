//! Shared utilities for gitdep.
//!
//! This crate provides cross-cutting concerns used by all other gitdep crates:
//! the unified error type, filesystem and path helpers, process spawning,
//! and Cargo-style terminal status lines.

pub mod errors;
pub mod fs;
pub mod process;
pub mod progress;

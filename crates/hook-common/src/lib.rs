//! Common utilities for OpenClaw gateway hooks.
//!
//! This crate provides shared functionality for all Rust-based hooks:
//! - Gateway event parsing from stdin
//! - Typed configuration lookups (workspaces, per-hook settings)
//! - Subprocess execution with timeouts
//! - Diagnostic logging

pub mod config;
pub mod debug;
pub mod event;
pub mod subprocess;

pub use config::{AgentEntry, Config};
pub use event::HookEvent;
pub use subprocess::{CommandResult, run_with_timeout};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::event::HookEvent;
    pub use crate::subprocess::{CommandResult, run_with_timeout};
    pub use anyhow::{Context, Result};
    pub use serde::{Deserialize, Serialize};
}

/// Home directory as a UTF-8 path, if resolvable.
pub fn home_dir() -> Option<camino::Utf8PathBuf> {
    dirs::home_dir().and_then(|p| camino::Utf8PathBuf::from_path_buf(p).ok())
}

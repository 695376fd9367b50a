//! Global memory injection for OpenClaw hooks.
//!
//! Provides:
//! - Memory item schema and category filters
//! - External memory-listing source adapter
//! - Item selection, ordering, and section rendering
//! - Idempotent patching of the managed document section

pub mod inject;
pub mod schema;
pub mod section;
pub mod source;

pub use inject::{render_section, select};
pub use schema::{CategoryFilter, MemoryItem};
pub use section::patch;
pub use source::{SourceError, fetch_memories};

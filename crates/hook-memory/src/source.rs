//! External memory-listing source adapter.
//!
//! Memories live outside the gateway; they are fetched by invoking the
//! MCP bridge tool and decoding its JSON output. The call is bounded,
//! never retried, and every failure mode maps to a typed error so the
//! hook can log what went wrong before degrading to a no-op.

use crate::schema::MemoryItem;
use hook_common::subprocess::run_with_timeout;
use std::time::Duration;

/// Tool invoked to list memories.
pub const MEMORY_TOOL: &str = "mcporter";

/// Fixed arguments for the listing call.
pub const MEMORY_TOOL_ARGS: &[&str] = &["call", "globalmemory.list_memories"];

/// Upper bound on the listing call.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Failure modes of the fetch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Spawn failure or timeout from the subprocess layer
    #[error(transparent)]
    Exec(#[from] anyhow::Error),

    /// Tool ran but exited non-zero
    #[error("memory tool exited with status {code:?}: {stderr}")]
    ToolFailed { code: Option<i32>, stderr: String },

    /// Output was not valid JSON
    #[error("invalid JSON from memory tool: {0}")]
    Parse(#[from] serde_json::Error),

    /// JSON decoded but was neither an array nor {"results": [...]}
    #[error("unexpected memory payload shape: expected an array or a \"results\" array")]
    Shape,
}

/// Fetch the full current set of memory items.
// TODO: at 200+ memories, switch to search_memory with a session-derived query + maxItems cap
pub fn fetch_memories() -> Result<Vec<MemoryItem>, SourceError> {
    let result = run_with_timeout(&memory_tool(), MEMORY_TOOL_ARGS, FETCH_TIMEOUT)?;

    if !result.success {
        return Err(SourceError::ToolFailed {
            code: result.exit_code,
            stderr: result.stderr.trim().to_string(),
        });
    }

    parse_payload(&result.stdout)
}

/// Decode the tool output: either a top-level array of items, or an
/// object carrying the items under "results".
pub fn parse_payload(raw: &str) -> Result<Vec<MemoryItem>, SourceError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let items = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(results @ serde_json::Value::Array(_)) => results,
            _ => return Err(SourceError::Shape),
        },
        _ => return Err(SourceError::Shape),
    };

    Ok(serde_json::from_value(items)?)
}

/// Program used for the listing call.
///
/// `OPENCLAW_MEMORY_TOOL` overrides the default, for tests and for
/// environments that wrap the bridge; the arguments never change.
fn memory_tool() -> String {
    std::env::var("OPENCLAW_MEMORY_TOOL").unwrap_or_else(|_| MEMORY_TOOL.to_string())
}

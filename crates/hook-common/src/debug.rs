//! Diagnostic logging for hooks.
//!
//! Hooks never surface errors to the gateway; this JSONL log is the only
//! record of what an invocation decided and why.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Diagnostic record for one hook invocation.
#[derive(Debug, Serialize)]
pub struct HookDiagnostic {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Hook name (e.g., "global-memory-inject")
    pub hook_name: String,
    /// Outcome (updated/skipped/failed)
    pub outcome: String,
    /// Human-readable detail for the outcome
    pub detail: String,
    /// Session key the invocation ran for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key: Option<String>,
}

impl HookDiagnostic {
    pub fn new(hook_name: &str, outcome: &str, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            hook_name: hook_name.to_string(),
            outcome: outcome.to_string(),
            detail: detail.into(),
            session_key: None,
        }
    }

    pub fn with_session(mut self, session_key: &str) -> Self {
        if !session_key.is_empty() {
            self.session_key = Some(session_key.to_string());
        }
        self
    }

    /// Append this record to the diagnostic log, if enabled.
    pub fn write(&self) -> std::io::Result<()> {
        if !is_debug_enabled() {
            return Ok(());
        }

        let log_path = debug_log_path();

        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let json = serde_json::to_string(self).unwrap_or_default();
        writeln!(file, "{}", json)?;

        Ok(())
    }
}

/// Check if diagnostic logging is enabled.
pub fn is_debug_enabled() -> bool {
    std::env::var("OPENCLAW_HOOK_DEBUG").is_ok()
}

/// Get the diagnostic log file path.
pub fn debug_log_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".openclaw").join("logs").join("hook-debug.jsonl")
}

/// Quick helper to record a hook outcome.
pub fn log_outcome(hook_name: &str, session_key: &str, outcome: &str, detail: &str) {
    let diag = HookDiagnostic::new(hook_name, outcome, detail).with_session(session_key);
    let _ = diag.write();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_serialization() {
        let diag = HookDiagnostic::new("global-memory-inject", "skipped", "USER.md missing")
            .with_session("agent:r2d2:main");

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("global-memory-inject"));
        assert!(json.contains("skipped"));
        assert!(json.contains("agent:r2d2:main"));
    }

    #[test]
    fn test_empty_session_key_omitted() {
        let diag = HookDiagnostic::new("global-memory-inject", "failed", "boom").with_session("");
        let json = serde_json::to_string(&diag).unwrap();
        assert!(!json.contains("session_key"));
    }
}

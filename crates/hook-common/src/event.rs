//! Gateway event parsing from stdin.

use crate::config::Config;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Read};

/// Main event structure received from the OpenClaw gateway.
///
/// The gateway sends loosely-typed JSON; every field defaults so that a
/// partial payload still parses, and unknown fields are retained verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookEvent {
    /// Event classification (e.g., "command", "message")
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Action within the classification (e.g., "new", "reset")
    #[serde(default)]
    pub action: String,

    /// Session key of form "<scope>:<agentId>:<sub-scope>"
    #[serde(rename = "sessionKey", default)]
    pub session_key: String,

    /// Event context (configuration snapshot and more)
    #[serde(default)]
    pub context: EventContext,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Context attached to a gateway event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventContext {
    /// Gateway configuration snapshot
    #[serde(default)]
    pub cfg: Config,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl HookEvent {
    /// Read and parse the triggering event from stdin.
    pub fn from_stdin() -> anyhow::Result<Self> {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let parsed: HookEvent = serde_json::from_str(&input)?;
        Ok(parsed)
    }

    /// Check if this is a "new session" command event.
    pub fn is_new_command(&self) -> bool {
        self.kind == "command" && self.action == "new"
    }

    /// Extract the agent id from the session key.
    ///
    /// Session keys look like "agent:r2d2:main"; the agent id is the second
    /// colon-delimited segment. Returns `None` when the segment is missing
    /// or empty.
    pub fn agent_id(&self) -> Option<&str> {
        self.session_key
            .split(':')
            .nth(1)
            .filter(|id| !id.is_empty())
    }
}

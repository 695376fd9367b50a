//! Typed view of the gateway configuration snapshot.
//!
//! The gateway hands hooks a loosely-typed `cfg` object; this module mirrors
//! the parts hooks care about with explicit optional fields and documented
//! defaulting, so lookups happen once at the boundary instead of via ad hoc
//! chains of optional accesses.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Gateway configuration snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Configured agents
    #[serde(default)]
    pub agents: AgentsConfig,

    /// Hook configuration
    #[serde(default)]
    pub hooks: HooksConfig,

    /// Additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Agent section of the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentsConfig {
    #[serde(default)]
    pub list: Vec<AgentEntry>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// A single configured agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentEntry {
    #[serde(default)]
    pub id: String,

    /// Explicit workspace path; may start with "~"
    #[serde(default)]
    pub workspace: Option<String>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Hooks section of the configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HooksConfig {
    #[serde(default)]
    pub internal: InternalHooks,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Internal (gateway-bundled) hook entries, keyed by hook name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternalHooks {
    #[serde(default)]
    pub entries: HashMap<String, HookEntry>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Per-hook configuration entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HookEntry {
    /// Per-agent category allow-lists, keyed by agent id (case-sensitive).
    /// Values are kept loose so a misconfigured non-array degrades to
    /// "no filter" instead of failing the whole event parse.
    #[serde(rename = "agentCategories", default)]
    pub agent_categories: HashMap<String, serde_json::Value>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Resolve the workspace directory for an agent.
    ///
    /// Precedence: an explicit `workspace` on the matching agent entry
    /// (agent ids compared case-insensitively, a leading "~" expanded to
    /// `home`), otherwise the deterministic fallback
    /// `home/.openclaw/workspace-<agentId>`. Unknown agents are not an
    /// error; the fallback always applies.
    pub fn workspace_dir(&self, agent_id: &str, home: &Utf8Path) -> Utf8PathBuf {
        let entry = self
            .agents
            .list
            .iter()
            .find(|a| a.id.eq_ignore_ascii_case(agent_id));

        if let Some(workspace) = entry.and_then(|a| a.workspace.as_deref()) {
            return match workspace.strip_prefix('~') {
                Some(rest) => Utf8PathBuf::from(format!("{home}{rest}")),
                None => Utf8PathBuf::from(workspace),
            };
        }

        home.join(".openclaw").join(format!("workspace-{agent_id}"))
    }

    /// Look up the category allow-list a hook declares for an agent.
    ///
    /// Returns `None` (meaning: no filter, inject everything) when the
    /// hook entry or the agent key is absent, the value is not an array,
    /// or the array is empty. Otherwise returns the declared string
    /// elements verbatim.
    pub fn allowed_categories(&self, hook_name: &str, agent_id: &str) -> Option<Vec<String>> {
        let value = self
            .hooks
            .internal
            .entries
            .get(hook_name)?
            .agent_categories
            .get(agent_id)?;

        let arr = value.as_array().filter(|a| !a.is_empty())?;
        Some(
            arr.iter()
                .filter_map(|v| v.as_str())
                .map(str::to_string)
                .collect(),
        )
    }
}

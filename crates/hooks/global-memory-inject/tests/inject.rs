//! End-to-end tests for the global-memory-inject hook binary.
//!
//! Each test runs the binary against a throwaway HOME with a stub memory
//! tool standing in for mcporter (selected via OPENCLAW_MEMORY_TOOL).

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

const SECTION_HEADER: &str = "## 🌐 Global Memory";
const SECTION_NOTICE: &str =
    "> ⚡ Auto-updated on every /new — do not edit this section manually.";

/// Fixture: temp HOME with the default workspace for `agent_id` and a
/// stub memory tool that prints `payload` (or fails when `payload` is
/// None).
struct Fixture {
    home: TempDir,
    tool: PathBuf,
    user_md: PathBuf,
}

impl Fixture {
    fn new(agent_id: &str, payload: Option<&str>) -> Self {
        let home = TempDir::new().unwrap();
        let workspace = home
            .path()
            .join(".openclaw")
            .join(format!("workspace-{agent_id}"));
        fs::create_dir_all(&workspace).unwrap();
        let user_md = workspace.join("USER.md");

        let tool = home.path().join("stub-memory-tool");
        let script = match payload {
            Some(json) => format!("#!/bin/sh\ncat <<'EOF'\n{json}\nEOF\n"),
            None => "#!/bin/sh\necho 'bridge unavailable' >&2\nexit 1\n".to_string(),
        };
        fs::write(&tool, script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        Self { home, tool, user_md }
    }

    fn write_user_md(&self, content: &str) {
        fs::write(&self.user_md, content).unwrap();
    }

    fn user_md(&self) -> String {
        fs::read_to_string(&self.user_md).unwrap()
    }

    fn run(&self, event: &str) -> assert_cmd::assert::Assert {
        Command::cargo_bin("global-memory-inject")
            .unwrap()
            .env("HOME", self.home.path())
            .env("OPENCLAW_MEMORY_TOOL", &self.tool)
            .env_remove("OPENCLAW_HOOK_DEBUG")
            .write_stdin(event)
            .assert()
    }
}

fn new_session_event(session_key: &str, cfg: &str) -> String {
    format!(
        r#"{{"type": "command", "action": "new", "sessionKey": "{session_key}", "context": {{"cfg": {cfg}}}}}"#
    )
}

const TWO_ITEMS: &str =
    r#"[{"memory":"likes tea","categories":["pref"]},{"memory":"uncategorized note"}]"#;

#[test]
fn injects_section_on_new_session() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md("Hello\n");

    fx.run(&new_session_event("agent:r2d2:main", "{}"))
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(
        fx.user_md(),
        format!(
            "Hello\n\n{SECTION_HEADER}\n\n{SECTION_NOTICE}\n\n- [pref] likes tea\n- uncategorized note\n"
        )
    );
}

#[test]
fn second_run_is_idempotent() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md("Hello\n");
    let event = new_session_event("agent:r2d2:main", "{}");

    fx.run(&event).success();
    let first = fx.user_md();
    fx.run(&event).success();
    assert_eq!(fx.user_md(), first);
}

#[test]
fn content_after_section_is_preserved() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md(&format!(
        "# Profile\n\nintro\n\n{SECTION_HEADER}\n\nstale line\n\n## Notes\n\nkeep this\n"
    ));

    fx.run(&new_session_event("agent:r2d2:main", "{}")).success();

    let updated = fx.user_md();
    assert!(updated.starts_with("# Profile\n\nintro\n\n"));
    assert!(updated.ends_with("\n## Notes\n\nkeep this\n"));
    assert!(!updated.contains("stale line"));
    assert!(updated.contains("- [pref] likes tea"));
}

#[test]
fn ignores_other_events() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md("untouched\n");

    let event = r#"{"type": "command", "action": "reset", "sessionKey": "agent:r2d2:main"}"#;
    fx.run(event)
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(fx.user_md(), "untouched\n");
}

#[test]
fn missing_user_md_is_a_noop() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));

    fx.run(&new_session_event("agent:r2d2:main", "{}"))
        .success()
        .stderr(predicate::str::is_empty());

    assert!(!fx.user_md.exists());
}

#[test]
fn fetch_failure_leaves_document_untouched() {
    let fx = Fixture::new("r2d2", None);
    fx.write_user_md("untouched\n");

    fx.run(&new_session_event("agent:r2d2:main", "{}"))
        .success()
        .stderr(predicate::str::contains("[global-memory-inject]"));

    assert_eq!(fx.user_md(), "untouched\n");
}

#[test]
fn fully_filtered_selection_is_a_noop() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md("untouched\n");

    let cfg = r#"{"hooks": {"internal": {"entries": {"global-memory-inject":
        {"agentCategories": {"r2d2": ["infra"]}}}}}}"#;
    fx.run(&new_session_event("agent:r2d2:main", cfg))
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(fx.user_md(), "untouched\n");
}

#[test]
fn category_filter_restricts_items() {
    let payload = r#"[
        {"memory":"likes tea","categories":["pref"]},
        {"memory":"prod is flaky","categories":["infra"]},
        {"memory":"uncategorized note"}
    ]"#;
    let fx = Fixture::new("r2d2", Some(payload));
    fx.write_user_md("Hello\n");

    let cfg = r#"{"hooks": {"internal": {"entries": {"global-memory-inject":
        {"agentCategories": {"r2d2": ["pref"]}}}}}}"#;
    fx.run(&new_session_event("agent:r2d2:main", cfg)).success();

    let updated = fx.user_md();
    assert!(updated.contains("- [pref] likes tea"));
    assert!(!updated.contains("prod is flaky"));
    assert!(!updated.contains("uncategorized note"));
}

#[test]
fn explicit_workspace_from_config_is_used() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    let custom = fx.home.path().join("custom-workspace");
    fs::create_dir_all(&custom).unwrap();
    fs::write(custom.join("USER.md"), "custom\n").unwrap();

    let cfg = r#"{"agents": {"list": [{"id": "R2D2", "workspace": "~/custom-workspace"}]}}"#;
    fx.run(&new_session_event("agent:r2d2:main", cfg)).success();

    let updated = fs::read_to_string(custom.join("USER.md")).unwrap();
    assert!(updated.contains(SECTION_HEADER));
    // The default workspace's USER.md was never created.
    assert!(!fx.user_md.exists());
}

#[test]
fn unresolvable_agent_id_is_a_noop() {
    let fx = Fixture::new("r2d2", Some(TWO_ITEMS));
    fx.write_user_md("untouched\n");

    let event = r#"{"type": "command", "action": "new", "sessionKey": "agent"}"#;
    fx.run(event).success().stderr(predicate::str::is_empty());

    assert_eq!(fx.user_md(), "untouched\n");
}

#[test]
fn results_object_payload_is_accepted() {
    let payload = r#"{"results": [{"memory": "from results", "categories": ["misc"]}]}"#;
    let fx = Fixture::new("r2d2", Some(payload));
    fx.write_user_md("Hello\n");

    fx.run(&new_session_event("agent:r2d2:main", "{}")).success();

    assert!(fx.user_md().contains("- [misc] from results"));
}

#[test]
fn empty_listing_is_a_noop() {
    let fx = Fixture::new("r2d2", Some("[]"));
    fx.write_user_md("untouched\n");

    fx.run(&new_session_event("agent:r2d2:main", "{}"))
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(fx.user_md(), "untouched\n");
}

//! Session hook: refresh the Global Memory section of USER.md.
//!
//! On a /new command event, fetches the global memory list, applies the
//! agent's category allow-list, and idempotently rewrites the
//! "## 🌐 Global Memory" section of the agent workspace's USER.md.
//! Every failure mode degrades to a no-op; nothing propagates to the
//! gateway.

use anyhow::{Context, Result};
use hook_common::debug::log_outcome;
use hook_common::event::HookEvent;
use hook_memory::schema::CategoryFilter;
use hook_memory::{fetch_memories, patch, render_section, select};
use std::fs;

const HOOK_NAME: &str = "global-memory-inject";

/// What an invocation did, distinguishing a clean skip from a failure
/// (failures travel as `Err` and are caught in `main`).
#[derive(Debug)]
enum Outcome {
    /// USER.md rewritten with this many items
    Updated { injected: usize },
    /// Nothing written, and that is fine
    Skipped(Skip),
}

#[derive(Debug)]
enum Skip {
    NotNewCommand,
    UnresolvedWorkspace,
    MissingUserFile,
    NoItems,
    NoneSelected,
}

fn main() -> Result<()> {
    let event = match HookEvent::from_stdin() {
        Ok(event) => event,
        Err(err) => {
            eprintln!("[{HOOK_NAME}] {err:#}");
            log_outcome(HOOK_NAME, "", "failed", &format!("bad event payload: {err:#}"));
            return Ok(());
        }
    };

    match run(&event) {
        Ok(Outcome::Updated { injected }) => {
            log_outcome(
                HOOK_NAME,
                &event.session_key,
                "updated",
                &format!("injected {injected} memories"),
            );
        }
        Ok(Outcome::Skipped(skip)) => {
            log_outcome(HOOK_NAME, &event.session_key, "skipped", &format!("{skip:?}"));
        }
        Err(err) => {
            eprintln!("[{HOOK_NAME}] {err:#}");
            log_outcome(HOOK_NAME, &event.session_key, "failed", &format!("{err:#}"));
        }
    }

    Ok(())
}

fn run(event: &HookEvent) -> Result<Outcome> {
    if !event.is_new_command() {
        return Ok(Outcome::Skipped(Skip::NotNewCommand));
    }

    let cfg = &event.context.cfg;
    let (Some(agent_id), Some(home)) = (event.agent_id(), hook_common::home_dir()) else {
        return Ok(Outcome::Skipped(Skip::UnresolvedWorkspace));
    };

    let user_md = cfg.workspace_dir(agent_id, &home).join("USER.md");
    if !user_md.exists() {
        // The hook refreshes an existing file; it never creates one.
        return Ok(Outcome::Skipped(Skip::MissingUserFile));
    }

    let items = fetch_memories().context("fetching global memories")?;
    if items.is_empty() {
        return Ok(Outcome::Skipped(Skip::NoItems));
    }

    let filter = CategoryFilter::from_allowed(cfg.allowed_categories(HOOK_NAME, agent_id));
    let selected = select(items, &filter);
    if selected.is_empty() {
        return Ok(Outcome::Skipped(Skip::NoneSelected));
    }

    let section = render_section(&selected);
    let existing =
        fs::read_to_string(&user_md).with_context(|| format!("reading {user_md}"))?;
    let updated = patch(&existing, &section);
    fs::write(&user_md, updated).with_context(|| format!("writing {user_md}"))?;

    Ok(Outcome::Updated {
        injected: selected.len(),
    })
}

//! Idempotent patching of the managed document section.
//!
//! The managed region starts at the fixed header line and runs to the next
//! top-level "## " heading, or to end of file. Everything outside that
//! region is preserved byte for byte; the region itself is always fully
//! replaced, never merged. Detection is plain substring matching on the
//! header, so a coincidental occurrence of the header text in ordinary
//! prose is treated as the section (accepted limitation).

/// Header line opening the managed section.
pub const SECTION_HEADER: &str = "## 🌐 Global Memory";

/// Notice rendered under the header.
pub const SECTION_NOTICE: &str =
    "> ⚡ Auto-updated on every /new — do not edit this section manually.";

/// Replace the managed section of `existing` with `section`, or append it.
///
/// `section` must start with [`SECTION_HEADER`] and carry no trailing
/// newline; this function owns the separators around it. Patching the
/// same document with the same section twice yields identical bytes.
pub fn patch(existing: &str, section: &str) -> String {
    match existing.find(SECTION_HEADER) {
        Some(start) => {
            // Boundary: next top-level heading after the header line.
            let boundary = existing[start + 1..]
                .find("\n## ")
                .map(|offset| start + 1 + offset);
            match boundary {
                Some(next) => {
                    format!("{}{}\n{}", &existing[..start], section, &existing[next..])
                }
                None => format!("{}{}\n", &existing[..start], section),
            }
        }
        None => format!("{}\n\n{}\n", existing.trim_end(), section),
    }
}

//! Competitions command implementation

use crate::Competition;

/// Printed under the listing; the built-in ids are unconfirmed.
pub const PLACEHOLDER_NOTE: &str =
    "Note: these ids are placeholders. Pass --competition-id with the provider's id for live requests.";

/// One `label<TAB>id (placeholder)` line per known competition, then the note.
pub fn render_competitions() -> String {
    let mut lines: Vec<String> = Competition::ALL
        .iter()
        .map(|c| format!("{}\t{} (placeholder)", c.label(), c.id()))
        .collect();
    lines.push(PLACEHOLDER_NOTE.to_string());
    lines.join("\n")
}

/// Handle the competitions command
pub fn handle_competitions() {
    println!("{}", render_competitions());
}

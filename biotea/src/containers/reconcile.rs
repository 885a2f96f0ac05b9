use colored::Colorize;
use std::collections::BTreeSet;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledTag {
    pub tag: String,
    pub installed: bool,
}

/// Flags every available tag that is also installed. Keeps the length and
/// order of `available`.
#[must_use]
pub fn reconcile(installed: &BTreeSet<String>, available: &[String]) -> Vec<ReconciledTag> {
    available
        .iter()
        .map(|tag| ReconciledTag {
            tag: tag.clone(),
            installed: installed.contains(tag),
        })
        .collect()
}

/// Installed tags are listed sorted, available tags keep registry order with
/// the installed ones in green.
#[must_use]
pub fn render_listing(installed: &BTreeSet<String>, reconciled: &[ReconciledTag]) -> String {
    let installed = join_or_none(installed.iter().map(ToString::to_string));
    let available = join_or_none(reconciled.iter().map(|entry| {
        if entry.installed {
            entry.tag.bright_green().to_string()
        } else {
            entry.tag.clone()
        }
    }));

    let mut out = String::new();
    let _ = writeln!(out, "{}", "--- Container Info ---".bright_blue());
    let _ = writeln!(out, "Locally installed: {installed}");
    let _ = writeln!(out, "Remotely available: {available}");
    let _ = writeln!(
        out,
        "{} Remote containers installed locally are highlighted in green.",
        "Note:".bright_green()
    );
    let _ = writeln!(out, "{}", "----------------------".bright_blue());
    out
}

fn join_or_none(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

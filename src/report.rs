//! Text report rendering.
//!
//! Pure renderers: each returns a `String` and never prints. Section layout
//! follows the historical output of the tool (a header line, body lines,
//! then one blank line).

use std::fmt::Write;

use crate::bfs::all_distances;
use crate::resolver::{Outcome, Resolution};
use crate::store::SocialStore;

/// Verdict printed when every plotter is covered.
pub const SAFE_VERDICT: &str = "The stone is safe!";

/// Verdict printed otherwise.
pub const TREASON_VERDICT: &str = "There is only one way out: treason!";

/// Line printed under "Conspiracies:" when the queen is absent.
pub const NO_QUEEN_LINE: &str = "No queen in the graph => no resolution possible.";

/// `"Degree of separation between <a> and <b>: <d>"`.
pub fn render_links(from: &str, to: &str, degree: i64) -> String {
    format!("Degree of separation between {from} and {to}: {degree}\n")
}

/// Sorted name listing.
pub fn render_names(names: &[&str]) -> String {
    let mut out = String::from("Names:\n");
    for name in names {
        let _ = writeln!(out, "{name}");
    }
    out.push('\n');
    out
}

/// Distance matrix over `names`, in the given order.
///
/// A cell holds the friendship distance, `0` when the distance exceeds
/// `max_distance`, and `-1` when there is no path.
pub fn render_relationships<S: SocialStore + ?Sized>(store: &S, names: &[&str], max_distance: u32) -> String {
    let ids: Vec<_> = names.iter().map(|name| store.find_node(name)).collect();

    let mut out = String::from("Relationships:\n");
    for row in &ids {
        let distances = row.map(|id| all_distances(store, id)).unwrap_or_default();
        let cells: Vec<String> = ids
            .iter()
            .map(|col| match col.and_then(|id| distances.get(&id)) {
                Some(d) if *d <= max_distance => d.to_string(),
                Some(_) => "0".to_string(),
                None => "-1".to_string(),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out.push('\n');
    out
}

/// Committed chains and uncovered plotters.
pub fn render_conspiracies(resolution: &Resolution) -> String {
    let mut out = String::from("Conspiracies:\n");
    if resolution.outcome == Outcome::NoQueen {
        let _ = writeln!(out, "{NO_QUEEN_LINE}");
    } else {
        for chain in resolution.chains_in_report_order() {
            let _ = writeln!(out, "{chain}");
        }
        for plotter in &resolution.allocation.unassignable {
            let _ = writeln!(out, "No conspiracy possible against {plotter}");
        }
    }
    out.push('\n');
    out
}

/// Final verdict.
pub fn render_result(resolution: &Resolution) -> String {
    let verdict = if resolution.is_resolved() {
        SAFE_VERDICT
    } else {
        TREASON_VERDICT
    };
    format!("Result:\n{verdict}\n")
}

/// Full `plots` report: names, relationships, conspiracies, result.
pub fn render_plot_report<S: SocialStore + ?Sized>(
    store: &S,
    names: &[&str],
    max_distance: u32,
    resolution: &Resolution,
) -> String {
    let mut out = render_names(names);
    out.push_str(&render_relationships(store, names, max_distance));
    out.push_str(&render_conspiracies(resolution));
    out.push_str(&render_result(resolution));
    out
}

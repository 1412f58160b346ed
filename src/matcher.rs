use std::collections::BTreeSet;

use crate::graph::{GraphKey, LabeledMultigraph};

/// Node identifiers a typed name may refer to, sorted and deduplicated.
///
/// An exact match short-circuits. Otherwise a node matches when it equals or
/// contains the query ignoring case, or when it lists aliases separated by
/// `/` and the query starts with one of them (single letters are skipped).
pub fn resolve_candidates<L: GraphKey>(
    graph: &LabeledMultigraph<String, L>,
    query: &str,
) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_string();
    if graph.contains_node(&query) {
        return vec![query];
    }
    let needle = query.to_lowercase();
    graph
        .list_nodes()
        .filter(|node| is_candidate(node, &needle))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn is_candidate(node: &str, needle: &str) -> bool {
    let lowered = node.to_lowercase();
    if lowered.contains(needle) {
        return true;
    }
    node.contains('/')
        && lowered
            .split('/')
            .map(str::trim)
            .filter(|alias| alias.chars().count() > 1)
            .any(|alias| needle.starts_with(alias))
}

//! Builds a co-appearance graph from group memberships.
//!
//! Every group becomes a directed clique: for each ordered pair of distinct
//! members `(m, n)` the edge `m -> n` is labeled with the group key. A group
//! of `k` members yields up to `k * (k - 1)` edges, so total build cost is
//! `O(sum of |group|^2)` and one very large group dominates the build. That
//! is a property of the model; callers with such groups pay for it.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{GraphKey, LabeledMultigraph};

/// Group key (book title) to the set of members (character names) appearing in it.
pub type GroupMap = BTreeMap<String, BTreeSet<String>>;

/// Builds the string graph, treating members that differ only in case as the
/// same entity for self-loop exclusion. Node identity stays exact.
pub fn build_graph(groups: &GroupMap) -> LabeledMultigraph<String, String> {
    build_graph_with(
        groups.iter().map(|(book, heroes)| (book.clone(), heroes.iter().cloned())),
        |a: &String, b: &String| same_ignoring_case(a, b),
    )
}

/// Generic clique builder. `same` decides whether two members denote one
/// entity; no edge is added between such a pair.
pub fn build_graph_with<N, L, G, M, F>(groups: G, same: F) -> LabeledMultigraph<N, L>
where
    N: GraphKey,
    L: GraphKey,
    G: IntoIterator<Item = (L, M)>,
    M: IntoIterator<Item = N>,
    F: Fn(&N, &N) -> bool,
{
    let mut graph = LabeledMultigraph::new();
    for (label, members) in groups {
        let members: Vec<N> = members.into_iter().collect();
        for member in &members {
            graph.add_node(member.clone());
        }
        for from in &members {
            for to in &members {
                if same(from, to) {
                    continue;
                }
                // both endpoints were added above
                let _ = graph.add_edge(from, to, label.clone());
            }
        }
    }
    graph
}

pub fn same_ignoring_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

use std::{cmp::Ordering, collections::VecDeque};

use crate::{
    errors::GraphError,
    graph::{EdgeRef, GraphKey, LabeledEdge, LabeledMultigraph},
};

/// Ordered edges leading from the source to the target.
pub type Path<N, L> = Vec<LabeledEdge<N, L>>;

/// One hop of a recorded path: the source slot and the position of the edge
/// in that slot's child list.
#[derive(Clone, Copy)]
struct Step {
    from: usize,
    child: usize,
}

/// Default expansion order: destination identifier first, then label.
pub fn by_destination_then_label<N: Ord, L: Ord>(
    a: &EdgeRef<'_, N, L>,
    b: &EdgeRef<'_, N, L>,
) -> Ordering {
    a.to.cmp(b.to).then_with(|| a.label.cmp(b.label))
}

/// Shortest path by edge count from `source` to `target`.
///
/// Returns `Ok(Some(path))` when found (empty when both ends are the same
/// node), `Ok(None)` when the target is unreachable, and an error when the
/// graph is empty or either endpoint is missing. Among equally short paths
/// the one whose edges are smallest under [`by_destination_then_label`] at
/// each hop wins, so repeated calls agree.
pub fn find_path<N: GraphKey, L: GraphKey>(
    graph: &LabeledMultigraph<N, L>,
    source: &N,
    target: &N,
) -> Result<Option<Path<N, L>>, GraphError> {
    find_path_by(graph, source, target, by_destination_then_label::<N, L>)
}

/// Same as [`find_path`] with a caller supplied expansion order.
pub fn find_path_by<N, L, F>(
    graph: &LabeledMultigraph<N, L>,
    source: &N,
    target: &N,
    order: F,
) -> Result<Option<Path<N, L>>, GraphError>
where
    N: GraphKey,
    L: GraphKey,
    F: Fn(&EdgeRef<'_, N, L>, &EdgeRef<'_, N, L>) -> Ordering,
{
    if graph.is_empty() {
        return Err(GraphError::invalid_graph(format!(
            "cannot search from {source:?} to {target:?} in an empty graph"
        )));
    }
    let start = graph
        .slot(source)
        .ok_or_else(|| GraphError::not_found(format!("{source:?}")))?;
    let goal = graph
        .slot(target)
        .ok_or_else(|| GraphError::not_found(format!("{target:?}")))?;
    if start == goal {
        return Ok(Some(Vec::new()));
    }

    // paths[slot] is set once, when the slot is first enqueued
    let mut paths: Vec<Option<Vec<Step>>> = vec![None; graph.size()];
    paths[start] = Some(Vec::new());
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        if node == goal {
            return Ok(paths[node].take().map(|steps| materialize(graph, &steps)));
        }
        let mut edges: Vec<(usize, EdgeRef<'_, N, L>)> = (0..graph.child_slots(node).len())
            .map(|pos| (pos, edge_at(graph, node, pos)))
            .collect();
        edges.sort_by(|a, b| order(&a.1, &b.1));
        let base = paths[node].clone().unwrap_or_default();
        for (pos, _) in edges {
            let next = graph.child_slots(node)[pos].to;
            if paths[next].is_some() {
                continue;
            }
            let mut path = base.clone();
            path.push(Step {
                from: node,
                child: pos,
            });
            paths[next] = Some(path);
            queue.push_back(next);
        }
    }
    Ok(None)
}

fn edge_at<N: GraphKey, L: GraphKey>(
    graph: &LabeledMultigraph<N, L>,
    slot: usize,
    pos: usize,
) -> EdgeRef<'_, N, L> {
    let child = &graph.child_slots(slot)[pos];
    EdgeRef {
        from: graph.node_at(slot),
        to: graph.node_at(child.to),
        label: &child.label,
    }
}

fn materialize<N: GraphKey, L: GraphKey>(
    graph: &LabeledMultigraph<N, L>,
    steps: &[Step],
) -> Path<N, L> {
    steps
        .iter()
        .map(|step| edge_at(graph, step.from, step.child).to_edge())
        .collect()
}

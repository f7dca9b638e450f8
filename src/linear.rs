//! Plain recursive depth-first search with a per-vertex state vector.
//!
//! Uses `O(n)` auxiliary memory and the call stack. It exists as the reference
//! the constant-memory traversal is checked against.

use crate::{
    codec::neighbors,
    errors::DfsError,
    layout::vertex_count,
    validate::{validate_sorted, validate_start},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VertexState {
    Unexplored,
    Open,
    Closed,
}

/// Depth-first traversal of the sorted-layout `graph` from the 0-indexed
/// `start`, reporting events in the same convention as
/// [`traverse`](crate::traverse).
pub fn dfs_linear_memory<E, L>(
    graph: &[i64],
    start: usize,
    mut on_enter: E,
    mut on_leave: L,
) -> Result<(), DfsError>
where
    E: FnMut(usize),
    L: FnMut(usize),
{
    validate_sorted(graph)?;
    validate_start(graph, start)?;
    let mut states = vec![VertexState::Unexplored; vertex_count(graph)];
    visit(graph, start, &mut states, &mut on_enter, &mut on_leave);
    Ok(())
}

fn visit<E, L>(
    graph: &[i64],
    current: usize,
    states: &mut [VertexState],
    on_enter: &mut E,
    on_leave: &mut L,
) where
    E: FnMut(usize),
    L: FnMut(usize),
{
    on_enter(current);
    states[current] = VertexState::Open;
    for next in neighbors(graph, current) {
        if states[next] == VertexState::Unexplored {
            visit(graph, next, states, on_enter, on_leave);
        }
    }
    states[current] = VertexState::Closed;
    on_leave(current);
}

//! Cell layout shared by every representation of the graph array.
//!
//! ```text
//! [ n | slot(1) .. slot(n) | m | edge .. edge ]
//!   0   1          n         n+1 n+2      n+m+1
//! ```
//!
//! Vertex ids are 1-indexed inside the array. Public entry points take and
//! report 0-indexed ids and convert at the boundary.

use std::ops::Range;

/// Number of vertices stored in cell 0.
pub fn vertex_count(graph: &[i64]) -> usize {
    graph[0] as usize
}

/// Number of edges stored in cell `n + 1`.
pub fn edge_count(graph: &[i64]) -> usize {
    graph[vertex_count(graph) + 1] as usize
}

/// Indices of the vertex slots, `1..=n`.
pub fn vertex_slots(graph: &[i64]) -> Range<usize> {
    1..vertex_count(graph) + 1
}

/// Indices of the edge slots, `n+2 .. n+m+2`.
pub fn edge_slots(graph: &[i64]) -> Range<usize> {
    let n = vertex_count(graph);
    n + 2..n + edge_count(graph) + 2
}

/// One past the last edge slot; also the offset of every trailing empty list.
pub fn end_of_edges(graph: &[i64]) -> usize {
    vertex_count(graph) + edge_count(graph) + 2
}

/// Whether `value` names a vertex, i.e. lies in `[1, n]`.
pub fn is_vertex(graph: &[i64], value: i64) -> bool {
    value >= 1 && value <= graph[0]
}

/// Whether `value` addresses an edge slot.
pub fn is_pointer(graph: &[i64], value: i64) -> bool {
    value >= graph[0] + 2 && (value as usize) < end_of_edges(graph)
}

/// Whether `vertex` has no outgoing edges in the pointer or swapped layout.
///
/// Such vertices keep a self-referential slot; the traversal may negate it.
pub fn is_degree_zero(graph: &[i64], vertex: usize) -> bool {
    graph[vertex].unsigned_abs() as usize == vertex
}

/// Whether the edge slot `index` holds the marker that opens a vertex's list
/// in the swapped layout.
///
/// Unvisited markers carry the positive vertex name; open and finished
/// markers are negative.
pub fn is_starting(graph: &[i64], index: usize) -> bool {
    let value = graph[index];
    value < 0 || (is_vertex(graph, value) && !is_degree_zero(graph, value as usize))
}

/// Offset one past the sorted neighbor list of `vertex` (1-indexed).
pub(crate) fn sorted_list_end(graph: &[i64], vertex: usize) -> usize {
    if vertex < vertex_count(graph) {
        graph[vertex + 1] as usize
    } else {
        end_of_edges(graph)
    }
}

//! In-place conversions between the sorted, pointer and swapped layouts.
//!
//! Every transform runs in `O(n + m)` time with a constant number of scalar
//! temporaries. The transforms are total over arrays that satisfy the layout
//! invariants; feeding an array in the wrong layout is a caller error that is
//! only caught by the debug assertions.

use std::{iter::FusedIterator, slice};

use log::debug;

use crate::layout::{
    edge_slots, end_of_edges, is_degree_zero, is_pointer, is_starting, is_vertex,
    sorted_list_end, vertex_slots,
};

pub use crate::layout::{edge_count, vertex_count};

/// Ordered neighbors of one vertex in the sorted layout, as 0-indexed ids.
///
/// Cloning the iterator restarts the enumeration from the current point.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    cells: slice::Iter<'a, i64>,
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.cells.next().map(|&cell| cell as usize - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}
impl FusedIterator for Neighbors<'_> {}

/// Neighbors of the 0-indexed `vertex` in a sorted-layout graph.
///
/// # Panics
///
/// Panics if `vertex` is not below `vertex_count(graph)`.
pub fn neighbors(graph: &[i64], vertex: usize) -> Neighbors<'_> {
    Neighbors {
        cells: neighbor_cells(graph, vertex).iter(),
    }
}

/// Out-degree of the 0-indexed `vertex` in a sorted-layout graph.
pub fn degree(graph: &[i64], vertex: usize) -> usize {
    neighbor_cells(graph, vertex).len()
}

pub(crate) fn neighbor_cells(graph: &[i64], vertex: usize) -> &[i64] {
    assert!(
        vertex < vertex_count(graph),
        "vertex {vertex} out of range for {} vertices",
        vertex_count(graph)
    );
    let slot = vertex + 1;
    &graph[graph[slot] as usize..sorted_list_end(graph, slot)]
}

/// Sorted layout to pointer layout.
///
/// The edge pass resolves every neighbor id through its vertex slot and must
/// run before the degree-zero pass, which replaces empty-span offsets with a
/// self-referential slot.
pub fn sorted_to_pointer(graph: &mut [i64]) {
    debug!("converting sorted layout to pointer layout");
    for index in edge_slots(graph) {
        let target = graph[index] as usize;
        debug_assert!(is_vertex(graph, graph[index]), "edge {index} out of range");
        if (graph[target] as usize) < sorted_list_end(graph, target) {
            graph[index] = graph[target];
        }
    }
    for vertex in vertex_slots(graph) {
        if graph[vertex] as usize == sorted_list_end(graph, vertex) {
            graph[vertex] = vertex as i64;
        }
    }
}

/// Pointer layout to swapped layout.
///
/// Each vertex with edges trades its slot with its first edge, leaving its own
/// name in the first edge slot as the marker of its list.
pub fn pointer_to_swap(graph: &mut [i64]) {
    debug!("converting pointer layout to swapped layout");
    for vertex in vertex_slots(graph) {
        if graph[vertex] != vertex as i64 {
            let first = graph[vertex] as usize;
            debug_assert!(is_pointer(graph, graph[vertex]), "vertex {vertex} slot");
            graph[vertex] = graph[first];
            graph[first] = vertex as i64;
        }
    }
}

/// Swapped layout back to pointer layout.
///
/// Walks the edge region from the back; every marker sends the first edge
/// home and gets the list offset written into its vertex slot.
pub fn swap_to_pointer(graph: &mut [i64]) {
    debug!("converting swapped layout to pointer layout");
    for index in edge_slots(graph).rev() {
        if is_starting(graph, index) {
            let vertex = graph[index] as usize;
            debug_assert!(graph[index] > 0, "marker {index} still tagged");
            graph[index] = graph[vertex];
            graph[vertex] = index as i64;
        }
    }
}

/// Swapped layout directly to sorted layout.
///
/// Resolved names are parked as negative values so they can't be mistaken
/// for markers until the markers themselves have been unwound.
pub fn swap_to_sorted(graph: &mut [i64]) {
    debug!("converting swapped layout to sorted layout");
    let n = vertex_count(graph);
    for index in edge_slots(graph) {
        let value = graph[index];
        if value as usize > n {
            graph[index] = -graph[value as usize];
        } else if is_degree_zero(graph, value as usize) {
            graph[index] = -value;
        }
    }
    for vertex in vertex_slots(graph) {
        let first = graph[vertex];
        if first != vertex as i64 {
            let name = if first as usize > n {
                graph[first as usize]
            } else {
                first
            };
            graph[vertex] = -name;
        }
    }
    for index in edge_slots(graph) {
        let value = graph[index];
        if value > 0 {
            let vertex = value as usize;
            graph[index] = -graph[vertex];
            graph[vertex] = index as i64;
        } else {
            graph[index] = -value;
        }
    }
    let mut next = end_of_edges(graph) as i64;
    for vertex in vertex_slots(graph).rev() {
        if graph[vertex] == vertex as i64 {
            graph[vertex] = next;
        } else {
            next = graph[vertex];
        }
    }
}

/// Pointer layout back to sorted layout, through the swapped layout.
pub fn pointer_to_sorted(graph: &mut [i64]) {
    pointer_to_swap(graph);
    swap_to_sorted(graph);
}

/// Sorted layout to swapped layout, through the pointer layout.
pub fn sorted_to_swap(graph: &mut [i64]) {
    sorted_to_pointer(graph);
    pointer_to_swap(graph);
}

//! Recording traversal events and checking that they form a depth-first order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    codec::{neighbor_cells, neighbors},
    errors::{DfsError, OrderViolation},
    layout::vertex_count,
    traversal::{TraversalCallbacks, traverse_with},
};

/// One callback invocation, with a 0-indexed vertex id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "vertex", rename_all = "snake_case")]
pub enum TraversalEvent {
    Enter(usize),
    Leave(usize),
}

impl TraversalEvent {
    pub fn vertex(&self) -> usize {
        match *self {
            TraversalEvent::Enter(vertex) | TraversalEvent::Leave(vertex) => vertex,
        }
    }
}

/// Callbacks that keep every event in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventRecorder {
    pub events: Vec<TraversalEvent>,
}

impl TraversalCallbacks for EventRecorder {
    fn enter(&mut self, vertex: usize) {
        self.events.push(TraversalEvent::Enter(vertex));
    }

    fn leave(&mut self, vertex: usize) {
        self.events.push(TraversalEvent::Leave(vertex));
    }
}

/// Runs the constant-memory traversal and collects its events in order.
pub fn record_events(graph: &mut [i64], start: usize) -> Result<Vec<TraversalEvent>, DfsError> {
    let mut recorder = EventRecorder::default();
    traverse_with(graph, start, &mut recorder)?;
    Ok(recorder.events)
}

/// Vertices reachable from `start`, as a membership vector.
pub fn reachable_from(graph: &[i64], start: usize) -> Vec<bool> {
    let mut seen = vec![false; vertex_count(graph)];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for next in neighbors(graph, node) {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Checks that `events` is a depth-first order of the sorted-layout `graph`
/// rooted at `start`.
///
/// The start vertex must open and close the sequence, every reachable vertex
/// must be entered and left exactly once, every enter must follow an edge out
/// of the vertex on top of the open path, and every leave must close that top.
pub fn check_dfs_order(
    graph: &[i64],
    start: usize,
    events: &[TraversalEvent],
) -> Result<(), OrderViolation> {
    let n = vertex_count(graph);
    if let Some(event) = events.iter().find(|event| event.vertex() >= n) {
        return Err(OrderViolation::OutOfRange {
            vertex: event.vertex(),
        });
    }
    match events.first() {
        None => return Err(OrderViolation::Empty),
        Some(&TraversalEvent::Enter(vertex)) if vertex == start => {}
        Some(_) => return Err(OrderViolation::StartNotFirst { start }),
    }
    if events.last() != Some(&TraversalEvent::Leave(start)) {
        return Err(OrderViolation::StartNotLast { start });
    }

    let reachable = reachable_from(graph, start);
    let mut entered = vec![false; n];
    let mut path: Vec<usize> = Vec::new();
    for event in events {
        match *event {
            TraversalEvent::Enter(vertex) => {
                if entered[vertex] {
                    return Err(OrderViolation::Reentered { vertex });
                }
                if !reachable[vertex] {
                    return Err(OrderViolation::Unreachable { vertex });
                }
                match path.last() {
                    Some(&top) => {
                        let edge = vertex as i64 + 1;
                        if neighbor_cells(graph, top).binary_search(&edge).is_err() {
                            return Err(OrderViolation::NotANeighbour {
                                from: top,
                                to: vertex,
                            });
                        }
                    }
                    None if vertex != start => return Err(OrderViolation::Detached { vertex }),
                    None => {}
                }
                entered[vertex] = true;
                path.push(vertex);
            }
            TraversalEvent::Leave(vertex) => match path.pop() {
                Some(top) if top == vertex => {}
                Some(top) => {
                    return Err(OrderViolation::MismatchedLeave {
                        expected: top,
                        found: vertex,
                    });
                }
                None => {
                    return Err(OrderViolation::MismatchedLeave {
                        expected: start,
                        found: vertex,
                    });
                }
            },
        }
    }
    debug_assert!(path.is_empty(), "closing the start empties the path");
    if let Some(vertex) = (0..n).find(|&vertex| reachable[vertex] && !entered[vertex]) {
        return Err(OrderViolation::Unexplored { vertex });
    }
    Ok(())
}

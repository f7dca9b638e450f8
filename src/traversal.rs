//! Depth-first traversal that keeps its whole state inside the graph array.
//!
//! The traversal walks the swapped layout and threads its way back with
//! Schorr-Waite style pointer reversal. A single scalar, the thread, holds
//! the position to return to once the current vertex is finished:
//!
//! - taking an in-band edge at cell `c` saves the old thread in `c` and makes
//!   `c` the new thread;
//! - taking the first edge of `u`, which lives in `u`'s vertex slot, saves the
//!   old thread in that slot and makes `u`'s marker the new thread.
//!
//! On the way back the thread names either an in-band cell or a marker; the
//! sign of the cell it points at tells the two apart, so every step is `O(1)`.
//! The forward pointer that was overwritten is the finished vertex's marker
//! position, which the backward scan has just found.
//!
//! Colour is never stored on its own. A positive marker is an unvisited vertex;
//! a negative marker is open or finished. Degree-zero vertices, which have no
//! marker, get their self-referential slot negated once they are seen. The
//! final `Restore` pass flips every negative cell back.

use log::{debug, trace};

use crate::{
    codec,
    errors::DfsError,
    layout::{edge_slots, end_of_edges, is_starting, vertex_count, vertex_slots},
    validate::{validate_sorted, validate_start},
};

/// Receives the traversal events, with 0-indexed vertex ids.
pub trait TraversalCallbacks {
    /// Called when `vertex` is opened.
    fn enter(&mut self, vertex: usize);
    /// Called when every neighbor of `vertex` has been handled.
    fn leave(&mut self, vertex: usize);
}

/// Adapts a pair of closures to [`TraversalCallbacks`].
#[derive(Debug)]
pub struct FnCallbacks<E, L> {
    on_enter: E,
    on_leave: L,
}

impl<E, L> FnCallbacks<E, L>
where
    E: FnMut(usize),
    L: FnMut(usize),
{
    pub fn new(on_enter: E, on_leave: L) -> Self {
        Self { on_enter, on_leave }
    }
}

impl<E, L> TraversalCallbacks for FnCallbacks<E, L>
where
    E: FnMut(usize),
    L: FnMut(usize),
{
    fn enter(&mut self, vertex: usize) {
        (self.on_enter)(vertex)
    }

    fn leave(&mut self, vertex: usize) {
        (self.on_leave)(vertex)
    }
}

/// Runs a depth-first traversal of the sorted-layout `graph` from the
/// 0-indexed `start` vertex.
///
/// The array is validated before it is touched, permuted while the traversal
/// runs and handed back bit-for-bit identical. Auxiliary memory is a fixed
/// handful of scalars regardless of the graph size.
///
/// ```
/// let mut graph = vec![5, 7, 9, 12, 14, 17, 12, 2, 5, 1, 3, 4, 2, 4, 2, 3, 5, 1, 4];
/// let original = graph.clone();
/// let mut entered = Vec::new();
/// inplace_dfs::traverse(&mut graph, 2, |v| entered.push(v), |_| {}).unwrap();
/// assert_eq!(entered, vec![2, 1, 0, 4, 3]);
/// assert_eq!(graph, original);
/// ```
pub fn traverse<E, L>(
    graph: &mut [i64],
    start: usize,
    on_enter: E,
    on_leave: L,
) -> Result<(), DfsError>
where
    E: FnMut(usize),
    L: FnMut(usize),
{
    let mut callbacks = FnCallbacks::new(on_enter, on_leave);
    traverse_with(graph, start, &mut callbacks)
}

/// Same as [`traverse`], with the events delivered to a [`TraversalCallbacks`].
pub fn traverse_with<C>(graph: &mut [i64], start: usize, callbacks: &mut C) -> Result<(), DfsError>
where
    C: TraversalCallbacks + ?Sized,
{
    validate_sorted(graph)?;
    validate_start(graph, start)?;
    debug!(
        "constant-memory dfs from {start} over {} vertices",
        vertex_count(graph)
    );
    codec::sorted_to_pointer(graph);
    let slot = start + 1;
    // the pointer layout still names the start's list directly
    let start_marker = (graph[slot] != slot as i64).then(|| graph[slot] as usize);
    codec::pointer_to_swap(graph);
    ConstantMemoryTraversal::new(graph, slot, start_marker, callbacks).run();
    codec::swap_to_sorted(graph);
    debug!("constant-memory dfs from {start} finished");
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    FindStart,
    /// `vertex` was just reached; `marker` is the slot that opens its list.
    Enter { vertex: usize, marker: usize },
    /// Examine the edge stored in `cell`. If the edge is taken, `resume`
    /// becomes the thread; either way the walk goes on at `resume + 1`.
    Follow { cell: usize, resume: usize },
    Advance { position: usize },
    /// The list that `position` ran off the end of is exhausted.
    Backtrack { position: usize },
    Restore,
    Done,
}

struct ConstantMemoryTraversal<'g, 'c, C: ?Sized> {
    graph: &'g mut [i64],
    callbacks: &'c mut C,
    vertices: usize,
    end: usize,
    start: usize,
    start_marker: Option<usize>,
    thread: usize,
}

impl<'g, 'c, C> ConstantMemoryTraversal<'g, 'c, C>
where
    C: TraversalCallbacks + ?Sized,
{
    /// `graph` must be in the swapped layout; `start` is 1-indexed and
    /// `start_marker` is `None` when it has no edges.
    fn new(
        graph: &'g mut [i64],
        start: usize,
        start_marker: Option<usize>,
        callbacks: &'c mut C,
    ) -> Self {
        let vertices = vertex_count(graph);
        let end = end_of_edges(graph);
        Self {
            graph,
            callbacks,
            vertices,
            end,
            start,
            start_marker,
            thread: 0,
        }
    }

    fn run(&mut self) {
        let mut step = Step::FindStart;
        while step != Step::Done {
            trace!("{step:?}");
            step = match step {
                Step::FindStart => self.find_start(),
                Step::Enter { vertex, marker } => {
                    self.callbacks.enter(vertex - 1);
                    Step::Follow {
                        cell: vertex,
                        resume: marker,
                    }
                }
                Step::Follow { cell, resume } => self.follow(cell, resume),
                Step::Advance { position } => self.advance(position),
                Step::Backtrack { position } => self.backtrack(position),
                Step::Restore => {
                    self.restore();
                    Step::Done
                }
                Step::Done => Step::Done,
            };
        }
    }

    fn find_start(&mut self) -> Step {
        match self.start_marker {
            Some(marker) => {
                debug_assert_eq!(self.graph[marker], self.start as i64);
                self.graph[marker] = -(self.start as i64);
                Step::Enter {
                    vertex: self.start,
                    marker,
                }
            }
            None => {
                self.visit_leaf(self.start);
                Step::Restore
            }
        }
    }

    fn follow(&mut self, cell: usize, resume: usize) -> Step {
        let value = self.graph[cell];
        if value as usize > self.vertices {
            let marker = value as usize;
            let target = self.graph[marker];
            if target > 0 {
                self.graph[marker] = -target;
                self.graph[cell] = self.thread as i64;
                self.thread = resume;
                return Step::Enter {
                    vertex: target as usize,
                    marker,
                };
            }
        } else if self.graph[value as usize] > 0 {
            self.visit_leaf(value as usize);
        }
        Step::Advance {
            position: resume + 1,
        }
    }

    fn advance(&mut self, position: usize) -> Step {
        if position == self.end || is_starting(self.graph, position) {
            Step::Backtrack { position }
        } else {
            Step::Follow {
                cell: position,
                resume: position,
            }
        }
    }

    fn backtrack(&mut self, position: usize) -> Step {
        let mut marker = position - 1;
        while self.graph[marker] > 0 {
            marker -= 1;
        }
        let vertex = (-self.graph[marker]) as usize;
        if Some(marker) == self.start_marker {
            self.callbacks.leave(vertex - 1);
            return Step::Restore;
        }

        let back = self.thread;
        let holder = if self.graph[back] < 0 {
            // the thread stops at the parent's marker: the edge was its first
            (-self.graph[back]) as usize
        } else {
            back
        };
        self.thread = self.graph[holder] as usize;
        self.graph[holder] = marker as i64;
        self.callbacks.leave(vertex - 1);
        Step::Advance { position: back + 1 }
    }

    fn visit_leaf(&mut self, vertex: usize) {
        self.callbacks.enter(vertex - 1);
        self.graph[vertex] = -(vertex as i64);
        self.callbacks.leave(vertex - 1);
    }

    fn restore(&mut self) {
        let vertices = vertex_slots(self.graph);
        let edges = edge_slots(self.graph);
        for index in vertices.chain(edges) {
            if self.graph[index] < 0 {
                self.graph[index] = -self.graph[index];
            }
        }
    }
}

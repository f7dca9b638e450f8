use serde::Serialize;

use crate::{codec::neighbor_cells, errors::DfsError};

/// Shape of a graph that passed [`validate_sorted`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub vertices: usize,
    pub edges: usize,
    pub zero_degree: usize,
    pub self_loops: usize,
    pub max_degree: usize,
}

impl GraphSummary {
    pub fn has_self_loops(&self) -> bool {
        self.self_loops > 0
    }
}

/// Checks that `graph` is a well-formed sorted-layout array.
///
/// The traversal refuses anything that fails here: an array that is only
/// half permuted when a bad cell is discovered could not be restored.
pub fn validate_sorted(graph: &[i64]) -> Result<GraphSummary, DfsError> {
    let Some(&n) = graph.first() else {
        return Err(DfsError::invalid_graph("empty array"));
    };
    if n < 0 {
        return Err(DfsError::invalid_graph(format!("negative vertex count {n}")));
    }
    let n = n as usize;
    let Some(&m) = graph.get(n + 1) else {
        return Err(DfsError::invalid_graph(format!(
            "array of length {} is too short for {n} vertices",
            graph.len()
        )));
    };
    if m < 0 {
        return Err(DfsError::invalid_graph(format!("negative edge count {m}")));
    }
    let m = m as usize;
    if n.checked_add(m).and_then(|cells| cells.checked_add(2)) != Some(graph.len()) {
        return Err(DfsError::invalid_graph(format!(
            "length {} does not match {n} vertices and {m} edges",
            graph.len()
        )));
    }

    let end = (n + m + 2) as i64;
    let mut previous = (n + 2) as i64;
    for vertex in 1..=n {
        let offset = graph[vertex];
        if vertex == 1 && offset != previous {
            return Err(DfsError::invalid_graph(format!(
                "first neighbor list must start at {previous}, found {offset}"
            )));
        }
        if offset < previous || offset > end {
            return Err(DfsError::invalid_graph(format!(
                "vertex {} has offset {offset} outside {previous}..={end}",
                vertex - 1
            )));
        }
        previous = offset;
    }

    let mut summary = GraphSummary {
        vertices: n,
        edges: m,
        ..GraphSummary::default()
    };
    for vertex in 0..n {
        let cells = neighbor_cells(graph, vertex);
        if cells.is_empty() {
            summary.zero_degree += 1;
        }
        summary.max_degree = summary.max_degree.max(cells.len());
        for (idx, &cell) in cells.iter().enumerate() {
            if cell < 1 || cell > n as i64 {
                return Err(DfsError::invalid_graph(format!(
                    "vertex {vertex} has neighbor {cell} outside 1..={n}"
                )));
            }
            if idx > 0 && cells[idx - 1] >= cell {
                return Err(DfsError::invalid_graph(format!(
                    "neighbors of vertex {vertex} are not strictly ascending"
                )));
            }
            if cell as usize == vertex + 1 {
                summary.self_loops += 1;
            }
        }
    }
    Ok(summary)
}

/// Checks that the 0-indexed `start` names a vertex of `graph`.
pub fn validate_start(graph: &[i64], start: usize) -> Result<(), DfsError> {
    let vertices = graph.first().copied().unwrap_or(0).max(0) as usize;
    if start >= vertices {
        return Err(DfsError::invalid_argument(format!(
            "start vertex {start} out of range for {vertices} vertices"
        )));
    }
    Ok(())
}

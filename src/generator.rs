//! Random directed graphs in the sorted layout.
//!
//! The random source is always supplied by the caller, so a seeded
//! `StdRng` reproduces the same graph on every run.

use ahash::AHashSet;
use log::debug;
use rand::Rng;

use crate::errors::DfsError;

#[derive(Clone, Debug, Default)]
pub struct GeneratorConfig {
    /// Number of vertices, at least one.
    pub vertices: usize,
    /// Exact number of edges. `None` picks a random count, or random
    /// per-vertex degrees when `forbidden_degrees` is non-empty.
    pub edges: Option<usize>,
    /// Out-degrees that no vertex may have.
    pub forbidden_degrees: AHashSet<usize>,
    /// Whether a vertex may list itself as a neighbor.
    pub allow_loops: bool,
}

impl GeneratorConfig {
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }

    pub fn with_edges(mut self, edges: usize) -> Self {
        self.edges = Some(edges);
        self
    }

    pub fn forbid_degrees<I: IntoIterator<Item = usize>>(mut self, degrees: I) -> Self {
        self.forbidden_degrees.extend(degrees);
        self
    }

    pub fn with_loops(mut self, allow_loops: bool) -> Self {
        self.allow_loops = allow_loops;
        self
    }

    /// Largest out-degree a vertex can have without repeating a neighbor.
    pub fn max_degree(&self) -> usize {
        if self.allow_loops {
            self.vertices
        } else {
            self.vertices.saturating_sub(1)
        }
    }
}

/// Generates a graph in the sorted layout according to `config`.
pub fn generate_graph<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Vec<i64>, DfsError>
where
    R: Rng + ?Sized,
{
    if config.vertices == 0 {
        return Err(DfsError::invalid_argument("a graph needs at least one vertex"));
    }
    let degrees = if config.forbidden_degrees.is_empty() {
        let edges = match config.edges {
            Some(edges) => edges,
            None => rng.gen_range(0..=config.vertices * config.max_degree()),
        };
        exact_degrees(config, edges, rng)?
    } else {
        if config.edges.is_some() {
            return Err(DfsError::invalid_argument(
                "an exact edge count can't be combined with forbidden degrees",
            ));
        }
        permitted_degrees(config, rng)?
    };
    let graph = build_sorted(config, &degrees, rng);
    debug!(
        "generated graph with {} vertices and {} edges",
        config.vertices,
        graph[config.vertices + 1]
    );
    Ok(graph)
}

/// Spreads `edges` over the vertices, starting even and shuffling edges
/// between random pairs of vertices `edges` times.
fn exact_degrees<R>(config: &GeneratorConfig, edges: usize, rng: &mut R) -> Result<Vec<usize>, DfsError>
where
    R: Rng + ?Sized,
{
    let n = config.vertices;
    let max_degree = config.max_degree();
    if edges > n * max_degree {
        return Err(DfsError::invalid_argument(format!(
            "{edges} edges don't fit in {n} vertices of degree at most {max_degree}"
        )));
    }
    let average = edges / n;
    let remaining = edges % n;
    let mut degrees: Vec<usize> = (0..n)
        .map(|idx| average + usize::from(idx < remaining))
        .collect();
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let room = (degrees[from] + 1).min(max_degree + 1 - degrees[to]);
        let delta = rng.gen_range(0..room);
        degrees[from] -= delta;
        degrees[to] += delta;
    }
    Ok(degrees)
}

fn permitted_degrees<R>(config: &GeneratorConfig, rng: &mut R) -> Result<Vec<usize>, DfsError>
where
    R: Rng + ?Sized,
{
    let max_degree = config.max_degree();
    if (0..=max_degree).all(|degree| config.forbidden_degrees.contains(&degree)) {
        return Err(DfsError::invalid_argument(format!(
            "every degree in 0..={max_degree} is forbidden"
        )));
    }
    Ok((0..config.vertices)
        .map(|_| {
            let mut degree = rng.gen_range(0..=max_degree);
            while config.forbidden_degrees.contains(&degree) {
                degree = (degree + 1) % (max_degree + 1);
            }
            degree
        })
        .collect())
}

fn build_sorted<R>(config: &GeneratorConfig, degrees: &[usize], rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let n = config.vertices;
    let m: usize = degrees.iter().sum();
    let mut graph = vec![0i64; n + m + 2];
    graph[0] = n as i64;
    graph[n + 1] = m as i64;

    let mut cursor = n + 2;
    let mut chosen = AHashSet::new();
    for (vertex, &degree) in degrees.iter().enumerate() {
        graph[vertex + 1] = cursor as i64;
        chosen.clear();
        if !config.allow_loops {
            chosen.insert(vertex);
        }
        let first = cursor;
        for _ in 0..degree {
            let mut neighbor = rng.gen_range(0..n);
            while chosen.contains(&neighbor) {
                neighbor = (neighbor + 1) % n;
            }
            chosen.insert(neighbor);
            graph[cursor] = neighbor as i64 + 1;
            cursor += 1;
        }
        graph[first..cursor].sort_unstable();
    }
    graph
}

use inplace_dfs::{
    GeneratorConfig,
    codec::{
        degree, edge_count, neighbors, pointer_to_sorted, pointer_to_swap, sorted_to_pointer,
        sorted_to_swap, swap_to_pointer, swap_to_sorted, vertex_count,
    },
    generate_graph,
    layout::{is_pointer, is_starting, is_vertex},
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const FIXTURE: [i64; 19] = [5, 7, 9, 12, 14, 17, 12, 2, 5, 1, 3, 4, 2, 4, 2, 3, 5, 1, 4];
const FIXTURE_POINTER: [i64; 19] = [5, 7, 9, 12, 14, 17, 12, 9, 17, 7, 12, 14, 9, 14, 9, 12, 17, 7, 14];
const FIXTURE_SWAPPED: [i64; 19] = [5, 9, 7, 9, 9, 7, 12, 1, 17, 2, 12, 14, 3, 14, 4, 12, 17, 5, 14];

// 0 -> 1, 1 has no edges, 2 -> {0, 1}
const WITH_ZERO_DEGREE: [i64; 8] = [3, 5, 6, 6, 3, 2, 1, 2];

const GENERATIONS: usize = 100;

#[test]
fn test_sizes_of_fixture() {
    assert_eq!(vertex_count(&FIXTURE), 5);
    assert_eq!(edge_count(&FIXTURE), 12);
}

#[test]
fn test_neighbors_are_zero_indexed_and_ordered() {
    let listed: Vec<usize> = neighbors(&FIXTURE, 2).collect();
    assert_eq!(listed, vec![1, 3]);
    let listed: Vec<usize> = neighbors(&FIXTURE, 3).collect();
    assert_eq!(listed, vec![1, 2, 4]);
    assert_eq!(degree(&FIXTURE, 1), 3);
}

#[test]
fn test_neighbors_restart_from_clone() {
    let mut iter = neighbors(&FIXTURE, 1);
    assert_eq!(iter.next(), Some(0));
    let rest = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(rest.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_neighbors_of_zero_degree_vertex_are_empty() {
    assert_eq!(neighbors(&WITH_ZERO_DEGREE, 1).count(), 0);
    assert_eq!(neighbors(&WITH_ZERO_DEGREE, 0).collect::<Vec<_>>(), vec![1]);
    assert_eq!(neighbors(&WITH_ZERO_DEGREE, 2).len(), 2);
}

#[test]
#[should_panic]
fn test_neighbors_out_of_range_panics() {
    let _ = neighbors(&FIXTURE, 5);
}

#[test]
fn test_sorted_to_pointer_on_fixture() {
    let mut graph = FIXTURE.to_vec();
    sorted_to_pointer(&mut graph);
    assert_eq!(graph, FIXTURE_POINTER.to_vec());
}

#[test]
fn test_pointer_to_swap_on_fixture() {
    let mut graph = FIXTURE_POINTER.to_vec();
    pointer_to_swap(&mut graph);
    assert_eq!(graph, FIXTURE_SWAPPED.to_vec());
}

#[test]
fn test_swapped_markers_name_their_vertex() {
    let graph = FIXTURE_SWAPPED;
    let markers: Vec<usize> = (7..19).filter(|&idx| is_starting(&graph, idx)).collect();
    assert_eq!(markers, vec![7, 9, 12, 14, 17]);
    for idx in markers {
        assert!(is_vertex(&graph, graph[idx]));
    }
    assert!(is_pointer(&graph, graph[1]));
    assert!(!is_pointer(&graph, 19));
}

#[test]
fn test_zero_degree_gets_self_sentinel() {
    let mut graph = WITH_ZERO_DEGREE.to_vec();
    sorted_to_pointer(&mut graph);
    assert_eq!(graph, vec![3, 5, 2, 6, 3, 2, 5, 2]);
    pointer_to_swap(&mut graph);
    assert_eq!(graph, vec![3, 2, 2, 5, 3, 1, 3, 2]);
}

#[test]
fn test_inverse_transforms_on_fixture() {
    let mut graph = FIXTURE_SWAPPED.to_vec();
    swap_to_pointer(&mut graph);
    assert_eq!(graph, FIXTURE_POINTER.to_vec());
    pointer_to_sorted(&mut graph);
    assert_eq!(graph, FIXTURE.to_vec());
}

#[test]
fn test_swap_to_sorted_on_zero_degree_graph() {
    let mut graph = WITH_ZERO_DEGREE.to_vec();
    sorted_to_swap(&mut graph);
    swap_to_sorted(&mut graph);
    assert_eq!(graph, WITH_ZERO_DEGREE.to_vec());
}

#[test]
fn test_graph_without_edges_round_trips() {
    let original = vec![3, 5, 5, 5, 0];
    let mut graph = original.clone();
    sorted_to_pointer(&mut graph);
    assert_eq!(graph, vec![3, 1, 2, 3, 0]);
    pointer_to_swap(&mut graph);
    assert_eq!(graph, vec![3, 1, 2, 3, 0]);
    swap_to_pointer(&mut graph);
    pointer_to_sorted(&mut graph);
    assert_eq!(graph, original);
}

#[test]
fn test_self_loop_round_trips() {
    let original = vec![1, 3, 1, 1];
    let mut graph = original.clone();
    sorted_to_swap(&mut graph);
    assert_eq!(graph, vec![1, 3, 1, 1]);
    swap_to_pointer(&mut graph);
    assert_eq!(graph, vec![1, 3, 1, 3]);
    pointer_to_sorted(&mut graph);
    assert_eq!(graph, original);
}

#[test]
fn test_random_representations_round_trip() {
    let mut rng = StdRng::seed_from_u64(0xC0DEC);
    for _ in 0..GENERATIONS {
        let vertices = rng.gen_range(1..40);
        let config = GeneratorConfig::new(vertices).with_loops(rng.gen_range(0..4) == 0);
        let sorted = generate_graph(&config, &mut rng).expect("graph");

        let mut graph = sorted.clone();
        sorted_to_pointer(&mut graph);
        let pointer = graph.clone();
        pointer_to_sorted(&mut graph);
        assert_eq!(graph, sorted, "sorted -> pointer -> sorted changed {sorted:?}");

        sorted_to_pointer(&mut graph);
        pointer_to_swap(&mut graph);
        swap_to_pointer(&mut graph);
        assert_eq!(graph, pointer, "pointer -> swap -> pointer changed {sorted:?}");

        pointer_to_swap(&mut graph);
        swap_to_sorted(&mut graph);
        assert_eq!(graph, sorted, "swap -> sorted changed {sorted:?}");
    }
}

#[test]
fn test_random_sparse_graphs_round_trip() {
    let mut rng = StdRng::seed_from_u64(0x5A55);
    for _ in 0..GENERATIONS {
        let vertices = rng.gen_range(2..60);
        let config = GeneratorConfig::new(vertices).forbid_degrees([2, 3, 4, 5]);
        let sorted = generate_graph(&config, &mut rng).expect("graph");
        let mut graph = sorted.clone();
        sorted_to_swap(&mut graph);
        swap_to_pointer(&mut graph);
        pointer_to_sorted(&mut graph);
        assert_eq!(graph, sorted);
    }
}

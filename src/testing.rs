use crate::graph::{Weight, WeightedGraph};
use core::fmt::Debug;
use core::hash::Hash;

pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Builds a graph from a list of edges, adding each endpoint the first time
/// it is seen.
pub fn graph_from_edges<V, W>(edges: &[(V, V, Option<W>)]) -> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut graph = WeightedGraph::new();
    for (a, b, w) in edges.iter() {
        for v in [a, b].iter() {
            if !graph.contains_vertex(*v) {
                graph.add_vertex((*v).clone(), false).unwrap();
            }
        }
        graph.add_edge(a.clone(), b.clone(), *w).unwrap();
    }
    graph
}

/// Builds a graph where each slice is a chain of vertices joined by edges of
/// the given weight.
pub fn graph_from_paths<V, W>(paths: &[&[V]], weight: Option<W>) -> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut edges = Vec::new();
    for &path in paths.iter() {
        for w in path.windows(2) {
            edges.push((w[0].clone(), w[1].clone(), weight));
        }
    }
    graph_from_edges(&edges)
}

#[test]
fn graph_from_paths_test() {
    let g = graph_from_paths::<u32, u32>(&[&[1, 2, 3], &[10, 11]], Some(1));
    assert_eq!(g.num_verts(), 5);
    assert_eq!(g.num_edges(), 3);
    assert!(g.is_well_formed());
}

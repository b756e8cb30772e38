//! Single-source shortest paths (Dijkstra's algorithm).
//!
//! The frontier is a `PriorityQueue` with no decrease-key. When a cheaper path
//! to a vertex is found, the vertex is queued again with the new distance; the
//! older entry stays in the queue and is discarded when it comes out, because
//! relaxation always reads the distance record and never the queued priority.
//!
//! Edges without a weight are never followed. Weights must not be negative.
//!
//! None of these functions fail. A start or target vertex that is not in the
//! graph, or a target that cannot be reached, gives an empty result.

use crate::graph::{Weight, WeightedGraph};
use crate::priority_queue::PriorityQueue;
use core::fmt::Debug;
use core::hash::Hash;
use log::{debug, trace};
use std::collections::HashMap;

/// The best known way to reach a vertex during a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceEntry<V, W> {
    /// The vertex this one is reached from; `None` for the start vertex.
    pub predecessor: Option<V>,
    /// Sum of the edge weights from the start vertex.
    pub cumulative_weight: W,
}

/// A path found by `shortest_path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath<V, W> {
    /// Vertices from start to target, inclusive.
    pub vertices: Vec<V>,
    pub total_weight: W,
}

type Distances<'a, V, W> = HashMap<&'a V, DistanceEntry<&'a V, W>>;

/// Runs the search from `start`. If `target` is given, the search stops as soon
/// as the target is dequeued, and the target is returned (as the graph's own
/// reference); otherwise it runs until the queue is empty.
fn search<'a, V, W>(
    graph: &'a WeightedGraph<V, W>,
    start: &'a V,
    target: Option<&V>,
) -> (Distances<'a, V, W>, Option<&'a V>)
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let mut distances: Distances<'a, V, W> = HashMap::new();
    distances.insert(
        start,
        DistanceEntry {
            predecessor: None,
            cumulative_weight: W::zero(),
        },
    );

    let mut queue: PriorityQueue<&'a V, W> = PriorityQueue::new();
    queue.enqueue(start, W::zero());

    let mut num_dequeued: usize = 0;
    while let Some(entry) = queue.dequeue() {
        num_dequeued += 1;
        let current = entry.value;

        if target == Some(current) {
            debug!(
                "reached {:?} after dequeuing {} entries ({} still queued)",
                current,
                num_dequeued,
                queue.len()
            );
            return (distances, Some(current));
        }

        let current_weight = match distances.get(current) {
            Some(d) => d.cumulative_weight,
            None => continue,
        };
        if entry.priority > current_weight {
            trace!("skipping stale entry {:?}@{:?}", current, entry.priority);
            continue;
        }

        for (next, edge_weight) in graph.neighbors(current) {
            let edge_weight = match edge_weight {
                Some(w) => w,
                // edges without a weight never carry a shortest path
                None => continue,
            };
            let candidate = match current_weight.checked_add(edge_weight) {
                Some(c) => c,
                None => {
                    trace!("skipping {:?} -> {:?}: weight overflows", current, next);
                    continue;
                }
            };
            let improved = match distances.get(next) {
                Some(d) => candidate < d.cumulative_weight,
                None => true,
            };
            if improved {
                trace!("relax {:?} -> {:?}: {:?}", current, next, candidate);
                distances.insert(
                    next,
                    DistanceEntry {
                        predecessor: Some(current),
                        cumulative_weight: candidate,
                    },
                );
                queue.enqueue(next, candidate);
            }
        }
    }

    debug!(
        "search from {:?} exhausted after dequeuing {} entries",
        start, num_dequeued
    );
    (distances, None)
}

/// Walks the predecessor chain back from `target`, and returns the path in
/// start-to-target order.
fn reconstruct<'a, V, W>(distances: &Distances<'a, V, W>, target: &'a V) -> Vec<V>
where
    V: Clone + Eq + Hash,
{
    let mut path: Vec<V> = Vec::new();
    let mut v = Some(target);
    while let Some(current) = v {
        path.push(current.clone());
        v = distances.get(current).and_then(|d| d.predecessor);
    }
    path.reverse();
    path
}

/// Finds the cheapest path from `start` to `target`, along with its total weight.
///
/// Returns `None` if either vertex is not in the graph, or if `target` cannot be
/// reached from `start` through weighted edges. A path from a vertex to itself
/// contains just that vertex, with zero weight.
pub fn shortest_path<V, W>(
    graph: &WeightedGraph<V, W>,
    start: &V,
    target: &V,
) -> Option<ShortestPath<V, W>>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let (start, _) = graph.entry(start)?;
    if !graph.contains_vertex(target) {
        debug!("shortest_path: target {:?} is not in the graph", target);
        return None;
    }
    debug!("shortest_path: {:?} -> {:?}", start, target);

    let (distances, reached) = search(graph, start, Some(target));
    let reached = reached?;
    let total_weight = distances.get(reached)?.cumulative_weight;
    Some(ShortestPath {
        vertices: reconstruct(&distances, reached),
        total_weight,
    })
}

/// Finds the cheapest path from `start` to `target`.
///
/// The result starts with `start` and ends with `target`. It is empty if there
/// is no path, or if either vertex is not in the graph. Searching from a vertex
/// to itself gives a single-vertex path, which is not empty.
pub fn find_shortest_path<V, W>(graph: &WeightedGraph<V, W>, start: &V, target: &V) -> Vec<V>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    shortest_path(graph, start, target)
        .map(|path| path.vertices)
        .unwrap_or_default()
}

/// Computes the shortest distance from `start` to every vertex reachable from it
/// through weighted edges, along with the predecessor of each vertex on its
/// shortest path. The start vertex is included, with no predecessor.
pub fn shortest_path_tree<V, W>(
    graph: &WeightedGraph<V, W>,
    start: &V,
) -> HashMap<V, DistanceEntry<V, W>>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    let start = match graph.entry(start) {
        Some((v, _)) => v,
        None => return HashMap::new(),
    };
    let (distances, _) = search(graph, start, None);
    distances
        .into_iter()
        .map(|(v, d)| {
            (
                v.clone(),
                DistanceEntry {
                    predecessor: d.predecessor.cloned(),
                    cumulative_weight: d.cumulative_weight,
                },
            )
        })
        .collect()
}

//! Unweighted traversals over a `WeightedGraph`.
//!
//! Both traversals ignore edge weights: an edge with no weight is followed
//! exactly like a weighted one. Each reachable vertex is produced once,
//! starting with the start vertex itself. A start vertex that is not in the
//! graph produces nothing.

use crate::graph::{Weight, WeightedGraph};
use core::fmt::Debug;
use core::hash::Hash;
use std::collections::hash_map::Keys;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal. Vertices come out in order of hop count from the
/// start; the order among vertices at the same distance is unspecified.
pub struct BreadthFirst<'a, V, W> {
    graph: &'a WeightedGraph<V, W>,
    // a vertex is marked when it is queued, not when it is produced
    visited: HashSet<&'a V>,
    queue: VecDeque<&'a V>,
}

impl<'a, V, W> BreadthFirst<'a, V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    pub(crate) fn new(graph: &'a WeightedGraph<V, W>, start: &V) -> Self {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        if let Some((v, _)) = graph.entry(start) {
            visited.insert(v);
            queue.push_back(v);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<'a, V, W> Iterator for BreadthFirst<'a, V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.queue.pop_front()?;
        let graph = self.graph;
        if let Some((_, edges)) = graph.entry(v) {
            for n in edges.keys() {
                if self.visited.insert(n) {
                    self.queue.push_back(n);
                }
            }
        }
        Some(v)
    }
}

/// Depth-first traversal, in preorder: each vertex is produced before any of
/// the vertices discovered through it.
///
/// The traversal keeps an explicit stack of neighbor iterators, one per level,
/// so the depth of the graph is not limited by the call stack.
pub struct DepthFirst<'a, V, W> {
    graph: &'a WeightedGraph<V, W>,
    visited: HashSet<&'a V>,
    stack: Vec<Keys<'a, V, Option<W>>>,
    // the start vertex, until it has been produced
    start: Option<&'a V>,
}

impl<'a, V, W> DepthFirst<'a, V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    pub(crate) fn new(graph: &'a WeightedGraph<V, W>, start: &V) -> Self {
        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        let mut first = None;
        if let Some((v, edges)) = graph.entry(start) {
            visited.insert(v);
            stack.push(edges.keys());
            first = Some(v);
        }
        Self {
            graph,
            visited,
            stack,
            start: first,
        }
    }
}

impl<'a, V, W> Iterator for DepthFirst<'a, V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            return Some(start);
        }
        let graph = self.graph;
        while let Some(last) = self.stack.last_mut() {
            if let Some(next) = last.next() {
                if !self.visited.insert(next) {
                    continue;
                }
                // Every neighbor has an entry: vertex removal scrubs the
                // edges pointing back at it.
                if let Some((_, edges)) = graph.entry(next) {
                    self.stack.push(edges.keys());
                }
                return Some(next);
            } else {
                // done with this level
                self.stack.pop();
            }
        }
        None
    }
}

use crate::error::{GraphError, Result};
use crate::traversal::{BreadthFirst, DepthFirst};
use core::fmt::Debug;
use core::hash::Hash;
use core::ops::Add;
use log::debug;
use std::collections::HashMap;

/// Numeric edge weight.
///
/// Shortest-path search only needs to add weights and compare sums, starting
/// from `zero()`. Negative weights are not supported by the search.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Debug {
    fn zero() -> Self;

    /// Adds two weights, returning `None` if the sum cannot be represented.
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0
                }

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$t>::checked_add(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn zero() -> Self {
                    0.0
                }

                // floats saturate to infinity instead of wrapping
                fn checked_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }
            }
        )*
    };
}

impl_int_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// Neighbor map of a single vertex. `None` is an edge with no weight.
pub type Neighbors<V, W> = HashMap<V, Option<W>>;

/// An undirected graph with optionally-weighted edges.
///
/// The graph is stored as an adjacency map: every vertex maps to its neighbors,
/// and every neighbor maps to the weight of the edge between them. Each edge is
/// stored twice, once from each endpoint, and both copies always carry the same
/// weight. Self-loops are rejected.
///
/// An edge added with weight `None` exists for the purpose of traversal, but is
/// never used by shortest-path search. It is not the same as a zero-cost edge.
#[derive(Clone)]
pub struct WeightedGraph<V, W> {
    adjacency: HashMap<V, Neighbors<V, W>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    pub fn with_capacity(num_verts: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(num_verts),
        }
    }

    /// Adds a vertex with no edges.
    ///
    /// If the vertex already exists, this fails unless `overwrite` is set. An
    /// overwritten vertex loses all of its edges, on both ends.
    pub fn add_vertex(&mut self, vertex: V, overwrite: bool) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            if !overwrite {
                return Err(GraphError::vertex_exists(&vertex));
            }
            debug!("overwriting vertex {:?}", vertex);
            self.scrub_reciprocal_edges(&vertex);
        }
        self.adjacency.insert(vertex, Neighbors::new());
        Ok(())
    }

    /// Adds an edge between `a` and `b`, replacing any existing edge between them.
    pub fn add_edge(&mut self, a: V, b: V, weight: Option<W>) -> Result<()> {
        if a == b {
            return Err(GraphError::self_loop(&a));
        }
        self.check_vertex(&a)?;
        self.check_vertex(&b)?;

        // Both endpoints were checked above.
        if let Some(a_edges) = self.adjacency.get_mut(&a) {
            a_edges.insert(b.clone(), weight);
        }
        if let Some(b_edges) = self.adjacency.get_mut(&b) {
            b_edges.insert(a, weight);
        }
        Ok(())
    }

    /// Removes a vertex and every edge that touches it.
    ///
    /// Returns false if the vertex was not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.adjacency.contains_key(vertex) {
            return false;
        }
        self.scrub_reciprocal_edges(vertex);
        self.adjacency.remove(vertex);
        debug!("removed vertex {:?}", vertex);
        true
    }

    /// Removes the edge between `a` and `b`. Removing an edge that does not
    /// exist is not an error, but both vertices must exist.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<()> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if let Some(a_edges) = self.adjacency.get_mut(a) {
            a_edges.remove(b);
        }
        if let Some(b_edges) = self.adjacency.get_mut(b) {
            b_edges.remove(a);
        }
        Ok(())
    }

    // Removes the edges that point back at `vertex` from its neighbors.
    fn scrub_reciprocal_edges(&mut self, vertex: &V) {
        let neighbors: Vec<V> = match self.adjacency.get(vertex) {
            Some(edges) => edges.keys().cloned().collect(),
            None => return,
        };
        for n in neighbors.iter() {
            if let Some(n_edges) = self.adjacency.get_mut(n) {
                n_edges.remove(vertex);
            }
        }
    }

    fn check_vertex(&self, vertex: &V) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(GraphError::missing_vertex(vertex))
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.weight(a, b).is_some()
    }

    /// Looks up the edge between `a` and `b`.
    ///
    /// Returns `None` if there is no edge, and `Some(None)` for an edge that
    /// was added without a weight.
    pub fn weight(&self, a: &V, b: &V) -> Option<Option<W>> {
        self.adjacency.get(a).and_then(|edges| edges.get(b)).copied()
    }

    /// Iterates the neighbors of `vertex` and the weight of the edge to each.
    /// An unknown vertex has no neighbors.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = (&'a V, Option<W>)> + 'a {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, &w)| (n, w)))
    }

    /// Returns the graph's own copy of `vertex`, along with its neighbor map.
    pub(crate) fn entry(&self, vertex: &V) -> Option<(&V, &Neighbors<V, W>)> {
        self.adjacency.get_key_value(vertex)
    }

    pub fn degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map(|edges| edges.len()).unwrap_or(0)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &'_ V> + '_ {
        self.adjacency.keys()
    }

    pub fn num_verts(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    pub fn iter_breadth_first<'a>(&'a self, start: &V) -> BreadthFirst<'a, V, W> {
        BreadthFirst::new(self, start)
    }

    pub fn iter_depth_first<'a>(&'a self, start: &V) -> DepthFirst<'a, V, W> {
        DepthFirst::new(self, start)
    }

    /// Returns every vertex reachable from `start`, in breadth-first order.
    /// Edge weights are ignored.
    pub fn breadth_first_search(&self, start: &V) -> Vec<V> {
        self.iter_breadth_first(start).cloned().collect()
    }

    /// Returns every vertex reachable from `start`, in depth-first preorder.
    /// Edge weights are ignored.
    pub fn depth_first_search(&self, start: &V) -> Vec<V> {
        self.iter_depth_first(start).cloned().collect()
    }

    // Used by tests: every edge has a mirror image with the same weight,
    // and no vertex has an edge to itself.
    #[cfg(test)]
    pub(crate) fn is_well_formed(&self) -> bool {
        self.adjacency.iter().all(|(from, edges)| {
            !edges.contains_key(from)
                && edges
                    .iter()
                    .all(|(to, w)| self.adjacency.get(to).and_then(|e| e.get(from)) == Some(w))
        })
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, W: Debug> Debug for WeightedGraph<V, W> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fmt.debug_map().entries(self.adjacency.iter()).finish()
    }
}

//! An undirected graph with optionally-weighted edges, a binary min-heap
//! priority queue, and shortest-path search built on the two.
//!
//! ```
//! use wgraph::{find_shortest_path, WeightedGraph};
//!
//! let mut g: WeightedGraph<&str, u32> = WeightedGraph::new();
//! for v in ["A", "B", "C", "D"].iter() {
//!     g.add_vertex(*v, false)?;
//! }
//! g.add_edge("A", "B", Some(1))?;
//! g.add_edge("B", "C", Some(2))?;
//! g.add_edge("A", "C", Some(5))?;
//! g.add_edge("C", "D", Some(1))?;
//! g.add_edge("B", "D", Some(4))?;
//!
//! assert_eq!(find_shortest_path(&g, &"A", &"D"), vec!["A", "B", "C", "D"]);
//! # Ok::<(), wgraph::GraphError>(())
//! ```
//!
//! Nothing here is synchronized. A graph shared between threads must be
//! protected by the caller.

pub mod error;
pub mod graph;
pub mod priority_queue;
pub mod shortest_path;
pub mod traversal;

#[cfg(test)]
mod testing;

pub use crate::error::{GraphError, Result};
pub use crate::graph::{Neighbors, Weight, WeightedGraph};
pub use crate::priority_queue::{Entry, PriorityQueue};
pub use crate::shortest_path::{
    find_shortest_path, shortest_path, shortest_path_tree, DistanceEntry, ShortestPath,
};
pub use crate::traversal::{BreadthFirst, DepthFirst};

//! Memory-efficient undirected graph representation

use std::mem;

/// Compressed sparse representation of an undirected collaboration graph
///
/// Every undirected edge is stored twice, once in each endpoint's adjacency
/// range. Neighbor ranges keep the order in which edges were added.
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    /// Number of vertices in the graph
    pub(crate) node_count: usize,

    /// Number of distinct undirected edges
    pub(crate) edge_count: usize,

    /// Offset array: offsets[i] to offsets[i+1] defines the neighbor range for vertex i
    pub(crate) offsets: Vec<u32>,

    /// Concatenated neighbor lists
    pub(crate) edges: Vec<u32>,
}

impl CollaborationGraph {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of a vertex, in insertion order
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Number of neighbors of a vertex
    pub fn degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Check if `a` and `b` share an edge
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).contains(&(b as u32))
    }

    /// Iterate over vertex ids in ascending order
    pub fn vertices(&self) -> std::ops::Range<usize> {
        0..self.node_count
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();

        base + offsets + edges
    }
}

//! Graph construction module

use crate::error::{GraphError, Result};
use crate::graph::CollaborationGraph;
use std::collections::HashSet;

/// A vertex materialized by the builder, holding neighbors in insertion order
#[derive(Debug, Clone, Default)]
struct VertexRecord {
    neighbors: Vec<u32>,
}

/// Builder for incrementally constructing a CollaborationGraph from an edge stream
///
/// Vertex records are created lazily when an edge first touches them;
/// [`GraphBuilder::ensure_all_vertices_present`] fills in the isolated ones.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    /// Declared number of vertices
    vertex_count: usize,

    /// Vertex records, `None` until an edge touches the vertex
    vertices: Vec<Option<VertexRecord>>,

    /// Undirected edges already stored, keyed as `(min, max)`
    edge_set: HashSet<(u32, u32)>,
}

impl GraphBuilder {
    /// Create a builder for a graph with ids `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            vertices: vec![None; vertex_count],
            edge_set: HashSet::new(),
        }
    }

    /// Declared number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct undirected edges added so far
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Add an undirected edge between `a` and `b`
    ///
    /// Returns `Ok(false)` when the edge was already present (or is a self-loop)
    /// and nothing changed.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool> {
        let a_idx = self.check_vertex(a)?;
        let b_idx = self.check_vertex(b)?;

        if a_idx == b_idx {
            log::warn!("Ignoring self-loop on vertex {}", a);
            return Ok(false);
        }

        let key = (a_idx.min(b_idx), a_idx.max(b_idx));
        if !self.edge_set.insert(key) {
            return Ok(false);
        }

        self.vertices[a]
            .get_or_insert_with(VertexRecord::default)
            .neighbors
            .push(b_idx);
        self.vertices[b]
            .get_or_insert_with(VertexRecord::default)
            .neighbors
            .push(a_idx);

        Ok(true)
    }

    /// Check whether a vertex record exists yet
    #[cfg(test)]
    pub(crate) fn is_present(&self, vertex: usize) -> bool {
        matches!(self.vertices.get(vertex), Some(Some(_)))
    }

    /// Give every id without a record an isolated vertex of degree 0
    pub fn ensure_all_vertices_present(&mut self) {
        let mut created = 0;
        for slot in self.vertices.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(VertexRecord::default());
            created += 1;
        }
        if created > 0 {
            log::debug!("Created {} isolated vertices", created);
        }
    }

    /// Build the compressed graph
    pub fn build(mut self) -> CollaborationGraph {
        self.ensure_all_vertices_present();

        let edge_count = self.edge_set.len();
        let mut offsets = Vec::with_capacity(self.vertex_count + 1);
        let mut edges = Vec::with_capacity(edge_count * 2);
        offsets.push(0);

        for record in self.vertices.into_iter().flatten() {
            edges.extend_from_slice(&record.neighbors);
            offsets.push(edges.len() as u32);
        }

        CollaborationGraph {
            node_count: self.vertex_count,
            edge_count,
            offsets,
            edges,
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<u32> {
        if vertex >= self.vertex_count {
            return Err(GraphError::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(vertex as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_are_idempotent() {
        let mut builder = GraphBuilder::new(3);
        assert!(builder.add_edge(0, 1).unwrap());
        assert!(!builder.add_edge(0, 1).unwrap());
        assert!(!builder.add_edge(1, 0).unwrap());
        assert_eq!(builder.edge_count(), 1);

        let graph = builder.build();
        assert_eq!(graph.neighbors(0), &[1]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        let mut builder = GraphBuilder::new(5);
        let err = builder.add_edge(0, 7).unwrap_err();
        assert!(matches!(
            err,
            GraphError::OutOfRange {
                vertex: 7,
                vertex_count: 5
            }
        ));
        assert!(!builder.is_present(0));
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut builder = GraphBuilder::new(2);
        assert!(!builder.add_edge(1, 1).unwrap());
        let graph = builder.build();
        assert_eq!(graph.degree(1), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn isolated_vertices_are_materialized() {
        let mut builder = GraphBuilder::new(4);
        builder.add_edge(0, 2).unwrap();
        assert!(!builder.is_present(3));

        builder.ensure_all_vertices_present();
        assert!(builder.is_present(1));
        assert!(builder.is_present(3));

        let graph = builder.build();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.degree(3), 0);
        assert!(graph.neighbors(3).is_empty());
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut builder = GraphBuilder::new(4);
        builder.add_edge(0, 3).unwrap();
        builder.add_edge(0, 1).unwrap();
        builder.add_edge(2, 0).unwrap();
        let graph = builder.build();
        assert_eq!(graph.neighbors(0), &[3, 1, 2]);
    }
}

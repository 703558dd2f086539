//! Centrality values and degree statistics

use crate::error::Result;
use crate::graph::bfs::{self, TraversalContext};
use crate::graph::CollaborationGraph;
use serde::{Serialize, Deserialize};

/// Degree of each member, in member order
pub fn degree_values(graph: &CollaborationGraph, members: &[usize]) -> Vec<usize> {
    members.iter().map(|&vertex| graph.degree(vertex)).collect()
}

/// Average shortest-path distance from each member to every other member
///
/// Lower values mean a more central vertex. Each distance is divided by
/// `n - 1` before being added, in ascending member order. Runs one
/// breadth-first search per ordered member pair.
pub fn closeness_values(graph: &CollaborationGraph, members: &[usize]) -> Result<Vec<f32>> {
    let n = members.len();
    if n <= 1 {
        return Ok(vec![0.0; n]);
    }

    log::info!("Computing average-distance closeness for {} vertices", n);

    let denominator = (n - 1) as f32;
    let mut ctx = TraversalContext::for_graph(graph);
    let mut values = Vec::with_capacity(n);

    for &source in members {
        let mut closeness = 0.0f32;
        for &other in members.iter().filter(|&&other| other != source) {
            let hops = bfs::shortest_path_length(graph, &mut ctx, source, other)?;
            closeness += hops as f32 / denominator;
        }
        values.push(closeness);
    }

    Ok(values)
}

/// One row of the degree distribution table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeBucket {
    pub degree: usize,
    pub count: usize,

    /// `count` divided by the size of the largest component
    pub probability: f64,
}

/// Count vertices per non-zero degree across the whole graph
///
/// Probabilities are normalized by `largest_component_size`, even though
/// counts include vertices outside that component.
pub fn degree_distribution(
    graph: &CollaborationGraph,
    largest_component_size: usize,
) -> Vec<DegreeBucket> {
    let mut counts = vec![0usize; graph.vertex_count()];
    for vertex in graph.vertices() {
        let degree = graph.degree(vertex);
        if degree > 0 {
            counts[degree] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .filter(|&(_, count)| count > 0)
        .map(|(degree, count)| DegreeBucket {
            degree,
            count,
            probability: count as f64 / largest_component_size as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn build(vertex_count: usize, edges: &[(usize, usize)]) -> CollaborationGraph {
        let mut builder = GraphBuilder::new(vertex_count);
        for &(a, b) in edges {
            builder.add_edge(a, b).unwrap();
        }
        builder.build()
    }

    fn chain() -> CollaborationGraph {
        build(5, &[(0, 1), (1, 2), (2, 3), (3, 4)])
    }

    #[test]
    fn chain_degrees() {
        let graph = chain();
        assert_eq!(degree_values(&graph, &[0, 1, 2, 3, 4]), vec![1, 2, 2, 2, 1]);
    }

    #[test]
    fn chain_average_distances() {
        let graph = chain();
        let values = closeness_values(&graph, &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(values, vec![2.5, 1.75, 1.5, 1.75, 2.5]);
    }

    #[test]
    fn star_center_is_closest() {
        let graph = build(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let values = closeness_values(&graph, &[0, 1, 2, 3, 4]).unwrap();
        assert_eq!(values[0], 1.0);
        for &leaf in &values[1..] {
            assert_eq!(leaf, 1.75);
        }
    }

    #[test]
    fn singleton_component_has_zero_closeness() {
        let graph = build(3, &[(0, 1)]);
        assert_eq!(closeness_values(&graph, &[2]).unwrap(), vec![0.0]);
        assert!(closeness_values(&graph, &[]).unwrap().is_empty());
    }

    #[test]
    fn distribution_skips_isolated_vertices() {
        // Triangle, a pendant on vertex 2, and two isolated vertices
        let graph = build(6, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
        let rows = degree_distribution(&graph, 4);

        assert_eq!(
            rows,
            vec![
                DegreeBucket { degree: 1, count: 1, probability: 0.25 },
                DegreeBucket { degree: 2, count: 2, probability: 0.5 },
                DegreeBucket { degree: 3, count: 1, probability: 0.25 },
            ]
        );
    }
}

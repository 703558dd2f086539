//! Breadth-first traversal over a CollaborationGraph
//!
//! All per-traversal state lives in a [`TraversalContext`] owned by the caller
//! and reused across calls. Every traversal starts and ends with the context
//! reset, so no visited marks or predecessors leak from one call to the next.

use crate::error::{GraphError, Result};
use crate::graph::CollaborationGraph;
use std::collections::VecDeque;

/// Scratch state for a single breadth-first traversal
#[derive(Debug, Clone, Default)]
pub struct TraversalContext {
    visited: Vec<bool>,

    /// Hop count from the traversal source, `None` until discovered
    distance: Vec<Option<usize>>,

    /// Index of the vertex each vertex was discovered from
    predecessor: Vec<Option<u32>>,

    queue: VecDeque<u32>,

    /// Vertices written during the current traversal, so reset is proportional to the work done
    touched: Vec<u32>,
}

impl TraversalContext {
    /// Create a context sized for `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            distance: vec![None; vertex_count],
            predecessor: vec![None; vertex_count],
            queue: VecDeque::new(),
            touched: Vec::new(),
        }
    }

    /// Create a context sized for the given graph
    pub fn for_graph(graph: &CollaborationGraph) -> Self {
        Self::new(graph.vertex_count())
    }

    /// Restore every touched vertex to its default scratch state
    pub fn reset(&mut self) {
        for node in self.touched.drain(..) {
            let node = node as usize;
            self.visited[node] = false;
            self.distance[node] = None;
            self.predecessor[node] = None;
        }
        self.queue.clear();
    }

    /// True when no scratch state is set for any vertex
    #[cfg(test)]
    pub(crate) fn is_reset(&self) -> bool {
        self.touched.is_empty()
            && self.queue.is_empty()
            && self.visited.iter().all(|v| !v)
            && self.distance.iter().all(Option::is_none)
            && self.predecessor.iter().all(Option::is_none)
    }

    fn fit(&mut self, vertex_count: usize) {
        if self.visited.len() < vertex_count {
            self.visited.resize(vertex_count, false);
            self.distance.resize(vertex_count, None);
            self.predecessor.resize(vertex_count, None);
        }
    }

    fn discover(&mut self, node: u32, from: Option<u32>, distance: usize) {
        let idx = node as usize;
        self.visited[idx] = true;
        self.distance[idx] = Some(distance);
        self.predecessor[idx] = from;
        self.touched.push(node);
        self.queue.push_back(node);
    }
}

fn check_vertex(graph: &CollaborationGraph, vertex: usize) -> Result<()> {
    if vertex >= graph.vertex_count() {
        return Err(GraphError::OutOfRange {
            vertex,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Number of hops on a shortest path from `initial` to `target`
///
/// Expansion stops once `target` is dequeued. The hop count is recovered by
/// walking predecessors from `target` back to `initial`; `initial` itself sits
/// at distance 0. Both vertices are expected to share a component, otherwise
/// [`GraphError::Unreachable`] is returned.
pub fn shortest_path_length(
    graph: &CollaborationGraph,
    ctx: &mut TraversalContext,
    initial: usize,
    target: usize,
) -> Result<usize> {
    check_vertex(graph, initial)?;
    check_vertex(graph, target)?;

    ctx.fit(graph.vertex_count());
    ctx.reset();
    ctx.discover(initial as u32, None, 0);

    while let Some(current) = ctx.queue.pop_front() {
        if current as usize == target {
            ctx.queue.clear();
            break;
        }

        let next_distance = ctx.distance[current as usize].map_or(0, |d| d + 1);
        for &next in graph.neighbors(current as usize) {
            if !ctx.visited[next as usize] {
                ctx.discover(next, Some(current), next_distance);
            }
        }
    }

    let mut hops = 0;
    let mut node = target;
    while node != initial {
        match ctx.predecessor[node] {
            Some(previous) => {
                node = previous as usize;
                hops += 1;
            }
            None => {
                ctx.reset();
                return Err(GraphError::Unreachable {
                    from: initial,
                    to: target,
                });
            }
        }
    }

    debug_assert_eq!(ctx.distance[target], Some(hops));
    ctx.reset();

    Ok(hops)
}

/// Visit every vertex reachable from `start` in FIFO order
///
/// Returns the number of vertices visited, `start` included.
pub fn flood_fill<F>(
    graph: &CollaborationGraph,
    ctx: &mut TraversalContext,
    start: usize,
    mut visit: F,
) -> Result<usize>
where
    F: FnMut(usize),
{
    check_vertex(graph, start)?;

    ctx.fit(graph.vertex_count());
    ctx.reset();
    ctx.discover(start as u32, None, 0);

    let mut count = 0;
    while let Some(current) = ctx.queue.pop_front() {
        visit(current as usize);
        count += 1;

        let next_distance = ctx.distance[current as usize].map_or(0, |d| d + 1);
        for &next in graph.neighbors(current as usize) {
            if !ctx.visited[next as usize] {
                ctx.discover(next, Some(current), next_distance);
            }
        }
    }

    ctx.reset();
    Ok(count)
}

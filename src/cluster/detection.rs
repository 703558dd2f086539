//! Connected component detection

use crate::cluster::{ComponentLabels, ComponentSummary};
use crate::error::Result;
use crate::graph::bfs::{self, TraversalContext};
use crate::graph::CollaborationGraph;

/// Label every vertex with the id of its connected component
///
/// Vertices are scanned in ascending id order and each unlabeled vertex seeds
/// a breadth-first flood fill, so component ids follow discovery order
/// starting at 0.
pub fn find_connected_components(graph: &CollaborationGraph) -> Result<ComponentLabels> {
    log::info!(
        "Finding connected components over {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut ctx = TraversalContext::for_graph(graph);
    let mut labels: Vec<Option<usize>> = vec![None; graph.vertex_count()];
    let mut component_count = 0;

    for vertex in graph.vertices() {
        if labels[vertex].is_some() {
            continue;
        }

        let id = component_count;
        let size = bfs::flood_fill(graph, &mut ctx, vertex, |member| {
            labels[member] = Some(id);
        })?;
        log::debug!("Component {} seeded at vertex {} has {} members", id, vertex, size);

        component_count += 1;
    }

    let mut members: Vec<Vec<usize>> = vec![Vec::new(); component_count];
    let labels: Vec<usize> = labels
        .into_iter()
        .enumerate()
        .map(|(vertex, label)| {
            // The scan above labels every vertex
            let id = label.unwrap_or_default();
            members[id].push(vertex);
            id
        })
        .collect();

    let (largest, smallest) = extreme_components(&members);

    log::info!("Found {} connected components", component_count);
    if let Some(largest) = largest {
        log::info!("Largest component {} has {} members", largest.id, largest.size);
    }
    if let Some(smallest) = smallest {
        log::info!("Smallest component {} has {} members", smallest.id, smallest.size);
    }

    Ok(ComponentLabels {
        labels,
        members,
        largest,
        smallest,
    })
}

/// Largest and smallest non-empty components, ties resolved to the lowest id
fn extreme_components(
    members: &[Vec<usize>],
) -> (Option<ComponentSummary>, Option<ComponentSummary>) {
    let mut largest: Option<ComponentSummary> = None;
    let mut smallest: Option<ComponentSummary> = None;

    for (id, component) in members.iter().enumerate() {
        let size = component.len();
        if size == 0 {
            continue;
        }

        if largest.map_or(true, |best| size > best.size) {
            largest = Some(ComponentSummary { id, size });
        }
        if smallest.map_or(true, |best| size < best.size) {
            smallest = Some(ComponentSummary { id, size });
        }
    }

    (largest, smallest)
}

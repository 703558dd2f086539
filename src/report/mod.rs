//! Console report generation

use crate::analysis::ComponentRanking;
use crate::cluster::ranking::{RankMode, RankedVertex};
use crate::cluster::ComponentLabels;
use crate::graph::CollaborationGraph;
use anyhow::Result;
use itertools::Itertools;
use std::io::Write;

/// Write the component count and the largest and smallest components
pub fn write_component_summary<W: Write>(out: &mut W, components: &ComponentLabels) -> Result<()> {
    writeln!(out, "CC Count: {}", components.component_count())?;

    if let Some(largest) = components.largest() {
        writeln!(
            out,
            "Largest Connected Component id: {} with size: {}",
            largest.id, largest.size
        )?;
    }
    if let Some(smallest) = components.smallest() {
        writeln!(
            out,
            "Smallest Connected Component id: {} with size: {}",
            smallest.id, smallest.size
        )?;
    }

    Ok(())
}

/// Write a ranked list, optionally followed by each vertex's neighbors
pub fn write_ranking<W: Write>(
    out: &mut W,
    ranking: &ComponentRanking,
    graph: &CollaborationGraph,
    show_neighbors: bool,
) -> Result<()> {
    let title = match ranking.mode {
        RankMode::Degree => "Degree",
        RankMode::Closeness => "Closeness",
    };
    writeln!(
        out,
        "Showing {} Centrality for Connected Component with id: {}",
        title, ranking.component.id
    )?;

    for (position, vertex) in ranking.vertices.iter().enumerate() {
        writeln!(out, "#{} {}", position + 1, describe(vertex, ranking.mode))?;
        if show_neighbors {
            writeln!(out, "{}", neighbor_line(graph, vertex.id))?;
        }
    }

    Ok(())
}

fn describe(vertex: &RankedVertex, mode: RankMode) -> String {
    match mode {
        RankMode::Degree => format!("id: {} degree: {}", vertex.id, vertex.degree),
        RankMode::Closeness => format!("id: {} closeness {:?}", vertex.id, vertex.closeness),
    }
}

fn neighbor_line(graph: &CollaborationGraph, vertex: usize) -> String {
    graph
        .neighbors(vertex)
        .iter()
        .map(|neighbor| format!(" {} ", neighbor))
        .join("")
}

//! Analysis session over a single collaboration graph
//!
//! A session owns a fully built graph. Components must be labeled with
//! [`Analyzer::label_components`] before any ranking, distance or
//! distribution query; those queries fail with [`GraphError::Unlabeled`]
//! otherwise. Rankings can be repeated for any component and mode.

use crate::cluster::detection::find_connected_components;
use crate::cluster::metrics::{self, DegreeBucket};
use crate::cluster::ranking::{self, RankMode, RankedVertex};
use crate::cluster::{ComponentLabels, ComponentSummary, ComponentTarget};
use crate::error::{GraphError, Result};
use crate::graph::bfs::{self, TraversalContext};
use crate::graph::CollaborationGraph;
use serde::{Serialize, Deserialize};

/// Ranked members of one component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRanking {
    pub component: ComponentSummary,
    pub mode: RankMode,
    pub vertices: Vec<RankedVertex>,
}

pub struct Analyzer {
    graph: CollaborationGraph,
    components: Option<ComponentLabels>,
}

impl Analyzer {
    pub fn new(graph: CollaborationGraph) -> Self {
        Self {
            graph,
            components: None,
        }
    }

    pub fn graph(&self) -> &CollaborationGraph {
        &self.graph
    }

    /// Label connected components; later calls return the existing labels
    pub fn label_components(&mut self) -> Result<&ComponentLabels> {
        if self.components.is_none() {
            self.components = Some(find_connected_components(&self.graph)?);
        }
        self.components()
    }

    /// Component labels, if already computed
    pub fn components(&self) -> Result<&ComponentLabels> {
        self.components.as_ref().ok_or(GraphError::Unlabeled)
    }

    /// Resolve a target to a concrete component
    pub fn resolve(&self, target: ComponentTarget) -> Result<ComponentSummary> {
        let components = self.components()?;
        let unknown = |component| GraphError::UnknownComponent {
            component,
            component_count: components.component_count(),
        };

        match target {
            ComponentTarget::Largest => components.largest().ok_or_else(|| unknown(0)),
            ComponentTarget::Smallest => components.smallest().ok_or_else(|| unknown(0)),
            ComponentTarget::Id(id) => components
                .size(id)
                .map(|size| ComponentSummary { id, size })
                .ok_or_else(|| unknown(id)),
        }
    }

    /// Rank the members of a component by `mode`, keeping at most `limit`
    ///
    /// Members enter the ranking in ascending vertex-id order, which decides ties.
    pub fn rank_component(
        &self,
        target: ComponentTarget,
        mode: RankMode,
        limit: usize,
    ) -> Result<ComponentRanking> {
        let component = self.resolve(target)?;
        let members = self
            .components()?
            .members(component.id)
            .unwrap_or_default();

        log::info!(
            "Ranking component {} ({} members) by {:?}",
            component.id,
            component.size,
            mode
        );

        let degrees = metrics::degree_values(&self.graph, members);
        let closeness = match mode {
            RankMode::Degree => vec![0.0; members.len()],
            RankMode::Closeness => metrics::closeness_values(&self.graph, members)?,
        };

        let candidates = members
            .iter()
            .zip(degrees)
            .zip(closeness)
            .map(|((&id, degree), closeness)| RankedVertex {
                id,
                degree,
                closeness,
            })
            .collect();

        Ok(ComponentRanking {
            component,
            mode,
            vertices: ranking::rank(candidates, mode, limit),
        })
    }

    /// Shortest-path hop count between two vertices of the same component
    pub fn distance(&self, a: usize, b: usize) -> Result<usize> {
        let components = self.components()?;
        let vertex_count = self.graph.vertex_count();
        let component_a = components
            .component_of(a)
            .ok_or(GraphError::OutOfRange { vertex: a, vertex_count })?;
        let component_b = components
            .component_of(b)
            .ok_or(GraphError::OutOfRange { vertex: b, vertex_count })?;

        if component_a != component_b {
            return Err(GraphError::NotConnected { from: a, to: b });
        }

        let mut ctx = TraversalContext::for_graph(&self.graph);
        bfs::shortest_path_length(&self.graph, &mut ctx, a, b)
    }

    /// Degree distribution normalized by the largest component's size
    pub fn degree_distribution(&self) -> Result<Vec<DegreeBucket>> {
        let largest = self.components()?.largest().map_or(0, |c| c.size);
        Ok(metrics::degree_distribution(&self.graph, largest))
    }
}

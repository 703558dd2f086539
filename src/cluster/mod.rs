//! Connected-component analysis module

pub mod detection;
pub mod metrics;
pub mod ranking;

use serde::{Serialize, Deserialize};

/// Connected-component labels for every vertex of a graph
#[derive(Debug, Clone)]
pub struct ComponentLabels {
    /// Component id of each vertex, indexed by vertex id
    pub(crate) labels: Vec<usize>,

    /// Members of each component in ascending vertex-id order
    pub(crate) members: Vec<Vec<usize>>,

    /// Largest component (ties resolved to the lowest id)
    pub(crate) largest: Option<ComponentSummary>,

    /// Smallest non-empty component (ties resolved to the lowest id)
    pub(crate) smallest: Option<ComponentSummary>,
}

impl ComponentLabels {
    /// Number of components found
    pub fn component_count(&self) -> usize {
        self.members.len()
    }

    /// Component id of a vertex
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Members of a component in ascending vertex-id order
    pub fn members(&self, component: usize) -> Option<&[usize]> {
        self.members.get(component).map(Vec::as_slice)
    }

    /// Number of members of a component
    pub fn size(&self, component: usize) -> Option<usize> {
        self.members.get(component).map(Vec::len)
    }

    pub fn largest(&self) -> Option<ComponentSummary> {
        self.largest
    }

    pub fn smallest(&self) -> Option<ComponentSummary> {
        self.smallest
    }
}

/// Identifier and member count of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub id: usize,
    pub size: usize,
}

/// Which component of a labeled graph to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentTarget {
    Largest,
    Smallest,
    Id(usize),
}

//! Configuration management for the coauthor graph analyzer

use crate::cluster::ComponentTarget;
use std::path::PathBuf;

/// Which rankings a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Degree,
    Closeness,
    Both,
}

impl AnalysisMode {
    /// Map the numeric CLI selector (0 = degree, 1 = closeness, 2 = both)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(AnalysisMode::Degree),
            1 => Some(AnalysisMode::Closeness),
            2 => Some(AnalysisMode::Both),
            _ => None,
        }
    }

    pub fn includes_degree(self) -> bool {
        matches!(self, AnalysisMode::Degree | AnalysisMode::Both)
    }

    pub fn includes_closeness(self) -> bool {
        matches!(self, AnalysisMode::Closeness | AnalysisMode::Both)
    }
}

/// Default configuration for the coauthor graph analyzer
#[derive(Debug, Clone)]
pub struct Config {
    /// Rankings to produce
    pub mode: AnalysisMode,

    /// Print each ranked vertex's neighbor list
    pub show_neighbors: bool,

    /// Maximum number of vertices listed per ranking
    pub top_n: usize,

    /// Component whose members are ranked
    pub target: ComponentTarget,

    /// Directory receiving the degree distribution and summary files
    pub output_dir: PathBuf,

    /// Also write a JSON summary
    pub write_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: AnalysisMode::Degree,
            show_neighbors: false,
            top_n: 40,
            target: ComponentTarget::Largest,
            output_dir: PathBuf::from("."),
            write_summary: false,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(mode: AnalysisMode, show_neighbors: bool, top_n: usize) -> Self {
        Self {
            mode,
            show_neighbors,
            top_n,
            ..Self::default()
        }
    }

    /// Number of vertices to list for a component of `component_size` members
    ///
    /// The smallest component is always listed in full.
    pub fn ranking_limit(&self, component_size: usize) -> usize {
        match self.target {
            ComponentTarget::Smallest => component_size,
            _ => self.top_n.min(component_size),
        }
    }
}

//! Ranking of component members by centrality

use serde::{Serialize, Deserialize};
use std::cmp::Ordering;

/// Key a ranking is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Highest degree first
    Degree,

    /// Lowest average distance first
    Closeness,
}

impl RankMode {
    /// Comparator for this mode
    pub fn comparator(self) -> fn(&RankedVertex, &RankedVertex) -> Ordering {
        match self {
            RankMode::Degree => by_degree,
            RankMode::Closeness => by_closeness,
        }
    }
}

fn by_degree(a: &RankedVertex, b: &RankedVertex) -> Ordering {
    b.degree.cmp(&a.degree)
}

fn by_closeness(a: &RankedVertex, b: &RankedVertex) -> Ordering {
    a.closeness.total_cmp(&b.closeness)
}

/// A vertex together with the values it can be ranked by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVertex {
    pub id: usize,
    pub degree: usize,

    /// Average shortest-path distance within its component, 0.0 when not computed
    pub closeness: f32,
}

/// Order vertices by `mode` and keep the first `limit`
///
/// The sort is stable, so vertices with equal keys keep their input order.
pub fn rank(mut vertices: Vec<RankedVertex>, mode: RankMode, limit: usize) -> Vec<RankedVertex> {
    vertices.sort_by(mode.comparator());
    vertices.truncate(limit);
    vertices
}

//! End-to-end scenarios: edge-list text in, components and rankings out.

use std::io::Cursor;

use coauthor_graph_analyzer::cluster::ranking::RankMode;
use coauthor_graph_analyzer::cluster::{ComponentSummary, ComponentTarget};
use coauthor_graph_analyzer::data::parse_edge_list;
use coauthor_graph_analyzer::{Analyzer, GraphError};

fn analyzer_from(text: &str) -> Analyzer {
    let builder = parse_edge_list(Cursor::new(text)).expect("edge list should parse");
    let mut analyzer = Analyzer::new(builder.build());
    analyzer.label_components().expect("labeling should succeed");
    analyzer
}

fn ranked_ids(analyzer: &Analyzer, mode: RankMode) -> Vec<usize> {
    analyzer
        .rank_component(ComponentTarget::Largest, mode, 40)
        .expect("ranking should succeed")
        .vertices
        .iter()
        .map(|v| v.id)
        .collect()
}

#[test]
fn chain_graph() {
    let analyzer = analyzer_from("g 5\ne 0 1\ne 1 2\ne 2 3\ne 3 4\n");
    let components = analyzer.components().unwrap();

    assert_eq!(components.component_count(), 1);
    assert_eq!(components.largest(), Some(ComponentSummary { id: 0, size: 5 }));
    assert_eq!(ranked_ids(&analyzer, RankMode::Degree), vec![1, 2, 3, 0, 4]);
    assert_eq!(ranked_ids(&analyzer, RankMode::Closeness), vec![2, 1, 3, 0, 4]);

    let ranking = analyzer
        .rank_component(ComponentTarget::Largest, RankMode::Closeness, 40)
        .unwrap();
    let mut by_id: Vec<(usize, f32)> = ranking.vertices.iter().map(|v| (v.id, v.closeness)).collect();
    by_id.sort_by_key(|&(id, _)| id);
    assert_eq!(
        by_id,
        vec![(0, 2.5), (1, 1.75), (2, 1.5), (3, 1.75), (4, 2.5)]
    );
}

#[test]
fn two_disjoint_triangles() {
    let analyzer = analyzer_from("g 6\ne 0 1\ne 1 2\ne 0 2\ne 3 4\ne 4 5\ne 3 5\n");
    let components = analyzer.components().unwrap();

    assert_eq!(components.component_count(), 2);
    assert_eq!(components.size(0), Some(3));
    assert_eq!(components.size(1), Some(3));
    assert_eq!(components.largest(), Some(ComponentSummary { id: 0, size: 3 }));
}

#[test]
fn out_of_range_edge_aborts_before_analysis() {
    let err = parse_edge_list(Cursor::new("g 5\ne 0 1\ne 0 7\n")).unwrap_err();
    assert!(matches!(
        err,
        GraphError::OutOfRange {
            vertex: 7,
            vertex_count: 5
        }
    ));
}

#[test]
fn duplicate_edges_do_not_change_degrees() {
    let once = analyzer_from("g 4\ne 0 1\ne 1 2\ne 2 3\n");
    let twice = analyzer_from("g 4\ne 0 1\ne 1 0\ne 1 2\ne 2 3\ne 0 1\ne 3 2\n");

    for vertex in once.graph().vertices() {
        assert_eq!(once.graph().neighbors(vertex), twice.graph().neighbors(vertex));
    }
    assert_eq!(once.graph().edge_count(), twice.graph().edge_count());
}

#[test]
fn degree_distribution_uses_largest_component_size() {
    // Path of four, a separate pair, one isolated vertex
    let analyzer = analyzer_from("g 7\ne 0 1\ne 1 2\ne 2 3\ne 4 5\n");
    let rows = analyzer.degree_distribution().unwrap();

    let as_tuples: Vec<(usize, usize, f64)> =
        rows.iter().map(|r| (r.degree, r.count, r.probability)).collect();
    assert_eq!(as_tuples, vec![(1, 4, 1.0), (2, 2, 0.5)]);
}

#[test]
fn ranking_is_repeatable() {
    let text = "g 8\ne 0 1\ne 0 2\ne 0 3\ne 1 4\ne 2 5\ne 3 6\ne 4 7\ne 5 7\ne 6 7\n";
    let first = analyzer_from(text);
    let second = analyzer_from(text);

    for mode in [RankMode::Degree, RankMode::Closeness] {
        assert_eq!(ranked_ids(&first, mode), ranked_ids(&second, mode));
        assert_eq!(ranked_ids(&first, mode), ranked_ids(&first, mode));
    }
}

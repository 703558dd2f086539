//! Edge-list file handling for collaboration graphs
//!
//! The format is line oriented and whitespace tokenized:
//!
//! ```text
//! g <vertex count>
//! e <a> <b>
//! ```
//!
//! `g` declares ids `0..n` and must precede every `e` record. Blank lines and
//! lines starting with any other token are ignored.

use crate::error::{GraphError, Result};
use crate::graph::{CollaborationGraph, GraphBuilder};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Vertex ids are stored as `u32` in the compressed graph
pub const MAX_VERTEX_COUNT: usize = u32::MAX as usize;

/// Load an edge-list file into a built graph
pub fn load_edge_list(path: impl AsRef<Path>) -> anyhow::Result<CollaborationGraph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("failed to open edge list {}", path.display()))?;
    let builder = parse_edge_list(BufReader::new(file))
        .with_context(|| format!("failed to parse edge list {}", path.display()))?;

    log::info!(
        "Loaded {} vertices and {} edges",
        builder.vertex_count(),
        builder.edge_count()
    );

    let graph = builder.build();
    log::debug!("Graph uses about {} bytes", graph.memory_usage());

    Ok(graph)
}

/// Parse edge-list records into a graph builder
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<GraphBuilder> {
    let mut builder: Option<GraphBuilder> = None;
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("g") => {
                let vertex_count = next_number(&mut tokens, line_number, "vertex count")?;
                if vertex_count > MAX_VERTEX_COUNT {
                    return Err(GraphError::Parse {
                        line: line_number,
                        message: format!(
                            "vertex count {} is too large (at most {})",
                            vertex_count, MAX_VERTEX_COUNT
                        ),
                    });
                }
                if builder.is_some() {
                    log::warn!(
                        "line {}: repeated `g` header discards the edges read so far",
                        line_number
                    );
                }
                builder = Some(GraphBuilder::new(vertex_count));
            }
            Some("e") => {
                let current = builder
                    .as_mut()
                    .ok_or(GraphError::MissingHeader { line: line_number })?;
                let a = next_number(&mut tokens, line_number, "edge endpoint")?;
                let b = next_number(&mut tokens, line_number, "edge endpoint")?;
                current.add_edge(a, b)?;
            }
            _ => {}
        }
    }

    builder.ok_or(GraphError::MissingHeader {
        line: last_line,
    })
}

fn next_number<'a, I>(tokens: &mut I, line: usize, what: &str) -> Result<usize>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| GraphError::Parse {
        line,
        message: format!("missing {}", what),
    })?;

    token.parse().map_err(|_| GraphError::Parse {
        line,
        message: format!("invalid {} `{}`", what, token),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<GraphBuilder> {
        parse_edge_list(Cursor::new(text))
    }

    #[test]
    fn parses_chain() {
        let graph = parse("g 5\ne 0 1\ne 1 2\ne 2 3\ne 3 4\n").unwrap().build();
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        assert_eq!(degrees, vec![1, 2, 2, 2, 1]);
    }

    #[test]
    fn ignores_blank_and_unknown_lines() {
        let graph = parse("# authors\n\ng 3\n  \nc comment\ne 0 2 extra\n")
            .unwrap()
            .build();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(0, 2));
    }

    #[test]
    fn out_of_range_edge_fails() {
        let err = parse("g 5\ne 0 1\ne 0 7\n").unwrap_err();
        assert!(matches!(
            err,
            GraphError::OutOfRange {
                vertex: 7,
                vertex_count: 5
            }
        ));
    }

    #[test]
    fn malformed_number_fails() {
        let err = parse("g 5\ne 0 x\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let err = parse("g -3\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = parse("g 4\ne 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));
    }

    #[test]
    fn oversized_vertex_count_fails() {
        let err = parse("g 18446744073709551615\ne 0 1\n").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        let err = parse(&format!("g {}\n", MAX_VERTEX_COUNT + 1)).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    }

    #[test]
    fn edge_before_header_fails() {
        let err = parse("e 0 1\ng 2\n").unwrap_err();
        assert!(matches!(err, GraphError::MissingHeader { line: 1 }));

        let err = parse("\n\n").unwrap_err();
        assert!(matches!(err, GraphError::MissingHeader { line: 2 }));
    }

    #[test]
    fn repeated_header_restarts_storage() {
        let graph = parse("g 3\ne 0 1\ng 4\ne 2 3\n").unwrap().build();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.has_edge(0, 1));
    }
}

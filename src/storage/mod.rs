//! Results persistence module

use anyhow::Result;
use crate::analysis::ComponentRanking;
use crate::cluster::metrics::DegreeBucket;
use crate::cluster::ComponentLabels;
use crate::graph::CollaborationGraph;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use serde_json::{json, to_string_pretty};

/// File name of the degree distribution table
pub const DEGREE_DATA_FILE: &str = "degree-data.txt";

/// File name of the JSON summary
pub const SUMMARY_FILE: &str = "summary.json";

/// Write the degree distribution table to `output_dir`
///
/// The file holds three blocks headed `degree`, `count` and `probability`,
/// each listing one value per line in ascending degree order.
pub fn save_degree_distribution(rows: &[DegreeBucket], output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(DEGREE_DATA_FILE);
    log::info!("Saving degree distribution ({} rows) to {}", rows.len(), path.display());

    let mut file = BufWriter::new(File::create(&path)?);
    write_degree_distribution(&mut file, rows)?;
    file.flush()?;

    Ok(path)
}

fn write_degree_distribution<W: Write>(out: &mut W, rows: &[DegreeBucket]) -> Result<()> {
    writeln!(out, "degree")?;
    for row in rows {
        writeln!(out, "{}", row.degree)?;
    }

    writeln!(out, "count")?;
    for row in rows {
        writeln!(out, "{}", row.count)?;
    }

    writeln!(out, "probability")?;
    for row in rows {
        writeln!(out, "{:?}", row.probability)?;
    }

    Ok(())
}

/// Save graph, component and ranking information as JSON
pub fn save_summary(
    graph: &CollaborationGraph,
    components: &ComponentLabels,
    rankings: &[ComponentRanking],
    output_dir: &Path,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(SUMMARY_FILE);
    log::info!("Saving summary to {}", path.display());

    let avg_degree = if graph.vertex_count() == 0 {
        0.0
    } else {
        2.0 * graph.edge_count() as f64 / graph.vertex_count() as f64
    };

    let summary = json!({
        "graph_stats": {
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "avg_degree": avg_degree,
        },
        "component_stats": {
            "component_count": components.component_count(),
            "largest": components.largest(),
            "smallest": components.smallest(),
        },
        "rankings": rankings,
    });

    let mut file = File::create(&path)?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(path)
}

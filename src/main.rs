use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use coauthor_graph_analyzer::analysis::Analyzer;
use coauthor_graph_analyzer::cluster::ranking::RankMode;
use coauthor_graph_analyzer::cluster::ComponentTarget;
use coauthor_graph_analyzer::config::{AnalysisMode, Config};
use coauthor_graph_analyzer::{data, report, storage};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ComponentChoice {
    Largest,
    Smallest,
}

#[derive(Parser, Debug)]
#[clap(
    name = "coauthor-graph-analyzer",
    about = "Connected-component and centrality analysis of coauthorship graphs"
)]
struct Cli {
    /// Path to input edge-list file
    input: PathBuf,

    /// 0 for degree centrality, 1 for closeness, 2 for both
    #[clap(value_parser = clap::value_parser!(u8).range(0..=2))]
    mode: u8,

    /// 1 to also list each ranked vertex's neighbors, 0 otherwise
    #[clap(value_parser = clap::value_parser!(u8).range(0..=1))]
    info: u8,

    /// Maximum number of vertices listed per ranking
    #[clap(long, default_value = "40")]
    top: usize,

    /// Component to rank
    #[clap(long, value_enum, default_value = "largest")]
    component: ComponentChoice,

    /// Output directory for the degree distribution and summary
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,

    /// Also write summary.json to the output directory
    #[clap(long)]
    summary: bool,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let mode = AnalysisMode::from_code(self.mode)
            .ok_or_else(|| anyhow!("unsupported mode {}", self.mode))?;

        Ok(Config {
            mode,
            show_neighbors: self.info == 1,
            top_n: self.top,
            target: match self.component {
                ComponentChoice::Largest => ComponentTarget::Largest,
                ComponentChoice::Smallest => ComponentTarget::Smallest,
            },
            output_dir: self.output_dir.clone(),
            write_summary: self.summary,
        })
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let config = args.config()?;

    log::info!("Starting coauthor graph analysis");
    log::info!("Input: {}", args.input.display());

    // 1. Load data; nothing below runs on a graph that failed to load
    let graph = data::load_edge_list(&args.input)?;

    // 2. Label connected components
    let mut analyzer = Analyzer::new(graph);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_component_summary(&mut out, analyzer.label_components()?)?;

    // 3. Rank the target component
    let mut rankings = Vec::new();
    let target_size = analyzer.resolve(config.target)?.size;
    let limit = config.ranking_limit(target_size);

    if config.mode.includes_degree() {
        let ranking = analyzer.rank_component(config.target, RankMode::Degree, limit)?;
        report::write_ranking(&mut out, &ranking, analyzer.graph(), config.show_neighbors)?;
        storage::save_degree_distribution(&analyzer.degree_distribution()?, &config.output_dir)?;
        rankings.push(ranking);
    }

    if config.mode.includes_closeness() {
        let ranking = analyzer.rank_component(config.target, RankMode::Closeness, limit)?;
        report::write_ranking(&mut out, &ranking, analyzer.graph(), config.show_neighbors)?;
        rankings.push(ranking);
    }
    out.flush()?;

    // 4. Save results
    if config.write_summary {
        storage::save_summary(
            analyzer.graph(),
            analyzer.components()?,
            &rankings,
            &config.output_dir,
        )?;
    }

    log::info!("Analysis complete");

    Ok(())
}

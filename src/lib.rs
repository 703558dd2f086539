//! Core library functions for the coauthor graph analyzer

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod cluster;
pub mod report;
pub mod storage;

pub use analysis::{Analyzer, ComponentRanking};
pub use error::GraphError;

//! Graph representation and traversal module

pub mod compressed;
pub mod builder;
pub mod bfs;

pub use builder::GraphBuilder;
pub use compressed::CollaborationGraph;
pub use bfs::TraversalContext;

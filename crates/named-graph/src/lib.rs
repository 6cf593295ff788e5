use std::{error::Error, fmt::Display};

use graph::Target;

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;
pub mod types;

pub use algorithms::{
    dijkstra::{Dijkstra, DijkstraResult},
    traversal::Traversal,
};
pub use graph::{Path, adjacency::AdjacencyGraph};
pub use types::EdgePolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    DuplicateVertex(String),
    InvalidVertex { source: String, destination: String },
    VertexNotFound(String),
    EdgeNotFound { source: String, destination: String },
    NoPath { start: String, end: String },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateVertex(name) => write!(f, "vertex '{}' already exists", name),
            Self::InvalidVertex {
                source,
                destination,
            } => write!(
                f,
                "edge '{}' -> '{}' is not allowed by the edge policy",
                source, destination
            ),
            Self::VertexNotFound(name) => write!(f, "vertex '{}' not found in graph", name),
            Self::EdgeNotFound {
                source,
                destination,
            } => write!(f, "no edge from '{}' to '{}'", source, destination),
            Self::NoPath { start, end } => write!(f, "no path from '{}' to '{}'", start, end),
        }
    }
}

/// Read access to a directed graph whose vertices are identified by name.
///
/// The traversal and shortest path algorithms are implemented for every type
/// implementing this trait.
pub trait Graph {
    type EV;
    type NV;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Returns `true` if `name` carries a value.
    fn contains_vertex(&self, name: &str) -> bool;

    /// Returns `true` if `name` has outgoing edges.
    fn has_out_edges(&self, name: &str) -> bool;

    fn vertex_value(&self, name: &str) -> Option<&Self::NV>;

    /// Outgoing edges of `name` in ascending order of the target name.
    fn out_neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = Target<'a, Self::EV>>
    where
        Self::EV: 'a;
}

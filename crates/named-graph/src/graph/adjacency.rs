use std::{
    collections::{BTreeMap, hash_map::Entry},
    fmt::{self, Display},
};

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Graph, GraphError, graph::Target, types::EdgePolicy};

/// Directed graph keyed by vertex name.
///
/// Outgoing edges and vertex values live in two independent maps. A vertex
/// exists iff it has a value; edges may point to names without one. Every
/// edge bucket is ordered by target name, so iterating the neighbors of a
/// vertex is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph<NV, EV = i64> {
    adjacency: FxHashMap<String, BTreeMap<String, EV>>,
    vertex_values: FxHashMap<String, NV>,
    policy: EdgePolicy,
}

impl<NV, EV> AdjacencyGraph<NV, EV> {
    pub fn new() -> Self {
        Self::with_policy(EdgePolicy::default())
    }

    pub fn with_policy(policy: EdgePolicy) -> Self {
        Self {
            adjacency: FxHashMap::default(),
            vertex_values: FxHashMap::default(),
            policy,
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    pub fn add_vertex(&mut self, name: impl Into<String>, data: NV) -> Result<(), GraphError> {
        match self.vertex_values.entry(name.into()) {
            Entry::Occupied(entry) => Err(GraphError::DuplicateVertex(entry.key().clone())),
            Entry::Vacant(entry) => {
                trace!("added vertex '{}'", entry.key());
                entry.insert(data);
                Ok(())
            }
        }
    }

    /// Adds the edge `source -> destination` or updates its cost.
    ///
    /// Returns the previous cost if the edge already existed.
    pub fn add_directed_edge(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        cost: EV,
    ) -> Result<Option<EV>, GraphError> {
        let source = source.into();
        let destination = destination.into();

        let source_known = self.vertex_values.contains_key(&source);
        let destination_known = self.vertex_values.contains_key(&destination);
        if !self.policy.admits(source_known, destination_known) {
            debug!(
                "rejected edge '{}' -> '{}' under {:?} policy",
                source, destination, self.policy
            );
            return Err(GraphError::InvalidVertex {
                source,
                destination,
            });
        }

        trace!("added edge '{}' -> '{}'", source, destination);
        Ok(self
            .adjacency
            .entry(source)
            .or_default()
            .insert(destination, cost))
    }

    pub fn data(&self, name: &str) -> Result<&NV, GraphError> {
        self.vertex_values
            .get(name)
            .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))
    }

    pub fn data_mut(&mut self, name: &str) -> Result<&mut NV, GraphError> {
        self.vertex_values
            .get_mut(name)
            .ok_or_else(|| GraphError::VertexNotFound(name.to_owned()))
    }

    /// Names of all vertices carrying a value.
    pub fn vertices(&self) -> FxHashSet<&str> {
        self.vertex_values.keys().map(String::as_str).collect()
    }

    fn sorted_vertices(&self) -> Vec<&str> {
        let mut vertices: Vec<&str> = self.vertex_values.keys().map(String::as_str).collect();
        vertices.sort_unstable();
        vertices
    }
}

impl<NV, EV: Copy> AdjacencyGraph<NV, EV> {
    /// Targets and costs of the outgoing edges of `name`. Empty if `name`
    /// has no outgoing edges or is unknown.
    pub fn adjacent_vertices(&self, name: &str) -> BTreeMap<&str, EV> {
        self.adjacency
            .get(name)
            .into_iter()
            .flatten()
            .map(|(target, cost)| (target.as_str(), *cost))
            .collect()
    }

    pub fn cost(&self, source: &str, destination: &str) -> Result<EV, GraphError> {
        self.adjacency
            .get(source)
            .and_then(|targets| targets.get(destination))
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound {
                source: source.to_owned(),
                destination: destination.to_owned(),
            })
    }
}

impl<NV, EV> Default for AdjacencyGraph<NV, EV> {
    fn default() -> Self {
        Self::new()
    }
}

impl<NV, EV> Graph for AdjacencyGraph<NV, EV> {
    type EV = EV;
    type NV = NV;

    fn vertex_count(&self) -> usize {
        self.vertex_values.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    fn contains_vertex(&self, name: &str) -> bool {
        self.vertex_values.contains_key(name)
    }

    fn has_out_edges(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    fn vertex_value(&self, name: &str) -> Option<&NV> {
        self.vertex_values.get(name)
    }

    fn out_neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = Target<'a, EV>>
    where
        EV: 'a,
    {
        self.adjacency
            .get(name)
            .into_iter()
            .flatten()
            .map(|(target, cost)| Target::new(target, cost))
    }
}

/// Renders all vertices and their outgoing edges in lexicographic order.
///
/// ```text
/// Vertices: [A, B]
/// Edges:
/// Vertex(A)--->{B=4}
/// Vertex(B)--->{}
/// ```
impl<NV, EV: Display> Display for AdjacencyGraph<NV, EV> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices = self.sorted_vertices();

        // Without vertices the separator trimming also eats the opening " [".
        if vertices.is_empty() {
            writeln!(f, "Vertices:]")?;
        } else {
            writeln!(f, "Vertices: [{}]", vertices.join(", "))?;
        }
        writeln!(f, "Edges:")?;

        for vertex in vertices {
            let edges = self
                .adjacency
                .get(vertex)
                .into_iter()
                .flatten()
                .map(|(target, cost)| format!("{}={}", target, cost))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "Vertex({})--->{{{}}}", vertex, edges)?;
        }

        Ok(())
    }
}

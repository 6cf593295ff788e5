use std::{fmt::Display, str::FromStr};

use log::info;

use crate::{
    Graph, GraphError,
    graph::adjacency::AdjacencyGraph,
    input::edgelist::{EdgeList, EdgeListError},
    types::EdgePolicy,
};

pub struct Uninitialized {
    policy: EdgePolicy,
}

pub struct WithVertices<NV> {
    policy: EdgePolicy,
    vertices: Vec<(String, NV)>,
}

pub struct FromEdgeList<NV, EV> {
    policy: EdgePolicy,
    vertices: Vec<(String, NV)>,
    edges: EdgeList<EV>,
}

/// Assembles an [`AdjacencyGraph`]. Vertices are always inserted before the
/// edges, so the edge policy sees every vertex.
///
/// ```
/// use named_graph::{EdgePolicy, builder::GraphBuilder};
///
/// let graph = GraphBuilder::new()
///     .policy(EdgePolicy::Strict)
///     .vertex("A", 1)
///     .vertex("B", 2)
///     .edge_list_str::<i64>("A B 4")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.cost("A", "B"), Ok(4));
/// ```
#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {
                policy: EdgePolicy::default(),
            },
        }
    }

    pub fn policy(self, policy: EdgePolicy) -> Self {
        Self {
            state: Uninitialized { policy },
        }
    }

    pub fn vertex<NV>(self, name: impl Into<String>, data: NV) -> GraphBuilder<WithVertices<NV>> {
        self.vertices([(name, data)])
    }

    pub fn vertices<NV, S, I>(self, vertices: I) -> GraphBuilder<WithVertices<NV>>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, NV)>,
    {
        GraphBuilder {
            state: WithVertices {
                policy: self.state.policy,
                vertices: vertices.into_iter().map(|(n, d)| (n.into(), d)).collect(),
            },
        }
    }
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl<NV> GraphBuilder<WithVertices<NV>> {
    pub fn vertex(mut self, name: impl Into<String>, data: NV) -> Self {
        self.state.vertices.push((name.into(), data));
        self
    }

    pub fn edges<EV>(self, edges: EdgeList<EV>) -> GraphBuilder<FromEdgeList<NV, EV>> {
        GraphBuilder {
            state: FromEdgeList {
                policy: self.state.policy,
                vertices: self.state.vertices,
                edges,
            },
        }
    }

    /// Parses the edges from text, see [`EdgeList`] for the format.
    pub fn edge_list_str<EV>(
        self,
        s: &str,
    ) -> Result<GraphBuilder<FromEdgeList<NV, EV>>, EdgeListError>
    where
        EV: FromStr,
        EV::Err: Display,
    {
        Ok(self.edges(EdgeList::try_from(s)?))
    }

    /// Builds a graph without edges.
    pub fn build<EV>(self) -> Result<AdjacencyGraph<NV, EV>, GraphError> {
        self.edges(EdgeList::new(vec![])).build()
    }
}

impl<NV, EV> GraphBuilder<FromEdgeList<NV, EV>> {
    pub fn build(self) -> Result<AdjacencyGraph<NV, EV>, GraphError> {
        let FromEdgeList {
            policy,
            vertices,
            edges,
        } = self.state;
        let mut graph = AdjacencyGraph::with_policy(policy);

        for (name, data) in vertices {
            graph.add_vertex(name, data)?;
        }

        for (source, destination, cost) in edges {
            graph.add_directed_edge(source, destination, cost)?;
        }

        info!(
            "Built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

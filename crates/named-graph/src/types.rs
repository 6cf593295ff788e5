use serde::{Deserialize, Serialize};

/// Decides which edges [`AdjacencyGraph::add_directed_edge`] accepts,
/// depending on whether the endpoints carry a value.
///
/// [`AdjacencyGraph::add_directed_edge`]: crate::graph::adjacency::AdjacencyGraph::add_directed_edge
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Rejects an edge only if the source is unknown and the destination is known.
    #[default]
    Legacy,
    /// Accepts every edge.
    Permissive,
    /// Both endpoints have to be known.
    Strict,
}

impl EdgePolicy {
    pub fn admits(self, source_known: bool, destination_known: bool) -> bool {
        match self {
            Self::Legacy => source_known || !destination_known,
            Self::Permissive => true,
            Self::Strict => source_known && destination_known,
        }
    }
}

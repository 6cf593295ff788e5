use std::cmp::Reverse;

use log::{debug, trace};
use num_traits::{CheckedAdd, PrimInt, Signed, Zero};
use priority_queue::PriorityQueue;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    Graph, GraphError,
    algorithms::traversal::{LexicographicFrontier, explore},
    graph::Path,
};

/// Vertex name reported by [`DijkstraResult::into_legacy`] when there is no path.
pub const NO_PATH_VERTEX: &str = "None";

pub trait Dijkstra: Graph
where
    Self::EV: PrimInt,
{
    /// Cheapest path from `start` to `end`.
    ///
    /// Candidates with equal distance are settled in lexicographic order, so
    /// among equally cheap paths the result is deterministic.
    fn dijkstra(&self, start: &str, end: &str) -> DijkstraResult<Self::EV>;

    /// Like [`Dijkstra::dijkstra`], but reports a missing path as [`GraphError::NoPath`].
    fn shortest_path(&self, start: &str, end: &str) -> Result<Path<Self::EV>, GraphError> {
        self.dijkstra(start, end)
            .into_path()
            .ok_or_else(|| GraphError::NoPath {
                start: start.to_owned(),
                end: end.to_owned(),
            })
    }
}

impl<G> Dijkstra for G
where
    G: Graph,
    G::EV: PrimInt,
{
    #[instrument(level = "trace", skip(self))]
    fn dijkstra(&self, start: &str, end: &str) -> DijkstraResult<G::EV> {
        if start == end {
            return DijkstraResult::Found(Path::new(G::EV::zero(), vec![start.to_owned()]));
        }

        let reachable = explore(self, start, LexicographicFrontier::default(), |_, _| {});
        if !reachable.contains(end) {
            debug!("'{}' is not reachable from '{}'", end, start);
            return DijkstraResult::Unreachable;
        }

        let mut distances: FxHashMap<&str, G::EV> = FxHashMap::default();
        let mut predecessors: FxHashMap<&str, &str> = FxHashMap::default();
        let mut settled = FxHashSet::default();
        let mut frontier = PriorityQueue::with_hasher(FxBuildHasher);

        distances.insert(start, G::EV::zero());
        frontier.push(start, Reverse((G::EV::zero(), start)));

        while let Some((current, Reverse((distance, _)))) = frontier.pop() {
            settled.insert(current);
            if current == end {
                break;
            }

            for neighbor in self.out_neighbors(current) {
                let next = neighbor.target();
                // Only vertices carrying a value take part in the relaxation.
                if settled.contains(next) || !self.contains_vertex(next) {
                    continue;
                }

                // An overflowing sum is never shorter than a known distance.
                let Some(candidate) = distance.checked_add(neighbor.value()) else {
                    trace!("cost overflow on edge '{}' -> '{}'", current, next);
                    continue;
                };

                if distances.get(next).is_none_or(|known| candidate < *known) {
                    trace!("relaxed '{}' via '{}'", next, current);
                    distances.insert(next, candidate);
                    predecessors.insert(next, current);
                    frontier.push(next, Reverse((candidate, next)));
                }
            }
        }

        debug!(
            "Dijkstra from '{}' to '{}' settled {} vertices",
            start,
            end,
            settled.len()
        );

        let Some(cost) = distances.get(end).copied() else {
            debug!("'{}' is reachable from '{}' but was never relaxed", end, start);
            return DijkstraResult::Unreachable;
        };

        match trace_back(&predecessors, start, end) {
            Some(vertices) => DijkstraResult::Found(Path::new(cost, vertices)),
            None => DijkstraResult::Unreachable,
        }
    }
}

fn trace_back<'a>(
    predecessors: &FxHashMap<&'a str, &'a str>,
    start: &str,
    end: &'a str,
) -> Option<Vec<String>> {
    let mut vertices = vec![end.to_owned()];
    let mut current = end;

    while current != start {
        current = predecessors.get(current).copied()?;
        vertices.push(current.to_owned());
    }

    vertices.reverse();

    Some(vertices)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DijkstraResult<EV> {
    Found(Path<EV>),
    Unreachable,
}

impl<EV: Copy> DijkstraResult<EV> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn cost(&self) -> Option<EV> {
        self.path().map(Path::cost)
    }

    pub fn path(&self) -> Option<&Path<EV>> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path<EV>> {
        match self {
            Self::Found(path) => Some(path),
            Self::Unreachable => None,
        }
    }
}

impl<EV: PrimInt + Signed> DijkstraResult<EV> {
    /// Cost and vertex names, with `(-1, ["None"])` standing in for a missing path.
    pub fn into_legacy(self) -> (EV, Vec<String>) {
        match self {
            Self::Found(path) => path.into_parts(),
            Self::Unreachable => (-EV::one(), vec![NO_PATH_VERTEX.to_string()]),
        }
    }
}

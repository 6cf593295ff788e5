use std::cmp::Reverse;

use log::{debug, trace};
use priority_queue::PriorityQueue;
use rustc_hash::{FxBuildHasher, FxHashSet};

use crate::{Graph, GraphError};

pub(crate) trait Frontier<'a> {
    fn push(&mut self, name: &'a str);

    fn pop(&mut self) -> Option<&'a str>;
}

/// Frontier that always yields the lexicographically smallest name.
pub(crate) struct LexicographicFrontier<'a>(
    PriorityQueue<&'a str, Reverse<&'a str>, FxBuildHasher>,
);

impl Default for LexicographicFrontier<'_> {
    fn default() -> Self {
        Self(PriorityQueue::with_hasher(FxBuildHasher))
    }
}

impl<'a> Frontier<'a> for LexicographicFrontier<'a> {
    fn push(&mut self, name: &'a str) {
        self.0.push(name, Reverse(name));
    }

    fn pop(&mut self) -> Option<&'a str> {
        self.0.pop().map(|(name, _)| name)
    }
}

impl<'a> Frontier<'a> for Vec<&'a str> {
    fn push(&mut self, name: &'a str) {
        Vec::push(self, name);
    }

    fn pop(&mut self) -> Option<&'a str> {
        Vec::pop(self)
    }
}

/// Visits every vertex reachable from `start` exactly once, in the order the
/// frontier hands them out, and returns the set of visited names.
pub(crate) fn explore<'a, G, Q, F>(
    graph: &'a G,
    start: &'a str,
    mut frontier: Q,
    mut visit: F,
) -> FxHashSet<&'a str>
where
    G: Graph,
    Q: Frontier<'a>,
    F: FnMut(&str, Option<&G::NV>),
{
    let mut visited = FxHashSet::default();
    frontier.push(start);

    while let Some(current) = frontier.pop() {
        if !visited.insert(current) {
            continue;
        }

        trace!("visiting '{}'", current);
        visit(current, graph.vertex_value(current));

        for neighbor in graph.out_neighbors(current) {
            if !visited.contains(neighbor.target()) {
                frontier.push(neighbor.target());
            }
        }
    }

    visited
}

pub trait Traversal: Graph {
    /// Breadth-first search from `start`, calling `visit` once per vertex.
    ///
    /// The frontier is ordered lexicographically instead of first-in-first-out:
    /// the next vertex is always the smallest name discovered so far. Vertices
    /// without a value are still visited and passed `None`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] if `start` has no outgoing
    /// edges. Returns the number of visited vertices.
    fn breadth_first_search<F>(&self, start: &str, visit: F) -> Result<usize, GraphError>
    where
        F: FnMut(&str, Option<&Self::NV>);

    /// Depth-first search from `start`, calling `visit` once per vertex.
    ///
    /// Neighbors are pushed onto the stack in ascending order, so among
    /// siblings the largest name is visited first.
    fn depth_first_search<F>(&self, start: &str, visit: F) -> Result<usize, GraphError>
    where
        F: FnMut(&str, Option<&Self::NV>);
}

impl<G> Traversal for G
where
    G: Graph,
{
    fn breadth_first_search<F>(&self, start: &str, visit: F) -> Result<usize, GraphError>
    where
        F: FnMut(&str, Option<&Self::NV>),
    {
        if !self.has_out_edges(start) {
            return Err(GraphError::VertexNotFound(start.to_owned()));
        }

        let visited = explore(self, start, LexicographicFrontier::default(), visit).len();
        debug!("BFS from '{}' visited {} vertices", start, visited);

        Ok(visited)
    }

    fn depth_first_search<F>(&self, start: &str, visit: F) -> Result<usize, GraphError>
    where
        F: FnMut(&str, Option<&Self::NV>),
    {
        if !self.has_out_edges(start) {
            return Err(GraphError::VertexNotFound(start.to_owned()));
        }

        let visited = explore(self, start, Vec::new(), visit).len();
        debug!("DFS from '{}' visited {} vertices", start, visited);

        Ok(visited)
    }
}

#[cfg(test)]
mod test {
    use crate::{GraphError, graph::adjacency::AdjacencyGraph};

    use super::Traversal;

    // a -> {c, b}, b -> {d}, c -> {d, e}, d -> {a}, e has no edges, x -> {a} is unreachable
    fn setup() -> AdjacencyGraph<u32> {
        let mut graph = AdjacencyGraph::new();
        for (i, name) in ["a", "b", "c", "d", "e", "x"].into_iter().enumerate() {
            graph.add_vertex(name, i as u32).unwrap();
        }
        let edges = [
            ("a", "c"),
            ("a", "b"),
            ("b", "d"),
            ("c", "d"),
            ("c", "e"),
            ("d", "a"),
            ("x", "a"),
        ];
        for (s, t) in edges {
            graph.add_directed_edge(s, t, 1).unwrap();
        }

        graph
    }

    fn collect<T>(
        search: impl FnOnce(&mut dyn FnMut(&str, Option<&u32>)) -> T,
    ) -> Vec<(String, Option<u32>)> {
        let mut visited = Vec::new();
        search(&mut |name, value| visited.push((name.to_string(), value.copied())));
        visited
    }

    #[test]
    fn bfs_lexicographic_order() {
        let graph = setup();
        let mut order = Vec::new();

        let count = graph
            .breadth_first_search("a", |name, _| order.push(name.to_string()))
            .unwrap();

        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(count, 5);
    }

    #[test]
    fn bfs_frontier_is_not_fifo() {
        // FIFO would visit z before b, the lexicographic frontier does not.
        let mut graph: AdjacencyGraph<()> = AdjacencyGraph::new();
        graph.add_directed_edge("a", "z", 1).unwrap();
        graph.add_directed_edge("a", "y", 1).unwrap();
        graph.add_directed_edge("y", "b", 1).unwrap();
        let mut order = Vec::new();

        graph
            .breadth_first_search("a", |name, _| order.push(name.to_string()))
            .unwrap();

        assert_eq!(order, vec!["a", "y", "b", "z"]);
    }

    #[test]
    fn dfs_order() {
        let graph = setup();
        let mut order = Vec::new();

        let count = graph
            .depth_first_search("a", |name, _| order.push(name.to_string()))
            .unwrap();

        assert_eq!(order, vec!["a", "c", "e", "d", "b"]);
        assert_eq!(count, 5);
    }

    #[test]
    fn callback_receives_values() {
        let graph = setup();

        let visited = collect(|visit| graph.breadth_first_search("c", visit).unwrap());

        assert_eq!(
            visited,
            vec![
                ("c".to_string(), Some(2)),
                ("d".to_string(), Some(3)),
                ("a".to_string(), Some(0)),
                ("b".to_string(), Some(1)),
                ("e".to_string(), Some(4)),
            ]
        );
    }

    #[test]
    fn dangling_target_is_visited_without_value() {
        let mut graph = setup();
        graph.add_directed_edge("e", "ghost", 1).unwrap();

        let visited = collect(|visit| graph.depth_first_search("e", visit).unwrap());

        assert_eq!(
            visited,
            vec![("e".to_string(), Some(4)), ("ghost".to_string(), None)]
        );
    }

    #[test]
    fn start_without_edges() {
        let graph = setup();

        assert_eq!(
            graph.breadth_first_search("e", |_, _| {}),
            Err(GraphError::VertexNotFound("e".to_string()))
        );
        assert_eq!(
            graph.depth_first_search("unknown", |_, _| {}),
            Err(GraphError::VertexNotFound("unknown".to_string()))
        );
    }
}

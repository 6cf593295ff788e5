use serde::{Deserialize, Serialize};

pub mod adjacency;

/// Borrowed view of an outgoing edge: the target vertex and the edge cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a, EV> {
    target: &'a str,
    value: &'a EV,
}

impl<'a, EV> Target<'a, EV> {
    pub fn new(target: &'a str, value: &'a EV) -> Target<'a, EV> {
        Self { target, value }
    }

    pub fn target(&self) -> &'a str {
        self.target
    }

    pub fn value(&self) -> &'a EV {
        self.value
    }
}

/// A path through the graph together with its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path<EV> {
    cost: EV,
    vertices: Vec<String>,
}

impl<EV: Copy> Path<EV> {
    pub fn new(cost: EV, vertices: Vec<String>) -> Self {
        Self { cost, vertices }
    }

    pub fn cost(&self) -> EV {
        self.cost
    }

    /// Vertex names from start to end, both inclusive.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn start(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }

    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_parts(self) -> (EV, Vec<String>) {
        (self.cost, self.vertices)
    }
}

#[cfg(test)]
mod test {
    use super::Path;

    #[test]
    fn path_accessors() {
        let path = Path::new(3, vec!["A".to_string(), "B".to_string(), "C".to_string()]);

        assert_eq!(path.start(), Some("A"));
        assert_eq!(path.end(), Some("C"));
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        assert_eq!(path.into_parts().0, 3);
    }

    #[test]
    fn single_vertex_path_is_empty() {
        let path = Path::new(0, vec!["A".to_string()]);

        assert_eq!(path.len(), 0);
        assert!(path.is_empty());
        assert_eq!(path.start(), path.end());
    }
}

use std::{error::Error, fmt::Display, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListErrorKind {
    MissingSource,
    MissingDestination,
    MissingCost,
    InvalidCost(String),
    TrailingToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeListError {
    /// 1-based line number.
    pub line: usize,
    pub kind: EdgeListErrorKind,
}

impl Error for EdgeListError {}

impl Display for EdgeListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EdgeListErrorKind::MissingSource => write!(f, "line {}: missing source", self.line),
            EdgeListErrorKind::MissingDestination => {
                write!(f, "line {}: missing destination", self.line)
            }
            EdgeListErrorKind::MissingCost => write!(f, "line {}: missing cost", self.line),
            EdgeListErrorKind::InvalidCost(reason) => {
                write!(f, "line {}: invalid cost: {}", self.line, reason)
            }
            EdgeListErrorKind::TrailingToken(token) => {
                write!(f, "line {}: unexpected token '{}'", self.line, token)
            }
        }
    }
}

/// Directed edges given as `(source, destination, cost)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList<EV> {
    edges: Vec<(String, String, EV)>,
}

impl<EV> EdgeList<EV> {
    pub fn new(edges: Vec<(String, String, EV)>) -> Self {
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EV)> {
        self.edges
            .iter()
            .map(|(s, t, c)| (s.as_str(), t.as_str(), c))
    }
}

impl<EV> IntoIterator for EdgeList<EV> {
    type Item = (String, String, EV);
    type IntoIter = std::vec::IntoIter<(String, String, EV)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<S, T, EV> FromIterator<(S, T, EV)> for EdgeList<EV>
where
    S: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, T, EV)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(s, t, c)| (s.into(), t.into(), c))
                .collect(),
        )
    }
}

/// Parses one edge per line: `source destination cost`, separated by
/// whitespace. Blank lines and lines starting with `#` are skipped.
impl<EV> TryFrom<&str> for EdgeList<EV>
where
    EV: FromStr,
    EV::Err: Display,
{
    type Error = EdgeListError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut edges = vec![];

        for (index, line) in value.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let error = |kind| EdgeListError {
                line: index + 1,
                kind,
            };
            let mut tokens = line.split_whitespace();

            let source = tokens
                .next()
                .ok_or_else(|| error(EdgeListErrorKind::MissingSource))?;
            let destination = tokens
                .next()
                .ok_or_else(|| error(EdgeListErrorKind::MissingDestination))?;
            let cost = tokens
                .next()
                .ok_or_else(|| error(EdgeListErrorKind::MissingCost))?;
            let cost = EV::from_str(cost)
                .map_err(|e| error(EdgeListErrorKind::InvalidCost(e.to_string())))?;

            if let Some(token) = tokens.next() {
                return Err(error(EdgeListErrorKind::TrailingToken(token.to_owned())));
            }

            edges.push((source.to_owned(), destination.to_owned(), cost));
        }

        Ok(EdgeList::new(edges))
    }
}

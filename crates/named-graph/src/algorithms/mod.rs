pub mod dijkstra;
pub mod traversal;

use rustc_hash::FxHashSet as HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, ValidationError};

/// Built-in dataset of Indian cities and road distances in km.
pub const SAMPLE_EDGES: [(&str, &str, u32); 12] = [
    ("Mumbai", "Pune", 150),
    ("Mumbai", "Ahmedabad", 530),
    ("Delhi", "Jaipur", 280),
    ("Delhi", "Chandigarh", 240),
    ("Bangalore", "Chennai", 350),
    ("Bangalore", "Hyderabad", 570),
    ("Kolkata", "Bhubaneswar", 440),
    ("Chennai", "Hyderabad", 630),
    ("Pune", "Bangalore", 840),
    ("Jaipur", "Ahmedabad", 680),
    ("Delhi", "Kolkata", 1500),
    ("Mumbai", "Bangalore", 980),
];

/// An undirected connection between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub city_a: String,
    pub city_b: String,
    pub weight: u32,
}

impl Edge {
    pub fn new(city_a: impl Into<String>, city_b: impl Into<String>, weight: u32) -> Self {
        Self {
            city_a: city_a.into(),
            city_b: city_b.into(),
            weight,
        }
    }
}

impl From<&(&str, &str, u32)> for Edge {
    fn from((city_a, city_b, weight): &(&str, &str, u32)) -> Self {
        Self::new(*city_a, *city_b, *weight)
    }
}

/// Edge list plus the set of cities it references, kept in first-seen order.
///
/// Every endpoint of every edge is a vertex and every vertex is an endpoint of some edge:
/// the vertex set is rebuilt whenever edges go away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: Vec<Edge>,
    vertices: Vec<String>,
    vertex_set: HashSet<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in sample graph.
    pub fn sample() -> Self {
        let mut graph = Self::new();
        graph.load_sample();
        graph
    }

    /// Add the edges of `file` after the existing ones, in order.
    ///
    /// Stops at the first invalid edge; the edges before it stay in the graph.
    pub fn extend_from(&mut self, file: GraphFile) -> Result<(), GraphError> {
        for edge in file.edges {
            self.add_edge(&edge.city_a, &edge.city_b, i64::from(edge.weight))?;
        }
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn contains_vertex(&self, city: &str) -> bool {
        self.vertex_set.contains(city)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Validate and append an edge, returning its index.
    ///
    /// Labels are trimmed. The self-loop check ignores case, while the stored labels keep
    /// the casing they were typed with.
    pub fn add_edge(&mut self, city_a: &str, city_b: &str, weight: i64) -> Result<usize, GraphError> {
        let city_a = city_a.trim();
        let city_b = city_b.trim();
        if city_a.is_empty() || city_b.is_empty() {
            return Err(ValidationError::EmptyLabel.into());
        }
        let weight = match u32::try_from(weight) {
            Ok(weight) if weight > 0 => weight,
            _ => return Err(ValidationError::InvalidWeight(weight).into()),
        };
        if city_a.to_lowercase() == city_b.to_lowercase() {
            return Err(ValidationError::SelfLoop(city_a.to_owned(), city_b.to_owned()).into());
        }

        debug!("Adding {} ↔ {}: {} km", city_a, city_b, weight);
        self.edges.push(Edge::new(city_a, city_b, weight));
        self.insert_vertex(city_a);
        self.insert_vertex(city_b);
        Ok(self.edges.len() - 1)
    }

    /// Remove the edge at `index`. Cities no longer referenced by any edge disappear.
    pub fn remove_edge(&mut self, index: usize) -> Result<Edge, GraphError> {
        if index >= self.edges.len() {
            return Err(GraphError::IndexOutOfBounds {
                index,
                len: self.edges.len(),
            });
        }
        let removed = self.edges.remove(index);
        debug!(
            "Removed {} ↔ {}: {} km",
            removed.city_a, removed.city_b, removed.weight
        );
        self.rebuild_vertices();
        Ok(removed)
    }

    pub fn reset(&mut self) {
        self.edges.clear();
        self.vertices.clear();
        self.vertex_set.clear();
    }

    /// Replace the current graph with [SAMPLE_EDGES].
    pub fn load_sample(&mut self) {
        self.edges = SAMPLE_EDGES.iter().map(Edge::from).collect();
        self.rebuild_vertices();
    }

    fn rebuild_vertices(&mut self) {
        self.vertices.clear();
        self.vertex_set.clear();
        let edges = std::mem::take(&mut self.edges);
        for edge in &edges {
            self.insert_vertex(&edge.city_a);
            self.insert_vertex(&edge.city_b);
        }
        self.edges = edges;
    }

    fn insert_vertex(&mut self, city: &str) {
        if self.vertex_set.insert(city.to_owned()) {
            self.vertices.push(city.to_owned());
        }
    }
}

/// On-disk graph description, a list of edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    pub edges: Vec<Edge>,
}

impl TryFrom<GraphFile> for Graph {
    type Error = GraphError;

    fn try_from(file: GraphFile) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        graph.extend_from(file)?;
        Ok(graph)
    }
}

impl From<&Graph> for GraphFile {
    fn from(graph: &Graph) -> Self {
        Self {
            edges: graph.edges().to_vec(),
        }
    }
}

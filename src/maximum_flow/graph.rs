use crate::maximum_flow::error::FlowError;
use num_traits::NumAssign;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
}

/// Directed capacitated graph with arbitrary vertex labels.
///
/// Vertices are interned into dense indices in the order they are first seen,
/// and edges keep their insertion order. Both orders are what the engines
/// iterate in, so runs on the same input are reproducible.
#[derive(Debug, Clone)]
pub struct Graph<V, Flow> {
    labels: Vec<V>,
    index: HashMap<V, usize>,
    pub(crate) edges: Vec<Edge<Flow>>,
    out_edges: Vec<Vec<usize>>,
    pair_to_edge: HashMap<(usize, usize), usize>,
}

impl<V, Flow> Default for Graph<V, Flow> {
    fn default() -> Self {
        Self { labels: Vec::new(), index: HashMap::new(), edges: Vec::new(), out_edges: Vec::new(), pair_to_edge: HashMap::new() }
    }
}

impl<V, Flow> Graph<V, Flow> {
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, u: usize) -> Option<&V> {
        self.labels.get(u)
    }

    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    pub fn edges(&self) -> &[Edge<Flow>] {
        &self.edges
    }
}

impl<V, Flow> Graph<V, Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Vertices reachable from `u` over a single positive-capacity edge, in insertion order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.out_edges
            .get(u)
            .into_iter()
            .flatten()
            .map(|&e| &self.edges[e])
            .filter(|e| e.upper > Flow::zero())
            .map(|e| e.to)
    }

    /// Whether `t` can be reached from `s` over positive-capacity edges.
    pub fn reaches(&self, s: usize, t: usize) -> bool {
        let mut visited = vec![false; self.num_nodes()];
        let mut stack = vec![s];
        visited[s] = true;
        while let Some(u) = stack.pop() {
            if u == t {
                return true;
            }
            for v in self.neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        false
    }

    pub fn max_capacity(&self) -> Flow {
        self.edges.iter().map(|e| e.upper).max().unwrap_or(Flow::zero())
    }

    /// Total capacity of edges leaving the vertex set `source_side`.
    pub fn cut_capacity(&self, source_side: &[usize]) -> Flow {
        let mut inside = vec![false; self.num_nodes()];
        for &u in source_side {
            inside[u] = true;
        }
        self.edges.iter().filter(|e| inside[e.from] && !inside[e.to]).fold(Flow::zero(), |sum, e| sum + e.upper)
    }
}

impl<V, Flow> Graph<V, Flow>
where
    V: Eq + Hash + Clone + Debug,
    Flow: NumAssign + Ord + Copy + Debug,
{
    /// Builds a graph from `(from, to, capacity)` triples.
    ///
    /// Fails on the first negative capacity or on an ordered pair repeated with
    /// a different capacity. An exact repeat is collapsed into the first edge.
    pub fn build<I>(edges: I) -> Result<Self, FlowError>
    where
        I: IntoIterator<Item = (V, V, Flow)>,
    {
        let mut graph = Self::default();
        for (from, to, upper) in edges {
            graph.add_edge(from, to, upper)?;
        }
        debug!(nodes = graph.num_nodes(), edges = graph.num_edges(), "built graph");
        Ok(graph)
    }

    /// Returns the index of `label`, adding it as an isolated vertex if it is new.
    pub fn add_node(&mut self, label: V) -> usize {
        if let Some(&u) = self.index.get(&label) {
            return u;
        }
        self.labels.push(label.clone());
        self.out_edges.push(Vec::new());
        self.index.insert(label, self.labels.len() - 1);
        self.labels.len() - 1
    }

    // return edge index
    pub fn add_edge(&mut self, from: V, to: V, upper: Flow) -> Result<usize, FlowError> {
        if upper < Flow::zero() {
            return Err(FlowError::InvalidEdge { from: format!("{from:?}"), to: format!("{to:?}"), capacity: format!("{upper:?}") });
        }

        if let (Some(&u), Some(&v)) = (self.index.get(&from), self.index.get(&to)) {
            if let Some(&edge_id) = self.pair_to_edge.get(&(u, v)) {
                let existing = self.edges[edge_id].upper;
                if existing != upper {
                    return Err(FlowError::DuplicateEdge {
                        from: format!("{from:?}"),
                        to: format!("{to:?}"),
                        existing: format!("{existing:?}"),
                        requested: format!("{upper:?}"),
                    });
                }
                return Ok(edge_id);
            }
        }

        let u = self.add_node(from);
        let v = self.add_node(to);
        self.edges.push(Edge { from: u, to: v, upper });
        let edge_id = self.edges.len() - 1;
        self.out_edges[u].push(edge_id);
        self.pair_to_edge.insert((u, v), edge_id);
        Ok(edge_id)
    }

    pub fn node_index(&self, label: &V) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Capacity of the ordered pair; an absent edge has capacity zero.
    pub fn capacity(&self, from: &V, to: &V) -> Flow {
        match (self.index.get(from), self.index.get(to)) {
            (Some(u), Some(v)) => self.pair_to_edge.get(&(*u, *v)).map_or(Flow::zero(), |&e| self.edges[e].upper),
            _ => Flow::zero(),
        }
    }

    /// Resolves source and sink labels to vertex indices.
    pub fn terminals(&self, source: &V, sink: &V) -> Result<(usize, usize), FlowError> {
        let s = self.node_index(source).ok_or_else(|| FlowError::UnknownVertex { label: format!("{source:?}") })?;
        let t = self.node_index(sink).ok_or_else(|| FlowError::UnknownVertex { label: format!("{sink:?}") })?;
        if s == t {
            return Err(FlowError::SourceIsSink { label: format!("{source:?}") });
        }
        Ok((s, t))
    }
}

use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::{Range, Sub};

/// One direction of an edge in the residual network.
///
/// Every input edge owns two arcs that point at each other through `rev`. The
/// forward arc starts with `flow = 0`, the paired reverse arc with
/// `flow = upper`, so both carry `upper - flow` as residual capacity and
/// `0 <= flow <= upper` holds on each arc at all times.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct ResidualArc<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualArc<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual network laid out as compressed adjacency: the arcs leaving `u`
/// are `arcs[start[u]..start[u + 1]]`, in the insertion order of their edges.
#[derive(Debug, Clone)]
pub struct ResidualGraph<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub edge_index_to_arc_index: Vec<usize>,

    pub start: Vec<usize>,
    pub arcs: Vec<ResidualArc<Flow>>,
}

impl<Flow> Default for ResidualGraph<Flow> {
    fn default() -> Self {
        Self { num_nodes: 0, num_edges: 0, edge_index_to_arc_index: Vec::new(), start: Vec::new(), arcs: Vec::new() }
    }
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn new<V>(graph: &Graph<V, Flow>) -> Self {
        let mut residual = Self::default();
        residual.build(graph);
        residual
    }

    pub fn build<V>(&mut self, graph: &Graph<V, Flow>) {
        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();

        // every edge puts one arc at each endpoint
        let mut degree = vec![0usize; self.num_nodes];
        for edge in graph.edges() {
            degree[edge.from] += 1;
            degree[edge.to] += 1;
        }
        self.start = std::iter::once(0)
            .chain(degree.iter().scan(0, |offset, &d| {
                *offset += d;
                Some(*offset)
            }))
            .collect();

        let mut next_slot = self.start[..self.num_nodes].to_vec();
        let mut take_slot = |u: usize| {
            next_slot[u] += 1;
            next_slot[u] - 1
        };
        let mut arcs = vec![ResidualArc { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }; 2 * self.num_edges];
        self.edge_index_to_arc_index = graph
            .edges()
            .iter()
            .map(|edge| {
                let forward = take_slot(edge.from);
                let backward = take_slot(edge.to);
                arcs[forward] = ResidualArc { to: edge.to, flow: Flow::zero(), upper: edge.upper, rev: backward };
                arcs[backward] = ResidualArc { to: edge.from, flow: edge.upper, upper: edge.upper, rev: forward };
                forward
            })
            .collect();
        self.arcs = arcs;
    }

    #[inline]
    pub fn arc_range(&self, u: usize) -> Range<usize> {
        self.start[u]..self.start[u + 1]
    }

    #[inline]
    pub fn arcs_from(&self, u: usize) -> std::slice::Iter<'_, ResidualArc<Flow>> {
        self.arcs[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn residual_capacity(&self, arc: usize) -> Flow {
        self.arcs[arc].residual_capacity()
    }

    /// Vertices reachable from `u` over an arc with positive residual capacity.
    ///
    /// The iterator borrows the graph, so it has to be queried again after a push.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.arcs_from(u).filter(|arc| arc.residual_capacity() > Flow::zero()).map(|arc| arc.to)
    }

    /// Sends `flow` units along `arc` and gives the same amount back to its pair.
    #[inline]
    pub fn push_flow(&mut self, arc: usize, flow: Flow) {
        debug_assert!(flow <= self.arcs[arc].residual_capacity(), "push exceeds residual capacity");
        let rev = self.arcs[arc].rev;

        // update flow
        self.arcs[arc].flow += flow;
        self.arcs[rev].flow -= flow;
    }

    /// Current flow on input edge `edge_id`.
    #[inline]
    pub fn edge_flow(&self, edge_id: usize) -> Flow {
        self.arcs[self.edge_index_to_arc_index[edge_id]].flow
    }

    pub fn edge_flows(&self) -> Vec<Flow> {
        (0..self.num_edges).map(|edge_id| self.edge_flow(edge_id)).collect()
    }

    /// Whether `0 <= flow <= upper` holds on every arc.
    pub fn respects_capacities(&self) -> bool {
        self.arcs.iter().all(|arc| arc.flow >= Flow::zero() && arc.flow <= arc.upper)
    }

    /// Total `(inflow, outflow)` of every vertex over the input edges.
    pub fn flow_balance(&self) -> Vec<(Flow, Flow)> {
        let mut balance = vec![(Flow::zero(), Flow::zero()); self.num_nodes];
        for &arc in self.edge_index_to_arc_index.iter() {
            let forward = &self.arcs[arc];
            let tail = self.arcs[forward.rev].to;
            balance[tail].1 += forward.flow;
            balance[forward.to].0 += forward.flow;
        }
        balance
    }

    /// Vertices reachable from `source` in the residual network.
    ///
    /// Once no augmenting path remains this is the source side of a minimum cut.
    pub fn source_side(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for v in self.neighbors(u) {
                if !visited[v] {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut
    }
}

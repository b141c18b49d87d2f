use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::{EngineStats, MaxFlow};
use num_traits::NumAssign;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

/// Order in which active vertices are taken for discharge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveSelection {
    #[default]
    Fifo,
    Lifo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushRelabelConfig {
    pub selection: ActiveSelection,
    /// Re-check `height(u) <= height(v) + 1` on every residual arc after each
    /// push and relabel, panicking on the first violation.
    pub verify_heights: bool,
}

/// Generic preflow-push with full discharge and a current-arc pointer per vertex.
#[derive(Default)]
pub struct PushRelabel<Flow> {
    config: PushRelabelConfig,
    residual: ResidualGraph<Flow>,
    excesses: Vec<Flow>,
    heights: Vec<usize>,

    source: usize,
    sink: usize,
    active_nodes: VecDeque<usize>,
    current_arc: Vec<usize>,

    relabels: usize,
    saturating_pushes: usize,
    non_saturating_pushes: usize,
    discharges: usize,
}

impl<Flow> PushRelabel<Flow>
where
    Flow: NumAssign + Ord + Copy + Default,
{
    pub fn new(config: PushRelabelConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub fn solve<V>(&mut self, source: usize, sink: usize, graph: &Graph<V, Flow>) -> MaxFlow<Flow> {
        self.residual.build(graph);
        self.source = source;
        self.sink = sink;

        self.pre_process();

        while let Some(u) = self.next_active() {
            self.discharge(u);
        }

        debug!(
            relabels = self.relabels,
            saturating_pushes = self.saturating_pushes,
            non_saturating_pushes = self.non_saturating_pushes,
            discharges = self.discharges,
            "push-relabel finished"
        );
        let stats = EngineStats::PushRelabel {
            relabels: self.relabels,
            saturating_pushes: self.saturating_pushes,
            non_saturating_pushes: self.non_saturating_pushes,
            discharges: self.discharges,
        };
        MaxFlow::from_residual(&self.residual, source, self.excesses[sink], self.discharges, stats)
    }

    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }

    pub fn heights(&self) -> &[usize] {
        &self.heights
    }

    /// Excess of every vertex. The source only accumulates flow that was sent back to it.
    pub fn excesses(&self) -> &[Flow] {
        &self.excesses
    }

    fn pre_process(&mut self) {
        let n = self.residual.num_nodes;
        self.excesses.clear();
        self.excesses.resize(n, Flow::zero());
        self.heights.clear();
        self.heights.resize(n, 0);
        self.heights[self.source] = n;
        self.current_arc.clear();
        self.current_arc.extend((0..n).map(|u| self.residual.start[u]));
        self.active_nodes.clear();
        self.relabels = 0;
        self.saturating_pushes = 0;
        self.non_saturating_pushes = 0;
        self.discharges = 0;

        // saturate every arc out of the source
        for arc in self.residual.arc_range(self.source) {
            let to = self.residual.arcs[arc].to;
            let delta = self.residual.residual_capacity(arc);
            if to == self.source || delta == Flow::zero() {
                continue;
            }
            self.residual.push_flow(arc, delta);
            self.excesses[to] += delta;
        }

        for u in 0..n {
            if self.is_active(u) {
                self.active_nodes.push_back(u);
            }
        }
        self.verify();
    }

    #[inline]
    fn is_active(&self, u: usize) -> bool {
        u != self.source && u != self.sink && self.excesses[u] > Flow::zero()
    }

    fn next_active(&mut self) -> Option<usize> {
        match self.config.selection {
            ActiveSelection::Fifo => self.active_nodes.pop_front(),
            ActiveSelection::Lifo => self.active_nodes.pop_back(),
        }
    }

    fn discharge(&mut self, u: usize) {
        self.discharges += 1;
        let end = self.residual.start[u + 1];

        while self.excesses[u] > Flow::zero() {
            if self.current_arc[u] == end {
                if !self.relabel(u) {
                    warn!(vertex = u, "active vertex has no residual arc, leaving its excess in place");
                    return;
                }
                self.current_arc[u] = self.residual.start[u];
                continue;
            }

            let arc = self.current_arc[u];
            if self.is_admissible(u, arc) {
                self.push(u, arc);
            } else {
                self.current_arc[u] += 1;
            }
        }
    }

    #[inline]
    fn is_admissible(&self, u: usize, arc: usize) -> bool {
        let arc = &self.residual.arcs[arc];
        arc.residual_capacity() > Flow::zero() && self.heights[u] == self.heights[arc.to] + 1
    }

    // push from u
    fn push(&mut self, u: usize, arc: usize) {
        let to = self.residual.arcs[arc].to;
        let residual_capacity = self.residual.residual_capacity(arc);
        let delta = self.excesses[u].min(residual_capacity);

        self.residual.push_flow(arc, delta);
        self.excesses[u] -= delta;
        self.excesses[to] += delta;
        if delta == residual_capacity {
            self.saturating_pushes += 1;
        } else {
            self.non_saturating_pushes += 1;
        }
        trace!(from = u, to, "push");

        if self.is_active(to) && self.excesses[to] == delta {
            self.active_nodes.push_back(to);
        }
        self.verify();
    }

    /// Lifts `u` to one above its lowest residual neighbour. Returns false when
    /// `u` has no residual arc at all.
    fn relabel(&mut self, u: usize) -> bool {
        let new_height = self.residual.arcs_from(u).filter(|arc| arc.residual_capacity() > Flow::zero()).map(|arc| self.heights[arc.to] + 1).min();

        let Some(new_height) = new_height else {
            return false;
        };
        debug_assert!(new_height > self.heights[u], "relabel must raise the height");
        debug_assert!(new_height < 2 * self.residual.num_nodes, "height exceeds 2n - 1");
        self.heights[u] = new_height;
        self.relabels += 1;
        trace!(vertex = u, height = new_height, "relabel");
        self.verify();
        true
    }

    fn verify(&self) {
        if !self.config.verify_heights {
            return;
        }
        for u in 0..self.residual.num_nodes {
            for arc in self.residual.arcs_from(u) {
                if arc.residual_capacity() > Flow::zero() {
                    assert!(
                        self.heights[u] <= self.heights[arc.to] + 1,
                        "height invariant violated on residual arc {u} -> {}: {} > {} + 1",
                        arc.to,
                        self.heights[u],
                        self.heights[arc.to]
                    );
                }
            }
        }
        assert!(self.residual.respects_capacities(), "flow outside [0, capacity]");
    }
}

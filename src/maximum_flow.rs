pub mod augmenting_path;
pub mod capacity_scaling;
pub mod error;
pub mod ford_fulkerson;
pub mod graph;
pub mod push_relabel;
pub mod residual;

use crate::maximum_flow::capacity_scaling::CapacityScaling;
use crate::maximum_flow::error::FlowError;
use crate::maximum_flow::ford_fulkerson::FordFulkerson;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::push_relabel::{PushRelabel, PushRelabelConfig};
use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    FordFulkerson,
    CapacityScaling,
    PushRelabel,
}

impl EngineKind {
    pub const ALL: [EngineKind; 3] = [EngineKind::FordFulkerson, EngineKind::CapacityScaling, EngineKind::PushRelabel];

    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::FordFulkerson => "ford-fulkerson",
            EngineKind::CapacityScaling => "scaling",
            EngineKind::PushRelabel => "push-relabel",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown max-flow engine {0:?}")]
pub struct ParseEngineKindError(pub String);

impl FromStr for EngineKind {
    type Err = ParseEngineKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ford-fulkerson" | "ff" => Ok(EngineKind::FordFulkerson),
            "scaling" | "capacity-scaling" | "sff" => Ok(EngineKind::CapacityScaling),
            "push-relabel" | "preflow-push" | "pr" => Ok(EngineKind::PushRelabel),
            _ => Err(ParseEngineKindError(s.to_string())),
        }
    }
}

/// One Δ-phase of the capacity scaling engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalingPhase<Flow> {
    pub delta: Flow,
    pub augmentations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineStats<Flow> {
    FordFulkerson { augmentations: usize },
    CapacityScaling { augmentations: usize, phases: Vec<ScalingPhase<Flow>> },
    PushRelabel { relabels: usize, saturating_pushes: usize, non_saturating_pushes: usize, discharges: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxFlow<Flow> {
    pub value: Flow,
    /// Augmentations for the path engines, discharges for push-relabel.
    pub iterations: usize,
    pub stats: EngineStats<Flow>,
    /// Final flow on each input edge, indexed by edge id.
    pub flows: Vec<Flow>,
    /// Source side of a minimum cut.
    pub min_cut: Vec<usize>,
}

impl<Flow> MaxFlow<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub(crate) fn from_residual(residual: &ResidualGraph<Flow>, source: usize, value: Flow, iterations: usize, stats: EngineStats<Flow>) -> Self {
        let mut min_cut = residual.source_side(source);
        min_cut.sort_unstable();
        Self { value, iterations, stats, flows: residual.edge_flows(), min_cut }
    }

    /// Zero flow for a sink the source cannot reach. No engine work is done, so
    /// every counter of `kind` is zero and the cut is the source's reachable set.
    pub(crate) fn unreachable<V>(kind: EngineKind, graph: &Graph<V, Flow>, source: usize) -> Self {
        let stats = match kind {
            EngineKind::FordFulkerson => EngineStats::FordFulkerson { augmentations: 0 },
            EngineKind::CapacityScaling => EngineStats::CapacityScaling { augmentations: 0, phases: Vec::new() },
            EngineKind::PushRelabel => EngineStats::PushRelabel { relabels: 0, saturating_pushes: 0, non_saturating_pushes: 0, discharges: 0 },
        };
        let mut min_cut = ResidualGraph::new(graph).source_side(source);
        min_cut.sort_unstable();
        Self { value: Flow::zero(), iterations: 0, stats, flows: vec![Flow::zero(); graph.num_edges()], min_cut }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub push_relabel: PushRelabelConfig,
}

/// Runs `kind` on a fresh residual copy of `graph` with default settings.
pub fn run<V, Flow>(kind: EngineKind, graph: &Graph<V, Flow>, source: &V, sink: &V) -> Result<MaxFlow<Flow>, FlowError>
where
    V: Eq + Hash + Clone + Debug,
    Flow: NumAssign + Ord + Copy + Default + Debug,
{
    run_with(kind, graph, source, sink, &RunConfig::default())
}

pub fn run_with<V, Flow>(kind: EngineKind, graph: &Graph<V, Flow>, source: &V, sink: &V, config: &RunConfig) -> Result<MaxFlow<Flow>, FlowError>
where
    V: Eq + Hash + Clone + Debug,
    Flow: NumAssign + Ord + Copy + Default + Debug,
{
    let (s, t) = graph.terminals(source, sink)?;
    debug!(engine = %kind, nodes = graph.num_nodes(), edges = graph.num_edges(), "running max-flow");
    if !graph.reaches(s, t) {
        debug!(engine = %kind, "sink unreachable from source, flow is zero");
        return Ok(MaxFlow::unreachable(kind, graph, s));
    }

    let result = match kind {
        EngineKind::FordFulkerson => FordFulkerson::default().solve(s, t, graph),
        EngineKind::CapacityScaling => CapacityScaling::default().solve(s, t, graph),
        EngineKind::PushRelabel => PushRelabel::new(config.push_relabel.clone()).solve(s, t, graph),
    };
    debug!(engine = %kind, value = ?result.value, iterations = result.iterations, "max-flow done");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_names_round_trip() {
        for kind in EngineKind::ALL {
            assert_eq!(kind.to_string().parse::<EngineKind>(), Ok(kind));
        }
        assert_eq!("FF".parse::<EngineKind>(), Ok(EngineKind::FordFulkerson));
        assert_eq!("preflow-push".parse::<EngineKind>(), Ok(EngineKind::PushRelabel));
        assert!("dinic".parse::<EngineKind>().is_err());
    }

    #[test]
    fn unknown_terminals_are_errors() {
        let graph = Graph::build([("s", "t", 1)]).unwrap();
        assert!(matches!(run(EngineKind::FordFulkerson, &graph, &"s", &"x"), Err(FlowError::UnknownVertex { .. })));
        assert!(matches!(run(EngineKind::PushRelabel, &graph, &"t", &"t"), Err(FlowError::SourceIsSink { .. })));
    }

    #[test]
    fn unreachable_sink_skips_the_engine() {
        let graph = Graph::build([("s", "a", 5), ("a", "s", 2), ("b", "t", 5)]).unwrap();
        let result = run(EngineKind::PushRelabel, &graph, &"s", &"t").unwrap();
        assert_eq!(
            result,
            MaxFlow {
                value: 0,
                iterations: 0,
                stats: EngineStats::PushRelabel { relabels: 0, saturating_pushes: 0, non_saturating_pushes: 0, discharges: 0 },
                flows: vec![0, 0, 0],
                min_cut: vec![0, 1],
            }
        );
    }
}

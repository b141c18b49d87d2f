use crate::maximum_flow::augmenting_path::{augment, AugmentingPath, PathFinder};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::{EngineStats, MaxFlow, ScalingPhase};
use num_traits::NumAssign;
use tracing::{debug, trace};

/// Augmenting paths restricted to residual capacity at least `delta`, with
/// `delta` halved each phase from the largest power of two not above the
/// maximum edge capacity down to one.
#[derive(Default)]
pub struct CapacityScaling<Flow> {
    residual: ResidualGraph<Flow>,
    finder: PathFinder,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve<V>(&mut self, source: usize, sink: usize, graph: &Graph<V, Flow>) -> MaxFlow<Flow> {
        self.residual.build(graph);
        let two = Flow::one() + Flow::one();

        let mut delta = initial_delta(graph.max_capacity());
        let mut flow = Flow::zero();
        let mut augmentations = 0;
        let mut phases = Vec::new();
        while delta >= Flow::one() {
            let mut phase = ScalingPhase { delta, augmentations: 0 };
            while let AugmentingPath::Found { arcs, bottleneck, .. } = self.finder.find(&self.residual, source, sink, delta) {
                augment(&mut self.residual, &arcs, bottleneck);
                flow += bottleneck;
                phase.augmentations += 1;
                trace!(length = arcs.len(), "augmented");
            }
            debug!(augmentations = phase.augmentations, "scaling phase finished");
            augmentations += phase.augmentations;
            phases.push(phase);
            delta /= two;
        }

        debug!(augmentations, phases = phases.len(), "capacity scaling finished");
        MaxFlow::from_residual(&self.residual, source, flow, augmentations, EngineStats::CapacityScaling { augmentations, phases })
    }

    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }
}

/// Largest power of two not exceeding `max_capacity`, or zero when it is below one.
pub fn initial_delta<Flow>(max_capacity: Flow) -> Flow
where
    Flow: NumAssign + Ord + Copy,
{
    if max_capacity < Flow::one() {
        return Flow::zero();
    }
    let two = Flow::one() + Flow::one();
    let mut delta = Flow::one();
    while delta <= max_capacity / two {
        delta *= two;
    }
    delta
}

use crate::maximum_flow::augmenting_path::{augment, AugmentingPath, PathFinder};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::residual::ResidualGraph;
use crate::maximum_flow::{EngineStats, MaxFlow};
use num_traits::NumAssign;
use tracing::{debug, trace};

/// Plain augmenting-path method: any path with positive residual capacity is augmented.
#[derive(Default)]
pub struct FordFulkerson<Flow> {
    residual: ResidualGraph<Flow>,
    finder: PathFinder,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve<V>(&mut self, source: usize, sink: usize, graph: &Graph<V, Flow>) -> MaxFlow<Flow> {
        self.residual.build(graph);

        let mut flow = Flow::zero();
        let mut augmentations = 0;
        while let AugmentingPath::Found { arcs, bottleneck, .. } = self.finder.find(&self.residual, source, sink, Flow::one()) {
            augment(&mut self.residual, &arcs, bottleneck);
            flow += bottleneck;
            augmentations += 1;
            trace!(augmentations, length = arcs.len(), "augmented");
        }

        debug!(augmentations, "ford-fulkerson finished");
        MaxFlow::from_residual(&self.residual, source, flow, augmentations, EngineStats::FordFulkerson { augmentations })
    }

    /// Residual network left by the last call to [`FordFulkerson::solve`].
    pub fn residual(&self) -> &ResidualGraph<Flow> {
        &self.residual
    }
}

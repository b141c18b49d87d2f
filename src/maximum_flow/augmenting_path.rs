use crate::maximum_flow::residual::ResidualGraph;
use num_traits::NumAssign;

/// Outcome of a single path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AugmentingPath<Flow> {
    Found {
        /// Vertices from source to sink.
        vertices: Vec<usize>,
        /// Residual arcs taken, `arcs[i]` leads from `vertices[i]` to `vertices[i + 1]`.
        arcs: Vec<usize>,
        bottleneck: Flow,
    },
    NoPath,
}

impl<Flow> AugmentingPath<Flow> {
    pub fn is_found(&self) -> bool {
        matches!(self, AugmentingPath::Found { .. })
    }
}

/// Depth-first search for source-sink paths in a residual network.
///
/// Arcs are tried in adjacency order and each vertex is entered at most once
/// per search, so the same residual state always yields the same path.
#[derive(Default)]
pub struct PathFinder {
    visited: Vec<bool>,
    current_arc: Vec<usize>,
    stack: Vec<usize>,
    arc_stack: Vec<usize>,
}

impl PathFinder {
    /// Finds a path whose every arc has residual capacity at least `threshold`.
    ///
    /// A threshold below one is treated as one, since only positive residual
    /// capacity can carry flow.
    pub fn find<Flow>(&mut self, residual: &ResidualGraph<Flow>, source: usize, sink: usize, threshold: Flow) -> AugmentingPath<Flow>
    where
        Flow: NumAssign + Ord + Copy,
    {
        let threshold = threshold.max(Flow::one());
        let n = residual.num_nodes;

        self.visited.clear();
        self.visited.resize(n, false);
        self.current_arc.clear();
        self.current_arc.extend((0..n).map(|u| residual.start[u]));
        self.stack.clear();
        self.arc_stack.clear();

        self.stack.push(source);
        self.visited[source] = true;

        while let Some(&u) = self.stack.last() {
            if u == sink {
                let bottleneck = self.arc_stack.iter().map(|&arc| residual.residual_capacity(arc)).min();
                return match bottleneck {
                    Some(bottleneck) => AugmentingPath::Found { vertices: self.stack.clone(), arcs: self.arc_stack.clone(), bottleneck },
                    None => AugmentingPath::NoPath,
                };
            }

            let end = residual.start[u + 1];
            let mut next = None;
            while self.current_arc[u] < end {
                let arc_index = self.current_arc[u];
                self.current_arc[u] += 1;
                let arc = &residual.arcs[arc_index];
                if !self.visited[arc.to] && arc.residual_capacity() >= threshold {
                    next = Some(arc_index);
                    break;
                }
            }

            match next {
                Some(arc_index) => {
                    let v = residual.arcs[arc_index].to;
                    self.visited[v] = true;
                    self.stack.push(v);
                    self.arc_stack.push(arc_index);
                }
                None => {
                    // dead end
                    self.stack.pop();
                    self.arc_stack.pop();
                }
            }
        }

        AugmentingPath::NoPath
    }
}

/// Pushes `bottleneck` units along every arc of a path found by [`PathFinder`].
pub fn augment<Flow>(residual: &mut ResidualGraph<Flow>, arcs: &[usize], bottleneck: Flow)
where
    Flow: NumAssign + Ord + Copy,
{
    for &arc in arcs {
        residual.push_flow(arc, bottleneck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maximum_flow::graph::Graph;

    #[test]
    fn follows_insertion_order() {
        let graph = Graph::build([("s", "a", 4), ("s", "b", 9), ("a", "t", 2), ("b", "t", 9)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let (s, t) = graph.terminals(&"s", &"t").unwrap();

        match PathFinder::default().find(&residual, s, t, 1) {
            AugmentingPath::Found { vertices, bottleneck, .. } => {
                let labels: Vec<_> = vertices.iter().map(|&v| *graph.label(v).unwrap()).collect();
                assert_eq!(labels, vec!["s", "a", "t"]);
                assert_eq!(bottleneck, 2);
            }
            AugmentingPath::NoPath => panic!("expected a path"),
        }
    }

    #[test]
    fn threshold_prunes_thin_arcs() {
        let graph = Graph::build([("s", "a", 4), ("s", "b", 9), ("a", "t", 2), ("b", "t", 9)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let (s, t) = graph.terminals(&"s", &"t").unwrap();

        match PathFinder::default().find(&residual, s, t, 8) {
            AugmentingPath::Found { vertices, bottleneck, .. } => {
                let labels: Vec<_> = vertices.iter().map(|&v| *graph.label(v).unwrap()).collect();
                assert_eq!(labels, vec!["s", "b", "t"]);
                assert_eq!(bottleneck, 9);
            }
            AugmentingPath::NoPath => panic!("expected a path"),
        }
        assert_eq!(PathFinder::default().find(&residual, s, t, 10), AugmentingPath::NoPath);
    }

    #[test]
    fn cycles_terminate_without_path() {
        let graph = Graph::build([("s", "a", 1), ("a", "b", 1), ("b", "a", 1), ("t", "a", 1)]).unwrap();
        let residual = ResidualGraph::new(&graph);
        let (s, t) = graph.terminals(&"s", &"t").unwrap();
        assert!(!PathFinder::default().find(&residual, s, t, 0).is_found());
    }

    #[test]
    fn augment_uses_reverse_arcs() {
        // the first path takes s-a-b-t; the second must cancel flow on a-b
        let graph = Graph::build([("s", "a", 1), ("a", "b", 1), ("b", "t", 1), ("s", "b", 1), ("a", "t", 1)]).unwrap();
        let mut residual = ResidualGraph::new(&graph);
        let (s, t) = graph.terminals(&"s", &"t").unwrap();
        let mut finder = PathFinder::default();

        let mut total = 0;
        while let AugmentingPath::Found { arcs, bottleneck, .. } = finder.find(&residual, s, t, 1) {
            augment(&mut residual, &arcs, bottleneck);
            total += bottleneck;
        }
        assert_eq!(total, 2);
        assert!(residual.respects_capacities());
    }
}

//! Size statistics and s-t path enumeration, used to describe benchmark inputs.

use num_traits::{NumAssign, ToPrimitive};

use crate::maximum_flow::graph::Graph;

#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats<Flow> {
    pub vertices: usize,
    /// Edges with positive capacity.
    pub edges: usize,
    pub average_degree: f64,
    /// `edges / (vertices * (vertices - 1))`, zero below two vertices.
    pub density: f64,
    pub total_capacity: Flow,
    pub max_capacity: Flow,
}

impl<Flow> GraphStats<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn of<V>(graph: &Graph<V, Flow>) -> Self {
        let vertices = graph.num_nodes();
        let edges = graph.edges().iter().filter(|e| e.upper > Flow::zero()).count();
        let average_degree = if vertices == 0 { 0.0 } else { edges as f64 / vertices as f64 };
        let density = if vertices < 2 { 0.0 } else { edges as f64 / (vertices * (vertices - 1)) as f64 };

        Self {
            vertices,
            edges,
            average_degree,
            density,
            total_capacity: graph.edges().iter().fold(Flow::zero(), |sum, e| sum + e.upper),
            max_capacity: graph.max_capacity(),
        }
    }
}

impl<Flow> GraphStats<Flow>
where
    Flow: ToPrimitive,
{
    /// Mean capacity over positive-capacity edges.
    pub fn mean_capacity(&self) -> Option<f64> {
        if self.edges == 0 {
            return None;
        }
        Some(self.total_capacity.to_f64()? / self.edges as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCount {
    pub count: usize,
    pub paths: Vec<Vec<usize>>,
    /// The enumeration stopped at the requested limit.
    pub truncated: bool,
}

/// Enumerates simple `source -> sink` paths over positive-capacity edges.
///
/// The number of simple paths can be exponential in the graph size, so
/// `max_paths` caps the enumeration. The search keeps one pending-neighbour
/// list per path vertex on an explicit stack, so long paths do not grow the
/// call stack.
pub fn count_st_paths<V, Flow>(graph: &Graph<V, Flow>, source: usize, sink: usize, max_paths: Option<usize>) -> PathCount
where
    Flow: NumAssign + Ord + Copy,
{
    let mut result = PathCount { count: 0, paths: Vec::new(), truncated: false };
    if source == sink {
        result.count = 1;
        result.paths.push(vec![source]);
        return result;
    }

    let mut on_path = vec![false; graph.num_nodes()];
    let mut path = vec![source];
    let mut pending = vec![graph.neighbors(source).collect::<Vec<_>>().into_iter()];
    on_path[source] = true;

    while let Some(frontier) = pending.last_mut() {
        match frontier.next() {
            Some(v) if on_path[v] => {}
            Some(v) if v == sink => {
                if max_paths.is_some_and(|limit| result.count >= limit) {
                    result.truncated = true;
                    break;
                }
                result.count += 1;
                let mut found = path.clone();
                found.push(sink);
                result.paths.push(found);
            }
            Some(v) => {
                on_path[v] = true;
                path.push(v);
                pending.push(graph.neighbors(v).collect::<Vec<_>>().into_iter());
            }
            None => {
                pending.pop();
                if let Some(u) = path.pop() {
                    on_path[u] = false;
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph<&'static str, i64> {
        Graph::build([("s", "a", 10), ("s", "b", 10), ("a", "t", 5), ("b", "t", 15), ("a", "b", 5)]).unwrap()
    }

    #[test]
    fn stats_of_diamond() {
        let stats = GraphStats::of(&diamond());
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.edges, 5);
        assert_eq!(stats.total_capacity, 45);
        assert_eq!(stats.max_capacity, 15);
        assert!((stats.density - 5.0 / 12.0).abs() < 1e-12);
        assert_eq!(stats.mean_capacity(), Some(9.0));
    }

    #[test]
    fn enumerates_all_paths_in_order() {
        let graph = diamond();
        let (s, t) = graph.terminals(&"s", &"t").unwrap();
        let count = count_st_paths(&graph, s, t, None);

        let labelled: Vec<Vec<&str>> = count.paths.iter().map(|p| p.iter().map(|&v| *graph.label(v).unwrap()).collect()).collect();
        assert_eq!(labelled, vec![vec!["s", "a", "t"], vec!["s", "a", "b", "t"], vec!["s", "b", "t"]]);
        assert_eq!(count.count, 3);
        assert!(!count.truncated);
    }

    #[test]
    fn stops_at_limit() {
        let graph = diamond();
        let (s, t) = graph.terminals(&"s", &"t").unwrap();
        let count = count_st_paths(&graph, s, t, Some(2));
        assert_eq!(count.count, 2);
        assert!(count.truncated);

        let exact = count_st_paths(&graph, s, t, Some(3));
        assert_eq!(exact.count, 3);
        assert!(!exact.truncated);
    }

    #[test]
    fn long_chain_is_enumerated_without_recursion() {
        let n = 200_000usize;
        let graph = Graph::build((0..n - 1).map(|u| (u, u + 1, 1i64))).unwrap();
        let count = count_st_paths(&graph, 0, n - 1, None);
        assert_eq!(count.count, 1);
        assert_eq!(count.paths[0].len(), n);
    }
}

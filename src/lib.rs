//! Maximum s-t flow with three interchangeable engines over one residual network:
//! Ford-Fulkerson, capacity scaling and push-relabel.
//!
//! ```
//! use max_flow_bench::maximum_flow::{graph::Graph, run, EngineKind};
//!
//! let graph = Graph::build([("s", "a", 10), ("s", "b", 10), ("a", "t", 5), ("b", "t", 15), ("a", "b", 5)]).unwrap();
//! for kind in EngineKind::ALL {
//!     assert_eq!(run(kind, &graph, &"s", &"t").unwrap().value, 15);
//! }
//! ```

pub mod diagnostics;
pub mod edge_list;
pub mod maximum_flow;

pub use maximum_flow::error::FlowError;
pub use maximum_flow::graph::Graph;
pub use maximum_flow::{run, run_with, EngineKind, EngineStats, MaxFlow, RunConfig};

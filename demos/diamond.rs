use max_flow_bench::diagnostics::{count_st_paths, GraphStats};
use max_flow_bench::edge_list::read_graph;
use max_flow_bench::{run, EngineKind};
use tracing_subscriber::EnvFilter;

const DIAMOND: &str = "\
# from to capacity
s a 10
s b 10
a t 5
b t 15
a b 5
";

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let graph = read_graph::<_, i64>(DIAMOND.as_bytes()).unwrap();
    let (source, sink) = ("s".to_string(), "t".to_string());

    let stats = GraphStats::of(&graph);
    println!("vertices:{} edges:{} density:{:.4}", stats.vertices, stats.edges, stats.density);

    let (s, t) = graph.terminals(&source, &sink).unwrap();
    for path in count_st_paths(&graph, s, t, Some(10)).paths {
        let labels: Vec<&str> = path.iter().filter_map(|&v| graph.label(v)).map(String::as_str).collect();
        println!("path: {}", labels.join(" -> "));
    }

    for kind in EngineKind::ALL {
        let result = run(kind, &graph, &source, &sink).unwrap();
        println!("{kind}: maximum flow:{} iterations:{}", result.value, result.iterations);
        println!("  {:?}", result.stats);
    }
}

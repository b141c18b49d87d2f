//! # EdgeList
//!
//! Plain-text capacitated edge list: one `<from> <to> <capacity>` triple per
//! line, fields separated by whitespace. Blank lines and lines starting with
//! `#` are skipped.

use std::{
    fmt::Debug,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use num_traits::NumAssign;
use thiserror::Error;
use tracing::debug;

use crate::maximum_flow::{error::FlowError, graph::Graph};

#[derive(Debug, Error)]
pub enum EdgeListError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `<from> <to> <capacity>`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: capacity {value:?} is not an integer")]
    InvalidCapacity { line: usize, value: String },

    #[error(transparent)]
    Graph(#[from] FlowError),
}

/// Reads all triples from `reader` without building a graph.
pub fn read_edge_list<R, Flow>(reader: R) -> Result<Vec<(String, String, Flow)>, EdgeListError>
where
    R: BufRead,
    Flow: FromStr,
{
    let mut edges = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let [from, to, capacity] = fields.as_slice() else {
            return Err(EdgeListError::MalformedLine { line: i + 1, content: line.clone() });
        };
        let capacity = capacity.parse::<Flow>().map_err(|_| EdgeListError::InvalidCapacity { line: i + 1, value: capacity.to_string() })?;
        edges.push((from.to_string(), to.to_string(), capacity));
    }
    Ok(edges)
}

pub fn read_graph<R, Flow>(reader: R) -> Result<Graph<String, Flow>, EdgeListError>
where
    R: BufRead,
    Flow: NumAssign + Ord + Copy + Debug + FromStr,
{
    let edges = read_edge_list(reader)?;
    debug!(edges = edges.len(), "read edge list");
    Ok(Graph::build(edges)?)
}

pub fn read_graph_file<P, Flow>(path: P) -> Result<Graph<String, Flow>, EdgeListError>
where
    P: AsRef<Path>,
    Flow: NumAssign + Ord + Copy + Debug + FromStr,
{
    read_graph(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "# diamond\ns a 10\n\ns b 10\n  a t 5\nb t 15\na b 5\n";
        let edges = read_edge_list::<_, i64>(input.as_bytes()).unwrap();
        assert_eq!(edges.len(), 5);
        assert_eq!(edges[3], ("b".to_string(), "t".to_string(), 15));
    }

    #[test]
    fn reports_malformed_line_number() {
        let input = "s a 10\ns b\n";
        match read_edge_list::<_, i64>(input.as_bytes()) {
            Err(EdgeListError::MalformedLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn reports_bad_capacity() {
        let input = "s a ten\n";
        assert!(matches!(read_edge_list::<_, i64>(input.as_bytes()), Err(EdgeListError::InvalidCapacity { line: 1, .. })));
    }

    #[test]
    fn graph_errors_pass_through() {
        let input = "s a 10\ns a 3\n";
        assert!(matches!(read_graph::<_, i64>(input.as_bytes()), Err(EdgeListError::Graph(FlowError::DuplicateEdge { .. }))));

        let input = "s a -4\n";
        assert!(matches!(read_graph::<_, i64>(input.as_bytes()), Err(EdgeListError::Graph(FlowError::InvalidEdge { .. }))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("max-flow-bench-missing").join("graph.txt");
        assert!(matches!(read_graph_file::<_, i64>(&path), Err(EdgeListError::Io(_))));
    }

    #[test]
    fn reads_graph_from_file() {
        let path = std::env::temp_dir().join(format!("max-flow-bench-{}.txt", std::process::id()));
        std::fs::write(&path, "s a 4\na t 3\n").unwrap();
        let graph = read_graph_file::<_, i64>(&path);
        std::fs::remove_file(&path).unwrap();

        let graph = graph.unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.capacity(&"a".to_string(), &"t".to_string()), 3);
    }

    #[test]
    fn builds_string_labelled_graph() {
        let graph = read_graph::<_, u32>("s t 7\n".as_bytes()).unwrap();
        assert_eq!(graph.capacity(&"s".to_string(), &"t".to_string()), 7);
    }
}

use thiserror::Error;

/// Structural errors raised while building a graph or setting up a run.
///
/// Running out of augmenting paths, or a sink that cannot be reached from the
/// source, is ordinary termination and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("edge {from} -> {to} has negative capacity {capacity}")]
    InvalidEdge { from: String, to: String, capacity: String },

    #[error("edge {from} -> {to} given twice with conflicting capacities {existing} and {requested}")]
    DuplicateEdge { from: String, to: String, existing: String, requested: String },

    #[error("vertex {label} does not exist in the graph")]
    UnknownVertex { label: String },

    #[error("source and sink are the same vertex {label}")]
    SourceIsSink { label: String },
}

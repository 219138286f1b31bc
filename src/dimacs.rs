pub mod reader;
pub mod writer;

use crate::maximum_flow::residual::ResidualNetwork;
use ordered_float::NotNan;
use std::collections::BTreeMap;
use thiserror::Error;

/// Capacity domain at the DIMACS boundary. `NotNan` carries the total order
/// the solver requires while still covering real-valued capacities; the
/// reader only admits finite, non-negative values.
pub type Capacity = NotNan<f64>;

/// A parsed max-flow instance: the network and its declared terminals.
#[derive(Clone)]
pub struct MaxFlowProblem {
    pub network: ResidualNetwork<Capacity>,
    pub source: usize,
    pub sink: usize,
}

/// A parsed flow result: the declared total and the per-arc flows.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSolution {
    pub value: Capacity,
    pub edges: BTreeMap<(usize, usize), Capacity>,
}

#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: capacity {value} is negative or not finite")]
    InvalidCapacity { line: usize, value: f64 },
    #[error("line {line}: source already declared")]
    DuplicateSource { line: usize },
    #[error("line {line}: sink already declared")]
    DuplicateSink { line: usize },
    #[error("no source declaration in input")]
    MissingSource,
    #[error("no sink declaration in input")]
    MissingSink,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

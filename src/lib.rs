//! Maximum flow by capacity scaling over DIMACS networks.

pub mod dimacs;
pub mod maximum_flow;
pub mod telemetry;
pub mod verification;

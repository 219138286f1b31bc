use crate::dimacs::{Capacity, FlowSolution, MaxFlowProblem};
use num_traits::Zero;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// A single constraint violated by a claimed flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("flow {flow} on arc {from} -> {to} is outside [0, {capacity}]")]
    FlowOutOfRange { from: usize, to: usize, flow: Capacity, capacity: Capacity },
    #[error("node {node} is not conserved: inflow {inflow}, outflow {outflow}")]
    NotConserved { node: usize, inflow: Capacity, outflow: Capacity },
    #[error("source outflow {source_outflow} differs from sink inflow {sink_inflow}")]
    ValueMismatch { source_outflow: Capacity, sink_inflow: Capacity },
}

/// Checks a claimed flow against the problem it solves: every arc stays
/// within its capacity, every node other than the terminals conserves flow,
/// and the amount leaving the source matches the amount entering the sink.
/// All violations are collected rather than stopping at the first; an empty
/// result means the flow is feasible.
pub fn verify_flow(problem: &MaxFlowProblem, solution: &FlowSolution) -> Vec<Violation> {
    let zero = Capacity::zero();
    let mut violations = Vec::new();
    let mut inflow: BTreeMap<usize, Capacity> = BTreeMap::new();
    let mut outflow: BTreeMap<usize, Capacity> = BTreeMap::new();

    for (&(from, to), &flow) in &solution.edges {
        let capacity = problem.network.capacity(from, to);
        if flow < zero || flow > capacity {
            violations.push(Violation::FlowOutOfRange { from, to, flow, capacity });
        }
        *outflow.entry(from).or_insert_with(Capacity::zero) += flow;
        *inflow.entry(to).or_insert_with(Capacity::zero) += flow;
    }

    let nodes: BTreeSet<usize> = problem
        .network
        .nodes()
        .chain(inflow.keys().copied())
        .chain(outflow.keys().copied())
        .collect();
    for node in nodes {
        if node == problem.source || node == problem.sink {
            continue;
        }
        let incoming = inflow.get(&node).copied().unwrap_or(zero);
        let outgoing = outflow.get(&node).copied().unwrap_or(zero);
        if incoming != outgoing {
            violations.push(Violation::NotConserved { node, inflow: incoming, outflow: outgoing });
        }
    }

    let source_outflow = outflow.get(&problem.source).copied().unwrap_or(zero);
    let sink_inflow = inflow.get(&problem.sink).copied().unwrap_or(zero);
    if source_outflow != sink_inflow {
        violations.push(Violation::ValueMismatch { source_outflow, sink_inflow });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimacs::reader::{read_flow, read_problem};

    const PROBLEM: &str = "\
n 1 s
n 4 t
a 1 2 3
a 1 3 2
a 2 4 2
a 3 4 3
";

    fn check(flow: &str) -> Vec<Violation> {
        let problem = read_problem(PROBLEM.as_bytes()).unwrap();
        let solution = read_flow(flow.as_bytes()).unwrap();
        verify_flow(&problem, &solution)
    }

    #[test]
    fn feasible_flow_passes() {
        let violations = check("s 4\nf 1 2 2\nf 1 3 2\nf 2 4 2\nf 3 4 2\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn zero_flow_passes() {
        assert!(check("s 0\n").is_empty());
    }

    #[test]
    fn over_capacity_is_reported() {
        let violations = check("f 1 2 5\nf 2 4 5\n");
        assert!(violations.iter().any(|v| matches!(v, Violation::FlowOutOfRange { from: 1, to: 2, .. })));
        assert!(violations.iter().any(|v| matches!(v, Violation::FlowOutOfRange { from: 2, to: 4, .. })));
    }

    #[test]
    fn negative_flow_is_reported() {
        let violations = check("f 1 2 -1\n");
        assert!(violations.iter().any(|v| matches!(v, Violation::FlowOutOfRange { from: 1, to: 2, .. })));
    }

    #[test]
    fn flow_on_undeclared_arc_is_reported() {
        // capacity of an unknown arc is zero, so any flow on it is out of range
        let violations = check("f 2 3 1\n");
        assert!(violations.iter().any(|v| matches!(v, Violation::FlowOutOfRange { from: 2, to: 3, .. })));
    }

    #[test]
    fn unbalanced_interior_nodes_are_reported() {
        let violations = check("f 1 2 2\nf 2 4 1\nf 3 4 1\n");
        assert!(violations.iter().any(|v| matches!(v, Violation::NotConserved { node: 2, .. })));
        assert!(violations.iter().any(|v| matches!(v, Violation::NotConserved { node: 3, .. })));
    }

    #[test]
    fn source_sink_imbalance_is_reported() {
        let violations = check("f 1 2 2\nf 2 4 1\n");
        assert!(violations.iter().any(|v| matches!(v, Violation::ValueMismatch { .. })));
    }

    #[test]
    fn all_violations_are_collected() {
        let violations = check("f 1 2 5\nf 2 4 1\n");
        // one capacity violation, one conservation violation, one value mismatch
        assert_eq!(violations.len(), 3);
    }
}

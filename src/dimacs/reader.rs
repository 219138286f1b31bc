use crate::dimacs::{Capacity, DimacsError, FlowSolution, MaxFlowProblem};
use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::Zero;
use ordered_float::NotNan;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Reads a DIMACS max-flow problem.
///
/// Records: `c` comments, one `p max <nodes> <arcs>` line (counts are
/// informational, the network is built dynamically), `n <id> s` / `n <id> t`
/// terminal declarations (exactly one of each), and `a <from> <to>
/// <capacity>` arcs. Duplicate arcs between the same ordered pair combine by
/// summation. Blank lines are skipped.
pub fn read_problem<R: BufRead>(input: R) -> Result<MaxFlowProblem, DimacsError> {
    let mut network = ResidualNetwork::default();
    let mut source = None;
    let mut sink = None;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&record, rest)) = fields.split_first() else {
            continue;
        };

        match record {
            "c" => {}
            "p" => parse_problem_line(rest, number)?,
            "n" => match rest {
                [id, "s"] => {
                    if source.replace(parse_node(id, number)?).is_some() {
                        return Err(DimacsError::DuplicateSource { line: number });
                    }
                }
                [id, "t"] => {
                    if sink.replace(parse_node(id, number)?).is_some() {
                        return Err(DimacsError::DuplicateSink { line: number });
                    }
                }
                _ => return Err(parse_error(number, "expected `n <id> s` or `n <id> t`")),
            },
            "a" => match rest {
                [from, to, capacity] => {
                    let from = parse_node(from, number)?;
                    let to = parse_node(to, number)?;
                    let capacity = parse_capacity(capacity, number)?;
                    network.add_arc(from, to, capacity);
                }
                _ => return Err(parse_error(number, "expected `a <from> <to> <capacity>`")),
            },
            other => return Err(parse_error(number, format!("unknown record `{other}`"))),
        }
    }

    Ok(MaxFlowProblem {
        network,
        source: source.ok_or(DimacsError::MissingSource)?,
        sink: sink.ok_or(DimacsError::MissingSink)?,
    })
}

/// Reads a flow result (`s` and `f` records).
///
/// Flow values must be finite but may be negative or exceed capacities;
/// range checking is the verifier's job, so a bad flow file produces
/// diagnostics rather than a parse failure. Duplicate `f` records for one
/// ordered pair sum.
pub fn read_flow<R: BufRead>(input: R) -> Result<FlowSolution, DimacsError> {
    let mut value = None;
    let mut edges: BTreeMap<(usize, usize), Capacity> = BTreeMap::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        let Some((&record, rest)) = fields.split_first() else {
            continue;
        };

        match record {
            "c" => {}
            "s" => match rest {
                [total] => {
                    if value.replace(parse_flow_value(total, number)?).is_some() {
                        return Err(parse_error(number, "duplicate `s` record"));
                    }
                }
                _ => return Err(parse_error(number, "expected `s <value>`")),
            },
            "f" => match rest {
                [from, to, flow] => {
                    let from = parse_node(from, number)?;
                    let to = parse_node(to, number)?;
                    let flow = parse_flow_value(flow, number)?;
                    *edges.entry((from, to)).or_insert_with(Capacity::zero) += flow;
                }
                _ => return Err(parse_error(number, "expected `f <from> <to> <flow>`")),
            },
            other => return Err(parse_error(number, format!("unknown record `{other}`"))),
        }
    }

    Ok(FlowSolution { value: value.unwrap_or_else(Capacity::zero), edges })
}

fn parse_problem_line(fields: &[&str], line: usize) -> Result<(), DimacsError> {
    match fields {
        ["max", nodes, arcs] if nodes.parse::<usize>().is_ok() && arcs.parse::<usize>().is_ok() => Ok(()),
        _ => Err(parse_error(line, "expected `p max <nodes> <arcs>`")),
    }
}

fn parse_node(field: &str, line: usize) -> Result<usize, DimacsError> {
    match field.parse::<usize>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(parse_error(line, format!("invalid node id `{field}`"))),
    }
}

fn parse_capacity(field: &str, line: usize) -> Result<Capacity, DimacsError> {
    let value: f64 = field.parse().map_err(|_| parse_error(line, format!("invalid capacity `{field}`")))?;
    match NotNan::new(value) {
        Ok(capacity) if value.is_finite() && value >= 0.0 => Ok(capacity),
        _ => Err(DimacsError::InvalidCapacity { line, value }),
    }
}

fn parse_flow_value(field: &str, line: usize) -> Result<Capacity, DimacsError> {
    let value: f64 = field.parse().map_err(|_| parse_error(line, format!("invalid flow value `{field}`")))?;
    match NotNan::new(value) {
        Ok(flow) if value.is_finite() => Ok(flow),
        _ => Err(parse_error(line, format!("flow value `{field}` is not finite"))),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> DimacsError {
    DimacsError::Parse { line, message: message.into() }
}

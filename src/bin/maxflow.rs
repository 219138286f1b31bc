use anyhow::{Context, Result};
use clap::Parser;
use maxflow::dimacs::reader::read_problem;
use maxflow::dimacs::writer::write_flow;
use maxflow::dimacs::MaxFlowProblem;
use maxflow::maximum_flow::capacity_scaling::CapacityScaling;
use maxflow::telemetry::init_tracing;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "maxflow", about = "Solve a DIMACS max-flow problem by capacity scaling")]
struct Cli {
    /// DIMACS problem file; standard input when omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let problem = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            read_problem(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))?
        }
        None => read_problem(io::stdin().lock()).context("reading standard input")?,
    };

    info!(nodes = problem.network.num_nodes(), source = problem.source, sink = problem.sink, "problem loaded");

    let MaxFlowProblem { mut network, source, sink } = problem;
    let assignment = CapacityScaling::default().solve(source, sink, &mut network);
    info!(value = %assignment.value(), "maximum flow computed");

    write_flow(io::stdout().lock(), &assignment).context("writing flow")?;
    Ok(())
}

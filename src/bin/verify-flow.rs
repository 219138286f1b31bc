use anyhow::{bail, Context, Result};
use clap::Parser;
use maxflow::dimacs::reader::{read_flow, read_problem};
use maxflow::telemetry::init_tracing;
use maxflow::verification::verify_flow;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verify-flow", about = "Check a computed flow against its DIMACS problem")]
struct Cli {
    /// DIMACS problem file the flow claims to solve.
    graph: PathBuf,
    /// Flow file produced by the solver.
    flow: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = File::open(&cli.graph).with_context(|| format!("opening {}", cli.graph.display()))?;
    let problem = read_problem(BufReader::new(graph)).with_context(|| format!("reading {}", cli.graph.display()))?;

    let flow = File::open(&cli.flow).with_context(|| format!("opening {}", cli.flow.display()))?;
    let solution = read_flow(BufReader::new(flow)).with_context(|| format!("reading {}", cli.flow.display()))?;

    let violations = verify_flow(&problem, &solution);
    for violation in &violations {
        println!("{violation}");
    }
    if !violations.is_empty() {
        bail!("{} constraint violations found", violations.len());
    }

    println!("flow of value {} passed capacity and conservation checks", solution.value);
    Ok(())
}

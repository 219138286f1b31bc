use crate::dimacs::Capacity;
use crate::maximum_flow::flow_assignment::FlowAssignment;
use std::io::{self, Write};

/// Prints a flow result in the DIMACS convention: the total value as an `s`
/// record, then one `f` record per positive-flow arc in ascending
/// (from, to) order.
pub fn write_flow<W: Write>(mut output: W, assignment: &FlowAssignment<Capacity>) -> io::Result<()> {
    writeln!(output, "c maximum flow by capacity scaling")?;
    writeln!(output, "s {}", assignment.value())?;
    writeln!(output, "c from to flow")?;
    for (from, to, flow) in assignment.edges() {
        writeln!(output, "f {from} {to} {flow}")?;
    }
    writeln!(output, "c end")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maximum_flow::capacity_scaling::CapacityScaling;
    use crate::maximum_flow::residual::ResidualNetwork;
    use ordered_float::NotNan;

    fn capacity(value: f64) -> Capacity {
        NotNan::new(value).unwrap()
    }

    #[test]
    fn writes_sorted_flow_records() {
        let mut network = ResidualNetwork::default();
        network.add_arc(1, 2, capacity(3.0));
        network.add_arc(1, 3, capacity(2.0));
        network.add_arc(2, 4, capacity(2.0));
        network.add_arc(3, 4, capacity(3.0));

        let assignment = CapacityScaling::default().solve(1, 4, &mut network);

        let mut output = Vec::new();
        write_flow(&mut output, &assignment).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text,
            "c maximum flow by capacity scaling\n\
             s 4\n\
             c from to flow\n\
             f 1 2 2\n\
             f 1 3 2\n\
             f 2 4 2\n\
             f 3 4 2\n\
             c end\n"
        );
    }

    #[test]
    fn empty_assignment_writes_zero_total() {
        let mut network = ResidualNetwork::default();
        network.add_arc(1, 2, capacity(3.0));

        let assignment = CapacityScaling::default().solve(1, 4, &mut network);

        let mut output = Vec::new();
        write_flow(&mut output, &assignment).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("s 0\n"));
        assert!(!text.contains("\nf "));
    }
}

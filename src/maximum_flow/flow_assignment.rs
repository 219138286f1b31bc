use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::NumAssign;
use std::collections::BTreeMap;

/// Net per-edge flow recovered from a solved residual network, restricted to
/// edges carrying strictly positive flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowAssignment<Flow> {
    value: Flow,
    edges: BTreeMap<(usize, usize), Flow>,
}

impl<Flow> FlowAssignment<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Diffs the pre-augmentation snapshot against the final residuals. The
    /// negative side of a cancelled pair is dropped; its companion edge
    /// reports the net amount. The value is the flow leaving the source.
    pub(crate) fn extract(original: &ResidualNetwork<Flow>, residual: &ResidualNetwork<Flow>, source: usize) -> Self {
        let mut value = Flow::zero();
        let mut edges = BTreeMap::new();

        for (u, v, capacity) in original.edges() {
            let remaining = residual.capacity(u, v);
            if remaining < capacity {
                let flow = capacity - remaining;
                if u == source {
                    value += flow;
                }
                edges.insert((u, v), flow);
            }
        }

        Self { value, edges }
    }

    #[inline]
    pub fn value(&self) -> Flow {
        self.value
    }

    /// Net flow on (u, v); zero when the edge carries none.
    pub fn get(&self, u: usize, v: usize) -> Flow {
        self.edges.get(&(u, v)).copied().unwrap_or_else(Flow::zero)
    }

    /// (u, v, flow) triples in ascending (u, v) order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Flow)> + '_ {
        self.edges.iter().map(|(&(u, v), &flow)| (u, v, flow))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

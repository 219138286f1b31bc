use crate::maximum_flow::flow_assignment::FlowAssignment;
use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::{FromPrimitive, NumAssign};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

/// Maximum flow by capacity scaling.
///
/// Augmenting paths are found with BFS restricted to residual edges of
/// capacity at least delta, and delta sweeps the powers of two downward
/// from the largest capacity leaving the source. Every augmentation at a
/// phase saturates a threshold edge, so a phase admits O(m) augmentations
/// and there are O(log max_capacity) phases.
#[derive(Default)]
pub struct CapacityScaling {
    queue: VecDeque<usize>,
    seen: HashSet<usize>,
    prev: HashMap<usize, usize>,
}

impl CapacityScaling {
    /// Runs the scaling loop to completion and extracts the per-edge flow
    /// from the mutated network. A source with no outgoing capacity or an
    /// unreachable sink yields an empty, zero-value assignment.
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, network: &mut ResidualNetwork<Flow>) -> FlowAssignment<Flow>
    where
        Flow: NumAssign + Ord + Copy + FromPrimitive,
    {
        let original = network.clone();

        let mut delta = initial_delta(network, source);
        while delta >= 1 {
            let threshold = Flow::from_u64(delta).unwrap();
            let mut augmentations = 0u64;
            loop {
                let path = self.find_augmenting_path(network, threshold, source, sink);
                if path.is_empty() {
                    break;
                }
                trace!(delta, edges = path.len(), "augmenting");
                augment(network, &path);
                augmentations += 1;
            }
            debug!(delta, augmentations, "scaling phase finished");
            delta /= 2;
        }

        FlowAssignment::extract(&original, network, source)
    }

    /// BFS over edges with residual capacity at least `threshold`. Returns
    /// the source-to-sink path as a list of edges, or an empty list when the
    /// sink is unreachable at this threshold.
    fn find_augmenting_path<Flow>(&mut self, network: &ResidualNetwork<Flow>, threshold: Flow, source: usize, sink: usize) -> Vec<(usize, usize)>
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.queue.clear();
        self.seen.clear();
        self.prev.clear();
        self.queue.push_back(source);
        self.seen.insert(source);

        'bfs: while let Some(u) = self.queue.pop_front() {
            for (v, capacity) in network.neighbors(u) {
                if capacity < threshold || !self.seen.insert(v) {
                    continue;
                }
                self.prev.insert(v, u);
                if v == sink {
                    break 'bfs;
                }
                self.queue.push_back(v);
            }
        }

        if !self.prev.contains_key(&sink) {
            return Vec::new();
        }

        // walk predecessor links back to the source
        let mut path = Vec::new();
        let mut v = sink;
        while v != source {
            let u = self.prev[&v];
            path.push((u, v));
            v = u;
        }
        path.reverse();
        path
    }
}

// The only mutator of the network: pushes the bottleneck along the path and
// credits it to the reverse edges, preserving the pair-sum invariant.
fn augment<Flow>(network: &mut ResidualNetwork<Flow>, path: &[(usize, usize)])
where
    Flow: NumAssign + Ord + Copy,
{
    let bottleneck = path.iter().map(|&(u, v)| network.capacity(u, v)).min().unwrap();

    for &(u, v) in path {
        let forward = network.capacity(u, v) - bottleneck;
        network.set_capacity(u, v, forward);
        let backward = network.capacity(v, u) + bottleneck;
        network.set_capacity(v, u, backward);
    }
}

// Largest power of two strictly below the source's largest outgoing
// capacity, or 1 when that maximum does not exceed one. Delta is held as an
// integer so the phase loop halves exactly to zero.
fn initial_delta<Flow>(network: &ResidualNetwork<Flow>, source: usize) -> u64
where
    Flow: NumAssign + Ord + Copy + FromPrimitive,
{
    let max_capacity = network.neighbors(source).map(|(_, capacity)| capacity).max().unwrap_or_else(Flow::zero);

    let mut delta = 1u64;
    loop {
        let doubled = match delta.checked_mul(2) {
            Some(doubled) => doubled,
            None => break,
        };
        match Flow::from_u64(doubled) {
            Some(limit) if limit < max_capacity => delta = doubled,
            _ => break,
        }
    }
    delta
}

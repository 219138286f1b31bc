use num_traits::NumAssign;
use std::collections::BTreeMap;

/// Residual network over sparse positive node identifiers.
///
/// Every arc (u, v) is stored together with its reverse entry (v, u), which
/// defaults to capacity zero when no such arc was declared. Augmentation
/// moves capacity between the two entries, so
/// `capacity(u, v) + capacity(v, u)` stays constant for every pair.
#[derive(Clone)]
pub struct ResidualNetwork<Flow> {
    adjacency: BTreeMap<usize, BTreeMap<usize, Flow>>,
}

impl<Flow> Default for ResidualNetwork<Flow> {
    fn default() -> Self {
        Self { adjacency: BTreeMap::new() }
    }
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Current residual capacity of (u, v), or zero for a pair that was
    /// never assigned. Never inserts an entry.
    pub fn capacity(&self, u: usize, v: usize) -> Flow {
        self.adjacency.get(&u).and_then(|row| row.get(&v)).copied().unwrap_or_else(Flow::zero)
    }

    pub fn set_capacity(&mut self, u: usize, v: usize, value: Flow) {
        self.adjacency.entry(u).or_default().insert(v, value);
    }

    /// Adds a directed arc. Duplicate arcs between the same ordered pair
    /// accumulate, and the reverse entry is materialized with capacity zero
    /// unless it already exists.
    pub fn add_arc(&mut self, u: usize, v: usize, capacity: Flow) {
        *self.adjacency.entry(u).or_default().entry(v).or_insert_with(Flow::zero) += capacity;
        self.adjacency.entry(v).or_default().entry(u).or_insert_with(Flow::zero);
    }

    /// (v, capacity) pairs for every entry (u, v), in ascending node order.
    /// May include zero-capacity entries.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Flow)> + '_ {
        self.adjacency.get(&u).into_iter().flatten().map(|(&v, &capacity)| (v, capacity))
    }

    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.keys().copied()
    }

    /// All (u, v, capacity) entries, ascending by (u, v).
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Flow)> + '_ {
        self.adjacency.iter().flat_map(|(&u, row)| row.iter().map(move |(&v, &capacity)| (u, v, capacity)))
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_of_unknown_pair_is_zero_and_creates_nothing() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 2, 5);

        assert_eq!(network.capacity(2, 3), 0);
        assert_eq!(network.capacity(7, 8), 0);
        // the lookups above must not have grown the edge set
        assert_eq!(network.edges().count(), 2);
        assert_eq!(network.num_nodes(), 2);
    }

    #[test]
    fn add_arc_materializes_zero_capacity_reverse() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 2, 5);

        assert_eq!(network.capacity(1, 2), 5);
        assert_eq!(network.capacity(2, 1), 0);
        assert_eq!(network.edges().collect::<Vec<_>>(), vec![(1, 2, 5), (2, 1, 0)]);
    }

    #[test]
    fn duplicate_arcs_accumulate() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 2, 2);
        network.add_arc(1, 2, 3);

        assert_eq!(network.capacity(1, 2), 5);
        assert_eq!(network.edges().count(), 2);
    }

    #[test]
    fn add_arc_keeps_existing_reverse_capacity() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 2, 5);
        network.add_arc(2, 1, 3);

        assert_eq!(network.capacity(1, 2), 5);
        assert_eq!(network.capacity(2, 1), 3);
    }

    #[test]
    fn set_capacity_overwrites() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 2, 5);
        network.set_capacity(1, 2, 1);

        assert_eq!(network.capacity(1, 2), 1);
    }

    #[test]
    fn neighbors_enumerate_in_ascending_order() {
        let mut network = ResidualNetwork::<i64>::default();
        network.add_arc(1, 9, 1);
        network.add_arc(1, 3, 1);
        network.add_arc(1, 5, 1);

        let order: Vec<usize> = network.neighbors(1).map(|(v, _)| v).collect();
        assert_eq!(order, vec![3, 5, 9]);
        assert_eq!(network.neighbors(42).count(), 0);
    }
}

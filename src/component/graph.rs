use super::Matrix;

/// Inter-node distances over a complete graph. Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceGraph {
    table: Matrix,
}

impl DistanceGraph {
    pub fn new(table: Matrix) -> Self {
        debug_assert!(table.order() >= 2);
        DistanceGraph { table }
    }
    pub fn len(&self) -> usize {
        self.table.order()
    }
    /// Distance between two distinct nodes; the diagonal is never queried.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from != to);
        self.table[(from, to)]
    }
}

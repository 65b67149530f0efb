use super::Matrix;

/// Per-edge pheromone intensity. An edge and its reverse share one cell:
/// every access resolves to the canonical pair (min, max), so only the
/// upper triangle is ever written.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneState {
    table: Matrix,
}

impl PheromoneState {
    pub fn new(nodes: usize) -> Self {
        PheromoneState { table: Matrix::new(nodes) }
    }
    pub fn get(&self, end0: usize, end1: usize) -> f64 {
        let ends = canonical(end0, end1);
        self.table[ends]
    }
    pub fn add(&mut self, end0: usize, end1: usize, amount: f64) {
        debug_assert!(amount >= 0.0);
        let ends = canonical(end0, end1);
        self.table[ends] += amount;
    }
    /// Multiplies every stored value by (1 - rate), rate in [0, 1).
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..1.0).contains(&rate));
        self.table.scale(1.0 - rate);
    }
    pub fn len(&self) -> usize {
        self.table.order()
    }
}

fn canonical(end0: usize, end1: usize) -> (usize, usize) {
    debug_assert!(end0 != end1);
    (end0.min(end1), end0.max(end1))
}

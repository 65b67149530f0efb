use std::ops::{Index, IndexMut};

/// Dense row-major square table of f64 cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    order: usize,
    cells: Vec<f64>,
}

impl Matrix {
    pub fn new(order: usize) -> Self {
        let cells = vec![0.0; order * order];
        Matrix { order, cells }
    }
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let order = rows.len();
        debug_assert!(rows.iter().all(|row| row.len() == order));
        let cells = rows.into_iter().flatten().collect();
        Matrix { order, cells }
    }
    pub fn order(&self) -> usize {
        self.order
    }
    pub fn fill(&mut self, value: f64) {
        self.cells.iter_mut().for_each(|cell| *cell = value);
    }
    /// Elementwise multiply, in row-major order.
    pub fn scale(&mut self, factor: f64) {
        self.cells.iter_mut().for_each(|cell| *cell *= factor);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        debug_assert!(row < self.order && col < self.order);
        &self.cells[row * self.order + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        debug_assert!(row < self.order && col < self.order);
        &mut self.cells[row * self.order + col]
    }
}

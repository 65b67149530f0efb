use super::{DistanceGraph, Matrix, PheromoneState};

/// Transition preference for every ordered node pair, derived anew each
/// round as pheromone^alpha * (1/distance)^beta. Node 0 is the fixed tour
/// start and never a candidate target, so its column stays zero.
#[derive(Clone, Debug)]
pub struct Desirability {
    nume: Matrix,
}

impl Desirability {
    pub fn new(nodes: usize) -> Self {
        Desirability { nume: Matrix::new(nodes) }
    }
    pub fn recompute(&mut self, pheromone: &PheromoneState, graph: &DistanceGraph,
                     alpha: f64, beta: f64) {
        let nodes = graph.len();
        for i in 0..nodes {
            for j in 1..nodes {
                if i == j {
                    continue;
                }
                let trail = pheromone.get(i, j).powf(alpha);
                let visibility = (1.0 / graph.distance(i, j)).powf(beta);
                self.nume[(i, j)] = trail * visibility;
            }
        }
    }
    pub fn of(&self, from: usize, to: usize) -> f64 {
        self.nume[(from, to)]
    }
}

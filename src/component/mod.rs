mod desirability;
mod graph;
mod matrix;
mod pheromone;

pub use desirability::Desirability;
pub use graph::DistanceGraph;
pub use matrix::Matrix;
pub use pheromone::PheromoneState;

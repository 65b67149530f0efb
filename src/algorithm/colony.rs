use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use std::fmt::Write;
use std::iter;
use std::time::Instant;
use crate::component::{Desirability, DistanceGraph, PheromoneState};
use crate::utils::config::{Config, Parameters};
use super::Ant;

/// Owns the shared state of the search: the distance graph, the pheromone
/// matrix and the population of ants, plus the one random source every
/// decision point draws from.
pub struct Colony {
    pub graph: DistanceGraph,
    pub pheromone: PheromoneState,
    pub desirability: Desirability,
    pub ants: Vec<Ant>,
    pub parameters: Parameters,
    rng: ChaChaRng,
}

impl Colony {
    pub fn new(graph: DistanceGraph, config: &Config) -> Self {
        let nodes = graph.len();
        let pheromone = PheromoneState::new(nodes);
        let desirability = Desirability::new(nodes);
        let ants = iter::repeat_with(|| Ant::new(nodes))
            .take(config.parameters.ants)
            .collect();
        let parameters = config.parameters.clone();
        let rng = ChaChaRng::seed_from_u64(config.seed);
        Colony { graph, pheromone, desirability, ants, parameters, rng }
    }

    /// Construction phase: the desirability model is fully recomputed
    /// before the first ant moves, and stays frozen for the whole round.
    pub fn select_route(&mut self) {
        self.desirability.recompute(&self.pheromone, &self.graph,
                                    self.parameters.alpha, self.parameters.beta);
        for ant in self.ants.iter_mut() {
            ant.select_route(&self.desirability, &self.graph,
                             self.parameters.guided, &mut self.rng);
        }
    }

    /// Update phase: one evaporation, strictly before any deposit.
    pub fn renew_pheromone(&mut self) {
        self.pheromone.evaporate(self.parameters.evaporation);
        for ant in self.ants.iter() {
            ant.put_pheromone(&mut self.pheromone, self.parameters.deposit);
        }
    }

    /// Runs the configured number of rounds; returns elapsed microseconds.
    pub fn run(&mut self) -> u128 {
        let start = Instant::now();
        for _ in 0..self.parameters.rounds {
            self.select_route();
            self.renew_pheromone();
        }
        #[cfg(debug_assertions)]
        println!("colony ran {} rounds with {} ants",
                 self.parameters.rounds, self.ants.len());
        start.elapsed().as_micros()
    }

    /// Renders the pheromone matrix as stored: the upper triangle carries
    /// the canonical edge values, diagonal and lower triangle stay zero.
    pub fn show_pheromone(&self) -> String {
        let nodes = self.graph.len();
        let mut msg = String::new();
        for i in 0..nodes {
            let row = (0..nodes)
                .map(|j| match j > i {
                    true => format!("{:>9.3}", self.pheromone.get(i, j)),
                    false => format!("{:>9.3}", 0.0),
                })
                .join(", ");
            writeln!(msg, "{}", row).unwrap();
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Matrix;

    fn setup(guided: f64) -> Colony {
        let rows = vec![
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 4.0, 5.0],
            vec![2.0, 4.0, 0.0, 6.0],
            vec![3.0, 5.0, 6.0, 0.0],
        ];
        let graph = DistanceGraph::new(Matrix::from_rows(rows));
        let config = Config {
            name: "scenario".to_owned(),
            seed: 7,
            parameters: Parameters {
                rounds: 1,
                ants: 1,
                deposit: 10.0,
                evaporation: 0.05,
                guided,
                alpha: 1.0,
                beta: 1.0,
            },
        };
        Colony::new(graph, &config)
    }

    fn tour_edges(route: &[usize]) -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = route.windows(2)
            .map(|ends| (ends[0], ends[1]))
            .collect();
        edges.push((route[route.len() - 1], 0));
        edges
    }

    #[test]
    fn it_deposits_along_a_single_fallback_tour() {
        let mut colony = setup(0.0);
        colony.select_route();

        let route = colony.ants[0].route.clone();
        let total = colony.ants[0].total_distance;
        let mut sorted = route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
        assert_eq!(route[0], 0);

        let expect: f64 = tour_edges(&route).iter()
            .map(|&(a, b)| colony.graph.distance(a, b))
            .sum();
        assert!((total - expect).abs() < 1e-12);

        colony.renew_pheromone();
        let amount = 10.0 / total;
        for (a, b) in tour_edges(&route) {
            assert!((colony.pheromone.get(a, b) - amount).abs() < 1e-12);
        }
        // the two edges off the tour stay untouched
        let mut sum = 0.0;
        for i in 0..4 {
            for j in i + 1..4 {
                sum += colony.pheromone.get(i, j);
            }
        }
        assert!((sum - 4.0 * amount).abs() < 1e-12);
    }

    #[test]
    fn it_evaporates_before_depositing() {
        let mut colony = setup(0.0);
        colony.pheromone.add(0, 1, 1.0);
        colony.select_route();

        let route = colony.ants[0].route.clone();
        let amount = colony.parameters.deposit / colony.ants[0].total_distance;
        colony.renew_pheromone();

        let deposited = tour_edges(&route).iter()
            .any(|&(a, b)| (a.min(b), a.max(b)) == (0, 1));
        let expect = 1.0 * 0.95 + if deposited { amount } else { 0.0 };
        assert!((colony.pheromone.get(0, 1) - expect).abs() < 1e-12);
    }

    #[test]
    fn it_keeps_pheromone_symmetric_over_rounds() {
        let mut colony = setup(0.95);
        colony.parameters.rounds = 20;
        colony.run();
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    let forward = colony.pheromone.get(i, j);
                    assert!(forward >= 0.0);
                    assert_eq!(forward, colony.pheromone.get(j, i));
                }
            }
        }
    }

    #[test]
    fn it_renders_fixed_width_rows() {
        let mut colony = setup(0.0);
        colony.run();
        let table = colony.show_pheromone();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in lines {
            assert_eq!(line.split(", ").count(), 4);
            for cell in line.split(", ") {
                assert_eq!(cell.len(), 9);
                assert!(cell.trim_start().parse::<f64>().is_ok());
            }
        }
    }
}

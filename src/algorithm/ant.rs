use itertools::Itertools;
use rand::Rng;
use crate::component::{Desirability, DistanceGraph, PheromoneState};

/// A worker that builds one closed tour per round. Ants keep no reference
/// to shared colony state; the desirability model and the graph come in as
/// read-only parameters, the pheromone handle only at deposit time.
#[derive(Clone, Debug)]
pub struct Ant {
    pub route: Vec<usize>,
    pub total_distance: f64,
    candidate: Vec<bool>,
}

impl Ant {
    pub fn new(nodes: usize) -> Self {
        debug_assert!(nodes >= 2);
        let route = vec![0; nodes];
        let candidate = vec![false; nodes];
        Ant { route, total_distance: 0.0, candidate }
    }

    /// Walks from node 0 through every other node exactly once and back.
    /// Each branch point consumes a fresh draw from the random source.
    pub fn select_route<R: Rng>(&mut self, nume: &Desirability, graph: &DistanceGraph,
                                guided: f64, rng: &mut R) {
        let nodes = graph.len();
        for marker in self.candidate.iter_mut().skip(1) {
            *marker = true;
        }
        self.route[0] = 0;
        self.total_distance = 0.0;

        for step in 0..nodes - 2 {
            let current = self.route[step];
            let denom: f64 = (1..nodes)
                .filter(|&u| self.candidate[u])
                .map(|u| nume.of(current, u))
                .sum();
            let next = self.extend(current, denom, nume, guided, rng);
            self.route[step + 1] = next;
            self.candidate[next] = false;
            self.total_distance += graph.distance(current, next);
        }

        // exactly one candidate is left to close the tour
        let last = self.candidate.iter()
            .position(|&marker| marker)
            .expect("tour closed with no candidate left");
        self.route[nodes - 1] = last;
        self.candidate[last] = false;
        self.total_distance += graph.distance(self.route[nodes - 2], last);
        self.total_distance += graph.distance(last, 0);
    }

    fn extend<R: Rng>(&self, current: usize, denom: f64, nume: &Desirability,
                      guided: f64, rng: &mut R) -> usize {
        if denom > 0.0 && rng.gen::<f64>() < guided {
            let draw = rng.gen::<f64>();
            if let Some(next) = self.roulette(current, denom, nume, draw) {
                return next;
            }
        }
        self.pick_uniform(rng)
    }

    /// Roulette-wheel selection: scans unvisited nodes in increasing index
    /// order and takes the first whose cumulative share reaches the draw.
    /// Rounding can let the draw slip past every share; then returns None.
    fn roulette(&self, current: usize, denom: f64, nume: &Desirability,
                mut draw: f64) -> Option<usize> {
        for next in (1..self.candidate.len()).filter(|&u| self.candidate[u]) {
            let share = nume.of(current, next) / denom;
            if draw <= share {
                return Some(next);
            }
            draw -= share;
        }
        None
    }

    fn pick_uniform<R: Rng>(&self, rng: &mut R) -> usize {
        let remaining = self.candidate.iter().filter(|&&marker| marker).count();
        let chosen = rng.gen_range(0..remaining);
        self.candidate.iter()
            .positions(|&marker| marker)
            .nth(chosen)
            .expect("uniform pick out of candidates")
    }

    /// Deposits q / total onto every traversed edge, the closing edge
    /// back to node 0 included. Deposits from distinct ants add up.
    pub fn put_pheromone(&self, pheromone: &mut PheromoneState, deposit: f64) {
        debug_assert!(self.total_distance > 0.0);
        let amount = deposit / self.total_distance;
        for ends in self.route.windows(2) {
            pheromone.add(ends[0], ends[1], amount);
        }
        pheromone.add(self.route[self.route.len() - 1], 0, amount);
    }
}

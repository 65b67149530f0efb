use serde::Deserialize;
use argh::FromArgs;

/// An ant-colony tour optimizer over a complete distance matrix
#[derive(FromArgs)]
pub struct Arguments {
    /// path to the delimited distance-matrix file
    #[argh(positional)]
    pub matrix: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override number of rounds to run
    #[argh(option, short='r')]
    pub rounds: Option<usize>,
    /// override number of ants per round
    #[argh(option, short='n')]
    pub ants: Option<usize>,
    /// override probability of pheromone-guided selection
    #[argh(option, short='g')]
    pub guided: Option<f64>,
    /// override random seed for tour construction
    #[argh(option, short='s')]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    pub parameters: Parameters,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Parameters {
    pub rounds: usize,
    pub ants: usize,
    pub deposit: f64,
    pub evaporation: f64,
    pub guided: f64,
    pub alpha: f64,
    pub beta: f64,
}

impl Config {
    pub fn override_from_args(&mut self, args: Arguments) {
        if let Some(rounds) = args.rounds {
            self.parameters.rounds = rounds;
        }
        if let Some(ants) = args.ants {
            self.parameters.ants = ants;
        }
        if let Some(guided) = args.guided {
            self.parameters.guided = num::clamp(guided, 0.0, 1.0);
        }
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
    }
}

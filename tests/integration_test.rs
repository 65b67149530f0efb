use forager::algorithm::Colony;
use forager::utils::error::Error;
use forager::utils::{csv, yaml};

#[test]
fn it_runs_a_colony_to_completion() {
    let graph = csv::load_matrix("data/matrix/sample.csv").unwrap();
    let mut config = yaml::load_config("data/config/default.yaml").unwrap();
    config.parameters.rounds = 50;
    config.parameters.ants = 10;

    let mut colony = Colony::new(graph, &config);
    colony.run();

    let nodes = colony.graph.len();
    for i in 0..nodes {
        for j in 0..nodes {
            if i != j {
                assert!(colony.pheromone.get(i, j) >= 0.0);
                assert_eq!(colony.pheromone.get(i, j), colony.pheromone.get(j, i));
            }
        }
    }
    for ant in &colony.ants {
        let mut route = ant.route.clone();
        route.sort_unstable();
        assert_eq!(route, (0..nodes).collect::<Vec<_>>());
        assert_eq!(ant.route[0], 0);
    }
}

#[test]
fn it_repeats_runs_with_the_same_seed() {
    let run = || {
        let graph = csv::load_matrix("data/matrix/sample.csv").unwrap();
        let mut config = yaml::load_config("data/config/default.yaml").unwrap();
        config.parameters.rounds = 20;
        config.parameters.ants = 5;
        let mut colony = Colony::new(graph, &config);
        colony.run();
        colony.show_pheromone()
    };
    assert_eq!(run(), run());
}

#[test]
fn it_loads_the_same_file_identically() {
    let first = csv::load_matrix("data/matrix/sample.csv").unwrap();
    let second = csv::load_matrix("data/matrix/sample.csv").unwrap();
    assert_eq!(first, second);
}

#[test]
fn it_rejects_a_nonsquare_matrix() {
    match csv::load_matrix("data/matrix/nonsquare.csv") {
        Err(Error::NotSquare { rows, cols }) => {
            assert_eq!((rows, cols), (3, 4));
        }
        _ => panic!("expected a configuration error"),
    }
}

#[test]
fn it_rejects_a_missing_file() {
    assert!(matches!(
        csv::load_matrix("data/matrix/nonexistent.csv"),
        Err(Error::UnreadableFile(..))
    ));
}

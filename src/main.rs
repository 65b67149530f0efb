use forager::algorithm::Colony;
use forager::utils::config::Arguments;
use forager::utils::error::Error;
use forager::utils::{csv, yaml};
use std::process;

fn main() {
    let args: Arguments = argh::from_env();
    if let Err(error) = run(args) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(args: Arguments) -> Result<(), Error> {
    let graph = csv::load_matrix(&args.matrix)?;
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(args);

    let mut colony = Colony::new(graph, &config);
    let elapsed = colony.run();

    print!("{}", colony.show_pheromone());
    println!("--- computing time: {} μs ---", elapsed);
    Ok(())
}

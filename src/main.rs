use std::process;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use env_logger::Env;
use rref_solver::float_matrix::solver::{solve, Solution};
use rref_solver::sample_systems;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// index of the bundled sample system to solve; all of them when absent
    #[arg(short, long)]
    pub system: Option<usize>,
}

fn run_sample_systems(selected: Option<usize>) -> Result<()> {
    let systems = sample_systems::all().context("building the sample systems")?;
    if let Some(index) = selected {
        ensure!(
            index < systems.len(),
            "no sample system with index {}, there are {}",
            index,
            systems.len()
        );
    }
    for (index, (name, system)) in systems.into_iter().enumerate() {
        if selected.is_some_and(|wanted| wanted != index) {
            continue;
        }
        match solve(&system).with_context(|| format!("solving {name}"))? {
            Solution::Reduced(reduced) => {
                let free_columns = system.number_of_columns - 1 - reduced.pivot_columns().len();
                println!("{name}: reduced echelon matrix\n{reduced}");
                if free_columns > 0 {
                    println!("{name}: {free_columns} free column(s), a parametrized family");
                }
            }
            Solution::NoSolution => println!("{name}: there is no solution"),
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run_sample_systems(args.system) {
        eprintln!("ran into solver error: {err:?}");
        process::exit(1)
    }
}

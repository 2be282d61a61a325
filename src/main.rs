use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use gol::{Engine, GridState, Simulation, render};

use crate::{
    config::Config,
    prompt::{PromptError, Prompter},
};

mod config;
mod prompt;

fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();
    let config = Config::from_env();
    log::info!("{config:?}");
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock());
    match run(&config, &mut prompter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run<R: BufRead, W: Write>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let rows = prompter.positive(
        "Please enter the number (integer) of rows in the grid: ",
        "Please enter a positive integer for the number of rows.",
    )?;
    let cols = prompter.positive(
        "Please enter the number (integer) of columns in the grid: ",
        "Please enter a positive integer for the number of columns.",
    )?;
    prompter.say("\nHere is your grid: ")?;
    prompter.say(&render::numbered(&GridState::dead(rows, cols)?))?;
    prompter.say(
        "The program will ask you for the corresponding cell numbers (integers) that you would \
         like to activate as alive. Please enter the numbers one at a time.",
    )?;
    let alive = prompter.alive_ids(rows * cols)?;
    let generations = prompter.positive(
        "Please enter the number (integer) of generations you want to carry out: ",
        "Please enter a positive integer for the number of generations.",
    )?;
    let seed = GridState::new(rows, cols, alive)?;
    log::info!("simulating {generations} generations of a {rows}x{cols} grid");

    let engine = Engine::new(config.overpopulation);
    for generation in Simulation::new(engine, seed).take(generations) {
        prompter.say(&format!("\nGeneration {}:", generation.index))?;
        if let Some(record) = &generation.record {
            prompter.say(&render::record(record))?;
            prompter.say("")?;
        }
        prompter.say(&render::grid(&generation.grid, &config.render))?;
    }
    Ok(())
}

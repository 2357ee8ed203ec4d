//! Running the simulation without any user interaction.

use crate::{
    args::Args,
    files::{self, Loaded},
};
use lifeboard_lib::{CancelToken, Engine};
use log::info;
use std::error::Error;

/// Prints the generation number and the board.
fn print_board(engine: &Engine) {
    let board = engine.board();
    println!("Generation {}", engine.generation());
    print!("{}", board.plaintext());
}

/// Builds the engine from the arguments or the loaded file.
fn engine(args: &Args) -> Result<Engine, Box<dyn Error>> {
    let workers = args.config.workers;
    let engine = match &args.load {
        None => args.config.engine()?,
        Some(path) => match files::load(path)? {
            Loaded::Config(config) => {
                info!("loaded config from {}", path.display());
                let config = match workers {
                    Some(_) => config.set_workers(workers),
                    None => config,
                };
                config.engine()?
            }
            Loaded::Save(mut save) => {
                info!(
                    "loaded save of generation {} from {}",
                    save.generation,
                    path.display()
                );
                if workers.is_some() {
                    save.config.workers = workers;
                }
                save.engine()?
            }
        },
    };
    Ok(engine)
}

/// Runs the simulation.
pub(crate) fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let engine = engine(args)?;
    let board = engine.board();
    info!(
        "{} with rule {}, {} living cells",
        board.topology(),
        engine.rule(),
        board.alive_count()
    );
    drop(board);

    let cancel = CancelToken::new();
    if !args.quiet {
        print_board(&engine);
    }
    for _ in 0..args.generations {
        engine.advance(&cancel)?;
        if !args.quiet {
            println!();
            print_board(&engine);
        }
    }
    if args.quiet {
        print_board(&engine);
    }

    if let Some(path) = &args.save {
        files::save(path, &engine.save())?;
        info!("saved to {}", path.display());
    }
    Ok(())
}

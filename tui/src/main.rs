mod args;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use log::info;
use rlifesim_lib::Simulation;
use std::{error::Error, process::exit, thread};

/// Prints the generations one by one as plain text.
fn run_without_tui(mut world: Box<dyn Simulation>, args: &Args) {
    loop {
        println!("{}", world.summary());
        println!("{}", world.plaintext());
        if args
            .generations
            .map_or(false, |n| world.generation() >= n)
        {
            break;
        }
        thread::sleep(args.delay);
        world.step();
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let world = args.config.world()?;
    info!(
        "Starting a {}x{} world with rule {}",
        world.width(),
        world.height(),
        world.rule_string()
    );

    #[cfg(feature = "tui")]
    {
        if !args.no_tui {
            let world = tui::run_with_tui(world, args.delay, args.generations)?;
            println!("{}", world.summary());
            print!("{}", world.plaintext());
            return Ok(());
        }
    }

    run_without_tui(world, &args);
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
#[cfg(feature = "std")]
use seabattle::{
    generate_fleet, init_logging, ship_class_name,
    ui::{parse_target, render_field},
    validate, Game, GameStatus, ShotOutcome, OPPONENT_FIELD, PLAYER_FIELD, ROSTER,
};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a random fleet and print it.
    Fleet {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the fleet as JSON instead of a grid")]
        json: bool,
    },
    /// Fire at a static random fleet, reading `col row` targets from stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Fire at every cell of the opponent field in random order until all ships sink.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Fleet { seed, json } => {
            let mut rng = make_rng(seed);
            let fleet = generate_fleet(&mut rng, &ROSTER, &PLAYER_FIELD)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fleet)?);
            } else {
                let validation = validate(fleet.iter(), &PLAYER_FIELD);
                print!("{}", render_field(&PLAYER_FIELD, fleet.iter(), Some(&validation), None));
            }
        }
        Commands::Play { seed } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            play(&mut rng)?;
        }
        Commands::Sim { seed } => {
            let mut rng = make_rng(seed);
            let mut game = Game::new(&mut rng)?;
            game.start_battle(&mut rng)?;

            let mut targets: Vec<_> = OPPONENT_FIELD.cells().collect();
            targets.shuffle(&mut rng);
            let mut fired = 0usize;
            for cell in targets {
                if game.status() == GameStatus::Won {
                    break;
                }
                let already = game
                    .battle()
                    .map_or(false, |phase| phase.battle().outcome_at(cell).is_some());
                if already {
                    continue;
                }
                game.fire(cell);
                fired += 1;
            }

            let phase = game
                .battle()
                .ok_or_else(|| anyhow::anyhow!("battle did not start"))?;
            let result = json!({
                "seed": seed,
                "shots_fired": fired,
                "cells_recorded": phase.battle().shots().len(),
                "ships_sunk": phase.battle().sunk_count(),
                "status": format!("{:?}", game.status()),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn play(rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut game = Game::new(rng)?;
    if let Some(session) = game.placement() {
        println!("Your fleet:");
        print!("{}", render_field(&PLAYER_FIELD, session.fleet().iter(), None, None));
    }
    game.start_battle(rng)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while game.status() != GameStatus::Won {
        if let Some(phase) = game.battle() {
            println!("\nOpponent field:");
            print!(
                "{}",
                render_field(&OPPONENT_FIELD, std::iter::empty::<&seabattle::Ship>(), None, Some(phase.battle()))
            );
        }
        print!("Target (col row, or quit): ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        let cell = match parse_target(line, &OPPONENT_FIELD) {
            Some(cell) => cell,
            None => {
                println!("Enter a column and a row between 1 and 10.");
                continue;
            }
        };
        match game.fire(cell) {
            Some(ShotOutcome::Miss) => println!("Miss."),
            Some(ShotOutcome::Hit { .. }) => println!("Hit!"),
            Some(ShotOutcome::Sunk { ship, .. }) => {
                let size = game
                    .battle()
                    .and_then(|phase| phase.battle().fleet().get(ship))
                    .map(|s| s.size())
                    .unwrap_or(0);
                println!(
                    "Sunk the {}!",
                    ship_class_name(size).unwrap_or("ship")
                );
            }
            None => break,
        }
    }

    if game.status() == GameStatus::Won {
        println!("All enemy ships sunk. You win!");
    }
    Ok(())
}

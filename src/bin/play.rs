use std::error::Error;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unoengine::{Bot, Game, GameError, GameEvent, HumanBot, PlayOutcome, render_state};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Hot-seat Uno at the terminal.")]
struct Args {
    /// Number of players at the table (2-4)
    #[arg(short = 'p', long = "players", default_value_t = 2)]
    players: usize,

    /// Seed for shuffling; a fresh shuffle is used when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Comma separated player names
    #[arg(long = "names", value_delimiter = ',')]
    names: Vec<String>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "unoengine=trace")
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut builder = Game::builder(args.players)?;
    if let Some(seed) = args.seed {
        builder = builder.with_seed(seed);
    }
    let mut game = builder.build()?;

    let mut seats: Vec<HumanBot> = (0..args.players)
        .map(|index| {
            let name = args
                .names
                .get(index)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("Player {}", index + 1));
            HumanBot::new(name)
        })
        .collect();

    println!("Starting Uno with {} players.", args.players);
    while !game.is_finished() {
        let current = game.current_player();
        let state = game.state_view(current)?;
        let legal_actions = game.legal_actions(current)?;
        if legal_actions.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "no legal actions available for current player",
            )
            .into());
        }
        let action = seats[current].select_action(&state, &legal_actions);
        match game.apply_action(current, action) {
            Ok(PlayOutcome::Won(_)) | Ok(PlayOutcome::Continue) => {}
            Ok(PlayOutcome::ColorRequired) => println!("Wild card played."),
            Err(err) => println!("Invalid move: {err}"),
        }
        for event in game.take_events() {
            announce(&game, &seats, event);
        }
    }

    if let Some(winner) = game.winner() {
        println!("\n{}", render_state(&game.state_view(winner)?));
        println!("Game over. {} wins!", seats[winner].name());
    }
    Ok(())
}

fn announce(game: &Game, seats: &[HumanBot], event: GameEvent) {
    let name = |player: usize| seats.get(player).map(HumanBot::name).unwrap_or("?");
    match event {
        GameEvent::DeckExhausted { player, missed } => {
            println!("The deck is empty! {} was spared {missed} card(s).", name(player));
        }
        GameEvent::PlayerSkipped { player } => println!("{} is skipped.", name(player)),
        GameEvent::DirectionReversed => println!("Direction is now {:?}.", game.direction()),
        GameEvent::ColorChosen { player, color } => {
            println!("{} chose {color}.", name(player));
        }
        GameEvent::TurnPassed { next } => println!("It's {}'s turn.", name(next)),
        GameEvent::CardPlayed { .. } | GameEvent::CardDrawn { .. } | GameEvent::PlayerWon { .. } => {}
    }
}

use std::error::Error;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use unobot::{
    Bot, Game, GameConfig, GameError, Seat, VisualOptions, create_bot_for_seat,
    describe_event, render_state_with_options,
};

/// Default seed; pass `--seed` for a different shuffle.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_0A0B_F00D;

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play UNO against three computer opponents.")]
struct Args {
    /// Seed for the deck shuffle and the computer players
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Name shown for the human seat
    #[arg(short = 'n', long = "name", default_value = "You")]
    name: String,

    /// Let the computer play all four seats
    #[arg(long = "autoplay", action = ArgAction::SetTrue)]
    autoplay: bool,

    /// Pause after each computer move, in milliseconds
    #[arg(long = "ai-delay-ms", default_value_t = 1000)]
    ai_delay_ms: u64,

    /// Safety cap on the number of turns before the game is abandoned
    #[arg(long = "max-turns", default_value_t = 5000)]
    max_turns: usize,

    /// Disable ANSI colors in the table rendering
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    no_color: bool,
}

fn main() {
    init_logging();
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = GameConfig::standard(args.name.clone(), args.seed)?;
    if args.autoplay {
        config.seats = config
            .seats
            .into_iter()
            .map(|seat| Seat::automated(seat.name))
            .collect();
    }
    let options = VisualOptions {
        ansi_colors: !args.no_color,
        show_legal_marks: true,
    };

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(config.seats.len());
    for (index, seat) in config.seats.iter().enumerate() {
        bots.push(create_bot_for_seat(seat, index, args.seed, options)?);
    }
    let spectator = config
        .seats
        .iter()
        .position(|seat| !seat.automated)
        .unwrap_or(0);

    let mut game = Game::new(config)?;

    println!("Welcome to UNO!");
    let mut turns = 0usize;
    while !game.is_finished() {
        if turns >= args.max_turns {
            println!("Max turn limit {} reached. Stopping game.", args.max_turns);
            return Ok(());
        }
        let current = game.current_player();
        let automated = game.participant(current)?.is_automated();
        let state = game.state_view(current)?;
        let legal_actions = game.legal_actions(current)?;
        if automated {
            let table = game.state_view(spectator)?;
            println!("\n{}", render_state_with_options(&table, options));
            println!("{} is thinking...", game.participant(current)?.name());
        }
        let Some(action) = bots[current].select_action(&state, &legal_actions) else {
            println!("Game abandoned.");
            return Ok(());
        };
        let events = match game.apply_action(current, action) {
            Ok(events) => events,
            Err(GameError::DeckExhausted) => {
                println!("No cards left to draw. The game ends without a winner.");
                return Ok(());
            }
            Err(GameError::InvalidSelection(reason)) => {
                println!("Invalid selection: {reason}");
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let view = game.state_view(spectator)?;
        for event in &events {
            println!("{}", describe_event(&view, event));
        }
        if automated && args.ai_delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.ai_delay_ms));
        }
        turns += 1;
    }

    if let Some(winner) = game.winner() {
        println!("\nGame over! {} wins.", game.participant(winner)?.name());
    }
    Ok(())
}

use std::error::Error;

use crate::bot::Bot;
use crate::bots::{HeuristicBot, HumanBot};
use crate::game::Seat;
use crate::visualize::VisualOptions;

/// Derives a distinct per-seat seed from the table seed.
pub fn seat_seed(seed: u64, index: usize) -> u64 {
    seed ^ ((index as u64 + 1) * 0x9E37_79B9)
}

/// Create the decision provider for a seat: the Move Policy for automated
/// seats, an interactive prompt otherwise.
pub fn create_bot_for_seat(
    seat: &Seat,
    index: usize,
    seed: u64,
    options: VisualOptions,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    if seat.name.trim().is_empty() {
        return Err(format!("seat {index} has no name").into());
    }
    if seat.automated {
        Ok(Box::new(HeuristicBot::seeded(seat_seed(seed, index))))
    } else {
        Ok(Box::new(HumanBot::new(seat.name.clone()).with_options(options)))
    }
}

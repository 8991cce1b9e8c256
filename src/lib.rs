//! UNO rules engine with a tiered computer opponent and a terminal table driver.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod policy;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_for_seat, seat_seed};
pub use crate::bots::{HeuristicBot, HumanBot};
pub use crate::card::{Card, CardKind, Color, full_deck, shuffle_deck};
pub use crate::error::{GameError, InvalidSelection};
pub use crate::game::{Game, GameBuilder, GameConfig, Participant, Seat};
pub use crate::hand::Hand;
pub use crate::policy::{Tier, choose_color, choose_move, priority_tier};
pub use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnEvent, TurnPhase,
};
pub use crate::visualize::{VisualOptions, describe_action, describe_event, render_state_with_options};

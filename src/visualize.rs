use std::fmt::Write;

use crate::action::Action;
use crate::card::{Card, Color};
use crate::state::{Direction, GameStateView, GameStatus, TurnEvent};

const RESET: &str = "\u{1b}[0m";
const WHITE: &str = "\u{1b}[37m";

/// Customize state rendering for the terminal table.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub ansi_colors: bool,
    pub show_legal_marks: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            ansi_colors: true,
            show_legal_marks: true,
        }
    }
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::Ongoing => String::from("Ongoing"),
        GameStatus::Finished { winner } => {
            let name = state
                .players
                .get(winner)
                .map(|player| player.name.as_str())
                .unwrap_or("?");
            format!("Finished (winner: {name})")
        }
        GameStatus::Exhausted => String::from("Finished (no cards left to draw)"),
    };
    let _ = writeln!(out, "Game status: {status}");

    let arrow = match state.direction {
        Direction::Clockwise => " -> ",
        Direction::CounterClockwise => " <- ",
    };
    let seats = state
        .players
        .iter()
        .map(|player| {
            let marker = if player.is_current { "*" } else { "" };
            format!("{marker}{}({})", player.name, player.hand_size)
        })
        .collect::<Vec<_>>()
        .join(arrow);
    let _ = writeln!(out, "Table: {seats}");
    let _ = writeln!(
        out,
        "Top: {}  |  Color: {}  |  Deck: {}  |  Discard: {}",
        paint(&state.top_card, options),
        paint_color(state.active_color, options),
        state.draw_pile_count,
        state.discard_pile_count
    );

    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else {
        let mut entries = Vec::with_capacity(state.hand.len());
        for (idx, card) in state.hand.iter().enumerate() {
            let legal = options.show_legal_marks
                && state.self_player == state.current_player
                && card.can_play_on(&state.top_card, state.active_color);
            let mark = if legal { "+" } else { "" };
            entries.push(format!("{idx}:{}{mark}", paint(card, options)));
        }
        let _ = writeln!(out, "Hand: {}", entries.join("  "));
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    match action {
        Action::Play { hand_index, color } => {
            let card = state
                .hand
                .get(*hand_index)
                .map(|card| card.to_string())
                .unwrap_or_else(|| String::from("--"));
            match color {
                Some(color) => format!("Play hand[{hand_index}] {card} as {color}"),
                None => format!("Play hand[{hand_index}] {card}"),
            }
        }
        Action::Draw => String::from("Draw a card"),
    }
}

pub fn describe_event(state: &GameStateView, event: &TurnEvent) -> String {
    let name = |id: usize| {
        state
            .players
            .get(id)
            .map(|player| player.name.clone())
            .unwrap_or_else(|| format!("Player {id}"))
    };
    match event {
        TurnEvent::Drew { player, card } if *player == state.self_player => {
            format!("{} drew {card}", name(*player))
        }
        TurnEvent::Drew { player, .. } => format!("{} drew a card", name(*player)),
        TurnEvent::Played { player, card } => format!("{} played {card}", name(*player)),
        TurnEvent::Reshuffled { deck_size } => {
            format!("Discard pile reshuffled into the deck ({deck_size} cards)")
        }
        TurnEvent::Skipped { player } => format!("{} is skipped", name(*player)),
        TurnEvent::Reversed { .. } => String::from("Direction reversed"),
        TurnEvent::ForcedDraw { player, count } => {
            format!("{} draws {count} cards", name(*player))
        }
        TurnEvent::ColorChosen { player, color } => {
            format!("{} chose color {color}", name(*player))
        }
        TurnEvent::Won { player } => format!("{} wins!", name(*player)),
    }
}

fn ansi_code(color: Color) -> &'static str {
    match color {
        Color::Red => "\u{1b}[31m",
        Color::Green => "\u{1b}[32m",
        Color::Yellow => "\u{1b}[33m",
        Color::Blue => "\u{1b}[34m",
    }
}

fn paint(card: &Card, options: VisualOptions) -> String {
    if !options.ansi_colors {
        return format!("[{card}]");
    }
    let code = card.color().map(ansi_code).unwrap_or(WHITE);
    format!("{code}[{card}]{RESET}")
}

fn paint_color(color: Color, options: VisualOptions) -> String {
    if options.ansi_colors {
        format!("{}{color}{RESET}", ansi_code(color))
    } else {
        color.to_string()
    }
}

use std::io::{self, BufRead, Write};

use crate::action::Action;
use crate::bot::Bot;
use crate::card::Color;
use crate::state::GameStateView;
use crate::visualize::{VisualOptions, describe_action, render_state_with_options};

/// Interactive seat that queries a human via standard input.
pub struct HumanBot {
    name: String,
    options: VisualOptions,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: VisualOptions::default(),
        }
    }

    pub fn with_options(mut self, options: VisualOptions) -> Self {
        self.options = options;
        self
    }

    fn read_line(prompt: &str) -> Option<String> {
        print!("{prompt}");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        read_answer(&mut io::stdin().lock())
    }

    fn choose_color(&self) -> Option<Color> {
        loop {
            for (index, color) in Color::ALL.iter().enumerate() {
                println!("  {}. {color}", index + 1);
            }
            let input = Self::read_line("Choose a color (1-4): ")?;
            if input == "q" || input == "quit" {
                return None;
            }
            if let Some(color) = input
                .parse::<usize>()
                .ok()
                .and_then(|choice| choice.checked_sub(1))
                .and_then(|index| Color::ALL.get(index))
            {
                return Some(*color);
            }
            if let Some(color) = Color::ALL.iter().find(|color| color.name() == input) {
                return Some(*color);
            }
            println!("Invalid choice. Please enter 1-4.");
        }
    }
}

/// Next trimmed, lowercased line from `reader`. End of input and read
/// failures both yield `None`, which abandons the game.
fn read_answer(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_ascii_lowercase()),
        Err(err) => {
            eprintln!("failed to read input: {err}");
            None
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("You")
    }
}

impl Bot for HumanBot {
    fn select_action(
        &mut self,
        state: &GameStateView,
        legal_actions: &[Action],
    ) -> Option<Action> {
        println!("\n=== {}'s turn ===", self.name);
        println!("{}", render_state_with_options(state, self.options));
        let playable: Vec<usize> = legal_actions
            .iter()
            .filter_map(Action::hand_index)
            .fold(Vec::new(), |mut acc, index| {
                if !acc.contains(&index) {
                    acc.push(index);
                }
                acc
            });
        if playable.is_empty() {
            println!("No playable cards. Drawing a card...");
            return legal_actions
                .iter()
                .copied()
                .find(|action| matches!(action, Action::Draw));
        }
        println!("Playable cards: {playable:?}");
        loop {
            let input = Self::read_line("Card index to play, 'd' to draw, 'help' or 'q' to quit: ")?;
            match input.as_str() {
                "q" | "quit" => {
                    println!("Exiting game at user's request.");
                    return None;
                }
                "help" => {
                    println!("Enter the number shown before a card marked '+' to play it.");
                    println!("Drawing a card ends your turn.");
                    continue;
                }
                "d" | "draw" => return Some(Action::Draw),
                _ => {}
            }
            let Ok(hand_index) = input.parse::<usize>() else {
                println!("Invalid input: '{input}'. Please enter a number or 'd' to draw.");
                continue;
            };
            if !playable.contains(&hand_index) {
                println!("Invalid choice. Please select a playable card or draw.");
                continue;
            }
            let is_wild = state
                .hand
                .get(hand_index)
                .map(|card| card.is_wild())
                .unwrap_or(false);
            let color = if is_wild {
                Some(self.choose_color()?)
            } else {
                None
            };
            let action = Action::Play { hand_index, color };
            if legal_actions.contains(&action) {
                println!("You selected: {}", describe_action(state, &action));
                return Some(action);
            }
            println!("Invalid choice. Please select a playable card or draw.");
        }
    }
}

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 7;
pub const DECK_SIZE: usize = 108;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const MAX_NUMBER: u8 = 9;
pub const ACTION_COPIES: usize = 2;
pub const WILD_COPIES: usize = 4;

/// One of the four standard card colors. Wild cards carry no color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card kind without its payload, used for type matching and AI tiers.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// Representation of an UNO card.
///
/// Attribute-equal cards are interchangeable; the deck holds duplicates and
/// each copy is tracked by its position in a pile or hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub enum Card {
    /// Numbered card between 0 and 9.
    Number(Color, u8),
    Skip(Color),
    Reverse(Color),
    DrawTwo(Color),
    /// Wild card. The player declares the next active color.
    Wild,
    /// Wild card that also forces the next player to draw four.
    WildDrawFour,
}

/// Wire shape of [`Card`], checked before it becomes a card.
#[derive(Deserialize)]
#[serde(rename = "Card")]
enum CardRepr {
    Number(Color, u8),
    Skip(Color),
    Reverse(Color),
    DrawTwo(Color),
    Wild,
    WildDrawFour,
}

impl TryFrom<CardRepr> for Card {
    type Error = String;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            CardRepr::Number(_, value) if value > MAX_NUMBER => {
                return Err(format!("card number {value} is above {MAX_NUMBER}"));
            }
            CardRepr::Number(color, value) => Card::Number(color, value),
            CardRepr::Skip(color) => Card::Skip(color),
            CardRepr::Reverse(color) => Card::Reverse(color),
            CardRepr::DrawTwo(color) => Card::DrawTwo(color),
            CardRepr::Wild => Card::Wild,
            CardRepr::WildDrawFour => Card::WildDrawFour,
        })
    }
}

impl Card {
    #[inline]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Number(..) => CardKind::Number,
            Card::Skip(_) => CardKind::Skip,
            Card::Reverse(_) => CardKind::Reverse,
            Card::DrawTwo(_) => CardKind::DrawTwo,
            Card::Wild => CardKind::Wild,
            Card::WildDrawFour => CardKind::WildDrawFour,
        }
    }

    /// Returns the printed color, or `None` for wild cards.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Number(color, _)
            | Card::Skip(color)
            | Card::Reverse(color)
            | Card::DrawTwo(color) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    /// Returns the face value for number cards.
    #[inline]
    pub fn number(&self) -> Option<u8> {
        match self {
            Card::Number(_, value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    /// Cards the next player must draw when this card resolves.
    #[inline]
    pub fn forced_draw(&self) -> usize {
        match self {
            Card::DrawTwo(_) => 2,
            Card::WildDrawFour => 4,
            _ => 0,
        }
    }

    /// Checks whether the card may be played on `top` while `active` is the color in effect.
    pub fn can_play_on(&self, top: &Card, active: Color) -> bool {
        if self.color() == Some(active) {
            return true;
        }
        if self.is_wild() {
            return true;
        }
        if self.kind() == top.kind() && self.color().is_some() && self.color() == top.color() {
            return true;
        }
        matches!(
            (self, top),
            (Card::Number(_, mine), Card::Number(_, theirs)) if mine == theirs
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(color, value) => write!(f, "{color} {value}"),
            Card::Skip(color) => write!(f, "{color} skip"),
            Card::Reverse(color) => write!(f, "{color} reverse"),
            Card::DrawTwo(color) => write!(f, "{color} +2"),
            Card::Wild => f.write_str("wild"),
            Card::WildDrawFour => f.write_str("wild +4"),
        }
    }
}

/// Builds the 108-card UNO deck in deterministic order (unshuffled).
///
/// Number cards come first per color, then the colored action cards, then the wilds.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        deck.push(Card::Number(color, 0));
        for value in 1..=MAX_NUMBER {
            deck.push(Card::Number(color, value));
            deck.push(Card::Number(color, value));
        }
    }
    for color in Color::ALL {
        for _ in 0..ACTION_COPIES {
            deck.push(Card::Skip(color));
            deck.push(Card::Reverse(color));
            deck.push(Card::DrawTwo(color));
        }
    }
    for _ in 0..WILD_COPIES {
        deck.push(Card::Wild);
        deck.push(Card::WildDrawFour);
    }
    deck
}

/// Uniformly permutes `deck` with the supplied random source.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_deck_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let numbers = deck.iter().filter(|c| c.kind() == CardKind::Number).count();
        let wilds = deck.iter().filter(|c| c.is_wild()).count();
        assert_eq!(numbers, 76);
        assert_eq!(wilds, 8);
        assert_eq!(deck.len() - numbers - wilds, 24);
        for color in Color::ALL {
            let zeros = deck
                .iter()
                .filter(|c| **c == Card::Number(color, 0))
                .count();
            assert_eq!(zeros, 1);
            let sevens = deck
                .iter()
                .filter(|c| **c == Card::Number(color, 7))
                .count();
            assert_eq!(sevens, 2);
        }
        assert_eq!(deck.first(), Some(&Card::Number(Color::Red, 0)));
        assert_eq!(deck.last(), Some(&Card::WildDrawFour));
    }

    #[test]
    fn wild_cards_have_no_color_or_number() {
        assert_eq!(Card::Wild.color(), None);
        assert_eq!(Card::WildDrawFour.number(), None);
        assert_eq!(Card::Skip(Color::Green).number(), None);
        assert_eq!(Card::Number(Color::Blue, 4).number(), Some(4));
    }

    #[test]
    fn deserializing_rejects_numbers_above_nine() {
        let card: Card = serde_json::from_str(r#"{"Number":["Red",9]}"#).unwrap();
        assert_eq!(card, Card::Number(Color::Red, 9));
        let json = serde_json::to_string(&Card::DrawTwo(Color::Green)).unwrap();
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), Card::DrawTwo(Color::Green));
        let err = serde_json::from_str::<Card>(r#"{"Number":["Red",12]}"#).unwrap_err();
        assert!(err.to_string().contains("above 9"));
    }

    #[test]
    fn match_rules() {
        let top = Card::Number(Color::Blue, 5);
        assert!(Card::Number(Color::Blue, 1).can_play_on(&top, Color::Blue));
        assert!(Card::Number(Color::Red, 5).can_play_on(&top, Color::Blue));
        assert!(!Card::Number(Color::Red, 4).can_play_on(&top, Color::Blue));
        assert!(Card::Wild.can_play_on(&top, Color::Blue));
        assert!(Card::WildDrawFour.can_play_on(&top, Color::Blue));
        // A wild changed the color away from the top card's own color.
        assert!(Card::Skip(Color::Blue).can_play_on(&top, Color::Blue));
        assert!(!Card::Skip(Color::Blue).can_play_on(&top, Color::Green));
        assert!(Card::Skip(Color::Blue).can_play_on(&Card::Skip(Color::Blue), Color::Green));
        // Action cards never match across colors by kind alone.
        assert!(!Card::Skip(Color::Red).can_play_on(&Card::Skip(Color::Blue), Color::Blue));
    }
}

use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, HAND_SIZE};
use crate::error::{GameError, InvalidSelection};

/// Cards held by a single player, kept in the order they were received.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(HAND_SIZE),
        }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`, shifting later cards down.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyHandOperation);
        }
        if index >= self.cards.len() {
            return Err(InvalidSelection::HandIndex(index).into());
        }
        Ok(self.cards.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Indices of every card that may be played on `top` with `active` in effect, in hand order.
    pub fn legal_play_indices(&self, top: &Card, active: Color) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.can_play_on(top, active))
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_at_reports_bounds() {
        let mut hand = Hand::new();
        assert!(matches!(hand.remove_at(0), Err(GameError::EmptyHandOperation)));
        hand.add(Card::Number(Color::Red, 1));
        hand.add(Card::Wild);
        assert!(matches!(
            hand.remove_at(2),
            Err(GameError::InvalidSelection(InvalidSelection::HandIndex(2)))
        ));
        assert_eq!(hand.remove_at(0).ok(), Some(Card::Number(Color::Red, 1)));
        assert_eq!(hand.cards(), &[Card::Wild]);
    }

    #[test]
    fn legal_indices_preserve_hand_order() {
        let hand = Hand::from_cards(vec![
            Card::Number(Color::Green, 3),
            Card::WildDrawFour,
            Card::Number(Color::Yellow, 8),
            Card::Number(Color::Red, 8),
            Card::DrawTwo(Color::Blue),
            Card::Reverse(Color::Red),
        ]);
        let top = Card::Number(Color::Red, 8);
        let first = hand.legal_play_indices(&top, Color::Red);
        assert_eq!(first, vec![1, 2, 3, 5]);
        // Pure: repeated queries agree.
        assert_eq!(hand.legal_play_indices(&top, Color::Red), first);
    }

    #[test]
    fn empty_hand_has_no_legal_plays() {
        let hand = Hand::new();
        assert!(hand.legal_play_indices(&Card::Wild, Color::Blue).is_empty());
    }
}

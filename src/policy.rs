//! Move selection for automated seats.
//!
//! Legal plays are grouped into tiers: number cards first, then colored action
//! cards, then wilds. A random play from the first non-empty tier is chosen so
//! that wild cards are held back for when nothing else fits.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, CardKind, Color};
use crate::hand::Hand;

/// Preference tier of a card; lower tiers are played first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Tier {
    Number,
    Action,
    Wild,
}

pub fn priority_tier(card: &Card) -> Tier {
    match card.kind() {
        CardKind::Number => Tier::Number,
        CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => Tier::Action,
        CardKind::Wild | CardKind::WildDrawFour => Tier::Wild,
    }
}

/// Picks a hand index to play, or `None` when nothing is legal and the seat must draw.
pub fn choose_move<R: Rng + ?Sized>(
    hand: &Hand,
    top: &Card,
    active: Color,
    rng: &mut R,
) -> Option<usize> {
    let legal = hand.legal_play_indices(top, active);
    let best = legal
        .iter()
        .filter_map(|&index| hand.get(index).map(priority_tier))
        .min()?;
    let candidates: Vec<usize> = legal
        .into_iter()
        .filter(|&index| hand.get(index).map(priority_tier) == Some(best))
        .collect();
    candidates.choose(rng).copied()
}

/// Uniform choice among the four standard colors after a wild play.
pub fn choose_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::ALL[rng.gen_range(0..Color::ALL.len())]
}

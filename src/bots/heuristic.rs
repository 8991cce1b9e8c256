use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::Action;
use crate::bot::Bot;
use crate::hand::Hand;
use crate::policy::{choose_color, choose_move};
use crate::state::GameStateView;

/// Automated seat driven by the tiered Move Policy.
/// Policy:
/// 1. Play a random legal number card if there is one.
/// 2. Else a random legal skip, reverse or draw two.
/// 3. Else a random legal wild, declaring a random color.
/// 4. Else draw.
pub struct HeuristicBot<R: Rng> {
    rng: R,
}

impl<R: Rng> HeuristicBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl HeuristicBot<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Bot for HeuristicBot<R> {
    fn select_action(
        &mut self,
        state: &GameStateView,
        legal_actions: &[Action],
    ) -> Option<Action> {
        let hand = Hand::from_cards(state.hand.clone());
        let action = match choose_move(&hand, &state.top_card, state.active_color, &mut self.rng)
        {
            Some(hand_index) => {
                let color = hand
                    .get(hand_index)
                    .filter(|card| card.is_wild())
                    .map(|_| choose_color(&mut self.rng));
                Action::Play { hand_index, color }
            }
            None => Action::Draw,
        };
        if legal_actions.contains(&action) {
            Some(action)
        } else {
            legal_actions
                .iter()
                .copied()
                .find(|candidate| matches!(candidate, Action::Draw))
        }
    }
}

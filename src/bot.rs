use crate::action::Action;
use crate::state::GameStateView;

/// Decision provider for one seat.
pub trait Bot {
    /// Picks one of `legal_actions`. Returning `None` abandons the game at this
    /// decision boundary; the engine state is left untouched.
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action])
    -> Option<Action>;
}

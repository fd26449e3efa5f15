use crate::action::Action;
use crate::state::GameStateView;

/// A seat at the table: anything that can pick one of the legal actions.
pub trait Bot {
    fn select_action(&mut self, state: &GameStateView, legal_actions: &[Action]) -> Action;
}

//! Uno rules engine: deck lifecycle, move validation, card effects and turn order.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod effect;
pub mod error;
pub mod game;
pub mod rules;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, GameEvent, PlayOutcome, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::HumanBot;
pub use crate::card::{Card, CardKind, Color, Face, Special, WildKind, full_deck};
pub use crate::deck::{Deck, DiscardPile};
pub use crate::error::GameError;
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::rules::is_valid_move;
pub use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase,
};
pub use crate::visualize::{VisualOptions, describe_action, render_state};

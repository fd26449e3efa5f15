use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Zero-based index of a player within the game.
pub type PlayerId = usize;

/// Action available to a seat.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at the given hand index onto the discard pile.
    Play { hand_index: usize },
    /// Take one card from the draw pile. Does not end the turn.
    Draw,
    /// Pass play to the next seat in the current direction.
    SkipTurn,
    /// Name the color of the wild card just played.
    ChooseColor(Color),
}

/// Result of a successful play.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The play completed and the turn moved on.
    Continue,
    /// A wild card was played; the same player must now choose its color.
    ColorRequired,
    /// The player emptied their hand.
    Won(PlayerId),
}

/// Notifications raised while applying actions. Drained with `Game::take_events`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CardPlayed { player: PlayerId, card: Card },
    CardDrawn { player: PlayerId, card: Card },
    /// A draw was requested but the deck had run out.
    DeckExhausted { player: PlayerId, missed: usize },
    PlayerSkipped { player: PlayerId },
    DirectionReversed,
    ColorChosen { player: PlayerId, color: Color },
    TurnPassed { next: PlayerId },
    PlayerWon { player: PlayerId },
}

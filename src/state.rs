use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidPlayerCount(num_players));
        }
        Ok(Self {
            num_players,
            hand_size: HAND_SIZE,
        })
    }
}

/// Order in which seats take turns.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// +1 or -1.
    pub fn step(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Seat reached from `from` after one step in this direction.
    pub fn next_seat(self, from: PlayerId, num_players: usize) -> PlayerId {
        (from as isize + self.step()).rem_euclid(num_players as isize) as PlayerId
    }
}

/// Status of the entire game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Finished { winner: PlayerId },
}

/// Current phase of the active turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingMove,
    /// A wild card is on the discard pile and `player` must name its color.
    AwaitingColor { player: PlayerId },
    GameOver,
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

/// Game state snapshot from one seat's perspective.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub phase: TurnPhase,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub discard_top: Option<Card>,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}

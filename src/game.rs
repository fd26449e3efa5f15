use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::action::{Action, GameEvent, PlayOutcome, PlayerId};
use crate::card::{Card, Color, Face};
use crate::deck::{Deck, DiscardPile};
use crate::effect::EffectContext;
use crate::error::GameError;
use crate::rules::is_valid_move;
use crate::state::{
    Direction, GameSettings, GameStateView, GameStatus, PlayerPublicState, TurnPhase,
};

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    /// Seed for shuffling. Drawn from OS entropy when absent.
    pub seed: Option<u64>,
    pub hand_size: Option<usize>,
}

impl GameConfig {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self {
            num_players,
            seed: None,
            hand_size: None,
        })
    }
}

/// Builder that enables deterministic deck injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use `deck` as the draw pile instead of a shuffled catalog. Cards are
    /// dealt from the end of the vector.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Override the number of cards dealt to each player (5 by default).
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = Some(hand_size);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core Uno engine. Owns the deck, discard pile, hands and turn pointer.
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    phase: TurnPhase,
    current_player: PlayerId,
    direction: Direction,
    hands: Vec<Vec<Card>>,
    deck: Deck,
    discard: DiscardPile,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder { config, deck: None }.build()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Ongoing => None,
        }
    }

    /// Full contents of one player's hand. Deciding what to reveal is up to the caller.
    pub fn hand(&self, player: PlayerId) -> Result<&[Card], GameError> {
        self.hands
            .get(player)
            .map(Vec::as_slice)
            .ok_or(GameError::InvalidPlayer(player))
    }

    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    pub fn discard_top(&self) -> Option<Card> {
        self.discard.top().copied()
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Cards across the deck, every hand and the discard pile.
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard.len() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    /// Notifications raised since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let hand = self.hand(perspective)?.to_vec();
        let winner = self.winner();
        let players = self
            .hands
            .iter()
            .enumerate()
            .map(|(idx, hand)| PlayerPublicState {
                id: idx,
                hand_size: hand.len(),
                is_current: idx == self.current_player,
                has_won: winner == Some(idx),
            })
            .collect();

        Ok(GameStateView {
            settings: self.settings,
            phase: self.phase,
            status: self.status,
            self_player: perspective,
            current_player: self.current_player,
            direction: self.direction,
            draw_pile_count: self.deck.len(),
            discard_pile_count: self.discard.len(),
            discard_top: self.discard_top(),
            players,
            hand,
        })
    }

    /// Actions `player` may take right now. Empty once the game is over.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        self.check_player(player)?;
        if let TurnPhase::AwaitingColor { player: chooser } = self.phase {
            if player != chooser {
                return Err(GameError::NotYourTurn);
            }
            return Ok(Color::PLAYABLE
                .into_iter()
                .map(Action::ChooseColor)
                .collect());
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }

        let top = self.top_card()?;
        let mut actions: Vec<Action> = self.hands[player]
            .iter()
            .enumerate()
            .filter(|(_, card)| is_valid_move(card, &top))
            .map(|(hand_index, _)| Action::Play { hand_index })
            .collect();
        if !self.deck.is_empty() {
            actions.push(Action::Draw);
        }
        actions.push(Action::SkipTurn);
        Ok(actions)
    }

    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: Action,
    ) -> Result<PlayOutcome, GameError> {
        match action {
            Action::Play { hand_index } => self.play_card(player, hand_index),
            Action::Draw => self.draw_card(player).map(|_| PlayOutcome::Continue),
            Action::SkipTurn => {
                self.check_player(player)?;
                self.skip_turn().map(|_| PlayOutcome::Continue)
            }
            Action::ChooseColor(color) => self.choose_color(player, color),
        }
    }

    /// Plays the card at `hand_index` from `player`'s hand.
    ///
    /// Emptying the hand wins on the spot: no effect is resolved, no color is
    /// requested and the turn does not advance. A wild card leaves the game in
    /// `TurnPhase::AwaitingColor` until [`Game::choose_color`] is called.
    pub fn play_card(
        &mut self,
        player: PlayerId,
        hand_index: usize,
    ) -> Result<PlayOutcome, GameError> {
        self.ensure_accepting_moves()?;
        self.check_player(player)?;
        if player != self.current_player {
            return Err(GameError::NotYourTurn);
        }
        let card = *self.hands[player]
            .get(hand_index)
            .ok_or(GameError::HandIndex(hand_index))?;
        let top = self.top_card()?;
        if !is_valid_move(&card, &top) {
            return Err(GameError::IllegalCard { card, top });
        }

        self.hands[player].remove(hand_index);
        self.discard.push(card);
        debug!(player, %card, "card played");
        self.events.push(GameEvent::CardPlayed { player, card });

        if self.hands[player].is_empty() {
            self.finish(player);
            return Ok(PlayOutcome::Won(player));
        }

        match card.face {
            Face::Number(_) => {}
            Face::Special(special) => self.effects().resolve_special(special),
            Face::Wild(_) => {
                self.phase = TurnPhase::AwaitingColor { player };
                debug!(player, "awaiting wild color");
                return Ok(PlayOutcome::ColorRequired);
            }
        }

        self.advance_turn();
        Ok(PlayOutcome::Continue)
    }

    /// Completes a wild play by naming its color. An invalid color is rejected
    /// and the choice stays pending.
    pub fn choose_color(
        &mut self,
        player: PlayerId,
        color: Color,
    ) -> Result<PlayOutcome, GameError> {
        self.check_chooser(player)?;
        let kind = match self.discard_top().map(|card| card.face) {
            Some(Face::Wild(kind)) => kind,
            _ => {
                return Err(GameError::InvalidConfiguration(
                    "wild card missing from the discard pile",
                ));
            }
        };
        self.effects().resolve_wild(player, kind, color)?;
        self.phase = TurnPhase::AwaitingMove;
        self.advance_turn();
        Ok(PlayOutcome::Continue)
    }

    /// Like [`Game::choose_color`] but takes the color by name: "Red", "Blue",
    /// "Green" or "Yellow", matched case-sensitively.
    pub fn choose_color_named(
        &mut self,
        player: PlayerId,
        name: &str,
    ) -> Result<PlayOutcome, GameError> {
        self.check_chooser(player)?;
        let color = name
            .parse::<Color>()
            .map_err(GameError::InvalidColorChoice)?;
        self.choose_color(player, color)
    }

    /// Moves the top of the deck into `player`'s hand. The turn does not end.
    pub fn draw_card(&mut self, player: PlayerId) -> Result<Card, GameError> {
        self.ensure_accepting_moves()?;
        self.check_player(player)?;
        let card = self.deck.draw_one().inspect_err(|_| {
            warn!(player, "draw requested from an empty deck");
        })?;
        self.hands[player].push(card);
        debug!(player, %card, "card drawn");
        self.events.push(GameEvent::CardDrawn { player, card });
        Ok(card)
    }

    /// Passes play to the next seat regardless of whose turn it is.
    pub fn skip_turn(&mut self) -> Result<(), GameError> {
        self.ensure_accepting_moves()?;
        self.advance_turn();
        Ok(())
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut settings = GameSettings::new(config.num_players)?;
        if let Some(hand_size) = config.hand_size {
            if hand_size == 0 {
                return Err(GameError::InvalidConfiguration("hand size must be positive"));
            }
            settings.hand_size = hand_size;
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut deck = match deck {
            Some(cards) => Deck::from_cards(cards),
            None => Deck::shuffled(&mut rng),
        };

        if deck.len() <= settings.hand_size * settings.num_players {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal",
            ));
        }

        let mut hands = Vec::with_capacity(settings.num_players);
        for _ in 0..settings.num_players {
            let mut hand = Vec::with_capacity(settings.hand_size);
            for _ in 0..settings.hand_size {
                hand.push(deck.draw_one()?);
            }
            hands.push(hand);
        }
        let starting = deck.draw_starting_card(&mut rng)?;
        debug!(players = settings.num_players, card = %starting, "game started");

        Ok(Game {
            settings,
            status: GameStatus::Ongoing,
            phase: TurnPhase::AwaitingMove,
            current_player: 0,
            direction: Direction::Clockwise,
            hands,
            deck,
            discard: DiscardPile::new(starting),
            events: Vec::new(),
        })
    }

    fn effects(&mut self) -> EffectContext<'_> {
        EffectContext {
            num_players: self.settings.num_players,
            current_player: &mut self.current_player,
            direction: &mut self.direction,
            deck: &mut self.deck,
            discard: &mut self.discard,
            hands: &mut self.hands,
            events: &mut self.events,
        }
    }

    fn advance_turn(&mut self) {
        self.current_player = self
            .direction
            .next_seat(self.current_player, self.settings.num_players);
        debug!(next = self.current_player, "turn passed");
        self.events.push(GameEvent::TurnPassed {
            next: self.current_player,
        });
    }

    fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Finished { winner };
        self.phase = TurnPhase::GameOver;
        info!(player = winner, "player won");
        self.events.push(GameEvent::PlayerWon { player: winner });
    }

    fn top_card(&self) -> Result<Card, GameError> {
        self.discard_top()
            .ok_or(GameError::InvalidConfiguration("discard pile is empty"))
    }

    fn check_player(&self, player: PlayerId) -> Result<(), GameError> {
        if player >= self.hands.len() {
            return Err(GameError::InvalidPlayer(player));
        }
        Ok(())
    }

    fn ensure_accepting_moves(&self) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingMove => Ok(()),
            TurnPhase::AwaitingColor { .. } => Err(GameError::ColorChoicePending),
            TurnPhase::GameOver => Err(GameError::GameOver),
        }
    }

    fn check_chooser(&self, player: PlayerId) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::AwaitingColor { player: chooser } => {
                self.check_player(player)?;
                if player != chooser {
                    return Err(GameError::NotYourTurn);
                }
                Ok(())
            }
            TurnPhase::AwaitingMove => Err(GameError::NoColorChoicePending),
            TurnPhase::GameOver => Err(GameError::GameOver),
        }
    }
}

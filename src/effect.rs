//! Consequences of special and wild cards.
//!
//! The resolver works on a borrowed slice of the table so the engine keeps sole
//! ownership of the game state. Turn advancement is not done here: the engine
//! always takes its normal step after the resolver returns.

use tracing::{debug, warn};

use crate::action::{GameEvent, PlayerId};
use crate::card::{Card, Color, Special, WildKind};
use crate::deck::{Deck, DiscardPile};
use crate::error::GameError;
use crate::state::Direction;

pub const DRAW_TWO_COUNT: usize = 2;
pub const DRAW_FOUR_COUNT: usize = 4;

/// Mutable view of the table handed to the resolver for one card.
pub(crate) struct EffectContext<'a> {
    pub num_players: usize,
    pub current_player: &'a mut PlayerId,
    pub direction: &'a mut Direction,
    pub deck: &'a mut Deck,
    pub discard: &'a mut DiscardPile,
    pub hands: &'a mut [Vec<Card>],
    pub events: &'a mut Vec<GameEvent>,
}

impl EffectContext<'_> {
    pub fn resolve_special(&mut self, special: Special) {
        match special {
            Special::Skip => {
                // Always one seat forward, whatever the direction.
                let skipped = (*self.current_player + 1) % self.num_players;
                *self.current_player = skipped;
                debug!(player = skipped, "skip");
                self.events.push(GameEvent::PlayerSkipped { player: skipped });
            }
            Special::Reverse => {
                *self.direction = self.direction.reversed();
                debug!(direction = ?*self.direction, "reverse");
                self.events.push(GameEvent::DirectionReversed);
            }
            Special::DrawTwo => {
                self.force_draw(DRAW_TWO_COUNT);
            }
        }
    }

    /// Writes `color` onto the wild card on top of the discard pile, then
    /// applies the draw penalty for a Draw Four.
    pub fn resolve_wild(
        &mut self,
        chooser: PlayerId,
        kind: WildKind,
        color: Color,
    ) -> Result<Card, GameError> {
        if !color.is_playable() {
            return Err(GameError::InvalidColorChoice(color.to_string()));
        }
        let card = self
            .discard
            .recolor_top(color)
            .ok_or(GameError::InvalidConfiguration("discard pile is empty"))?;
        debug!(player = chooser, %color, "wild color chosen");
        self.events.push(GameEvent::ColorChosen {
            player: chooser,
            color,
        });
        if kind == WildKind::DrawFour {
            self.force_draw(DRAW_FOUR_COUNT);
        }
        Ok(card)
    }

    /// Seat that suffers a forced draw.
    fn victim(&self) -> PlayerId {
        self.direction
            .next_seat(*self.current_player, self.num_players)
    }

    /// Deals up to `count` cards to the victim one at a time. Stops quietly when
    /// the deck runs out; cards already dealt stay dealt. Returns how many
    /// cards were actually drawn.
    fn force_draw(&mut self, count: usize) -> usize {
        let victim = self.victim();
        for drawn in 0..count {
            match self.deck.draw_one() {
                Ok(card) => {
                    self.hands[victim].push(card);
                    self.events.push(GameEvent::CardDrawn {
                        player: victim,
                        card,
                    });
                }
                Err(_) => {
                    let missed = count - drawn;
                    warn!(player = victim, missed, "deck exhausted during forced draw");
                    self.events.push(GameEvent::DeckExhausted {
                        player: victim,
                        missed,
                    });
                    return drawn;
                }
            }
        }
        debug!(player = victim, count, "forced draw");
        count
    }
}

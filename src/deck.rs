use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::card::{Card, Color, full_deck};
use crate::error::GameError;

/// Draw pile. The top of the stack is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wraps an explicit card order. Cards are drawn from the end.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Full catalog in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::from_cards(full_deck());
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the top card.
    pub fn draw_one(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Pops until a number card turns up, putting anything else back and
    /// reshuffling before each retry.
    pub fn draw_starting_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, GameError> {
        if !self.cards.iter().any(Card::is_number) {
            return Err(GameError::InvalidConfiguration(
                "deck contains no number card to start the discard pile",
            ));
        }
        let mut card = self.draw_one()?;
        while !card.is_number() {
            self.cards.push(card);
            self.shuffle(rng);
            card = self.draw_one()?;
        }
        Ok(card)
    }
}

/// Played cards. Only the top matters for validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new(starting: Card) -> Self {
        Self {
            cards: vec![starting],
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Writes the chosen color onto the top card. Returns the recolored card.
    pub fn recolor_top(&mut self, color: Color) -> Option<Card> {
        let top = self.cards.last_mut()?;
        top.color = color;
        Some(*top)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#![allow(dead_code)]

use unoengine::{Card, Color, GameEvent};

pub const FILLER: Card = Card::number(Color::Yellow, 9);
pub const STARTING: Card = Card::number(Color::Red, 5);

/// Pads `cards` with filler up to a full five-card hand.
pub fn hand_of(cards: &[Card]) -> Vec<Card> {
    let mut hand = cards.to_vec();
    hand.resize(5, FILLER);
    hand
}

/// Lays out a deck so that dealing hands `hands` in order, then flipping
/// `starting`, leaves `draw_order` as the draw pile (first element drawn first).
pub fn stacked_deck(hands: &[Vec<Card>], starting: Card, draw_order: &[Card]) -> Vec<Card> {
    let mut deck: Vec<Card> = draw_order.iter().rev().copied().collect();
    deck.push(starting);
    for hand in hands.iter().rev() {
        deck.extend(hand.iter().rev().copied());
    }
    deck
}

pub fn skipped(events: &[GameEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::PlayerSkipped { player } => Some(*player),
            _ => None,
        })
        .collect()
}

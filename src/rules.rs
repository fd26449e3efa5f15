use crate::card::{Card, CardKind};

/// Returns true when `card` may be played on top of `top`: same color, same
/// face value, or a wild card.
#[inline]
pub fn is_valid_move(card: &Card, top: &Card) -> bool {
    card.color == top.color || card.face == top.face || card.kind() == CardKind::Wild
}

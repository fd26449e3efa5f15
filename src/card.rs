use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MAX_NUMBER: u8 = 9;
pub const SPECIAL_COPIES_PER_COLOR: usize = 2;
pub const WILD_COPIES: usize = 4;
pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 5;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Card color. `Wild` is the placeholder worn by wild cards until a color is chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four colors a card can take once in play.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[inline]
    pub fn is_playable(&self) -> bool {
        !matches!(self, Color::Wild)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses one of the four playable color names. Matching is case-sensitive.
impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::PLAYABLE
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Special {
    Skip,
    Reverse,
    DrawTwo,
}

impl Special {
    pub const ALL: [Special; 3] = [Special::Skip, Special::Reverse, Special::DrawTwo];
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WildKind {
    ChangeColor,
    DrawFour,
}

impl WildKind {
    pub const ALL: [WildKind; 2] = [WildKind::ChangeColor, WildKind::DrawFour];
}

/// Broad category of a card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Special,
    Wild,
}

/// What is printed on the card besides its color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Number card between 0 and 9.
    Number(u8),
    Special(Special),
    Wild(WildKind),
}

/// Representation of a single Uno card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub face: Face,
}

impl Card {
    pub const fn number(color: Color, value: u8) -> Self {
        Self {
            color,
            face: Face::Number(value),
        }
    }

    pub const fn special(color: Color, special: Special) -> Self {
        Self {
            color,
            face: Face::Special(special),
        }
    }

    /// A wild card as it sits in the deck or a hand, still wearing the placeholder color.
    pub const fn wild(kind: WildKind) -> Self {
        Self {
            color: Color::Wild,
            face: Face::Wild(kind),
        }
    }

    #[inline]
    pub fn kind(&self) -> CardKind {
        match self.face {
            Face::Number(_) => CardKind::Number,
            Face::Special(_) => CardKind::Special,
            Face::Wild(_) => CardKind::Wild,
        }
    }

    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self.face, Face::Wild(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self.face, Face::Number(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Number(value) => write!(f, "{} {value}", self.color),
            Face::Special(Special::Skip) => write!(f, "{} Skip", self.color),
            Face::Special(Special::Reverse) => write!(f, "{} Reverse", self.color),
            Face::Special(Special::DrawTwo) => write!(f, "{} Draw Two", self.color),
            Face::Wild(kind) => {
                let label = match kind {
                    WildKind::ChangeColor => "Wild Change Color",
                    WildKind::DrawFour => "Wild Draw Four",
                };
                if self.color.is_playable() {
                    write!(f, "{label} ({})", self.color)
                } else {
                    f.write_str(label)
                }
            }
        }
    }
}

/// Builds the full 108-card deck in deterministic order (unshuffled).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::PLAYABLE {
        deck.push(Card::number(color, 0));
        for value in 1..=MAX_NUMBER {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for special in Special::ALL {
            deck.extend(std::iter::repeat(Card::special(color, special)).take(SPECIAL_COPIES_PER_COLOR));
        }
    }
    for kind in WildKind::ALL {
        deck.extend(std::iter::repeat(Card::wild(kind)).take(WILD_COPIES));
    }
    deck
}

//! Cards for the 32-card Lügner deck.
//!
//! The deck is the German "Skat" range: ranks 7 through Ace in four suits,
//! exactly 32 cards, exactly 4 cards per rank. Card identity is derived
//! from (suit, rank), so a deck can never contain duplicates by
//! construction.

use serde::{Deserialize, Serialize};

/// Card suit.
///
/// Serialized as the suit symbol to keep snapshots human-readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♣")]
    Clubs,
    #[serde(rename = "♠")]
    Spades,
    #[serde(rename = "♥")]
    Hearts,
    #[serde(rename = "♦")]
    Diamonds,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Position within the canonical suit order (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Suit::Clubs => 0,
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
        }
    }

    /// The suit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card rank, 7 through Ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 8] = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Position within the ascending rank order (0-7).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Rank::Seven => 0,
            Rank::Eight => 1,
            Rank::Nine => 2,
            Rank::Ten => 3,
            Rank::Jack => 4,
            Rank::Queen => 5,
            Rank::King => 6,
            Rank::Ace => 7,
        }
    }

    /// The rank label ("7".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unique card identifier, derived from (suit, rank).
///
/// Encoded as `suit_index * 8 + rank_index`, so ids are 0..32 and unique
/// within a single deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Derive the id for a (suit, rank) pair.
    #[must_use]
    pub const fn from_parts(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * 8 + rank.index())
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suit = Suit::ALL[(self.0 / 8) as usize];
        let rank = Rank::ALL[(self.0 % 8) as usize];
        write!(f, "{}-{}", suit, rank)
    }
}

/// A playing card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Create a card with its derived id.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            id: CardId::from_parts(suit, rank),
            suit,
            rank,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ids_unique_across_deck() {
        let mut seen = std::collections::HashSet::new();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(seen.insert(CardId::from_parts(suit, rank)));
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_card_id_is_deterministic() {
        let a = Card::new(Suit::Clubs, Rank::Seven);
        let b = Card::new(Suit::Clubs, Rank::Seven);
        assert_eq!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rank_order_ascending() {
        for window in Rank::ALL.windows(2) {
            assert!(window[0].index() < window[1].index());
        }
    }

    #[test]
    fn test_display() {
        let card = Card::new(Suit::Hearts, Rank::Ten);
        assert_eq!(format!("{}", card), "♥10");
        assert_eq!(format!("{}", card.id), "♥-10");
    }

    #[test]
    fn test_serde_symbols() {
        let card = Card::new(Suit::Clubs, Rank::Ace);
        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("♣"));
        assert!(json.contains("\"A\""));

        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}

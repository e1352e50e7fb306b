//! Player records.
//!
//! A `Player` is one seat in a room: join-time metadata (name, order, host
//! flag) plus the mutable per-game fields the round engine owns (hand,
//! activity, placement, rematch readiness). The hand is mutated only by
//! round-engine operations.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::ids::{PlayerId, RoomId};

/// A player in a room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub room_id: RoomId,
    pub player_name: String,

    /// Seat order, dense 0..N-1 within the room.
    pub player_order: u8,

    /// Exactly one player per room is host.
    pub is_host: bool,

    /// Inactive players are skipped in turn rotation.
    pub is_active: bool,

    /// Current hand, kept in canonical sort order between moves.
    pub cards: Vec<Card>,

    /// Finishing rank 1..=N, set once per game.
    pub placement: Option<u8>,

    /// Whether this player finished first.
    pub is_winner: Option<bool>,

    pub ready_for_rematch: bool,
}

impl Player {
    /// Create a player at join time with an empty hand.
    #[must_use]
    pub fn new(
        id: PlayerId,
        room_id: RoomId,
        player_name: impl Into<String>,
        player_order: u8,
        is_host: bool,
    ) -> Self {
        Self {
            id,
            room_id,
            player_name: player_name.into(),
            player_order,
            is_host,
            is_active: true,
            cards: Vec::new(),
            placement: None,
            is_winner: None,
            ready_for_rematch: false,
        }
    }

    /// Number of cards in hand.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand contains a card with the given id.
    #[must_use]
    pub fn has_card(&self, card_id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == card_id)
    }

    /// Whether this player already has a finishing placement.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn player() -> Player {
        Player::new(
            PlayerId::new("p1"),
            RoomId::new("r1"),
            "Anna",
            0,
            true,
        )
    }

    #[test]
    fn test_new_player_defaults() {
        let p = player();
        assert!(p.is_active);
        assert!(p.is_host);
        assert!(p.cards.is_empty());
        assert_eq!(p.placement, None);
        assert_eq!(p.is_winner, None);
        assert!(!p.ready_for_rematch);
    }

    #[test]
    fn test_has_card() {
        let mut p = player();
        let card = Card::new(Suit::Clubs, Rank::Seven);
        assert!(!p.has_card(card.id));

        p.cards.push(card);
        assert!(p.has_card(card.id));
        assert_eq!(p.hand_size(), 1);
    }

    #[test]
    fn test_is_placed() {
        let mut p = player();
        assert!(!p.is_placed());
        p.placement = Some(1);
        assert!(p.is_placed());
    }
}

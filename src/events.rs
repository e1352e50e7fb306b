//! Session events for the caller's notification collaborator.
//!
//! Events are returned data, never ambient callbacks: each session
//! operation hands back the events it produced, and the caller decides
//! how to fan them out (socket push, long-poll, nothing at all). They
//! serialize with a `type` tag so they can go straight onto a wire.

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, Rank};
use crate::core::ids::{PlayerId, RoomCode, RoomId};

/// A change notification produced by a session operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    RoomCreated {
        room_id: RoomId,
        room_code: RoomCode,
    },
    PlayerJoined {
        player_id: PlayerId,
        player_name: String,
        player_order: u8,
    },
    GameStarted {
        starting_player: PlayerId,
    },
    CardsPlayed {
        player: PlayerId,
        cards_count: usize,
        claim: Option<String>,
        next_player: PlayerId,
    },
    /// A hand completed one or more four-of-a-kinds and they left play.
    QuadsRemoved {
        player: PlayerId,
        ranks: Vec<Rank>,
    },
    LiarCalled {
        was_lying: bool,
        revealed_cards: Vec<Card>,
        loser: PlayerId,
        winner: PlayerId,
    },
    PlacementAssigned {
        player: PlayerId,
        placement: u8,
    },
    GameFinished,
    RematchRequested {
        player: PlayerId,
        ready_count: usize,
        total_count: usize,
    },
}

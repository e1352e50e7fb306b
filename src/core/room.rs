//! Room records and lifecycle status.

use serde::{Deserialize, Serialize};

use super::ids::{PlayerId, RoomCode, RoomId};

/// Room lifecycle.
///
/// `Waiting → Playing` on game start, `Playing → Finished` when the last
/// placement is assigned, `Finished → Playing` again on rematch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

/// A game room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRoom {
    pub id: RoomId,

    /// Short human-readable join token, uppercase. Uniqueness across rooms
    /// is the persistence collaborator's job, not the engine's.
    pub room_code: RoomCode,

    pub host_id: Option<PlayerId>,
    pub status: RoomStatus,
    pub max_players: u8,
}

impl GameRoom {
    /// Create a room in the waiting state.
    #[must_use]
    pub fn new(id: RoomId, room_code: RoomCode, max_players: u8) -> Self {
        Self {
            id,
            room_code,
            host_id: None,
            status: RoomStatus::Waiting,
            max_players,
        }
    }
}

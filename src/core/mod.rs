//! Core engine types: cards, ids, players, rooms, state, RNG.
//!
//! This module contains the plain data snapshots the round engine consumes
//! and produces. Persistence and broadcast of these records are external
//! responsibilities.

pub mod card;
pub mod ids;
pub mod player;
pub mod rng;
pub mod room;
pub mod state;

pub use card::{Card, CardId, Rank, Suit};
pub use ids::{PlayerId, RoomCode, RoomId};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use room::{GameRoom, RoomStatus};
pub use state::{ActionData, ActionKind, Claim, GameAction, GameState, RoomSnapshot};

//! # luegner-engine
//!
//! Rules engine for the Lügner (bluff) card game.
//!
//! ## Design Principles
//!
//! 1. **Pure and storage-agnostic**: Operations consume and produce plain
//!    `RoomSnapshot`s. Persistence and broadcast are the caller's
//!    collaborators; the engine never talks to a store.
//!
//! 2. **Apply-or-fail-entirely**: Every operation validates before it
//!    mutates. A returned error means the snapshot is untouched.
//!
//! 3. **Deterministic under a seed**: All randomness flows through
//!    `GameRng` context streams, so deals, ids, and room codes replay
//!    exactly in tests.
//!
//! ## Modules
//!
//! - `core`: Cards, ids, players, rooms, game state, RNG
//! - `deck`: 32-card deck construction, shuffling, dealing
//! - `quads`: Four-of-a-kind detection and removal
//! - `engine`: The turn/claim/challenge state machine and its errors
//! - `session`: Per-room lifecycle orchestration over the engine
//! - `events`: Change notifications for the caller's broadcast layer

pub mod core;
pub mod deck;
pub mod engine;
pub mod events;
pub mod quads;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActionData, ActionKind, Card, CardId, Claim, GameAction, GameRng, GameRngState, GameRoom,
    GameState, Player, PlayerId, Rank, RoomCode, RoomId, RoomSnapshot, RoomStatus, Suit,
};

pub use crate::engine::{
    CallOutcome, EngineError, LiarOutcome, PlacementUpdate, PlayOutcome, RematchStatus,
};

pub use crate::events::SessionEvent;

pub use crate::quads::Quad;

pub use crate::session::GameSession;

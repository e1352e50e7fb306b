//! The turn/claim/challenge state machine.
//!
//! Operations consume and produce `RoomSnapshot`s. Each operation
//! validates fully before mutating anything, so a returned error leaves
//! the snapshot exactly as it was (apply-or-fail-entirely).

pub mod error;
pub mod round;

pub use error::EngineError;
pub use round::{
    CallOutcome, LiarOutcome, PlacementUpdate, PlayOutcome, RematchStatus,
    call_liar, play_cards, request_rematch, start_game,
};

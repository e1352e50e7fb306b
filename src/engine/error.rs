//! Engine errors.
//!
//! Every variant is a caller-visible, non-retryable business error: the
//! operation is rejected and prior state is left untouched. There is no
//! internal fatal category.

use thiserror::Error;

use crate::core::card::CardId;
use crate::core::ids::PlayerId;

/// Rules engine errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("at least 2 players are required to start")]
    InsufficientPlayers,

    #[error("room not found")]
    RoomNotFound,

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("no game in progress for this room")]
    GameStateNotFound,

    #[error("no claim to challenge")]
    NoActiveClaim,

    #[error("no prior play to challenge")]
    NoPriorAction,

    #[error("card {0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("it is not player {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("cannot deal to {0} players (need 2-8)")]
    InvalidPlayerCount(usize),

    #[error("must play between 1 and 3 cards, got {0}")]
    InvalidCardCount(usize),

    #[error("a claim is required on the first play of a round")]
    MissingClaim,

    #[error("room is full")]
    RoomFull,

    #[error("game has already started")]
    GameAlreadyStarted,
}

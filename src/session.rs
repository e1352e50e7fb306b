//! Session orchestration for a single room.
//!
//! A `GameSession` owns one room's `RoomSnapshot` plus the RNG streams
//! that feed it, and exposes the lifecycle: create, join, start, play,
//! call liar, rematch. Every operation delegates the rules to
//! `engine::round` and returns the `SessionEvent`s it produced; the
//! caller persists the snapshot and fans the events out. Two callers
//! mutating the same room must be serialized externally (one writer per
//! room) - the session holds no lock of its own.
//!
//! All randomness (room code, ids, deals) derives from the creation seed
//! through independent context streams, so an entire session is
//! replayable in tests.

use tracing::info;

use crate::core::card::CardId;
use crate::core::ids::{PlayerId, RoomCode, RoomId};
use crate::core::player::Player;
use crate::core::rng::GameRng;
use crate::core::room::{GameRoom, RoomStatus};
use crate::core::state::{Claim, RoomSnapshot};
use crate::engine::{self, EngineError, LiarOutcome, PlacementUpdate, RematchStatus};
use crate::events::SessionEvent;

/// Room capacity, fixed by the 32-card deck.
const DEFAULT_MAX_PLAYERS: u8 = 8;

/// Alphabet for human-readable room codes.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a room code.
const CODE_LEN: usize = 6;

/// One room's live state and lifecycle.
pub struct GameSession {
    snapshot: RoomSnapshot,
    deal_rng: GameRng,
    id_rng: GameRng,
}

impl GameSession {
    /// Create a room with its host already seated.
    ///
    /// Returns the session, the host's id, and the creation events.
    #[must_use]
    pub fn create(host_name: &str, seed: u64) -> (Self, PlayerId, Vec<SessionEvent>) {
        let root = GameRng::new(seed);
        let deal_rng = root.for_context("deal");
        let mut id_rng = root.for_context("ids");
        let mut code_rng = root.for_context("room-code");

        let room_code = generate_room_code(&mut code_rng);
        let room_id = RoomId::new(format!("{:016x}", id_rng.gen_u64()));
        let host_id = PlayerId::new(format!("{:016x}", id_rng.gen_u64()));

        let mut room = GameRoom::new(room_id.clone(), room_code.clone(), DEFAULT_MAX_PLAYERS);
        room.host_id = Some(host_id.clone());

        let mut snapshot = RoomSnapshot::new(room);
        snapshot
            .players
            .push(Player::new(host_id.clone(), room_id.clone(), host_name, 0, true));

        info!(room = %room_code, host = host_name, "room created");

        let events = vec![
            SessionEvent::RoomCreated {
                room_id,
                room_code,
            },
            SessionEvent::PlayerJoined {
                player_id: host_id.clone(),
                player_name: host_name.to_string(),
                player_order: 0,
            },
        ];

        let session = Self {
            snapshot,
            deal_rng,
            id_rng,
        };
        (session, host_id, events)
    }

    /// Resume a session from a persisted snapshot.
    ///
    /// The caller supplies a seed for the RNG streams; deals after the
    /// resume draw from it.
    #[must_use]
    pub fn from_snapshot(snapshot: RoomSnapshot, seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            snapshot,
            deal_rng: root.for_context("deal"),
            id_rng: root.for_context("ids"),
        }
    }

    /// Seat a new player, while the room is still waiting.
    pub fn join(&mut self, name: &str) -> Result<(PlayerId, Vec<SessionEvent>), EngineError> {
        if self.snapshot.room.status != RoomStatus::Waiting {
            return Err(EngineError::GameAlreadyStarted);
        }
        if self.snapshot.players.len() >= self.snapshot.room.max_players as usize {
            return Err(EngineError::RoomFull);
        }

        let player_order = self.snapshot.players.len() as u8;
        let player_id = PlayerId::new(format!("{:016x}", self.id_rng.gen_u64()));
        let room_id = self.snapshot.room.id.clone();
        self.snapshot
            .players
            .push(Player::new(player_id.clone(), room_id, name, player_order, false));

        info!(room = %self.snapshot.room.room_code, player = name, "player joined");

        let events = vec![SessionEvent::PlayerJoined {
            player_id: player_id.clone(),
            player_name: name.to_string(),
            player_order,
        }];
        Ok((player_id, events))
    }

    /// Start (or restart) the game.
    pub fn start_game(&mut self) -> Result<Vec<SessionEvent>, EngineError> {
        let starter = engine::start_game(&mut self.snapshot, &mut self.deal_rng)?;
        Ok(vec![SessionEvent::GameStarted {
            starting_player: starter,
        }])
    }

    /// Play cards for `player_id`.
    pub fn play_cards(
        &mut self,
        player_id: &PlayerId,
        card_ids: &[CardId],
        claim: Option<Claim>,
    ) -> Result<Vec<SessionEvent>, EngineError> {
        let outcome = engine::play_cards(&mut self.snapshot, player_id, card_ids, claim)?;

        let mut events = vec![SessionEvent::CardsPlayed {
            player: player_id.clone(),
            cards_count: card_ids.len(),
            claim: claim.map(|c| c.to_string()),
            next_player: outcome.next_player,
        }];
        if !outcome.removed_quads.is_empty() {
            events.push(SessionEvent::QuadsRemoved {
                player: player_id.clone(),
                ranks: outcome.removed_quads,
            });
        }
        self.push_placement_events(&outcome.placements, &mut events);
        Ok(events)
    }

    /// Challenge the standing claim on behalf of `caller_id`.
    ///
    /// Returns the reveal payload for display alongside the events.
    pub fn call_liar(
        &mut self,
        caller_id: &PlayerId,
    ) -> Result<(LiarOutcome, Vec<SessionEvent>), EngineError> {
        let outcome = engine::call_liar(&mut self.snapshot, caller_id)?;

        let mut events = vec![SessionEvent::LiarCalled {
            was_lying: outcome.result.was_lying,
            revealed_cards: outcome.result.revealed_cards.clone(),
            loser: outcome.result.loser.clone(),
            winner: outcome.result.winner.clone(),
        }];
        if !outcome.removed_quads.is_empty() {
            events.push(SessionEvent::QuadsRemoved {
                player: outcome.result.loser.clone(),
                ranks: outcome.removed_quads,
            });
        }
        self.push_placement_events(&outcome.placements, &mut events);
        Ok((outcome.result, events))
    }

    /// Mark a player ready for a rematch; restarts once everyone is.
    pub fn request_rematch(
        &mut self,
        player_id: &PlayerId,
    ) -> Result<(RematchStatus, Vec<SessionEvent>), EngineError> {
        let status = engine::request_rematch(&mut self.snapshot, player_id, &mut self.deal_rng)?;

        let mut events = vec![SessionEvent::RematchRequested {
            player: player_id.clone(),
            ready_count: status.ready_count,
            total_count: status.total_count,
        }];
        if status.all_ready {
            if let Some(game) = &self.snapshot.game {
                events.push(SessionEvent::GameStarted {
                    starting_player: game.current_player_id.clone(),
                });
            }
        }
        Ok((status, events))
    }

    /// The current snapshot, for the persistence collaborator.
    #[must_use]
    pub fn snapshot(&self) -> &RoomSnapshot {
        &self.snapshot
    }

    /// The room's join code.
    #[must_use]
    pub fn room_code(&self) -> &RoomCode {
        &self.snapshot.room.room_code
    }

    fn push_placement_events(
        &self,
        placements: &[PlacementUpdate],
        events: &mut Vec<SessionEvent>,
    ) {
        for update in placements {
            events.push(SessionEvent::PlacementAssigned {
                player: update.player.clone(),
                placement: update.placement,
            });
        }
        if self.snapshot.room.status == RoomStatus::Finished {
            events.push(SessionEvent::GameFinished);
        }
    }
}

/// Generate an uppercase alphanumeric room code.
fn generate_room_code(rng: &mut GameRng) -> RoomCode {
    let code: String = (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.gen_range_usize(0..CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode::new(code)
}

//! Per-room game state and the action log.
//!
//! ## GameState
//!
//! One instance exists per room while a game is running. It holds the
//! shared face-up pile, the standing claim, and the ranks already stripped
//! as quads this round. It is deleted and recreated on every game start.
//!
//! ## RoomSnapshot
//!
//! The unit the round engine consumes and produces: room + players + game
//! state + action log. The caller loads it from its store, hands it to an
//! engine operation, and persists what comes back. The pile and log use
//! `im` persistent vectors so retaining the pre-operation snapshot across
//! a transaction boundary stays an O(1) clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, Rank};
use super::ids::{PlayerId, RoomId};
use super::player::Player;
use super::room::GameRoom;

/// A declared rank and count a player asserts about the cards they just
/// played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub rank: Rank,
    pub count: u8,
}

impl Claim {
    #[must_use]
    pub const fn new(rank: Rank, count: u8) -> Self {
        Self { rank, count }
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x {}", self.count, self.rank)
    }
}

/// Mutable per-game state for one room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub room_id: RoomId,

    /// The player whose turn it is. Always an active player.
    pub current_player_id: PlayerId,

    /// Face-up pile, in play order (oldest first).
    pub pile_cards: Vector<Card>,

    /// The standing claim, cleared on every liar call.
    pub last_claim: Option<Claim>,

    /// Ranks stripped as quads this round, in removal order, duplicate-free.
    /// Accumulates monotonically; cleared only by a fresh game start.
    pub removed_quads: Vec<Rank>,
}

impl GameState {
    /// Create the fresh state for a game start.
    #[must_use]
    pub fn new(room_id: RoomId, current_player_id: PlayerId) -> Self {
        Self {
            room_id,
            current_player_id,
            pile_cards: Vector::new(),
            last_claim: None,
            removed_quads: Vec::new(),
        }
    }
}

/// Action log entry type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    PlayCard,
    CallLiar,
}

/// Payload of an action log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionData {
    Played {
        cards_count: usize,
        /// Claim display string ("2x K"), present only when the play set
        /// a new claim.
        claim: Option<String>,
    },
    LiarCalled {
        was_lying: bool,
        revealed_cards: Vec<Card>,
        loser: PlayerId,
        winner: PlayerId,
    },
}

/// Append-only audit log entry.
///
/// Liar-call resolution consumes the log: it needs the most recent
/// `PlayCard` entry to identify who played last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    pub room_id: RoomId,
    pub player_id: PlayerId,
    pub kind: ActionKind,
    pub data: ActionData,
}

/// Everything the engine needs to know about one room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub room: GameRoom,

    /// All players in the room, kept sorted by `player_order`.
    pub players: Vec<Player>,

    /// Present only while a game is running or finished.
    pub game: Option<GameState>,

    /// Append-only action log for the current game.
    pub actions: Vector<GameAction>,
}

impl RoomSnapshot {
    /// Create a snapshot for a freshly created room.
    #[must_use]
    pub fn new(room: GameRoom) -> Self {
        Self {
            room,
            players: Vec::new(),
            game: None,
            actions: Vector::new(),
        }
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Look up a player mutably by id.
    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// Active players in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active).collect()
    }

    /// Total cards currently accounted for: hands + pile + stripped quads.
    ///
    /// Invariant: equals 32 at all times while a game is running.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        let in_hands: usize = self.players.iter().map(Player::hand_size).sum();
        let in_pile = self.game.as_ref().map_or(0, |g| g.pile_cards.len());
        let stripped = self.game.as_ref().map_or(0, |g| g.removed_quads.len() * 4);
        in_hands + in_pile + stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::ids::RoomCode;

    fn snapshot() -> RoomSnapshot {
        let room = GameRoom::new(RoomId::new("r1"), RoomCode::new("AB12CD"), 8);
        let mut snap = RoomSnapshot::new(room);
        for (i, name) in ["Anna", "Ben"].iter().enumerate() {
            snap.players.push(Player::new(
                PlayerId::new(format!("p{}", i)),
                RoomId::new("r1"),
                *name,
                i as u8,
                i == 0,
            ));
        }
        snap
    }

    #[test]
    fn test_claim_display() {
        let claim = Claim::new(Rank::King, 2);
        assert_eq!(format!("{}", claim), "2x K");
    }

    #[test]
    fn test_player_lookup() {
        let snap = snapshot();
        assert_eq!(snap.player(&PlayerId::new("p1")).unwrap().player_name, "Ben");
        assert!(snap.player(&PlayerId::new("nope")).is_none());
    }

    #[test]
    fn test_active_players_filters() {
        let mut snap = snapshot();
        snap.player_mut(&PlayerId::new("p0")).unwrap().is_active = false;

        let active = snap.active_players();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, PlayerId::new("p1"));
    }

    #[test]
    fn test_cards_in_play_counts_all_locations() {
        let mut snap = snapshot();
        let mut game = GameState::new(RoomId::new("r1"), PlayerId::new("p0"));
        game.pile_cards.push_back(Card::new(Suit::Clubs, Rank::Seven));
        game.removed_quads.push(Rank::Nine);
        snap.game = Some(game);

        snap.player_mut(&PlayerId::new("p0")).unwrap().cards =
            vec![Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Spades, Rank::Ace)];

        // 2 in hand + 1 in pile + 4 stripped
        assert_eq!(snap.cards_in_play(), 7);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let mut snap = snapshot();
        snap.game = Some(GameState::new(RoomId::new("r1"), PlayerId::new("p0")));
        snap.actions.push_back(GameAction {
            room_id: RoomId::new("r1"),
            player_id: PlayerId::new("p0"),
            kind: ActionKind::PlayCard,
            data: ActionData::Played {
                cards_count: 2,
                claim: Some("2x K".to_string()),
            },
        });

        let json = serde_json::to_string(&snap).unwrap();
        let back: RoomSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}

//! Round operations: start, play, call liar, rematch, placements.
//!
//! ## Turn flow
//!
//! The club-7 holder opens. Each play removes 1-3 cards from the actor's
//! hand onto the shared pile together with a claim about their rank; the
//! claim persists across plays until someone calls liar. A liar call
//! reveals the most recent batch, the loser absorbs the whole pile, and
//! the winner leads the next round of plays.
//!
//! ## Placements
//!
//! After every play and every liar call, players whose hands emptied
//! receive the next finishing placements in seat order. The room finishes
//! when everyone is placed, or when the single remaining unplaced player
//! also empties their hand.

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::card::{Card, CardId, Rank};
use crate::core::ids::PlayerId;
use crate::core::rng::GameRng;
use crate::core::room::RoomStatus;
use crate::core::state::{ActionData, ActionKind, Claim, GameAction, GameState, RoomSnapshot};
use crate::deck;
use crate::quads;

use super::error::EngineError;

/// A placement assigned during the post-step of a play or liar call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementUpdate {
    pub player: PlayerId,
    pub placement: u8,
}

/// Result of a successful play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Whose turn it is now.
    pub next_player: PlayerId,
    /// Ranks stripped as quads from the actor's remaining hand.
    pub removed_quads: Vec<Rank>,
    /// Placements assigned by this move.
    pub placements: Vec<PlacementUpdate>,
}

/// The reveal payload of a liar call, returned to the caller for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiarOutcome {
    pub was_lying: bool,
    pub revealed_cards: Vec<Card>,
    pub loser: PlayerId,
    pub winner: PlayerId,
}

/// Result of a successful liar call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutcome {
    pub result: LiarOutcome,
    /// Ranks stripped as quads from the loser's hand after absorbing the pile.
    pub removed_quads: Vec<Rank>,
    /// Placements assigned by this move.
    pub placements: Vec<PlacementUpdate>,
}

/// Result of a rematch request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RematchStatus {
    pub all_ready: bool,
    pub ready_count: usize,
    pub total_count: usize,
}

/// Start a fresh game for the room.
///
/// Deals sorted hands in seat order, resets every player's per-game
/// fields, recreates the game state with the club-7 holder to move, and
/// flips the room to playing. Returns the starting player.
pub fn start_game(snap: &mut RoomSnapshot, rng: &mut GameRng) -> Result<PlayerId, EngineError> {
    if snap.players.len() < deck::MIN_PLAYERS {
        return Err(EngineError::InsufficientPlayers);
    }

    snap.players.sort_by_key(|p| p.player_order);
    let hands = deck::deal(snap.players.len(), rng)?;
    let start_index =
        deck::find_starting_hand(&hands).expect("a full deck always contains the club 7");

    for (i, player) in snap.players.iter_mut().enumerate() {
        player.player_order = i as u8;
        player.cards = deck::sort_hand(&hands[i]);
        player.is_active = true;
        player.placement = None;
        player.is_winner = None;
        player.ready_for_rematch = false;
    }

    let starter = snap.players[start_index].id.clone();
    snap.game = Some(GameState::new(snap.room.id.clone(), starter.clone()));
    // A stale play_card entry from a previous game must never feed a new
    // round's liar call.
    snap.actions = Vector::new();
    snap.room.status = RoomStatus::Playing;

    debug!(room = %snap.room.room_code, starter = %starter, "game started");
    Ok(starter)
}

/// Play 1-3 cards from the actor's hand onto the pile.
///
/// The actor must be the current player and must hold every card played.
/// A claim is required when no claim is standing (first play of a round);
/// otherwise an omitted claim leaves the previous one in force and a
/// provided claim replaces it. Quads forming in the *remaining* hand are
/// stripped before the turn advances.
pub fn play_cards(
    snap: &mut RoomSnapshot,
    player_id: &PlayerId,
    card_ids: &[CardId],
    claim: Option<Claim>,
) -> Result<PlayOutcome, EngineError> {
    let game = snap.game.as_ref().ok_or(EngineError::GameStateNotFound)?;

    if &game.current_player_id != player_id {
        return Err(EngineError::NotYourTurn(player_id.clone()));
    }
    if !(1..=3).contains(&card_ids.len()) {
        return Err(EngineError::InvalidCardCount(card_ids.len()));
    }
    if game.last_claim.is_none() && claim.is_none() {
        return Err(EngineError::MissingClaim);
    }

    let player = snap
        .player(player_id)
        .ok_or_else(|| EngineError::PlayerNotFound(player_id.clone()))?;

    // Compute the whole move on copies; nothing is committed until every
    // check has passed.
    let mut remaining = player.cards.clone();
    let mut played: SmallVec<[Card; 3]> = SmallVec::new();
    for &card_id in card_ids {
        let pos = remaining
            .iter()
            .position(|c| c.id == card_id)
            .ok_or(EngineError::CardNotInHand(card_id))?;
        played.push(remaining.remove(pos));
    }

    let mut removed_quads = game.removed_quads.clone();
    let stripped = quads::strip_quads(&mut remaining, &mut removed_quads);

    let next_player = next_active_player(snap, player_id);

    // Commit.
    let sorted = deck::sort_hand(&remaining);
    {
        let p = snap
            .player_mut(player_id)
            .ok_or_else(|| EngineError::PlayerNotFound(player_id.clone()))?;
        p.cards = sorted;
    }

    let claim_label = claim.map(|c| c.to_string());
    {
        let game = snap.game.as_mut().ok_or(EngineError::GameStateNotFound)?;
        for card in &played {
            game.pile_cards.push_back(*card);
        }
        if let Some(claim) = claim {
            game.last_claim = Some(claim);
        }
        game.removed_quads = removed_quads;
        game.current_player_id = next_player.clone();
    }

    snap.actions.push_back(GameAction {
        room_id: snap.room.id.clone(),
        player_id: player_id.clone(),
        kind: ActionKind::PlayCard,
        data: ActionData::Played {
            cards_count: played.len(),
            claim: claim_label,
        },
    });

    debug!(
        room = %snap.room.room_code,
        player = %player_id,
        cards = played.len(),
        "cards played"
    );

    let placements = assign_placements(snap);

    Ok(PlayOutcome {
        next_player,
        removed_quads: stripped,
        placements,
    })
}

/// Challenge the standing claim.
///
/// Reveals the most recently played batch (the last `claim.count` pile
/// cards). If the actual rank count differs from the claim, the last
/// player to play loses; otherwise the caller does. The loser absorbs the
/// entire pile and is reactivated, the winner leads the next round.
pub fn call_liar(snap: &mut RoomSnapshot, caller_id: &PlayerId) -> Result<CallOutcome, EngineError> {
    let game = snap.game.as_ref().ok_or(EngineError::GameStateNotFound)?;
    let claim = game.last_claim.ok_or(EngineError::NoActiveClaim)?;

    if snap.player(caller_id).is_none() {
        return Err(EngineError::PlayerNotFound(caller_id.clone()));
    }

    let last_player_id = snap
        .actions
        .iter()
        .rev()
        .find(|a| a.kind == ActionKind::PlayCard)
        .map(|a| a.player_id.clone())
        .ok_or(EngineError::NoPriorAction)?;

    let pile: Vec<Card> = game.pile_cards.iter().copied().collect();
    let take = (claim.count as usize).min(pile.len());
    let revealed: Vec<Card> = pile[pile.len() - take..].to_vec();
    let actual = revealed.iter().filter(|c| c.rank == claim.rank).count();
    let was_lying = actual != claim.count as usize;

    let (loser, winner) = if was_lying {
        (last_player_id, caller_id.clone())
    } else {
        (caller_id.clone(), last_player_id)
    };

    let loser_player = snap
        .player(&loser)
        .ok_or_else(|| EngineError::PlayerNotFound(loser.clone()))?;

    let mut new_hand = loser_player.cards.clone();
    new_hand.extend(pile.iter().copied());
    let mut removed_quads = game.removed_quads.clone();
    let stripped = quads::strip_quads(&mut new_hand, &mut removed_quads);

    // Commit.
    let sorted = deck::sort_hand(&new_hand);
    {
        let p = snap
            .player_mut(&loser)
            .ok_or_else(|| EngineError::PlayerNotFound(loser.clone()))?;
        p.cards = sorted;
        // Losing the call puts them back in the rotation even if they had
        // previously emptied their hand without a placement.
        p.is_active = true;
    }
    {
        let game = snap.game.as_mut().ok_or(EngineError::GameStateNotFound)?;
        game.pile_cards = Vector::new();
        game.last_claim = None;
        game.removed_quads = removed_quads;
        game.current_player_id = winner.clone();
    }

    snap.actions.push_back(GameAction {
        room_id: snap.room.id.clone(),
        player_id: caller_id.clone(),
        kind: ActionKind::CallLiar,
        data: ActionData::LiarCalled {
            was_lying,
            revealed_cards: revealed.clone(),
            loser: loser.clone(),
            winner: winner.clone(),
        },
    });

    debug!(
        room = %snap.room.room_code,
        caller = %caller_id,
        was_lying,
        loser = %loser,
        "liar called"
    );

    let placements = assign_placements(snap);

    Ok(CallOutcome {
        result: LiarOutcome {
            was_lying,
            revealed_cards: revealed,
            loser,
            winner,
        },
        removed_quads: stripped,
        placements,
    })
}

/// Mark a player ready for a rematch; restart the game once all are.
pub fn request_rematch(
    snap: &mut RoomSnapshot,
    player_id: &PlayerId,
    rng: &mut GameRng,
) -> Result<RematchStatus, EngineError> {
    {
        let p = snap
            .player_mut(player_id)
            .ok_or_else(|| EngineError::PlayerNotFound(player_id.clone()))?;
        p.ready_for_rematch = true;
    }

    let total_count = snap.players.len();
    let ready_count = snap.players.iter().filter(|p| p.ready_for_rematch).count();
    let all_ready = ready_count == total_count;

    if all_ready {
        start_game(snap, rng)?;
    }

    Ok(RematchStatus {
        all_ready,
        ready_count,
        total_count,
    })
}

/// The next active player after `after`, in circular seat order.
fn next_active_player(snap: &RoomSnapshot, after: &PlayerId) -> PlayerId {
    let active = snap.active_players();
    let idx = active.iter().position(|p| &p.id == after).unwrap_or(0);
    active[(idx + 1) % active.len()].id.clone()
}

/// Assign placements to every emptied hand, then decide completion.
fn assign_placements(snap: &mut RoomSnapshot) -> Vec<PlacementUpdate> {
    let mut updates = Vec::new();
    let mut placed_count = snap.players.iter().filter(|p| p.is_placed()).count();

    // Emptied hands finish next, ties broken by seat order.
    for i in 0..snap.players.len() {
        if snap.players[i].hand_size() == 0 && !snap.players[i].is_placed() {
            placed_count += 1;
            let placement = placed_count as u8;
            let player = &mut snap.players[i];
            player.placement = Some(placement);
            player.is_winner = Some(placement == 1);
            player.is_active = false;
            updates.push(PlacementUpdate {
                player: player.id.clone(),
                placement,
            });
        }
    }

    let total = snap.players.len();
    let placed = snap.players.iter().filter(|p| p.is_placed()).count();

    if placed == total {
        snap.room.status = RoomStatus::Finished;
    } else if placed + 1 == total {
        // Terminal rule: the single remaining unplaced player takes the
        // final slot only once their hand is empty. Otherwise they stay in
        // the game holding cards.
        if let Some(i) = snap.players.iter().position(|p| !p.is_placed()) {
            if snap.players[i].hand_size() == 0 {
                let placement = total as u8;
                let player = &mut snap.players[i];
                player.placement = Some(placement);
                player.is_winner = Some(placement == 1);
                player.is_active = false;
                updates.push(PlacementUpdate {
                    player: player.id.clone(),
                    placement,
                });
                snap.room.status = RoomStatus::Finished;
            }
        }
    }

    updates
}

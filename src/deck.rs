//! Deck construction, shuffling, and dealing.
//!
//! The canonical deck is 32 unique cards in a deterministic order;
//! randomness enters only through the `GameRng` handed in by the caller,
//! so deals are replayable under a fixed seed.

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;
use crate::engine::EngineError;

/// Minimum players a deal supports.
pub const MIN_PLAYERS: usize = 2;

/// Maximum players a deal supports.
///
/// Beyond 8 a 32-card deck thins out and the club-7 starting rule stops
/// being meaningful.
pub const MAX_PLAYERS: usize = 8;

/// Build the canonical 32-card deck in deterministic pre-shuffle order.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(32);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Return a uniformly shuffled copy of `cards`. Does not mutate the input.
#[must_use]
pub fn shuffle(cards: &[Card], rng: &mut GameRng) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    rng.shuffle(&mut shuffled);
    shuffled
}

/// Shuffle a fresh deck and deal it round-robin into `player_count` hands.
///
/// `card[i]` goes to `hand[i % player_count]`, so hand sizes differ by at
/// most 1. Fails with `InvalidPlayerCount` outside 2..=8.
pub fn deal(player_count: usize, rng: &mut GameRng) -> Result<Vec<Vec<Card>>, EngineError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(EngineError::InvalidPlayerCount(player_count));
    }

    let deck = shuffle(&build_deck(), rng);
    let mut hands = vec![Vec::with_capacity(32 / player_count + 1); player_count];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % player_count].push(card);
    }
    Ok(hands)
}

/// Index of the hand holding the club 7, which opens the round.
///
/// `None` only if the club 7 is absent, which cannot happen for a full
/// deck dealt through [`deal`].
#[must_use]
pub fn find_starting_hand(hands: &[Vec<Card>]) -> Option<usize> {
    hands
        .iter()
        .position(|hand| hand.iter().any(|c| c.suit == Suit::Clubs && c.rank == Rank::Seven))
}

/// Canonical display order: rank ascending, then suit. Cosmetic only.
#[must_use]
pub fn sort_hand(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (c.rank.index(), c.suit.index()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_build_deck_is_complete() {
        let deck = build_deck();
        assert_eq!(deck.len(), 32);

        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_build_deck_is_deterministic() {
        assert_eq!(build_deck(), build_deck());
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let deck = build_deck();
        let before = deck.clone();
        let mut rng = GameRng::new(42);

        let shuffled = shuffle(&deck, &mut rng);

        assert_eq!(deck, before);
        assert_ne!(shuffled, deck);

        let ids: HashSet<_> = shuffled.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 32);
    }

    #[test]
    fn test_deal_distributes_all_cards() {
        for player_count in MIN_PLAYERS..=MAX_PLAYERS {
            let mut rng = GameRng::new(7);
            let hands = deal(player_count, &mut rng).unwrap();

            assert_eq!(hands.len(), player_count);

            let total: usize = hands.iter().map(Vec::len).sum();
            assert_eq!(total, 32);

            let ids: HashSet<_> = hands.iter().flatten().map(|c| c.id).collect();
            assert_eq!(ids.len(), 32);

            let min = hands.iter().map(Vec::len).min().unwrap();
            let max = hands.iter().map(Vec::len).max().unwrap();
            assert!(max - min <= 1);
        }
    }

    #[test]
    fn test_deal_rejects_bad_player_counts() {
        let mut rng = GameRng::new(7);
        assert!(matches!(
            deal(0, &mut rng),
            Err(EngineError::InvalidPlayerCount(0))
        ));
        assert!(matches!(
            deal(1, &mut rng),
            Err(EngineError::InvalidPlayerCount(1))
        ));
        assert!(matches!(
            deal(9, &mut rng),
            Err(EngineError::InvalidPlayerCount(9))
        ));
    }

    #[test]
    fn test_deal_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);
        assert_eq!(deal(4, &mut rng1).unwrap(), deal(4, &mut rng2).unwrap());
    }

    #[test]
    fn test_find_starting_hand() {
        let mut rng = GameRng::new(3);
        let hands = deal(3, &mut rng).unwrap();

        let index = find_starting_hand(&hands).unwrap();
        assert!(hands[index]
            .iter()
            .any(|c| c.suit == Suit::Clubs && c.rank == Rank::Seven));

        // Exactly one hand holds the club 7
        let holders = hands
            .iter()
            .filter(|h| h.iter().any(|c| c.suit == Suit::Clubs && c.rank == Rank::Seven))
            .count();
        assert_eq!(holders, 1);
    }

    #[test]
    fn test_find_starting_hand_absent() {
        let hands: Vec<Vec<Card>> = vec![vec![Card::new(Suit::Hearts, Rank::Ace)], vec![]];
        assert_eq!(find_starting_hand(&hands), None);
    }

    #[test]
    fn test_sort_hand_rank_then_suit() {
        let hand = vec![
            Card::new(Suit::Diamonds, Rank::Ace),
            Card::new(Suit::Clubs, Rank::Seven),
            Card::new(Suit::Spades, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Nine),
        ];

        let sorted = sort_hand(&hand);
        assert_eq!(
            sorted,
            vec![
                Card::new(Suit::Clubs, Rank::Seven),
                Card::new(Suit::Hearts, Rank::Nine),
                Card::new(Suit::Spades, Rank::Ace),
                Card::new(Suit::Diamonds, Rank::Ace),
            ]
        );

        // Purely cosmetic: same multiset of cards
        let mut a: Vec<_> = hand.iter().map(|c| c.id).collect();
        let mut b: Vec<_> = sorted.iter().map(|c| c.id).collect();
        a.sort_by_key(|id| id.0);
        b.sort_by_key(|id| id.0);
        assert_eq!(a, b);
    }
}

//! Four-of-a-kind detection and removal.
//!
//! A 32-card deck has exactly 4 cards per rank, so a completed quad is
//! always exactly 4 cards of one rank regardless of suit. Whenever a hand
//! gains cards, quads are stripped repeatedly until none remain.

use rustc_hash::FxHashMap;

use crate::core::card::{Card, Rank};

/// A detected four-of-a-kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quad {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

/// Find the first rank (in encounter order) with exactly 4 cards.
#[must_use]
pub fn find_quad(cards: &[Card]) -> Option<Quad> {
    let mut counts: FxHashMap<Rank, u8> = FxHashMap::default();
    for card in cards {
        *counts.entry(card.rank).or_insert(0) += 1;
    }

    // Second pass preserves encounter order, which a hash map would not.
    for card in cards {
        if counts.get(&card.rank) == Some(&4) {
            let rank = card.rank;
            return Some(Quad {
                rank,
                cards: cards.iter().filter(|c| c.rank == rank).copied().collect(),
            });
        }
    }
    None
}

/// Strip quads from `hand` until none remain.
///
/// Each newly stripped rank is appended to `removed_quads` unless already
/// present (idempotent on rank; the cards are removed either way).
/// Returns the ranks stripped by this call, in removal order.
pub fn strip_quads(hand: &mut Vec<Card>, removed_quads: &mut Vec<Rank>) -> Vec<Rank> {
    let mut stripped = Vec::new();
    while let Some(quad) = find_quad(hand) {
        hand.retain(|c| c.rank != quad.rank);
        if !removed_quads.contains(&quad.rank) {
            removed_quads.push(quad.rank);
        }
        stripped.push(quad.rank);
    }
    stripped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::Suit;

    fn all_of_rank(rank: Rank) -> Vec<Card> {
        Suit::ALL.iter().map(|&s| Card::new(s, rank)).collect()
    }

    #[test]
    fn test_find_quad_none_below_four() {
        let mut hand = all_of_rank(Rank::Nine);
        hand.pop();
        assert_eq!(find_quad(&hand), None);
        assert_eq!(find_quad(&[]), None);
    }

    #[test]
    fn test_find_quad_exactly_four() {
        let mut hand = vec![Card::new(Suit::Hearts, Rank::Ace)];
        hand.extend(all_of_rank(Rank::Nine));

        let quad = find_quad(&hand).unwrap();
        assert_eq!(quad.rank, Rank::Nine);
        assert_eq!(quad.cards.len(), 4);
        assert!(quad.cards.iter().all(|c| c.rank == Rank::Nine));
    }

    #[test]
    fn test_find_quad_encounter_order() {
        // Kings complete later in the scan than jacks
        let mut hand = Vec::new();
        hand.extend(all_of_rank(Rank::Jack));
        hand.extend(all_of_rank(Rank::King));

        assert_eq!(find_quad(&hand).unwrap().rank, Rank::Jack);
    }

    #[test]
    fn test_strip_quads_removes_until_none() {
        let mut hand = Vec::new();
        hand.extend(all_of_rank(Rank::Jack));
        hand.push(Card::new(Suit::Clubs, Rank::Seven));
        hand.extend(all_of_rank(Rank::King));

        let mut removed = Vec::new();
        let stripped = strip_quads(&mut hand, &mut removed);

        assert_eq!(stripped, vec![Rank::Jack, Rank::King]);
        assert_eq!(removed, vec![Rank::Jack, Rank::King]);
        assert_eq!(hand, vec![Card::new(Suit::Clubs, Rank::Seven)]);
    }

    #[test]
    fn test_strip_quads_rank_not_duplicated() {
        // Rank already recorded from an earlier strip this round
        let mut removed = vec![Rank::Nine];
        let mut hand = all_of_rank(Rank::Nine);

        let stripped = strip_quads(&mut hand, &mut removed);

        assert!(hand.is_empty());
        assert_eq!(stripped, vec![Rank::Nine]);
        assert_eq!(removed, vec![Rank::Nine]);
    }

    #[test]
    fn test_strip_quads_no_quads_is_noop() {
        let mut hand = vec![
            Card::new(Suit::Clubs, Rank::Seven),
            Card::new(Suit::Hearts, Rank::Seven),
        ];
        let before = hand.clone();
        let mut removed = Vec::new();

        assert!(strip_quads(&mut hand, &mut removed).is_empty());
        assert_eq!(hand, before);
        assert!(removed.is_empty());
    }
}

// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! A cards deck.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck.
///
/// Cards are dealt from the end of the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a new deck shuffled with a seeded generator.
    ///
    /// Decks created with the same seed deal the same cards.
    pub fn with_seed(seed: u64) -> Self {
        Self::new_and_shuffled(&mut StdRng::seed_from_u64(seed))
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards from the deck, returns `None` if there are not enough
    /// cards left.
    pub fn deal_many(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        let at = self.cards.len() - n;
        let mut cards = self.cards.split_off(at);
        cards.reverse();
        Some(cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck contains a card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards subset of the deck.
    ///
    /// Subsets are visited in lexicographic order of the cards positions.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut h = [self.cards[0]; 7];
        loop {
            for (c, &p) in h.iter_mut().zip(&pos[..k]) {
                *c = self.cards[p];
            }

            f(&h[..k]);

            // Find the rightmost position that can still move right.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                return;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }

    /// Calls the `f` closure for `samples` random k-cards subsets of the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng,
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn deal_all_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn seeded_decks() {
        let mut d1 = Deck::with_seed(12345);
        let mut d2 = Deck::with_seed(12345);
        let a = d1.deal_many(10).unwrap();
        let b = d2.deal_many(10).unwrap();
        assert_eq!(a, b, "same seed must yield identical order");

        let mut d3 = Deck::with_seed(54321);
        let c = d3.deal_many(10).unwrap();
        assert_ne!(a, c, "different seeds should produce different orders");
    }

    #[test]
    fn deal_many_matches_deal() {
        let mut d1 = Deck::with_seed(1);
        let mut d2 = Deck::with_seed(1);

        let many = d1.deal_many(7).unwrap();
        let single = (0..7).map(|_| d2.deal().unwrap()).collect::<Vec<_>>();
        assert_eq!(many, single);
        assert_eq!(d1.count(), Deck::SIZE - 7);

        assert!(d1.deal_many(Deck::SIZE).is_none());
        assert_eq!(d1.count(), Deck::SIZE - 7);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(deck.contains(ad));

        deck.remove(ad);
        assert!(!deck.contains(ad));
        assert_eq!(deck.count(), Deck::SIZE - 1);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn pool_for_each() {
        let pool = Deck::with_seed(3).into_iter().take(7).collect::<Deck>();

        let mut hands = HashSet::default();
        pool.for_each(5, |cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 21);

        let mut count = 0;
        pool.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 1);

        // Not enough cards.
        let small = pool.into_iter().take(3).collect::<Deck>();
        small.for_each(5, |_| panic!("no 5 cards subsets"));
    }

    // This takes a while to run in debug mode as it goes through 133M subsets.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_sample() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(9);

        let mut count = 0;
        deck.sample(&mut rng, 100, 7, |cards| {
            assert_eq!(cards.len(), 7);
            let unique = cards.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
    }
}

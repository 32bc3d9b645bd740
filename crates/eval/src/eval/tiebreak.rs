// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Category specific tie-break keys.
use pokerank_cards::Rank;

use super::{HandCategory, Rules, stats::PoolStats};

/// Number of cards in a poker hand.
const HAND_SIZE: usize = 5;

/// Computes the ranks compared when two pools share a category, in the order
/// they are compared.
///
/// The category must be the one computed for the pool with the same rules,
/// a pool that doesn't match its category gets a key built from the ranks
/// found and never panics.
pub(crate) fn tie_break_key(stats: &PoolStats, category: HandCategory, rules: Rules) -> Vec<Rank> {
    let mut key: Vec<Rank> = Vec::with_capacity(HAND_SIZE);

    match category {
        HandCategory::StraightFlush => {
            let high = match rules {
                Rules::Standard => stats
                    .flush_suit()
                    .and_then(|s| stats.suited_straight_high(s)),
                Rules::PoolWide => stats.straight_high(),
            };
            key.extend(high.or_else(|| stats.top_rank()));
        }
        HandCategory::Straight => {
            key.extend(stats.straight_high().or_else(|| stats.top_rank()));
        }
        HandCategory::FourOfAKind => {
            let quads = stats.ranks_with_count(4).next();
            key.extend(quads);
            if rules == Rules::Standard {
                key.extend(kickers(stats, &key, 1));
            }
        }
        HandCategory::FullHouse => {
            let trips = stats.ranks_with_count(3).next();
            key.extend(trips);

            let pair = match rules {
                Rules::Standard => Rank::ranks()
                    .rev()
                    .find(|&r| Some(r) != trips && stats.count(r) >= 2),
                Rules::PoolWide => stats.ranks_with_count(2).next(),
            };
            key.extend(pair);
        }
        HandCategory::ThreeOfAKind => {
            key.extend(stats.ranks_with_count(3).next());
            let remaining = rules.kickers(HAND_SIZE - 3);
            key.extend(kickers(stats, &key, remaining));
        }
        HandCategory::TwoPair => {
            key.extend(stats.ranks_with_count(2).take(2));
            let remaining = rules.kickers(HAND_SIZE - 4);
            key.extend(kickers(stats, &key, remaining));
        }
        HandCategory::OnePair => {
            key.extend(stats.ranks_with_count(2).next());
            let remaining = rules.kickers(HAND_SIZE - 2);
            key.extend(kickers(stats, &key, remaining));
        }
        HandCategory::Flush => match (rules, stats.flush_suit()) {
            (Rules::Standard, Some(suit)) => {
                key.extend(stats.suited_ranks_desc(suit).take(HAND_SIZE));
            }
            _ => key.extend(stats.ranks_desc().take(rules.kickers(HAND_SIZE))),
        },
        HandCategory::HighCard => {
            key.extend(stats.ranks_desc().take(rules.kickers(HAND_SIZE)));
        }
    }

    key
}

/// The ranks of the cards that are not part of the matched ranks, highest first.
fn kickers(stats: &PoolStats, matched: &[Rank], n: usize) -> Vec<Rank> {
    stats
        .ranks_desc()
        .filter(|r| !matched.contains(r))
        .take(n)
        .collect()
}

impl Rules {
    /// How many remaining cards break a tie when a hand needs `n` more cards.
    fn kickers(self, n: usize) -> usize {
        match self {
            Rules::Standard => n,
            Rules::PoolWide => usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerank_cards::parse_cards;
    use pokerank_cards::Rank::*;

    fn key(s: &str, category: HandCategory, rules: Rules) -> Vec<Rank> {
        tie_break_key(&PoolStats::new(&parse_cards(s).unwrap()), category, rules)
    }

    fn standard(s: &str, category: HandCategory) -> Vec<Rank> {
        key(s, category, Rules::Standard)
    }

    #[test]
    fn straight_keys() {
        assert_eq!(standard("Ac 2h 3c 4h 5d 9s Jc", HandCategory::Straight), [Five]);
        assert_eq!(standard("2h 3c 4h 5d 6s 9s Jc", HandCategory::Straight), [Six]);
        assert_eq!(standard("10c Jh Qd Kh Ad 2s 3c", HandCategory::Straight), [Ace]);
        assert_eq!(
            standard("As Ks Qs Js 10s 9s 2h", HandCategory::StraightFlush),
            [Ace]
        );
    }

    #[test]
    fn straight_flush_keys() {
        // Straight to the jack, straight flush to the nine.
        let pool = "5h 6h 7h 8h 9h 10c Jd";
        assert_eq!(standard(pool, HandCategory::StraightFlush), [Nine]);
        assert_eq!(key(pool, HandCategory::StraightFlush, Rules::PoolWide), [Jack]);
    }

    #[test]
    fn four_of_a_kind_keys() {
        let pool = "9c 9d 9h 9s Kd 3c 2c";
        assert_eq!(standard(pool, HandCategory::FourOfAKind), [Nine, King]);
        assert_eq!(key(pool, HandCategory::FourOfAKind, Rules::PoolWide), [Nine]);
    }

    #[test]
    fn full_house_keys() {
        let pool = "Kc Kd Kh 4c 4d 2h 2s";
        assert_eq!(standard(pool, HandCategory::FullHouse), [King, Four]);
        assert_eq!(key(pool, HandCategory::FullHouse, Rules::PoolWide), [King, Four]);

        // Two three of a kind, the lower one is the pair.
        let pool = "4c 4d 4h Kc Kd Kh 2s";
        assert_eq!(standard(pool, HandCategory::FullHouse), [King, Four]);
    }

    #[test]
    fn three_of_a_kind_keys() {
        let pool = "Qc Qh Qd 2s 3c 4h 7d";
        assert_eq!(standard(pool, HandCategory::ThreeOfAKind), [Queen, Seven, Four]);
        assert_eq!(
            key(pool, HandCategory::ThreeOfAKind, Rules::PoolWide),
            [Queen, Seven, Four, Trey, Deuce]
        );
    }

    #[test]
    fn two_pair_keys() {
        let pool = "2s 2c 9d 9h Ks 4d 7c";
        assert_eq!(standard(pool, HandCategory::TwoPair), [Nine, Deuce, King]);
        assert_eq!(
            key(pool, HandCategory::TwoPair, Rules::PoolWide),
            [Nine, Deuce, King, Seven, Four]
        );

        // The third pair can be the kicker.
        let pool = "Kc Kd 4h 4c 8d 8h 2s";
        assert_eq!(standard(pool, HandCategory::TwoPair), [King, Eight, Four]);
    }

    #[test]
    fn one_pair_keys() {
        let pool = "Ac Ah 2s 3d 4c 8d 7h";
        assert_eq!(standard(pool, HandCategory::OnePair), [Ace, Eight, Seven, Four]);
        assert_eq!(
            key(pool, HandCategory::OnePair, Rules::PoolWide),
            [Ace, Eight, Seven, Four, Trey, Deuce]
        );
    }

    #[test]
    fn flush_keys() {
        let pool = "2h 7h Jh Qh 9h Ac Kd";
        assert_eq!(standard(pool, HandCategory::Flush), [Queen, Jack, Nine, Seven, Deuce]);
        assert_eq!(
            key(pool, HandCategory::Flush, Rules::PoolWide),
            [Ace, King, Queen, Jack, Nine, Seven, Deuce]
        );
    }

    #[test]
    fn high_card_keys() {
        let pool = "Ac Kh 9s 8d 7c 3d 2h";
        assert_eq!(standard(pool, HandCategory::HighCard), [Ace, King, Nine, Eight, Seven]);
        assert_eq!(key(pool, HandCategory::HighCard, Rules::PoolWide).len(), 7);
    }
}

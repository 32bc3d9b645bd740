// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A poker hand category ordered from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No matching ranks, straight or flush.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
}

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = 9;

    /// All categories from the weakest to the strongest.
    pub const ALL: [HandCategory; HandCategory::COUNT] = {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
    };

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        Self::ALL.into_iter()
    }

    /// A human readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        let all = HandCategory::categories().collect::<Vec<_>>();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all.first(), Some(&HandCategory::HighCard));
        assert_eq!(all.last(), Some(&HandCategory::StraightFlush));
        assert_eq!(HandCategory::FullHouse as usize, 6);
    }

    #[test]
    fn category_labels() {
        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(HandCategory::StraightFlush.to_string(), "Straight Flush");
    }
}

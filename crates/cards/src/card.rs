// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// A card is packed in a single byte with the rank in the high bits and the
/// suit in the two low bits:
///
/// ```text
///   +--------+
///   |xrrrrss|
///   +--------+
///   r = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
///   s = suit of card (spades=0,clubs=1,diamonds=2,hearts=3)
/// ```
///
/// so that [Card::index] is a unique value in `0..52`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((rank as u8) << 2) | suit as u8)
    }

    /// This card unique index in `0..52`.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::ALL[(self.0 >> 2) as usize]
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        Suit::ALL[(self.0 & 0x3) as usize]
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::InvalidCard(s.to_string()));
        }

        Ok(Card::new(rank.parse()?, Suit::from_char(suit)?))
    }
}

/// Parses a list of cards separated by whitespace or commas, e.g. `"As Kd, 10h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Error returned when parsing a card from text fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseCardError {
    /// Nothing to parse.
    #[error("empty card")]
    Empty,
    /// The card text has no rank.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// Unknown rank label.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// Unknown suit letter or symbol.
    #[error("invalid suit '{0}'")]
    InvalidSuit(char),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// The number of ranks.
    pub const COUNT: usize = 13;

    /// All ranks from deuce to ace.
    pub const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// The rank value, deuce is 0 and ace is 12.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank with the given value if `value < 13`.
    pub fn from_value(value: u8) -> Option<Rank> {
        Self::ALL.get(value as usize).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        };

        f.write_str(rank)
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Hearts suit.
    Hearts = 3,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// All suits.
    pub const ALL: [Suit; Suit::COUNT] = [Suit::Spades, Suit::Clubs, Suit::Diamonds, Suit::Hearts];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit position in [Suit::ALL].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }

    /// Checks if this is a red suit.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    fn from_char(c: char) -> Result<Suit, ParseCardError> {
        match c.to_ascii_lowercase() {
            's' | '♠' => Ok(Suit::Spades),
            'c' | '♣' => Ok(Suit::Clubs),
            'd' | '♦' => Ok(Suit::Diamonds),
            'h' | '♥' => Ok(Suit::Hearts),
            _ => Err(ParseCardError::InvalidSuit(c)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

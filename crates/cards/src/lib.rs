// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerank cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "Td".parse().unwrap();
//! assert_eq!(ah.to_string(), "A♥");
//! assert_eq!(td.to_string(), "10♦");
//! ```
//!
//! and a [Deck] type for shuffling, dealing, sampling, and iterating cards in
//! the deck.
//!
//! A seeded deck deals the same cards every time, which makes dealt pools
//! reproducible:
//!
//! ```
//! # use pokerank_cards::Deck;
//! let mut d1 = Deck::with_seed(42);
//! let mut d2 = Deck::with_seed(42);
//! assert_eq!(d1.deal(), d2.deal());
//! ```
//!
//! To iterate through all 5 cards subsets of a 7 cards pool:
//!
//! ```
//! # use pokerank_cards::{Card, Deck};
//! let pool = Deck::with_seed(7).into_iter().take(7).collect::<Deck>();
//! let mut counter = 0;
//! pool.for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 21);
//! ```
//!
//! to sample 10 random 7-cards pools:
//!
//! ```
//! # use pokerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};
pub use deck::Deck;

// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerank Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards pools. The evaluator classifies a
//! pool into a [HandCategory] and breaks ties between pools of the same
//! category by comparing the ranks that matter for that category, without
//! extracting the best five cards out of the pool.
//!
//! To use the evaluator classify each pool and compare the results:
//!
//! ```
//! # use pokerank_eval::*;
//! let p1 = parse_cards("As Ks Qs Js Ts 3d 2h").unwrap();
//! let p2 = parse_cards("9c 9d 9h 9s Kd 3c 2c").unwrap();
//!
//! let c1 = classify(&p1).unwrap();
//! let c2 = classify(&p2).unwrap();
//! assert_eq!(c1, HandCategory::StraightFlush);
//! assert_eq!(c2, HandCategory::FourOfAKind);
//! assert_eq!(compare(&p1, c1, &p2, c2), Comparison::FirstWins);
//! ```
//!
//! or evaluate the pools to [HandValue]s that can be sorted and compared
//! directly:
//!
//! ```
//! # use pokerank_eval::*;
//! let p1 = parse_cards("2s 2c 9d 9h Ks 4d 7c").unwrap();
//! let p2 = parse_cards("2d 2h 9c 9s Qc 3s 6h").unwrap();
//!
//! let v1 = HandValue::eval(&p1).unwrap();
//! let v2 = HandValue::eval(&p2).unwrap();
//! assert_eq!(v1.category(), HandCategory::TwoPair);
//! assert!(v1 > v2);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub mod eval;

pub use error::EvalError;
pub use eval::{
    Comparison, Evaluator, HandCategory, HandValue, Rules, classify, compare,
};

// Reexport cards types.
pub use pokerank_cards::{Card, Deck, Rank, Suit, parse_cards};

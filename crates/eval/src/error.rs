// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;

use pokerank_cards::Card;

/// Error returned when a pool cannot be evaluated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    /// The pool does not have between 5 and 7 cards.
    #[error("invalid pool of {len} cards, expected 5 to 7 cards")]
    InvalidPool {
        /// The number of cards in the pool.
        len: usize,
    },
    /// The pool contains the same card more than once.
    #[error("duplicate card {0} in pool")]
    DuplicateCard(Card),
    /// A showdown needs at least one pool.
    #[error("no pools to compare")]
    NoPools,
}

// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0
//
// Classifies random 7 cards pools and prints the categories frequencies, run
// with:
//
// ```bash
// $ cargo r --release --example sample7
// ```

use rand::prelude::*;

use pokerank_eval::*;

fn main() {
    const SAMPLES: usize = 1_000_000;
    const SEED: u64 = 42;

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().sample(&mut rng, SAMPLES, 7, |pool| {
        if let Ok(category) = classify(pool) {
            counts[category as usize] += 1;
        }
    });

    for category in HandCategory::categories().rev() {
        let freq = counts[category as usize] as f64 / SAMPLES as f64;
        println!("{:<17}{:>8.4}%", format!("{category}:"), freq * 100.0);
    }
}

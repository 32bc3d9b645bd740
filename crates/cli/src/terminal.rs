// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use log::info;
use rand::prelude::*;
use std::io::{self, BufRead, Write};

use pokerank_eval::{Card, Deck, Evaluator, Rules};

use crate::game::{Config, PlayerResult, Round};

/// Runs the game loop, deals a round and shows the results until the user
/// stops or the configured rounds have been played.
pub fn play(config: &Config) -> Result<()> {
    info!(
        "Dealing {} players with seed {} and {} rules",
        config.players, config.seed, config.rules
    );

    let evaluator = Evaluator::new(config.rules);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut stdout = io::stdout();
    let mut stdin = io::stdin().lock();

    let mut round_no = 1;
    loop {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let round = Round::deal(&mut deck, config.players)?;
        let results = round.showdown(&evaluator)?;

        writeln!(stdout, "Round {round_no}")?;
        print_round(&mut stdout, &round, &results)?;

        let more = match config.rounds {
            Some(rounds) => round_no < rounds,
            None => ask_again(&mut stdout, &mut stdin)?,
        };

        if !more {
            break;
        }

        writeln!(stdout)?;
        round_no += 1;
    }

    Ok(())
}

/// Ranks hands given as text and shows the results.
pub fn rank(rules: Rules, board: &str, hands: &[String]) -> Result<()> {
    let round = Round::parse(board, hands)?;
    let results = round.showdown(&Evaluator::new(rules))?;

    let mut stdout = io::stdout();
    print_round(&mut stdout, &round, &results)
}

/// Asks the user to deal again, anything but yes stops.
fn ask_again(w: &mut impl Write, r: &mut impl BufRead) -> Result<bool> {
    write!(w, "Deal another hand? [y/N] ")?;
    w.flush()?;

    let mut line = String::new();
    r.read_line(&mut line)?;

    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn print_round(w: &mut impl Write, round: &Round, results: &[PlayerResult]) -> Result<()> {
    if !round.board.is_empty() {
        write!(w, "{:<10}", "Board")?;
        print_cards(w, &round.board)?;
        writeln!(w)?;
    }

    for (player, (hand, result)) in round.hands.iter().zip(results).enumerate() {
        write!(w, "{:<10}", format!("Player {}", player + 1))?;
        print_cards(w, hand)?;

        let value = format!("  {}", result.value);
        if result.winner {
            queue!(w, style::PrintStyledContent(value.as_str().bold()))?;
            queue!(w, style::PrintStyledContent("  WINNER".green()))?;
        } else {
            queue!(w, style::Print(value))?;
        }

        writeln!(w)?;
    }

    let winners = results.iter().filter(|r| r.winner).count();
    if winners > 1 {
        writeln!(w, "Split between {winners} players")?;
    }

    w.flush()?;

    Ok(())
}

fn print_cards(w: &mut impl Write, cards: &[Card]) -> Result<()> {
    for card in cards {
        let text = format!("{:>4}", card.to_string());
        if card.suit().is_red() {
            queue!(w, style::PrintStyledContent(text.red()))?;
        } else {
            queue!(w, style::Print(text))?;
        }
    }

    Ok(())
}

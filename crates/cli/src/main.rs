// Copyright (C) 2025 Pokerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Pokerank CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand, ValueEnum};
use log::error;

use pokerank_eval::Rules;

pub mod game;
pub mod terminal;

#[derive(Debug, Parser)]
#[command(version, about = "Classifies and ranks Texas Hold'em hands.")]
struct Cli {
    /// The rules used to classify and compare hands.
    #[clap(long, value_enum, default_value_t = RulesArg::Standard, global = true)]
    rules: RulesArg,
    /// Enables debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deals hands from a shuffled deck and shows the winner.
    Play {
        /// Number of players.
        #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=6))]
        players: u8,
        /// Seed for shuffling the deck, a random seed if not set.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Number of rounds to deal, asks to deal again if not set.
        #[clap(long, short, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: Option<u32>,
    },
    /// Ranks hands given as text, e.g. `rank --board "2c 7d 9h Js Kc" "Ah Qd" "Jc 8d"`.
    Rank {
        /// The community cards.
        #[clap(long, short, default_value = "")]
        board: String,
        /// Each player cards.
        #[clap(required = true, num_args = 1..)]
        hands: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RulesArg {
    /// Standard poker rules.
    Standard,
    /// Each category checked on the whole pool.
    PoolWide,
}

impl From<RulesArg> for Rules {
    fn from(arg: RulesArg) -> Self {
        match arg {
            RulesArg::Standard => Rules::Standard,
            RulesArg::PoolWide => Rules::PoolWide,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let rules = Rules::from(cli.rules);
    let res = match cli.command {
        Command::Play {
            players,
            seed,
            rounds,
        } => {
            let config = game::Config {
                rules,
                players: players as usize,
                seed: seed.unwrap_or_else(rand::random),
                rounds,
            };

            terminal::play(&config)
        }
        Command::Rank { board, hands } => terminal::rank(rules, &board, &hands),
    };

    if let Err(e) = res {
        error!("{e:#}");
        std::process::exit(1);
    }
}

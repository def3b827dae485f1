use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use draftboard::{
    calculate_optimal, calculate_score, derive_seed, generate_all_rounds, is_valid_placement,
    Board, BoardConfig, Character,
};

#[derive(Debug, Parser)]
#[command(
    name = "simulate",
    about = "Sweep a date range and report greedy-vs-optimal draft statistics"
)]
struct Args {
    /// Character pool JSON path
    #[arg(long, default_value = "data/characters.json")]
    pool: PathBuf,

    /// First puzzle date (YYYY-MM-DD)
    #[arg(long)]
    from: String,

    /// Number of days to simulate
    #[arg(long, default_value_t = 30)]
    days: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct DayStats {
    current: u32,
    optimal: u32,
    percentage: u32,
}

/// Greedy baseline: per round take the highest-rarity option and drop it on
/// the first valid free slot (any free slot if none validates).
fn play_greedy(config: &BoardConfig, pool: &[Character], seed: u32) -> DayStats {
    let rounds = generate_all_rounds(pool, seed);
    let mut board = Board::new(config);
    let mut drafted = Vec::new();

    for round in &rounds {
        let Some(card) = round.iter().max_by_key(|c| c.points) else {
            continue;
        };
        drafted.push(card.clone());
        let slot = (0..config.slot_count())
            .find(|&s| board.is_free(s) && is_valid_placement(config, card, s))
            .or_else(|| (0..config.slot_count()).find(|&s| board.is_free(s)));
        if let Some(slot) = slot {
            // Slot was just checked free; place cannot fail here.
            let _ = board.place(slot, card.clone());
        }
    }

    let breakdown = calculate_score(config, &board);
    let optimal = calculate_optimal(config, &drafted, breakdown.total);
    DayStats {
        current: breakdown.total,
        optimal: optimal.optimal_score,
        percentage: optimal.percentage,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let db = draftboard::load_characters_from_json(&args.pool)
        .map_err(|e| format!("Pool load error: {e}"))?;
    let pool = db.to_pool();
    println!("[simulate] Loaded {} characters.", pool.len());

    let from = NaiveDate::parse_from_str(&args.from, "%Y-%m-%d")
        .map_err(|e| format!("Invalid --from '{}': {e}", args.from))?;
    let config = BoardConfig::griddy9();

    let pb = ProgressBar::new(args.days);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] days {bar:40.cyan/blue} {pos}/{len}")?
            .progress_chars("=>-"),
    );

    let results: Vec<DayStats> = (0..args.days)
        .into_par_iter()
        .flat_map_iter(|offset| {
            let date = from
                .checked_add_days(Days::new(offset))
                .expect("date range stays in calendar bounds");
            let stats: Vec<DayStats> = (1u8..=3)
                .map(|game| play_greedy(&config, &pool, derive_seed(date, game)))
                .collect();
            pb.inc(1);
            stats
        })
        .collect();

    pb.finish_and_clear();

    let games = results.len() as f64;
    let mean_current = results.iter().map(|s| f64::from(s.current)).sum::<f64>() / games;
    let mean_optimal = results.iter().map(|s| f64::from(s.optimal)).sum::<f64>() / games;
    let mean_pct = results.iter().map(|s| f64::from(s.percentage)).sum::<f64>() / games;
    let worst = results.iter().map(|s| s.percentage).min().unwrap_or(100);

    println!(
        "[simulate] {} games over {} days ({} per day).",
        results.len(),
        args.days,
        3
    );
    println!(
        "[simulate] greedy mean {mean_current:.1}, optimal mean {mean_optimal:.1}, mean {mean_pct:.1}% (worst {worst}%)."
    );

    Ok(())
}

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use draftboard::{
    calculate_optimal, calculate_score, derive_seed, generate_all_rounds, is_valid_placement,
    load_characters_from_json, Board, BoardConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfigOpt {
    Griddy9,
    Grid12,
}

#[derive(Debug, Parser)]
#[command(name = "draft-cli", about = "Draftboard daily draft inspector")]
struct Args {
    /// Character pool JSON path
    #[arg(long, default_value = "data/characters.json")]
    pool: PathBuf,

    /// Puzzle date (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Daily game index (1..=3)
    #[arg(long, default_value_t = 1)]
    game: u8,

    /// Board configuration preset
    #[arg(long, value_enum, default_value_t = ConfigOpt::Griddy9)]
    config: ConfigOpt,
}

fn print_board(config: &BoardConfig, board: &Board) {
    println!("Board (slot: requirement -> card):");
    for idx in 0..config.slot_count() {
        let req = match config.requirement(idx) {
            Some(tag) => format!("{tag:?}"),
            None => "*".to_string(),
        };
        match board.get(idx) {
            Some(card) => println!(
                "  {idx}: {req:>9} -> {} (t{}, {} pts)",
                card.character.name,
                card.rarity.tier(),
                card.points
            ),
            None => println!("  {idx}: {req:>9} -> ."),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let db = load_characters_from_json(&args.pool).map_err(|e| format!("Pool load error: {e}"))?;
    println!("Loaded {} characters (max id {}).", db.len(), db.max_id());

    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .map_err(|e| format!("Invalid --date '{}': {e}", args.date))?;
    let seed = derive_seed(date, args.game);
    println!("Seed for {} game {}: {seed}", date, args.game);

    let config = match args.config {
        ConfigOpt::Griddy9 => BoardConfig::griddy9(),
        ConfigOpt::Grid12 => BoardConfig::grid12(),
    };

    let pool = db.to_pool();
    let rounds = generate_all_rounds(&pool, seed);
    for (i, round) in rounds.iter().enumerate() {
        println!("Round {}:", i + 1);
        for card in round {
            println!(
                "  t{} {:>2}pt  {} ({} s{})",
                card.rarity.tier(),
                card.points,
                card.character.name,
                card.character.show,
                card.character.season
            );
        }
    }

    // Scripted demo: take the first option of each round, drop it on the
    // first valid free slot (falling back to any free slot).
    let mut board = Board::new(&config);
    let mut drafted = Vec::new();
    for round in &rounds {
        let Some(card) = round.first() else { continue };
        drafted.push(card.clone());
        let slot = (0..config.slot_count())
            .find(|&s| board.is_free(s) && is_valid_placement(&config, card, s))
            .or_else(|| (0..config.slot_count()).find(|&s| board.is_free(s)));
        if let Some(slot) = slot {
            board
                .place(slot, card.clone())
                .map_err(|e| format!("place failed: {e}"))?;
        }
    }

    print_board(&config, &board);

    let breakdown = calculate_score(&config, &board);
    println!(
        "Score: {} (slot {}, rarity {}, connections {})",
        breakdown.total, breakdown.slot_points, breakdown.rarity_points, breakdown.connection_points
    );
    println!(
        "Filled: {}, valid: {}, couple edges: {:?}",
        breakdown.all_filled, breakdown.all_valid, breakdown.couple_edges
    );

    let optimal = calculate_optimal(&config, &drafted, breakdown.total);
    println!(
        "Optimal: {} ({}% achieved)",
        optimal.optimal_score, optimal.percentage
    );

    Ok(())
}

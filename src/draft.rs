use crate::characters::Character;
use crate::rng::DraftRng;
use crate::types::Rarity;
use serde::{Deserialize, Serialize};

/// Rounds offered per game; one placement per round fills the 9-slot board.
pub const DRAFT_ROUNDS: usize = 9;
/// Options offered per round.
pub const OPTIONS_PER_ROUND: usize = 3;

/// Per-round rarity weights, tiers [Common, Uncommon, Rare, Legendary].
/// Each row sums to 1. Early rounds are loaded toward rare tiers; the
/// Common mass is non-decreasing down the table (risk early, safety late).
const RARITY_WEIGHTS: [[f64; 4]; DRAFT_ROUNDS] = [
    [0.10, 0.20, 0.30, 0.40],
    [0.10, 0.20, 0.35, 0.35],
    [0.15, 0.25, 0.30, 0.30],
    [0.20, 0.30, 0.30, 0.20],
    [0.30, 0.30, 0.25, 0.15],
    [0.35, 0.30, 0.25, 0.10],
    [0.45, 0.30, 0.15, 0.10],
    [0.55, 0.25, 0.15, 0.05],
    [0.60, 0.25, 0.10, 0.05],
];

#[inline]
pub fn rarity_weights(round_index: usize) -> [f64; 4] {
    RARITY_WEIGHTS[round_index.min(DRAFT_ROUNDS - 1)]
}

/// A drafted option: an owned copy of the source character plus the rarity
/// rolled for it. Created once per draft, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftCard {
    pub character: Character,
    pub rarity: Rarity,
    pub points: u32,
}

impl DraftCard {
    #[inline]
    pub fn new(character: Character, rarity: Rarity) -> Self {
        let points = rarity.points();
        Self {
            character,
            rarity,
            points,
        }
    }
}

/// The options offered in one draft round.
pub type Round = Vec<DraftCard>;

/// Roll a rarity for the given round: one draw, cumulative walk in tier
/// order, first tier whose cumulative sum exceeds the draw wins.
///
/// The Common fallback is unreachable while the weight rows sum to 1; it
/// exists so a malformed table degrades instead of desyncing the draft.
pub fn roll_rarity(rng: &mut DraftRng, round_index: usize) -> Rarity {
    let weights = rarity_weights(round_index);
    let draw = rng.next_f64();
    let mut cumulative = 0.0;
    for (tier, weight) in Rarity::all().into_iter().zip(weights) {
        cumulative += weight;
        if draw < cumulative {
            return tier;
        }
    }
    Rarity::Common
}

/// Generate the full ordered round sequence for one game.
///
/// One rng stream per game: the pool copy is shuffled once, then consumed
/// sequentially without replacement, so no character is drafted twice. If
/// the pool runs short, later rounds silently offer fewer options (the pool
/// is expected to dwarf `DRAFT_ROUNDS * OPTIONS_PER_ROUND` in practice).
pub fn generate_all_rounds(pool: &[Character], seed: u32) -> Vec<Round> {
    let mut rng = DraftRng::new(seed);
    let mut shuffled: Vec<Character> = pool.to_vec();
    rng.shuffle(&mut shuffled);

    let mut rounds: Vec<Round> = Vec::with_capacity(DRAFT_ROUNDS);
    let mut cursor = 0usize;

    for round_index in 0..DRAFT_ROUNDS {
        let take = OPTIONS_PER_ROUND.min(shuffled.len().saturating_sub(cursor));
        let mut options: Round = Vec::with_capacity(take);
        for _ in 0..take {
            let character = shuffled[cursor].clone();
            cursor += 1;
            let rarity = roll_rarity(&mut rng, round_index);
            options.push(DraftCard::new(character, rarity));
        }
        rounds.push(options);
    }

    rounds
}

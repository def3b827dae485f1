use crate::board::is_valid_placement;
use crate::config::BoardConfig;
use crate::draft::DraftCard;
use crate::engine::score::relation_value;

/// Result of the exhaustive arrangement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalResult {
    pub optimal_score: u32,
    /// round(current / optimal * 100); 100 when the optimum is zero or the
    /// card count does not match the board.
    pub percentage: u32,
}

/// Fast whole-board total for one arrangement: slot points per position,
/// the (permutation-invariant) rarity sum, and each edge relation counted
/// once then doubled. Equals `calculate_score(..).total` for a full board
/// without walking both endpoints of every edge.
fn arrangement_score(
    config: &BoardConfig,
    cards: &[DraftCard],
    order: &[usize],
    rarity_sum: u32,
) -> u32 {
    let table = config.table();
    let mut total = rarity_sum;
    for (slot, &card_idx) in order.iter().enumerate() {
        let card = &cards[card_idx];
        if config.requirement(slot).is_some() && is_valid_placement(config, card, slot) {
            total += table.slot_match;
        }
    }
    let mut edge_points = 0u32;
    for &(a, b) in config.edges() {
        let ca = &cards[order[a as usize]];
        let cb = &cards[order[b as usize]];
        edge_points += relation_value(ca, cb, table);
    }
    total + 2 * edge_points
}

/// Brute-force the maximum achievable total for a fixed card multiset.
///
/// Heap's algorithm over one owned index buffer: N! evaluations, each
/// O(edges). Acceptable only because N is small and fixed (9 or 12 slots);
/// a larger board needs a different algorithm, not a bigger loop.
///
/// A card count that does not match the board (a partially drafted game)
/// falls back to (current_score, 100%) by design rather than erroring.
pub fn calculate_optimal(
    config: &BoardConfig,
    cards: &[DraftCard],
    current_score: u32,
) -> OptimalResult {
    let n = config.slot_count();
    if cards.len() != n {
        return OptimalResult {
            optimal_score: current_score,
            percentage: 100,
        };
    }

    let rarity_sum: u32 = cards.iter().map(|c| c.points).sum();
    let mut order: Vec<usize> = (0..n).collect();
    let mut counters = vec![0usize; n];

    let mut best = arrangement_score(config, cards, &order, rarity_sum);
    let mut i = 0usize;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                order.swap(0, i);
            } else {
                order.swap(counters[i], i);
            }
            let score = arrangement_score(config, cards, &order, rarity_sum);
            best = best.max(score);
            counters[i] += 1;
            i = 0;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percentage = if best > 0 {
        (f64::from(current_score) / f64::from(best) * 100.0).round() as u32
    } else {
        100
    };

    OptimalResult {
        optimal_score: best,
        percentage,
    }
}

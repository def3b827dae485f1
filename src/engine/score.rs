use crate::board::Board;
use crate::config::{BoardConfig, ScoreTable};
use crate::draft::DraftCard;
use serde::{Deserialize, Serialize};

/// Which pairwise rules fired for a recorded connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ConnectionRule {
    ShowMatch,
    SeasonMatch,
    Combo,
    Couple,
}

/// One realized neighbor relation, recorded from the perspective of `from`.
/// Zero-point relations are never recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from: u8,
    pub to: u8,
    pub points: u32,
    pub rules: Vec<ConnectionRule>,
}

/// Point decomposition for a single slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellScore {
    pub slot_points: u32,
    pub rarity_points: u32,
    pub connection_points: u32,
    pub connections: Vec<Connection>,
    /// None for an empty slot; Some(bool) for requirement satisfaction on a
    /// filled slot (wildcard slots are always Some(true)).
    pub valid: Option<bool>,
}

impl CellScore {
    #[inline]
    pub fn total(&self) -> u32 {
        self.slot_points + self.rarity_points + self.connection_points
    }
}

/// Full board evaluation, rebuilt from scratch on every call. A connection
/// between slots i and j contributes to both cells' totals (per-person
/// scoring symmetry); `couple_edges` reports each realized couple edge once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cells: Vec<CellScore>,
    pub slot_points: u32,
    pub rarity_points: u32,
    pub connection_points: u32,
    pub total: u32,
    pub couple_edges: Vec<(u8, u8)>,
    pub all_filled: bool,
    pub all_valid: bool,
}

/// Pairwise relation value between two cards, without the rule trace.
/// Shared with the optimal search where the trace would be dead weight.
#[inline]
pub(crate) fn relation_value(a: &DraftCard, b: &DraftCard, table: &ScoreTable) -> u32 {
    let same_show = a.character.show == b.character.show;
    let same_season = a.character.season == b.character.season;
    let mut points = if same_show && same_season {
        table.show_match + table.season_match + table.combo_bonus
    } else if same_show {
        table.show_match
    } else if same_season {
        table.season_match
    } else {
        0
    };
    if a.character.is_couple_with(&b.character) {
        points += table.couple_bonus;
    }
    points
}

fn relation(a: &DraftCard, b: &DraftCard, table: &ScoreTable) -> (u32, Vec<ConnectionRule>) {
    let same_show = a.character.show == b.character.show;
    let same_season = a.character.season == b.character.season;
    let mut rules = Vec::new();
    let mut points = 0u32;

    if same_show && same_season {
        points += table.show_match + table.season_match + table.combo_bonus;
        rules.push(ConnectionRule::ShowMatch);
        rules.push(ConnectionRule::SeasonMatch);
        rules.push(ConnectionRule::Combo);
    } else if same_show {
        points += table.show_match;
        rules.push(ConnectionRule::ShowMatch);
    } else if same_season {
        points += table.season_match;
        rules.push(ConnectionRule::SeasonMatch);
    }

    if a.character.is_couple_with(&b.character) {
        points += table.couple_bonus;
        rules.push(ConnectionRule::Couple);
    }

    (points, rules)
}

/// Score a single slot: requirement match, rarity, and one recorded
/// connection per occupied neighbor with a non-zero relation.
pub fn score_cell(config: &BoardConfig, board: &Board, idx: usize) -> CellScore {
    let Some(card) = board.get(idx) else {
        return CellScore::default();
    };
    let table = config.table();

    let (slot_points, valid) = match config.requirement(idx) {
        None => (0, Some(true)),
        Some(tag) => {
            if card.character.has_tag(tag) {
                (table.slot_match, Some(true))
            } else {
                (0, Some(false))
            }
        }
    };

    let mut connection_points = 0u32;
    let mut connections: Vec<Connection> = Vec::new();
    for &n in config.neighbors(idx) {
        let Some(other) = board.get(n as usize) else {
            continue;
        };
        let (points, rules) = relation(card, other, table);
        if points == 0 {
            continue;
        }
        connection_points += points;
        #[allow(clippy::cast_possible_truncation)]
        connections.push(Connection {
            from: idx as u8,
            to: n,
            points,
            rules,
        });
    }

    CellScore {
        slot_points,
        rarity_points: card.points,
        connection_points,
        connections,
        valid,
    }
}

/// Evaluate the whole board. Pure and stateless: two calls on the same
/// unmodified board return structurally equal breakdowns.
pub fn calculate_score(config: &BoardConfig, board: &Board) -> ScoreBreakdown {
    let slots = config.slot_count();
    let mut cells: Vec<CellScore> = Vec::with_capacity(slots);
    let mut slot_points = 0u32;
    let mut rarity_points = 0u32;
    let mut connection_points = 0u32;
    let mut couple_edges: Vec<(u8, u8)> = Vec::new();

    for idx in 0..slots {
        let cell = score_cell(config, board, idx);
        slot_points += cell.slot_points;
        rarity_points += cell.rarity_points;
        connection_points += cell.connection_points;
        for conn in &cell.connections {
            if conn.rules.contains(&ConnectionRule::Couple) {
                couple_edges.push((conn.from.min(conn.to), conn.from.max(conn.to)));
            }
        }
        cells.push(cell);
    }

    // Each couple edge was recorded from both endpoints; report it once.
    couple_edges.sort_unstable();
    couple_edges.dedup();

    let all_filled = board.is_full();
    let all_valid = all_filled && cells.iter().all(|c| c.valid != Some(false));

    ScoreBreakdown {
        cells,
        slot_points,
        rarity_points,
        connection_points,
        total: slot_points + rarity_points + connection_points,
        couple_edges,
        all_filled,
        all_valid,
    }
}

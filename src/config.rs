use crate::types::Tag;
use serde::{Deserialize, Serialize};

/// Named scoring constants for one deployment. The historical variants in
/// this game family shipped incompatible tables; exactly one is canonical
/// per deployment, and both built-in topologies share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Awarded when a card satisfies a non-wildcard slot requirement.
    pub slot_match: u32,
    /// Adjacent cards from the same show.
    pub show_match: u32,
    /// Adjacent cards from the same season number.
    pub season_match: u32,
    /// Extra on top when both show and season match.
    pub combo_bonus: u32,
    /// Extra for a canonical couple, independent of show/season points.
    pub couple_bonus: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            slot_match: 2,
            show_match: 2,
            season_match: 1,
            combo_bonus: 2,
            couple_bonus: 4,
        }
    }
}

/// Static board configuration: per-slot requirement (None = wildcard),
/// symmetric simple edge list, and the scoring constants. Resolved once per
/// game and threaded explicitly into every scoring call; never mutated.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    name: &'static str,
    requirements: Vec<Option<Tag>>,
    edges: Vec<(u8, u8)>,
    neighbors: Vec<Vec<u8>>,
    table: ScoreTable,
}

impl BoardConfig {
    /// Build a configuration from raw tables. Edges are normalized to
    /// (low, high) order and deduplicated; self-loops and out-of-range
    /// endpoints are rejected.
    pub fn custom(
        name: &'static str,
        requirements: Vec<Option<Tag>>,
        edges: Vec<(u8, u8)>,
        table: ScoreTable,
    ) -> Result<Self, String> {
        let slots = requirements.len();
        if slots == 0 {
            return Err("Board must have at least one slot".to_string());
        }
        let mut normalized: Vec<(u8, u8)> = Vec::with_capacity(edges.len());
        for (a, b) in edges {
            if a == b {
                return Err(format!("Self-loop edge on slot {a}"));
            }
            if (a as usize) >= slots || (b as usize) >= slots {
                return Err(format!("Edge ({a},{b}) out of range for {slots} slots"));
            }
            normalized.push((a.min(b), a.max(b)));
        }
        normalized.sort_unstable();
        normalized.dedup();

        let mut neighbors: Vec<Vec<u8>> = vec![Vec::new(); slots];
        for &(a, b) in &normalized {
            neighbors[a as usize].push(b);
            neighbors[b as usize].push(a);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Ok(Self {
            name,
            requirements,
            edges: normalized,
            neighbors,
            table,
        })
    }

    /// The canonical daily board: 3x3 grid plus the four diagonals through
    /// the center (16 edges), three wildcard slots.
    pub fn griddy9() -> Self {
        let requirements = vec![
            Some(Tag::Uk),
            Some(Tag::Usa),
            None,
            Some(Tag::Newcomer),
            None,
            Some(Tag::Veteran),
            Some(Tag::Australia),
            Some(Tag::Spain),
            None,
        ];
        let edges = vec![
            // grid rows
            (0, 1),
            (1, 2),
            (3, 4),
            (4, 5),
            (6, 7),
            (7, 8),
            // grid columns
            (0, 3),
            (3, 6),
            (1, 4),
            (4, 7),
            (2, 5),
            (5, 8),
            // diagonals through the center
            (0, 4),
            (2, 4),
            (4, 6),
            (4, 8),
        ];
        Self::custom("griddy9", requirements, edges, ScoreTable::default())
            .expect("griddy9 tables are well formed")
    }

    /// The 3x4 variant: orthogonal grid only (17 edges), four wildcards.
    pub fn grid12() -> Self {
        let requirements = vec![
            Some(Tag::Uk),
            None,
            Some(Tag::Usa),
            Some(Tag::Sweden),
            Some(Tag::Newcomer),
            None,
            None,
            Some(Tag::Veteran),
            Some(Tag::Australia),
            None,
            Some(Tag::Spain),
            Some(Tag::Host),
        ];
        let mut edges = Vec::new();
        for r in 0u8..3 {
            for c in 0u8..4 {
                let idx = r * 4 + c;
                if c < 3 {
                    edges.push((idx, idx + 1));
                }
                if r < 2 {
                    edges.push((idx, idx + 4));
                }
            }
        }
        Self::custom("grid12", requirements, edges, ScoreTable::default())
            .expect("grid12 tables are well formed")
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.requirements.len()
    }

    #[inline]
    pub fn requirement(&self, slot: usize) -> Option<Tag> {
        self.requirements[slot]
    }

    /// Symmetric edge list, normalized (low, high), deduplicated.
    #[inline]
    pub fn edges(&self) -> &[(u8, u8)] {
        &self.edges
    }

    /// Sorted neighbor indices of a slot.
    #[inline]
    pub fn neighbors(&self, slot: usize) -> &[u8] {
        &self.neighbors[slot]
    }

    #[inline]
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }
}

use crate::config::BoardConfig;
use crate::draft::DraftCard;

/// Placement surface: one optional card per slot. Owned and mutated by the
/// caller between scoring calls; the scoring engine only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    cells: Vec<Option<DraftCard>>,
}

impl Board {
    #[inline]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            cells: vec![None; config.slot_count()],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&DraftCard> {
        self.cells.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    pub fn is_free(&self, idx: usize) -> bool {
        self.cells[idx].is_none()
    }

    /// Place a card on a free slot. A card is moved in, never shared, so no
    /// two slots can ever alias the same drafted instance.
    pub fn place(&mut self, idx: usize, card: DraftCard) -> Result<(), String> {
        if idx >= self.cells.len() {
            return Err(format!("Slot index {idx} out of range"));
        }
        if self.cells[idx].is_some() {
            return Err(format!("Slot {idx} is already occupied"));
        }
        self.cells[idx] = Some(card);
        Ok(())
    }

    /// Remove and return the card at a slot, if any.
    #[inline]
    pub fn take(&mut self, idx: usize) -> Option<DraftCard> {
        self.cells.get_mut(idx).and_then(Option::take)
    }

    /// Swap the contents of two slots (either may be empty).
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), String> {
        if a >= self.cells.len() || b >= self.cells.len() {
            return Err(format!("Swap indices ({a},{b}) out of range"));
        }
        self.cells.swap(a, b);
        Ok(())
    }

    #[inline]
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[inline]
    pub fn cells(&self) -> &[Option<DraftCard>] {
        &self.cells
    }
}

/// Whether a card may legally occupy a slot: wildcard slots accept
/// anything, a required tag must appear in the card's tag set.
#[inline]
pub fn is_valid_placement(config: &BoardConfig, card: &DraftCard, slot: usize) -> bool {
    match config.requirement(slot) {
        None => true,
        Some(tag) => card.character.has_tag(tag),
    }
}

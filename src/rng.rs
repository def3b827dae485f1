use chrono::{Datelike, NaiveDate};

/// Per-game seed multipliers; index = game_index - 1.
const GAME_MULTIPLIERS: [u32; 3] = [3, 7, 13];
/// Additive spread between the daily games.
const GAME_OFFSET: u32 = 1000;

/// Derive the shared daily seed for a (date, game_index) pair.
///
/// base = year*10000 + month*100 + day, multiplied by a per-game constant
/// plus an additive offset proportional to the game index, everything
/// wrapping at 32 bits so all clients agree on the result. Pure and total:
/// a game index outside 1..=3 clamps rather than fails.
#[inline]
#[allow(clippy::cast_sign_loss)]
pub fn derive_seed(date: NaiveDate, game_index: u8) -> u32 {
    let g = u32::from(game_index.clamp(1, 3));
    let base = (date.year() as u32)
        .wrapping_mul(10_000)
        .wrapping_add(date.month().wrapping_mul(100))
        .wrapping_add(date.day());
    base.wrapping_mul(GAME_MULTIPLIERS[(g - 1) as usize])
        .wrapping_add(g.wrapping_mul(GAME_OFFSET))
}

/// Deterministic draft RNG (mulberry-style 32-bit mixer).
///
/// The exact wrapping arithmetic is part of the game contract: every client
/// drafting the same (date, game) must walk the identical float sequence,
/// so no library PRNG can stand in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftRng {
    state: u32,
}

impl DraftRng {
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next draw in [0, 1): unsigned 32-bit output divided by 2^32.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// In-place Fisher-Yates shuffle, one draw per swap decision, iterating
    /// from the last index down to 1 with j = floor(draw * (i + 1)).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let j = (self.next_f64() * (i as f64 + 1.0)) as usize;
            items.swap(i, j);
        }
    }
}

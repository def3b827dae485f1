use serde::{Deserialize, Serialize};

/// Closed vocabulary for character tags and slot requirements.
/// Country-of-origin tags plus cast-tenure tags; requirement tables are
/// built over this enum, so adding a tag surfaces every match to revisit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Tag {
    Uk,
    Usa,
    Australia,
    Spain,
    Sweden,
    Newcomer,
    Veteran,
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    #[inline]
    pub fn all() -> [Rarity; 4] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Legendary,
        ]
    }

    /// Tier number 1..=4 as shown to players.
    #[inline]
    pub fn tier(self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Uncommon => 2,
            Rarity::Rare => 3,
            Rarity::Legendary => 4,
        }
    }

    /// Fixed tier -> point lookup. Common is deliberately worth nothing.
    #[inline]
    pub fn points(self) -> u32 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 3,
            Rarity::Legendary => 5,
        }
    }
}

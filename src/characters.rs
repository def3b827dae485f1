use crate::types::Tag;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One entry of the shared character pool. Immutable once loaded; the
/// draft generator takes owned copies, never aliases into the db.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u16,
    pub name: String,
    pub tags: Vec<Tag>,
    pub season: u16,
    pub show: String,
    /// Name of the canonically linked character, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple: Option<String>,
}

impl Character {
    #[inline]
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// True when `self` and `other` are a canonical pair, checked from
    /// either side since data files only record one direction reliably.
    #[inline]
    pub fn is_couple_with(&self, other: &Character) -> bool {
        self.couple.as_deref() == Some(other.name.as_str())
            || other.couple.as_deref() == Some(self.name.as_str())
    }
}

#[derive(Debug, Default)]
pub struct CharacterDb {
    by_id: Vec<Option<Character>>,    // index by id (len = max_id + 1)
    name_to_id: HashMap<String, u16>, // case-sensitive names as in data
    max_id: u16,
    count: usize,
}

impl CharacterDb {
    #[inline]
    pub fn get(&self, id: u16) -> Option<&Character> {
        self.by_id.get(id as usize).and_then(|c| c.as_ref())
    }

    #[inline]
    pub fn id_by_name(&self, name: &str) -> Option<u16> {
        self.name_to_id.get(name).copied()
    }

    #[inline]
    pub fn max_id(&self) -> u16 {
        self.max_id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.by_id.iter().filter_map(|o| o.as_ref())
    }

    /// Owned snapshot of the pool in id order, the shape
    /// `generate_all_rounds` consumes.
    pub fn to_pool(&self) -> Vec<Character> {
        self.iter().cloned().collect()
    }
}

fn validate_character(ch: &Character) -> Result<(), String> {
    if ch.name.trim().is_empty() {
        return Err(format!("Character id {} has an empty name", ch.id));
    }
    if ch.tags.is_empty() {
        return Err(format!(
            "Character id {} '{}' has no tags (at least one required)",
            ch.id, ch.name
        ));
    }
    if ch.season == 0 {
        return Err(format!(
            "Character id {} '{}' has season 0 (seasons are 1-based)",
            ch.id, ch.name
        ));
    }
    if ch.show.trim().is_empty() {
        return Err(format!("Character id {} '{}' has an empty show", ch.id, ch.name));
    }
    Ok(())
}

/// Load the character pool from a JSON file (runtime), building a dense id
/// index and name lookup.
pub fn load_characters_from_json<P: AsRef<Path>>(path: P) -> Result<CharacterDb, String> {
    let data = fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    let raw: Vec<Character> =
        serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))?;

    if raw.is_empty() {
        return Err("No characters in JSON".to_string());
    }

    let mut max_id: u16 = 0;
    for ch in &raw {
        validate_character(ch)?;
        max_id = max_id.max(ch.id);
    }

    let mut by_id: Vec<Option<Character>> = vec![None; (max_id as usize) + 1];
    let mut name_to_id: HashMap<String, u16> = HashMap::with_capacity(raw.len());

    for ch in raw {
        let id = ch.id;
        let name = ch.name.clone();

        // uniqueness checks
        if let Some(existing) = by_id.get(id as usize).and_then(|x| x.as_ref()) {
            return Err(format!(
                "Duplicate character id {} ('{}' and '{}')",
                id, existing.name, name
            ));
        }
        if let Some(prev) = name_to_id.insert(name.clone(), id) {
            return Err(format!(
                "Duplicate character name '{}' for ids {} and {}",
                name, prev, id
            ));
        }
        by_id[id as usize] = Some(ch);
    }

    // Couple references must resolve to a real character.
    for ch in by_id.iter().flatten() {
        if let Some(partner) = ch.couple.as_deref() {
            if !name_to_id.contains_key(partner) {
                return Err(format!(
                    "Character id {} '{}' references unknown couple '{}'",
                    ch.id, ch.name, partner
                ));
            }
        }
    }

    let count = by_id.iter().filter(|c| c.is_some()).count();

    Ok(CharacterDb {
        by_id,
        name_to_id,
        max_id,
        count,
    })
}

use crate::error::HeroError;
use crate::model::{Archetype, Character, CharacterId};
use phf::phf_map;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

// Both naming families are accepted: the role names and the classic class names.
static ARCHETYPE_TAGS: phf::Map<&'static str, Archetype> = phf_map! {
    "melee" => Archetype::Melee,
    "warrior" => Archetype::Melee,
    "caster" => Archetype::Caster,
    "mage" => Archetype::Caster,
    "marksman" => Archetype::Marksman,
    "archer" => Archetype::Marksman,
};

impl FromStr for Archetype {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ARCHETYPE_TAGS
            .get(key.as_str())
            .copied()
            .ok_or_else(|| HeroError::InvalidArchetype(s.to_string()))
    }
}

/// Hands out strictly increasing character ids, starting at 1.
///
/// Whoever builds characters owns one of these; there is no reset, so every
/// character built through the same generator gets a distinct id.
#[derive(Debug)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next: 1 }
    }

    pub fn next_id(&mut self) -> CharacterId {
        let id = CharacterId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdGenerator::next_id`] will return.
    pub fn peek(&self) -> CharacterId {
        CharacterId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_character(
    ids: &mut IdGenerator,
    name: &str,
    archetype: Archetype,
) -> Result<Character, HeroError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(HeroError::EmptyName);
    }
    let character = Character::new(ids.next_id(), name.to_string(), archetype);
    debug!(
        id = character.id().0,
        name = character.name(),
        archetype = %archetype,
        "created character"
    );
    Ok(character)
}

/// Like [`create_character`], but for an untyped archetype tag such as one
/// read from a roster file. Unknown tags are rejected before an id is spent.
pub fn create_character_from_tag(
    ids: &mut IdGenerator,
    name: &str,
    tag: &str,
) -> Result<Character, HeroError> {
    let archetype: Archetype = tag.parse()?;
    create_character(ids, name, archetype)
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub archetype: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    pub heroes: Vec<RosterEntry>,
}

impl RosterFile {
    pub fn builtin() -> Self {
        let entry = |name: &str, archetype: &str| RosterEntry {
            name: name.to_string(),
            archetype: archetype.to_string(),
        };
        RosterFile {
            heroes: vec![
                entry("Dmytro", "melee"),
                entry("Merlin", "caster"),
                entry("Leona", "marksman"),
            ],
        }
    }
}

pub fn validate_roster(roster: &RosterFile) -> anyhow::Result<()> {
    if roster.heroes.is_empty() {
        anyhow::bail!("Roster must list at least one hero");
    }
    Ok(())
}

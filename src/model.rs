use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Archetype {
    Melee,
    Caster,
    Marksman,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Archetype::Melee, Archetype::Caster, Archetype::Marksman];

    /// Starting stats handed out by the factory.
    pub fn preset(self) -> Stats {
        match self {
            Archetype::Melee => Stats {
                health: 120,
                attack: 15,
                defense: 10,
                speed: 5,
            },
            Archetype::Caster => Stats {
                health: 80,
                attack: 25,
                defense: 5,
                speed: 7,
            },
            Archetype::Marksman => Stats {
                health: 100,
                attack: 20,
                defense: 7,
                speed: 10,
            },
        }
    }

    pub fn damage_style(self) -> DamageStyle {
        match self {
            Archetype::Melee => DamageStyle::Physical,
            Archetype::Caster => DamageStyle::Magical,
            Archetype::Marksman => DamageStyle::Ranged,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Archetype::Melee => "Melee",
            Archetype::Caster => "Caster",
            Archetype::Marksman => "Marksman",
        };
        f.write_str(name)
    }
}

// Descriptive only; damage math ignores it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DamageStyle {
    Physical,
    Magical,
    Ranged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A combatant. Only the factory builds one and only the damage calculator
/// changes it, so health and the alive flag are read through accessors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Character {
    pub(crate) id: CharacterId,
    pub(crate) name: String,
    pub(crate) archetype: Archetype,
    pub(crate) style: DamageStyle,
    pub(crate) stats: Stats,
    pub(crate) alive: bool,
}

impl Character {
    pub(crate) fn new(id: CharacterId, name: String, archetype: Archetype) -> Self {
        Character {
            id,
            name,
            archetype,
            style: archetype.damage_style(),
            stats: archetype.preset(),
            alive: true,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn style(&self) -> DamageStyle {
        self.style
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Subtracts `damage`, clamping at zero. Returns the remaining health.
    /// Reaching zero marks the character dead for good.
    pub(crate) fn take_damage(&mut self, damage: i32) -> i32 {
        self.stats.health = (self.stats.health - damage).max(0);
        if self.stats.health == 0 {
            self.alive = false;
        }
        self.stats.health
    }
}

/// Result of a single hit. Not stored anywhere.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttackOutcome {
    pub damage: i32,
    pub is_critical: bool,
    pub remaining_health: i32,
}

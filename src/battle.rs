use crate::error::HeroError;
use crate::model::{Archetype, AttackOutcome, Character};
use crate::roster::{create_character, create_character_from_tag, IdGenerator};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::{debug, info};

pub const CRIT_CHANCE: f64 = 0.20;
pub const CRIT_MULTIPLIER: i32 = 2;

fn roll_critical<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f64>() < CRIT_CHANCE
}

pub fn sample_critical_hits(seed: u64, trials: usize) -> usize {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut crits = 0usize;
    for _ in 0..trials {
        if roll_critical(&mut rng) {
            crits += 1;
        }
    }
    crits
}

/// One hit from `attacker` on `defender`.
///
/// Damage is `attack - defense`, doubled on a critical hit, floored at zero.
/// There is no alive check here: hitting a fallen defender is allowed and
/// leaves it at zero health. [`run_round`] is the guarded entry point.
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &Character,
    defender: &mut Character,
    rng: &mut R,
) -> AttackOutcome {
    let base = attacker.stats().attack - defender.stats().defense;
    let is_critical = roll_critical(rng);
    let total = if is_critical { base * CRIT_MULTIPLIER } else { base };
    let damage = total.max(0);

    let was_alive = defender.is_alive();
    let remaining_health = defender.take_damage(damage);
    debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        damage,
        is_critical,
        remaining_health,
        "attack resolved"
    );
    if was_alive && !defender.is_alive() {
        info!(defender = defender.name(), by = attacker.name(), "character fell");
    }

    AttackOutcome {
        damage,
        is_critical,
        remaining_health,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundReport {
    CannotFight {
        first: String,
        second: String,
    },
    Hit {
        attacker: String,
        defender: String,
        outcome: AttackOutcome,
    },
}

impl RoundReport {
    pub fn outcome(&self) -> Option<&AttackOutcome> {
        match self {
            RoundReport::CannotFight { .. } => None,
            RoundReport::Hit { outcome, .. } => Some(outcome),
        }
    }
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundReport::CannotFight { first, second } => {
                write!(f, "{first} or {second} cannot fight anymore.")
            }
            RoundReport::Hit {
                attacker,
                defender,
                outcome,
            } => {
                write!(f, "{attacker} attacks {defender} and deals {} damage", outcome.damage)?;
                if outcome.is_critical {
                    f.write_str(" (critical hit!)")?;
                }
                write!(
                    f,
                    ". {defender} has {} health left.",
                    outcome.remaining_health
                )
            }
        }
    }
}

/// A single exchange: the faster character hits, the other only defends.
/// Equal speed favours `a`. Nothing happens if either side has fallen.
pub fn run_round<R: Rng + ?Sized>(
    a: &mut Character,
    b: &mut Character,
    rng: &mut R,
) -> RoundReport {
    if !a.is_alive() || !b.is_alive() {
        return RoundReport::CannotFight {
            first: a.name().to_string(),
            second: b.name().to_string(),
        };
    }
    let (attacker, defender) = if a.stats().speed >= b.stats().speed {
        (a, b)
    } else {
        (b, a)
    };
    let outcome = resolve_attack(attacker, defender, rng);
    RoundReport::Hit {
        attacker: attacker.name().to_string(),
        defender: defender.name().to_string(),
        outcome,
    }
}

/// Owns a roster together with the id generator that numbered it and the
/// PRNG that decides critical hits.
pub struct Arena {
    heroes: Vec<Character>,
    ids: IdGenerator,
    rng: SmallRng,
}

impl Arena {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    fn with_rng(rng: SmallRng) -> Self {
        Arena {
            heroes: Vec::new(),
            ids: IdGenerator::new(),
            rng,
        }
    }

    pub fn heroes(&self) -> &[Character] {
        &self.heroes
    }

    pub fn spawn(&mut self, name: &str, archetype: Archetype) -> Result<&Character, HeroError> {
        let hero = create_character(&mut self.ids, name, archetype)?;
        self.heroes.push(hero);
        Ok(&self.heroes[self.heroes.len() - 1])
    }

    pub fn spawn_tag(&mut self, name: &str, tag: &str) -> Result<&Character, HeroError> {
        let hero = create_character_from_tag(&mut self.ids, name, tag)?;
        self.heroes.push(hero);
        Ok(&self.heroes[self.heroes.len() - 1])
    }

    /// Runs one round between the heroes at roster slots `first` and `second`.
    pub fn round(&mut self, first: usize, second: usize) -> Result<RoundReport, HeroError> {
        if first == second {
            return Err(HeroError::SelfMatch(first));
        }
        for slot in [first, second] {
            if slot >= self.heroes.len() {
                return Err(HeroError::UnknownCharacter(slot));
            }
        }
        let (a, b) = pair_mut(&mut self.heroes, first, second);
        Ok(run_round(a, b, &mut self.rng))
    }
}

fn pair_mut(heroes: &mut [Character], i: usize, j: usize) -> (&mut Character, &mut Character) {
    if i < j {
        let (head, tail) = heroes.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = heroes.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

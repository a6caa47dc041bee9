use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HeroError {
    #[error("unknown archetype `{0}` (use melee, caster or marksman)")]
    InvalidArchetype(String),

    #[error("hero name must not be empty")]
    EmptyName,

    #[error("no hero at roster slot {0}")]
    UnknownCharacter(usize),

    #[error("hero at roster slot {0} cannot fight itself")]
    SelfMatch(usize),
}

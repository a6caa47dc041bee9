//! Searching a roster.
//!
//! [`find_by`] takes any predicate. [`find_by_field`] picks a field through a
//! marker type from [`field`], so the compiler checks that the value being
//! compared has that field's type:
//!
//! ```
//! use hero_battle::lookup::{field, find_by_field};
//! use hero_battle::model::Archetype;
//! # let heroes: Vec<hero_battle::model::Character> = Vec::new();
//! let caster = find_by_field::<field::Kind>(&heroes, &Archetype::Caster);
//! # assert!(caster.is_none());
//! ```

use crate::model::Character;

/// First character in roster order matching `pred`, or `None`.
pub fn find_by<'a, P>(characters: &'a [Character], mut pred: P) -> Option<&'a Character>
where
    P: FnMut(&Character) -> bool,
{
    characters.iter().find(|c| pred(*c))
}

/// A field of [`Character`] that can be searched on.
pub trait CharacterField {
    type Value: PartialEq + ?Sized;

    fn get(character: &Character) -> &Self::Value;
}

pub mod field {
    use super::CharacterField;
    use crate::model::{Archetype, Character, CharacterId, DamageStyle};

    pub struct Id;
    pub struct Name;
    pub struct Kind;
    pub struct Style;
    pub struct Alive;

    impl CharacterField for Id {
        type Value = CharacterId;

        fn get(character: &Character) -> &CharacterId {
            &character.id
        }
    }

    impl CharacterField for Name {
        type Value = str;

        fn get(character: &Character) -> &str {
            character.name()
        }
    }

    impl CharacterField for Kind {
        type Value = Archetype;

        fn get(character: &Character) -> &Archetype {
            &character.archetype
        }
    }

    impl CharacterField for Style {
        type Value = DamageStyle;

        fn get(character: &Character) -> &DamageStyle {
            &character.style
        }
    }

    impl CharacterField for Alive {
        type Value = bool;

        fn get(character: &Character) -> &bool {
            &character.alive
        }
    }
}

pub fn find_by_field<'a, F>(characters: &'a [Character], value: &F::Value) -> Option<&'a Character>
where
    F: CharacterField,
{
    find_by(characters, |c| F::get(c) == value)
}

//! Skills and the fixed skill-to-ability table.
//!
//! Each of the eighteen skills is keyed to exactly one ability. The mapping
//! is part of the ruleset, not configuration: it is encoded as a `const fn`
//! match and is never read from data files or user input.

use super::ability::Ability;

/// The eighteen skills of the ruleset, in alphabetical order.
///
/// Serde names follow the camelCase keys of the sheet document format
/// (`sleightOfHand`, `animalHandling`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    Acrobatics,
    AnimalHandling,
    Arcana,
    Athletics,
    Deception,
    History,
    Insight,
    Intimidation,
    Investigation,
    Medicine,
    Nature,
    Perception,
    Performance,
    Persuasion,
    Religion,
    SleightOfHand,
    Stealth,
    Survival,
}

impl Skill {
    /// All skills in canonical sheet order.
    pub const ALL: [Skill; 18] = [
        Skill::Acrobatics,
        Skill::AnimalHandling,
        Skill::Arcana,
        Skill::Athletics,
        Skill::Deception,
        Skill::History,
        Skill::Insight,
        Skill::Intimidation,
        Skill::Investigation,
        Skill::Medicine,
        Skill::Nature,
        Skill::Perception,
        Skill::Performance,
        Skill::Persuasion,
        Skill::Religion,
        Skill::SleightOfHand,
        Skill::Stealth,
        Skill::Survival,
    ];

    /// Stable index into arrays sized [`Skill::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The ability this skill is keyed to.
    ///
    /// Fixed ruleset table; user-editable skill-ability pairings are
    /// deliberately unsupported.
    pub const fn ability(self) -> Ability {
        match self {
            Skill::Athletics => Ability::Strength,

            Skill::Acrobatics => Ability::Dexterity,
            Skill::SleightOfHand => Ability::Dexterity,
            Skill::Stealth => Ability::Dexterity,

            Skill::Arcana => Ability::Intelligence,
            Skill::History => Ability::Intelligence,
            Skill::Investigation => Ability::Intelligence,
            Skill::Nature => Ability::Intelligence,
            Skill::Religion => Ability::Intelligence,

            Skill::AnimalHandling => Ability::Wisdom,
            Skill::Insight => Ability::Wisdom,
            Skill::Medicine => Ability::Wisdom,
            Skill::Perception => Ability::Wisdom,
            Skill::Survival => Ability::Wisdom,

            Skill::Deception => Ability::Charisma,
            Skill::Intimidation => Ability::Charisma,
            Skill::Performance => Ability::Charisma,
            Skill::Persuasion => Ability::Charisma,
        }
    }
}

//! Proficiency bonus and proficiency-modified roll bonuses.
//!
//! The proficiency bonus scales with character level:
//!
//! ProficiencyBonus = floor((level - 1) / 4) + 2
//!
//! Save and skill bonuses are always derived from the raw ability score plus
//! the current proficiency bonus. Stored bonus fields in documents are a
//! cache, never a source of truth: inverting a previously stored bonus to
//! recover the ability modifier drifts as soon as the score changes.

use super::ability::{Ability, ability_modifier};
use super::skill::Skill;

/// Lowest level the ruleset defines.
pub const LEVEL_MIN: i32 = 1;
/// Highest level the ruleset defines.
pub const LEVEL_MAX: i32 = 20;

/// Convert a character level into the scaling proficiency bonus.
///
/// Pure over all integers; the ruleset only defines levels 1-20 and
/// [`crate::CharacterSheet::set_level`] clamps to that range before this is
/// ever reached.
pub fn proficiency_bonus(level: i32) -> i32 {
    (level - 1).div_euclid(4) + 2
}

/// Saving throw bonus for one ability.
///
/// `ability_modifier(score) + proficiency_bonus` when proficient, the bare
/// modifier otherwise.
pub fn save_bonus(score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    ability_modifier(score) + if proficient { proficiency_bonus } else { 0 }
}

/// Skill check bonus from the keyed ability's raw score.
///
/// Same shape as [`save_bonus`]; kept as its own entry point because the two
/// proficiency lists are independent.
pub fn skill_check_bonus(score: i32, proficient: bool, proficiency_bonus: i32) -> i32 {
    ability_modifier(score) + if proficient { proficiency_bonus } else { 0 }
}

/// Per-ability saving throw proficiency flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaveProficiencies {
    flags: [bool; Ability::ALL.len()],
}

impl SaveProficiencies {
    /// Empty set: no saving throw proficiencies
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the character is proficient in this ability's saving throws
    pub fn contains(&self, ability: Ability) -> bool {
        self.flags[ability.index()]
    }

    /// Set one ability's proficiency flag
    pub fn set(&mut self, ability: Ability, proficient: bool) {
        self.flags[ability.index()] = proficient;
    }

    /// Flip one ability's proficiency flag, returning the new state
    pub fn toggle(&mut self, ability: Ability) -> bool {
        let flag = &mut self.flags[ability.index()];
        *flag = !*flag;
        *flag
    }
}

/// Per-skill proficiency flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillProficiencies {
    flags: [bool; Skill::ALL.len()],
}

impl SkillProficiencies {
    /// Empty set: no skill proficiencies
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the character is proficient in this skill
    pub fn contains(&self, skill: Skill) -> bool {
        self.flags[skill.index()]
    }

    /// Set one skill's proficiency flag
    pub fn set(&mut self, skill: Skill, proficient: bool) {
        self.flags[skill.index()] = proficient;
    }

    /// Flip one skill's proficiency flag, returning the new state
    pub fn toggle(&mut self, skill: Skill) -> bool {
        let flag = &mut self.flags[skill.index()];
        *flag = !*flag;
        *flag
    }
}

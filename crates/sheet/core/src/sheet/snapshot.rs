//! SheetSnapshot - every derived value captured at a point in time.
//!
//! The snapshot is the read model handed to views: one immutable struct with
//! all modifiers and bonuses already computed, consistent with the raw inputs
//! at capture time. It is never mutated - capture a new one after a sheet
//! edit.

use super::{CharacterSheet, HitPoints, Identity};
use crate::rules::{Ability, ArmorClassBreakdown, Skill};

/// One ability's row: raw score plus its derived values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityLine {
    pub ability: Ability,
    pub score: i32,
    pub modifier: i32,
    pub save_proficient: bool,
    pub save_bonus: i32,
}

/// One skill's row: its keyed ability, proficiency flag, and bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLine {
    pub skill: Skill,
    pub ability: Ability,
    pub proficient: bool,
    pub bonus: i32,
}

/// Complete derived view of one character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetSnapshot {
    pub identity: Identity,
    pub level: i32,
    pub proficiency_bonus: i32,
    /// Rows in [`Ability::ALL`] order
    pub abilities: [AbilityLine; 6],
    /// Rows in [`Skill::ALL`] order
    pub skills: [SkillLine; 18],
    pub armor_class: ArmorClassBreakdown,
    pub initiative: i32,
    pub speed: i32,
    pub passive_perception: i32,
    pub hit_points: HitPoints,
    pub inspiration: bool,
}

impl SheetSnapshot {
    /// Compute all derived values from the sheet's current raw inputs.
    pub fn capture(sheet: &CharacterSheet) -> Self {
        let abilities = Ability::ALL.map(|ability| AbilityLine {
            ability,
            score: sheet.ability_score(ability),
            modifier: sheet.ability_modifier(ability),
            save_proficient: sheet.save_proficient(ability),
            save_bonus: sheet.save_bonus(ability),
        });

        let skills = Skill::ALL.map(|skill| SkillLine {
            skill,
            ability: skill.ability(),
            proficient: sheet.skill_proficient(skill),
            bonus: sheet.skill_bonus(skill),
        });

        Self {
            identity: sheet.identity().clone(),
            level: sheet.level(),
            proficiency_bonus: sheet.proficiency_bonus(),
            abilities,
            skills,
            armor_class: sheet.armor_class(),
            initiative: sheet.initiative(),
            speed: sheet.speed(),
            passive_perception: sheet.passive_perception(),
            hit_points: sheet.hit_points(),
            inspiration: sheet.inspiration(),
        }
    }

    /// Row for one ability.
    pub fn ability(&self, ability: Ability) -> &AbilityLine {
        &self.abilities[ability.index()]
    }

    /// Row for one skill.
    pub fn skill(&self, skill: Skill) -> &SkillLine {
        &self.skills[skill.index()]
    }
}

//! Deterministic character-sheet rules shared across clients.
//!
//! `sheet-core` defines the canonical ruleset arithmetic (ability modifiers,
//! proficiency scaling, save and skill bonuses, armor class) and the
//! [`CharacterSheet`] aggregate that owns all raw inputs. All state mutation
//! flows through the sheet's entry points, and derived values are recomputed
//! from raw inputs on every read - stored bonuses in documents are treated as
//! a cache, never a source of truth.
pub mod error;
pub mod rules;
pub mod sheet;

pub use error::{SCORE_MAX, SCORE_MIN, SheetError};
pub use rules::{
    ARMOR_CLASS_BASE, Ability, AbilityScores, ArmorClassBreakdown, ArmorContributions, LEVEL_MAX,
    LEVEL_MIN, SaveProficiencies, Skill, SkillProficiencies, ability_modifier, format_modifier,
    proficiency_bonus, save_bonus, skill_check_bonus,
};
pub use sheet::{
    AbilityLine, CharacterSheet, DEFAULT_SPEED, HitPoints, Identity, SheetSnapshot, SkillLine,
};

//! Ruleset arithmetic - the pure layer of the engine.
//!
//! Everything in this module is a pure function or a plain value type:
//! no I/O, no interior mutability, no stored derived values.
//!
//! # Principles
//!
//! 1. **SSOT**: raw ability scores, level, and proficiency flags only
//! 2. **Derive, never invert**: bonuses are recomputed from raw inputs,
//!    stored bonus fields are treated as a cache
//! 3. **Fixed tables**: the skill-ability mapping is ruleset code, not data
//! 4. **Deterministic**: total functions over integers, no panics

pub mod ability;
pub mod armor;
pub mod proficiency;
pub mod skill;

pub use ability::{Ability, AbilityScores, ability_modifier};
pub use armor::{ARMOR_CLASS_BASE, ArmorClassBreakdown, ArmorContributions};
pub use proficiency::{
    LEVEL_MAX, LEVEL_MIN, SaveProficiencies, SkillProficiencies, proficiency_bonus, save_bonus,
    skill_check_bonus,
};
pub use skill::Skill;

/// Format a modifier with an explicit sign, the way sheets display them
/// ("+3", "-2", "+0").
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        format!("{modifier}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_modifier_signs() {
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-2), "-2");
    }
}

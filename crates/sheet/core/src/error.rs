//! Validation errors for character sheets.
//!
//! The mutation entry points on [`crate::CharacterSheet`] coerce rather than
//! fail (unparsable score text becomes 0, out-of-range levels are clamped),
//! matching the sheet editor's behavior. Strict validation is opt-in through
//! [`crate::CharacterSheet::validate`], which loaders and tools call to
//! surface suspicious documents without rejecting them.

use crate::rules::Ability;
use crate::rules::proficiency::{LEVEL_MAX, LEVEL_MIN};

/// Lowest ability score the ruleset intends.
pub const SCORE_MIN: i32 = 1;
/// Highest ability score the ruleset intends.
pub const SCORE_MAX: i32 = 30;

/// A sheet value outside the ruleset's intended domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetError {
    /// Level outside 1..=20.
    #[error("level {0} is outside the supported range {LEVEL_MIN}..={LEVEL_MAX}")]
    LevelOutOfRange(i32),

    /// Ability score outside 1..=30.
    #[error("{ability} score {score} is outside the supported range {SCORE_MIN}..={SCORE_MAX}")]
    ScoreOutOfRange { ability: Ability, score: i32 },
}

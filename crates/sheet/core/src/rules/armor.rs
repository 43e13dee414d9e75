//! Armor class: stored contributions plus the derived breakdown.
//!
//! AC = 10 + dexterity modifier + armor + shield + misc
//!
//! Only the armor, shield, and misc contributions are stored; the base is a
//! ruleset constant and the dexterity part is derived from the raw score at
//! read time, so an ability edit can never leave a stale AC behind.

/// Ruleset base armor class before any contribution.
pub const ARMOR_CLASS_BASE: i32 = 10;

/// Stored armor class contributions from equipment and effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorContributions {
    /// Worn armor contribution
    pub armor: i32,
    /// Shield contribution
    pub shield: i32,
    /// Everything else (magic items, fighting styles, cover)
    pub misc: i32,
}

impl ArmorContributions {
    /// Create contributions with specified values
    pub fn new(armor: i32, shield: i32, misc: i32) -> Self {
        Self {
            armor,
            shield,
            misc,
        }
    }
}

/// Named armor class contributions that always sum to the AC value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorClassBreakdown {
    pub base: i32,
    pub dexterity: i32,
    pub armor: i32,
    pub shield: i32,
    pub misc: i32,
}

impl ArmorClassBreakdown {
    /// Compute the breakdown from stored contributions and the current
    /// dexterity modifier.
    pub fn compute(contributions: &ArmorContributions, dexterity_modifier: i32) -> Self {
        Self {
            base: ARMOR_CLASS_BASE,
            dexterity: dexterity_modifier,
            armor: contributions.armor,
            shield: contributions.shield,
            misc: contributions.misc,
        }
    }

    /// The armor class value: sum of all named contributions.
    pub fn total(&self) -> i32 {
        self.base + self.dexterity + self.armor + self.shield + self.misc
    }
}

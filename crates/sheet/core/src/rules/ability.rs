//! Ability scores - Layer 1 of the rules engine.
//!
//! The six raw ability scores are the Single Source of Truth (SSOT) and the
//! only attribute values that are permanently stored. Every other attribute
//! number on the sheet (modifiers, save bonuses, skill bonuses, initiative,
//! armor class) is derived from these plus the character level.
//!
//! Modifier = floor((score - 10) / 2)

/// The six abilities that define a character.
///
/// The order of the variants is the canonical sheet order and is used for
/// array-backed storage throughout the crate.
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
pub enum Ability {
    /// Physical power: melee attacks, athletics, carrying capacity
    Strength,
    /// Agility: armor class, initiative, finesse skills
    Dexterity,
    /// Endurance: hit points, concentration
    Constitution,
    /// Reasoning and memory: lore skills
    Intelligence,
    /// Awareness and intuition: perception, insight
    Wisdom,
    /// Force of personality: social skills
    Charisma,
}

impl Ability {
    /// All abilities in canonical sheet order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Stable index into arrays sized [`Ability::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used for compact display.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

/// Convert a raw ability score into its modifier.
///
/// Pure and total over all integers: out-of-ruleset scores are not rejected
/// here, range validation is a caller concern. Uses Euclidean division so
/// that odd scores below 10 floor correctly (`ability_modifier(7) == -2`,
/// plain truncating division would give -1).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// The six raw ability scores of one character.
///
/// These are stored state. Modifiers are never stored alongside them - they
/// are recomputed from the raw score on every read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// Create new ability scores with specified values
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    /// Get the raw score for one ability
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Set the raw score for one ability
    pub fn set(&mut self, ability: Ability, score: i32) {
        match ability {
            Ability::Strength => self.strength = score,
            Ability::Dexterity => self.dexterity = score,
            Ability::Constitution => self.constitution = score,
            Ability::Intelligence => self.intelligence = score,
            Ability::Wisdom => self.wisdom = score,
            Ability::Charisma => self.charisma = score,
        }
    }

    /// Modifier derived from the current raw score
    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.get(ability))
    }
}

impl Default for AbilityScores {
    /// Default scores: all 10 (average person, modifier 0)
    fn default() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

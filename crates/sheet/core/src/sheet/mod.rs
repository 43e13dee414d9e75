//! The character sheet aggregate.
//!
//! [`CharacterSheet`] owns every raw input (identity, level, ability scores,
//! proficiency flags, armor contributions, speed, hit points) and is the only
//! write surface: all mutation flows through its entry points, never raw
//! field assignment. Derived values are never stored - each read recomputes
//! from the raw inputs, so a snapshot can never expose a stale modifier or
//! bonus no matter which input changed last.

pub mod snapshot;

pub use snapshot::{AbilityLine, SheetSnapshot, SkillLine};

use crate::error::{SCORE_MAX, SCORE_MIN, SheetError};
use crate::rules::proficiency::{LEVEL_MAX, LEVEL_MIN};
use crate::rules::{
    Ability, AbilityScores, ArmorClassBreakdown, ArmorContributions, SaveProficiencies, Skill,
    SkillProficiencies, proficiency_bonus, save_bonus, skill_check_bonus,
};

/// Default walking speed in feet.
pub const DEFAULT_SPEED: i32 = 30;

/// Identity fields displayed in the sheet header.
///
/// None of these participate in any derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity {
    pub name: String,
    pub race: String,
    pub class_name: String,
    pub subclass: String,
    pub background: String,
    pub alignment: String,
}

/// Current, maximum, and temporary hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub current: i32,
    pub maximum: i32,
    pub temporary: i32,
}

impl HitPoints {
    /// Create hit points with current clamped into [0, maximum].
    pub fn new(current: i32, maximum: i32, temporary: i32) -> Self {
        let maximum = maximum.max(0);
        Self {
            current: current.clamp(0, maximum),
            maximum,
            temporary: temporary.max(0),
        }
    }

    /// Character is conscious while current HP is above zero.
    pub fn is_conscious(&self) -> bool {
        self.current > 0
    }
}

/// One character's sheet: raw inputs in, derived values out.
///
/// Lifecycle: created when a character is loaded or instantiated, mutated
/// exclusively through the `set_*` / `toggle_*` entry points, dropped with
/// its owning session. The sheet is exclusively owned; callers embedding it
/// in a concurrent system provide their own per-sheet mutual exclusion.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    identity: Identity,
    level: i32,
    abilities: AbilityScores,
    save_proficiencies: SaveProficiencies,
    skill_proficiencies: SkillProficiencies,
    armor: ArmorContributions,
    speed: i32,
    hit_points: HitPoints,
    inspiration: bool,
}

impl CharacterSheet {
    /// Create a sheet with the given identity, level, and ability scores.
    ///
    /// Level is clamped into the ruleset range, like [`Self::set_level`].
    /// Everything else starts empty: no proficiencies, no armor, default
    /// speed, zero hit points.
    pub fn new(identity: Identity, level: i32, abilities: AbilityScores) -> Self {
        Self {
            identity,
            level: level.clamp(LEVEL_MIN, LEVEL_MAX),
            abilities,
            save_proficiencies: SaveProficiencies::new(),
            skill_proficiencies: SkillProficiencies::new(),
            armor: ArmorContributions::default(),
            speed: DEFAULT_SPEED,
            hit_points: HitPoints::default(),
            inspiration: false,
        }
    }

    // ------------------------------------------------------------------
    // Reads: raw inputs
    // ------------------------------------------------------------------

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn ability_score(&self, ability: Ability) -> i32 {
        self.abilities.get(ability)
    }

    pub fn save_proficient(&self, ability: Ability) -> bool {
        self.save_proficiencies.contains(ability)
    }

    pub fn skill_proficient(&self, skill: Skill) -> bool {
        self.skill_proficiencies.contains(skill)
    }

    pub fn armor_contributions(&self) -> &ArmorContributions {
        &self.armor
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    pub fn inspiration(&self) -> bool {
        self.inspiration
    }

    // ------------------------------------------------------------------
    // Reads: derived values (always recomputed, never cached)
    // ------------------------------------------------------------------

    /// Modifier for one ability, derived from its current raw score.
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// Proficiency bonus derived from the current level.
    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    /// Saving throw bonus for one ability.
    pub fn save_bonus(&self, ability: Ability) -> i32 {
        save_bonus(
            self.abilities.get(ability),
            self.save_proficiencies.contains(ability),
            self.proficiency_bonus(),
        )
    }

    /// Skill check bonus, via the fixed skill-ability table.
    pub fn skill_bonus(&self, skill: Skill) -> i32 {
        skill_check_bonus(
            self.abilities.get(skill.ability()),
            self.skill_proficiencies.contains(skill),
            self.proficiency_bonus(),
        )
    }

    /// Armor class breakdown; its total is the displayed AC.
    pub fn armor_class(&self) -> ArmorClassBreakdown {
        ArmorClassBreakdown::compute(&self.armor, self.ability_modifier(Ability::Dexterity))
    }

    /// Initiative equals the dexterity modifier.
    pub fn initiative(&self) -> i32 {
        self.ability_modifier(Ability::Dexterity)
    }

    /// Passive perception: 10 + perception skill bonus.
    pub fn passive_perception(&self) -> i32 {
        10 + self.skill_bonus(Skill::Perception)
    }

    /// Capture an immutable snapshot of every derived value.
    pub fn snapshot(&self) -> SheetSnapshot {
        SheetSnapshot::capture(self)
    }

    // ------------------------------------------------------------------
    // Mutation entry points
    // ------------------------------------------------------------------

    /// Set one ability's raw score.
    ///
    /// Accepts any integer; range validation is [`Self::validate`]'s job.
    /// Every value derived from this ability (modifier, save bonus, the
    /// bonuses of all skills keyed to it, initiative and AC for dexterity,
    /// passive perception for wisdom) reflects the new score on the next
    /// read, since nothing derived is stored.
    pub fn set_ability_score(&mut self, ability: Ability, score: i32) {
        self.abilities.set(ability, score);
    }

    /// Set one ability's raw score from user-entered text.
    ///
    /// Unparsable input becomes 0, matching the long-standing behavior of the
    /// sheet editor. Returns the score that was stored.
    pub fn set_ability_score_from_input(&mut self, ability: Ability, input: &str) -> i32 {
        let score = input.trim().parse().unwrap_or(0);
        self.set_ability_score(ability, score);
        score
    }

    /// Flip one ability's saving throw proficiency. Returns the new flag.
    ///
    /// Only this ability's save bonus changes; the bonus is re-derived from
    /// the raw score on the next read.
    pub fn toggle_save_proficiency(&mut self, ability: Ability) -> bool {
        self.save_proficiencies.toggle(ability)
    }

    /// Flip one skill's proficiency. Returns the new flag.
    ///
    /// The skill's bonus is re-derived from the current ability score and
    /// proficiency bonus, never reconstructed from a previously stored bonus.
    pub fn toggle_skill_proficiency(&mut self, skill: Skill) -> bool {
        self.skill_proficiencies.toggle(skill)
    }

    pub fn set_save_proficiency(&mut self, ability: Ability, proficient: bool) {
        self.save_proficiencies.set(ability, proficient);
    }

    pub fn set_skill_proficiency(&mut self, skill: Skill, proficient: bool) {
        self.skill_proficiencies.set(skill, proficient);
    }

    /// Set the character level, clamped into [1, 20].
    ///
    /// The proficiency bonus and every save and skill bonus that depends on
    /// it follow on the next read.
    pub fn set_level(&mut self, level: i32) {
        self.level = level.clamp(LEVEL_MIN, LEVEL_MAX);
    }

    pub fn set_armor_contributions(&mut self, armor: ArmorContributions) {
        self.armor = armor;
    }

    /// Set walking speed in feet (negative input is treated as 0).
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed.max(0);
    }

    /// Replace hit points, re-clamping current into [0, maximum].
    pub fn set_hit_points(&mut self, hit_points: HitPoints) {
        self.hit_points = HitPoints::new(
            hit_points.current,
            hit_points.maximum,
            hit_points.temporary,
        );
    }

    /// Apply damage: temporary hit points absorb first, current floors at 0.
    pub fn apply_damage(&mut self, amount: i32) {
        let amount = amount.max(0);
        let absorbed = amount.min(self.hit_points.temporary);
        self.hit_points.temporary -= absorbed;
        self.hit_points.current = (self.hit_points.current - (amount - absorbed)).max(0);
    }

    /// Heal current hit points up to the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hit_points.current =
            (self.hit_points.current + amount.max(0)).min(self.hit_points.maximum);
    }

    pub fn toggle_inspiration(&mut self) -> bool {
        self.inspiration = !self.inspiration;
        self.inspiration
    }

    pub fn set_inspiration(&mut self, inspiration: bool) {
        self.inspiration = inspiration;
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Check all raw inputs against the ruleset's intended domain.
    ///
    /// The mutation entry points never reject, so imported documents can
    /// carry out-of-range values (a coerced score of 0, for example). This
    /// reports the first offender without altering the sheet.
    pub fn validate(&self) -> Result<(), SheetError> {
        if !(LEVEL_MIN..=LEVEL_MAX).contains(&self.level) {
            return Err(SheetError::LevelOutOfRange(self.level));
        }
        for ability in Ability::ALL {
            let score = self.abilities.get(ability);
            if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                return Err(SheetError::ScoreOutOfRange { ability, score });
            }
        }
        Ok(())
    }
}

impl Default for CharacterSheet {
    /// Blank level-1 sheet with average scores.
    fn default() -> Self {
        Self::new(Identity::default(), LEVEL_MIN, AbilityScores::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shared fixture: a level 5 fighter with
    /// str 16 / dex 14 / con 15 / int 10 / wis 12 / cha 10.
    fn fixture_sheet() -> CharacterSheet {
        let mut sheet = CharacterSheet::new(
            Identity {
                name: "Test Character".into(),
                race: "Elf".into(),
                class_name: "Fighter".into(),
                ..Identity::default()
            },
            5,
            AbilityScores::new(16, 14, 15, 10, 12, 10),
        );
        sheet.set_skill_proficiency(Skill::Athletics, true);
        sheet.set_skill_proficiency(Skill::Stealth, true);
        sheet.set_save_proficiency(Ability::Strength, true);
        sheet.set_hit_points(HitPoints::new(80, 100, 10));
        sheet
    }

    #[test]
    fn fixture_character_end_to_end() {
        let sheet = fixture_sheet();

        assert_eq!(sheet.proficiency_bonus(), 3);
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 6);
        assert_eq!(sheet.skill_bonus(Skill::Stealth), 5);
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 0);
        assert_eq!(sheet.save_bonus(Ability::Strength), 6);
        assert_eq!(sheet.save_bonus(Ability::Dexterity), 2);
        assert_eq!(sheet.initiative(), 2);
        // AC with no equipment: 10 + dex 2
        assert_eq!(sheet.armor_class().total(), 12);
        // Passive perception: 10 + wis 1, not proficient
        assert_eq!(sheet.passive_perception(), 11);
    }

    #[test]
    fn set_ability_score_cascades_to_every_dependent() {
        let mut sheet = fixture_sheet();
        assert_eq!(sheet.initiative(), 2);
        assert_eq!(sheet.skill_bonus(Skill::Stealth), 5);

        sheet.set_ability_score(Ability::Dexterity, 18);

        // No other call needed: initiative, stealth, AC all follow.
        assert_eq!(sheet.initiative(), 4);
        assert_eq!(sheet.skill_bonus(Skill::Stealth), 7);
        assert_eq!(sheet.armor_class().total(), 14);
        assert_eq!(sheet.save_bonus(Ability::Dexterity), 4);
        // Unrelated abilities are untouched
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 6);
    }

    #[test]
    fn set_ability_score_is_idempotent() {
        let mut once = fixture_sheet();
        once.set_ability_score(Ability::Constitution, 15);

        let mut twice = fixture_sheet();
        twice.set_ability_score(Ability::Constitution, 15);
        twice.set_ability_score(Ability::Constitution, 15);

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn toggle_skill_twice_returns_original_bonus() {
        let mut sheet = fixture_sheet();
        let original = sheet.skill_bonus(Skill::Arcana);

        assert!(sheet.toggle_skill_proficiency(Skill::Arcana));
        assert_eq!(sheet.skill_bonus(Skill::Arcana), original + 3);

        assert!(!sheet.toggle_skill_proficiency(Skill::Arcana));
        assert_eq!(sheet.skill_bonus(Skill::Arcana), original);
    }

    #[test]
    fn toggle_uses_current_score_not_a_stored_bonus() {
        // Regression guard against back-deriving the ability modifier from a
        // previously stored bonus: change the score between toggles and the
        // bonus must follow the score.
        let mut sheet = fixture_sheet();
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 0);

        sheet.set_ability_score(Ability::Intelligence, 18);
        sheet.toggle_skill_proficiency(Skill::Arcana);
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 4 + 3);
    }

    #[test]
    fn toggle_save_only_affects_that_ability() {
        let mut sheet = fixture_sheet();
        let dex_before = sheet.save_bonus(Ability::Dexterity);
        let str_before = sheet.save_bonus(Ability::Strength);

        sheet.toggle_save_proficiency(Ability::Constitution);

        assert_eq!(sheet.save_bonus(Ability::Constitution), 2 + 3);
        assert_eq!(sheet.save_bonus(Ability::Dexterity), dex_before);
        assert_eq!(sheet.save_bonus(Ability::Strength), str_before);
    }

    #[test]
    fn set_level_cascades_to_proficient_bonuses() {
        let mut sheet = fixture_sheet();
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 6);

        sheet.set_level(9);

        assert_eq!(sheet.proficiency_bonus(), 4);
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 7);
        // Unproficient skills do not move
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 0);
    }

    #[test]
    fn set_level_clamps_to_ruleset_range() {
        let mut sheet = fixture_sheet();
        sheet.set_level(0);
        assert_eq!(sheet.level(), 1);
        sheet.set_level(25);
        assert_eq!(sheet.level(), 20);
    }

    #[test]
    fn unparsable_score_input_defaults_to_zero() {
        let mut sheet = fixture_sheet();
        assert_eq!(sheet.set_ability_score_from_input(Ability::Strength, "ab"), 0);
        assert_eq!(sheet.ability_score(Ability::Strength), 0);
        assert_eq!(sheet.ability_modifier(Ability::Strength), -5);

        assert_eq!(sheet.set_ability_score_from_input(Ability::Strength, " 17 "), 17);
        assert_eq!(sheet.ability_score(Ability::Strength), 17);
    }

    #[test]
    fn validate_flags_coerced_scores() {
        let mut sheet = fixture_sheet();
        assert_eq!(sheet.validate(), Ok(()));

        sheet.set_ability_score_from_input(Ability::Charisma, "not a number");
        assert_eq!(
            sheet.validate(),
            Err(crate::error::SheetError::ScoreOutOfRange {
                ability: Ability::Charisma,
                score: 0,
            })
        );
    }

    #[test]
    fn damage_consumes_temporary_hit_points_first() {
        let mut sheet = fixture_sheet();
        sheet.apply_damage(15);
        let hp = sheet.hit_points();
        assert_eq!(hp.temporary, 0);
        assert_eq!(hp.current, 75);

        sheet.apply_damage(200);
        assert_eq!(sheet.hit_points().current, 0);
        assert!(!sheet.hit_points().is_conscious());

        sheet.heal(40);
        assert_eq!(sheet.hit_points().current, 40);
        sheet.heal(500);
        assert_eq!(sheet.hit_points().current, 100);
    }
}

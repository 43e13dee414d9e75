//! The structured character-sheet document format.
//!
//! This is the richer, English camelCase-keyed JSON shape. Documents carry
//! cached display values next to the raw inputs (`modifier`, `saveBonus`,
//! per-skill `bonus`, the AC `value`): those are accepted on input but
//! discarded and recomputed, so a document whose caches drifted from its raw
//! scores imports cleanly. Export always writes freshly derived caches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sheet_core::{
    Ability, AbilityScores, ArmorContributions, CharacterSheet, DEFAULT_SPEED, HitPoints,
    Identity, Skill,
};

/// One attribute entry: raw score, save proficiency, and display caches.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub score: i32,
    #[serde(default)]
    pub save_proficient: bool,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<i32>,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save_bonus: Option<i32>,
}

/// One skill entry: proficiency flag plus display caches.
///
/// The `ability` field is written for readers of the raw document; the
/// binding table lives in [`Skill::ability`] and the stored value is ignored
/// on import.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    #[serde(default)]
    pub proficient: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<Ability>,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<i32>,
}

/// Armor class contributions with cached totals.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClassEntry {
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub shield: i32,
    #[serde(default)]
    pub misc: i32,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<i32>,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dexterity: Option<i32>,
    /// Cache only - recomputed on import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,
}

/// A complete character sheet document.
///
/// Attributes missing from the map default to score 10; missing skills are
/// simply not proficient.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub character_class: String,
    #[serde(default)]
    pub subclass: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub alignment: String,
    pub level: i32,
    pub attributes: BTreeMap<Ability, AttributeEntry>,
    #[serde(default)]
    pub skills: BTreeMap<Skill, SkillEntry>,
    #[serde(default)]
    pub armor_class: ArmorClassEntry,
    #[serde(default = "default_speed")]
    pub speed: i32,
    #[serde(default)]
    pub hit_points: HitPoints,
    #[serde(default, rename = "inspirationHeroica")]
    pub inspiration: bool,
}

fn default_speed() -> i32 {
    DEFAULT_SPEED
}

impl SheetDocument {
    /// Build the owned sheet from this document's raw inputs.
    ///
    /// All cached derived fields are dropped here; the sheet recomputes them
    /// from the raw scores, level, and proficiency flags.
    pub fn into_sheet(self) -> CharacterSheet {
        let identity = Identity {
            name: self.name,
            race: self.race,
            class_name: self.character_class,
            subclass: self.subclass,
            background: self.background,
            alignment: self.alignment,
        };
        let mut sheet = CharacterSheet::new(identity, self.level, AbilityScores::default());

        for (ability, entry) in &self.attributes {
            sheet.set_ability_score(*ability, entry.score);
            sheet.set_save_proficiency(*ability, entry.save_proficient);
        }
        for (skill, entry) in &self.skills {
            sheet.set_skill_proficiency(*skill, entry.proficient);
        }

        sheet.set_armor_contributions(ArmorContributions::new(
            self.armor_class.armor,
            self.armor_class.shield,
            self.armor_class.misc,
        ));
        sheet.set_speed(self.speed);
        sheet.set_hit_points(self.hit_points);
        sheet.set_inspiration(self.inspiration);
        sheet
    }

    /// Export a sheet with all display caches freshly derived.
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        let snapshot = sheet.snapshot();

        let attributes = snapshot
            .abilities
            .iter()
            .map(|line| {
                (
                    line.ability,
                    AttributeEntry {
                        score: line.score,
                        save_proficient: line.save_proficient,
                        modifier: Some(line.modifier),
                        save_bonus: Some(line.save_bonus),
                    },
                )
            })
            .collect();

        let skills = snapshot
            .skills
            .iter()
            .map(|line| {
                (
                    line.skill,
                    SkillEntry {
                        proficient: line.proficient,
                        ability: Some(line.ability),
                        bonus: Some(line.bonus),
                    },
                )
            })
            .collect();

        let ac = snapshot.armor_class;
        Self {
            name: snapshot.identity.name,
            race: snapshot.identity.race,
            character_class: snapshot.identity.class_name,
            subclass: snapshot.identity.subclass,
            background: snapshot.identity.background,
            alignment: snapshot.identity.alignment,
            level: snapshot.level,
            attributes,
            skills,
            armor_class: ArmorClassEntry {
                armor: ac.armor,
                shield: ac.shield,
                misc: ac.misc,
                base: Some(ac.base),
                dexterity: Some(ac.dexterity),
                value: Some(ac.total()),
            },
            speed: snapshot.speed,
            hit_points: snapshot.hit_points,
            inspiration: snapshot.inspiration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "name": "Test Character",
        "race": "Elf",
        "characterClass": "Fighter",
        "subclass": "Champion",
        "level": 5,
        "attributes": {
            "strength": { "score": 16, "saveProficient": true, "modifier": 3, "saveBonus": 6 },
            "dexterity": { "score": 14 },
            "constitution": { "score": 15 },
            "intelligence": { "score": 10 },
            "wisdom": { "score": 12 },
            "charisma": { "score": 10 }
        },
        "skills": {
            "athletics": { "proficient": true, "ability": "strength", "bonus": 6 },
            "stealth": { "proficient": true, "ability": "dexterity", "bonus": 5 },
            "arcana": { "proficient": false }
        },
        "armorClass": { "armor": 4, "shield": 2, "misc": 0 },
        "speed": 30,
        "hitPoints": { "current": 80, "maximum": 100, "temporary": 10 }
    }"#;

    #[test]
    fn fixture_imports_with_derived_values() {
        let document: SheetDocument = serde_json::from_str(FIXTURE).unwrap();
        let sheet = document.into_sheet();

        assert_eq!(sheet.identity().name, "Test Character");
        assert_eq!(sheet.proficiency_bonus(), 3);
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 6);
        assert_eq!(sheet.skill_bonus(Skill::Stealth), 5);
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 0);
        assert_eq!(sheet.armor_class().total(), 10 + 2 + 4 + 2);
        assert_eq!(sheet.hit_points().current, 80);
    }

    #[test]
    fn stale_caches_are_ignored_on_import() {
        // saveBonus and skill bonuses in the document disagree with the raw
        // scores; the imported sheet must follow the scores.
        let raw = r#"{
            "level": 1,
            "attributes": {
                "strength": { "score": 8, "saveProficient": false, "modifier": 3, "saveBonus": 6 }
            },
            "skills": {
                "athletics": { "proficient": false, "bonus": 6 }
            }
        }"#;
        let sheet: CharacterSheet = serde_json::from_str::<SheetDocument>(raw)
            .unwrap()
            .into_sheet();

        assert_eq!(sheet.ability_modifier(Ability::Strength), -1);
        assert_eq!(sheet.save_bonus(Ability::Strength), -1);
        assert_eq!(sheet.skill_bonus(Skill::Athletics), -1);
        // Unlisted abilities default to 10
        assert_eq!(sheet.ability_score(Ability::Wisdom), 10);
    }

    #[test]
    fn export_writes_fresh_caches() {
        let sheet = serde_json::from_str::<SheetDocument>(FIXTURE)
            .unwrap()
            .into_sheet();
        let document = SheetDocument::from_sheet(&sheet);

        let strength = &document.attributes[&Ability::Strength];
        assert_eq!(strength.modifier, Some(3));
        assert_eq!(strength.save_bonus, Some(6));
        assert_eq!(document.armor_class.value, Some(18));
        assert_eq!(document.skills[&Skill::Stealth].bonus, Some(5));
        // Export covers the full skill list, not just the ones in the input
        assert_eq!(document.skills.len(), 18);
    }

    #[test]
    fn export_import_round_trip_preserves_the_sheet() {
        let sheet = serde_json::from_str::<SheetDocument>(FIXTURE)
            .unwrap()
            .into_sheet();

        let json = serde_json::to_string(&SheetDocument::from_sheet(&sheet)).unwrap();
        let restored = serde_json::from_str::<SheetDocument>(&json)
            .unwrap()
            .into_sheet();

        assert_eq!(restored.snapshot(), sheet.snapshot());
    }
}

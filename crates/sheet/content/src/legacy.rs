//! One-time migration adapter for the legacy sheet shape.
//!
//! Early sheet documents were flat and Portuguese-keyed: `atributos` held six
//! bare integers, `pericias` mapped skill ids to plain proficiency booleans,
//! and hit points lived in `pvAtual` / `pvTotal` / `pvTemp`. That shape
//! carried no save proficiencies and no armor breakdown (AC was computed as
//! 10 + dexterity modifier at display time).
//!
//! The adapter translates the fixed key vocabulary; unrecognized `pericias`
//! keys are skipped rather than rejected, since old documents occasionally
//! carried homebrew entries the sheet never displayed.

use std::collections::BTreeMap;

use serde::Deserialize;
use sheet_core::{AbilityScores, CharacterSheet, HitPoints, Identity, Skill};

/// The six legacy attribute fields.
#[derive(Clone, Debug, Deserialize)]
pub struct LegacyAtributos {
    pub forca: i32,
    pub destreza: i32,
    pub constituicao: i32,
    pub inteligencia: i32,
    pub sabedoria: i32,
    pub carisma: i32,
}

/// A legacy flat sheet document.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySheetDocument {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub raca: String,
    #[serde(default)]
    pub classe: String,
    pub nivel: i32,
    pub atributos: LegacyAtributos,
    #[serde(default)]
    pub pericias: BTreeMap<String, bool>,
    #[serde(default)]
    pub pv_atual: i32,
    #[serde(default)]
    pub pv_total: i32,
    #[serde(default)]
    pub pv_temp: i32,
}

/// Legacy skill id vocabulary, as it appeared in the old documents.
fn skill_from_legacy(id: &str) -> Option<Skill> {
    let skill = match id {
        "acrobacia" => Skill::Acrobatics,
        "arcanismo" => Skill::Arcana,
        "atletismo" => Skill::Athletics,
        "atuacao" => Skill::Performance,
        "enganacao" => Skill::Deception,
        "furtividade" => Skill::Stealth,
        "historia" => Skill::History,
        "intimidacao" => Skill::Intimidation,
        "intuicao" => Skill::Insight,
        "investigacao" => Skill::Investigation,
        "lidarComAnimais" => Skill::AnimalHandling,
        "medicina" => Skill::Medicine,
        "natureza" => Skill::Nature,
        "percepcao" => Skill::Perception,
        "persuasao" => Skill::Persuasion,
        "prestidigitacao" => Skill::SleightOfHand,
        "religiao" => Skill::Religion,
        "sobrevivencia" => Skill::Survival,
        _ => return None,
    };
    Some(skill)
}

impl LegacySheetDocument {
    /// Migrate into the structured sheet.
    ///
    /// Save proficiencies and armor contributions start empty - the legacy
    /// shape never stored them, so the migrated AC is 10 + dexterity
    /// modifier, exactly what the old display computed.
    pub fn into_sheet(self) -> CharacterSheet {
        let identity = Identity {
            name: self.nome,
            race: self.raca,
            class_name: self.classe,
            ..Identity::default()
        };
        let scores = AbilityScores::new(
            self.atributos.forca,
            self.atributos.destreza,
            self.atributos.constituicao,
            self.atributos.inteligencia,
            self.atributos.sabedoria,
            self.atributos.carisma,
        );
        let mut sheet = CharacterSheet::new(identity, self.nivel, scores);

        for (id, proficient) in &self.pericias {
            if let Some(skill) = skill_from_legacy(id) {
                sheet.set_skill_proficiency(skill, *proficient);
            }
        }

        sheet.set_hit_points(HitPoints::new(self.pv_atual, self.pv_total, self.pv_temp));
        sheet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_core::Ability;

    const FIXTURE: &str = r#"{
        "nome": "Personagem de Teste",
        "raca": "Elfo",
        "classe": "Guerreiro",
        "nivel": 5,
        "pvAtual": 80,
        "pvTotal": 100,
        "pvTemp": 10,
        "atributos": {
            "forca": 16,
            "destreza": 14,
            "constituicao": 15,
            "inteligencia": 10,
            "sabedoria": 12,
            "carisma": 10
        },
        "pericias": {
            "atletismo": true,
            "furtividade": true,
            "arcanismo": false,
            "lidarComAnimais": true
        }
    }"#;

    #[test]
    fn legacy_fixture_migrates_faithfully() {
        let document: LegacySheetDocument = serde_json::from_str(FIXTURE).unwrap();
        let sheet = document.into_sheet();

        assert_eq!(sheet.identity().name, "Personagem de Teste");
        assert_eq!(sheet.identity().class_name, "Guerreiro");
        assert_eq!(sheet.level(), 5);
        assert_eq!(sheet.ability_score(Ability::Strength), 16);
        assert_eq!(sheet.skill_bonus(Skill::Athletics), 6);
        assert_eq!(sheet.skill_bonus(Skill::Stealth), 5);
        assert_eq!(sheet.skill_bonus(Skill::AnimalHandling), 4);
        assert_eq!(sheet.skill_bonus(Skill::Arcana), 0);
        assert_eq!(sheet.hit_points(), HitPoints::new(80, 100, 10));
        // Legacy AC: 10 + dexterity modifier, no equipment breakdown
        assert_eq!(sheet.armor_class().total(), 12);
        // Legacy documents carry no save proficiencies
        assert!(!sheet.save_proficient(Ability::Strength));
    }

    #[test]
    fn unknown_pericia_keys_are_skipped() {
        let raw = r#"{
            "nivel": 3,
            "atributos": {
                "forca": 10, "destreza": 10, "constituicao": 10,
                "inteligencia": 10, "sabedoria": 10, "carisma": 10
            },
            "pericias": { "alquimia": true, "atletismo": true }
        }"#;
        let sheet = serde_json::from_str::<LegacySheetDocument>(raw)
            .unwrap()
            .into_sheet();

        assert!(sheet.skill_proficient(Skill::Athletics));
        // Every known skill except athletics stays unproficient
        let proficient = Skill::ALL
            .iter()
            .filter(|s| sheet.skill_proficient(**s))
            .count();
        assert_eq!(proficient, 1);
    }

    #[test]
    fn legacy_id_vocabulary_covers_all_eighteen_skills() {
        let ids = [
            "acrobacia",
            "arcanismo",
            "atletismo",
            "atuacao",
            "enganacao",
            "furtividade",
            "historia",
            "intimidacao",
            "intuicao",
            "investigacao",
            "lidarComAnimais",
            "medicina",
            "natureza",
            "percepcao",
            "persuasao",
            "prestidigitacao",
            "religiao",
            "sobrevivencia",
        ];
        let mut mapped: Vec<Skill> = ids
            .iter()
            .map(|id| skill_from_legacy(id).expect("known id"))
            .collect();
        mapped.sort();
        mapped.dedup();
        assert_eq!(mapped.len(), Skill::ALL.len());
    }
}

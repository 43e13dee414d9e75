//! Sheet loaders for reading character documents from files.
//!
//! Both document shapes are accepted: the structured English-keyed format
//! and the legacy Portuguese-keyed format, which is migrated on the spot.
//! Shape detection is structural - a document with `attributes` is
//! structured, one with `atributos` is legacy.

use std::path::Path;

use serde::Deserialize;
use sheet_core::CharacterSheet;

use crate::document::SheetDocument;
use crate::legacy::LegacySheetDocument;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyDocument {
    Structured(SheetDocument),
    Legacy(LegacySheetDocument),
}

/// Loader for character sheet JSON documents.
pub struct SheetLoader;

impl SheetLoader {
    /// Load a character sheet from a JSON file, either shape.
    pub fn load(path: &Path) -> LoadResult<CharacterSheet> {
        let raw = read_file(path)?;
        Self::from_json(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse sheet {}: {}", path.display(), e))
    }

    /// Parse a character sheet from an in-memory JSON document.
    pub fn from_json(raw: &str) -> LoadResult<CharacterSheet> {
        let document: AnyDocument = serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("not a recognized sheet document shape: {}", e))?;
        Ok(match document {
            AnyDocument::Structured(document) => document.into_sheet(),
            AnyDocument::Legacy(document) => document.into_sheet(),
        })
    }

    /// Serialize a sheet to the structured document format.
    pub fn to_json(sheet: &CharacterSheet) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(&SheetDocument::from_sheet(
            sheet,
        ))?)
    }
}

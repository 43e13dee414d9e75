//! Character sheet document formats and loaders.
//!
//! This crate houses the serde models for sheet JSON documents and the
//! loaders that turn them into [`sheet_core::CharacterSheet`] values:
//! - The structured English-keyed format (current)
//! - The legacy flat Portuguese-keyed format, migrated on load
//!
//! Documents may carry cached derived values (modifiers, bonuses, AC totals);
//! loaders always discard those and let the sheet recompute from raw inputs.

pub mod document;
pub mod legacy;
pub mod loader;

pub use document::{ArmorClassEntry, AttributeEntry, SheetDocument, SkillEntry};
pub use legacy::{LegacyAtributos, LegacySheetDocument};
pub use loader::{LoadResult, SheetLoader};

//! Preset catalogue with deterministic fallback
//!
//! The catalogue is a read-only value built once, either from the shipped
//! preset document or from a caller-supplied one, and injected into the
//! renderer. Construction checks that the `universal` preset is usable, so
//! lookups never fail: unknown, disabled and empty presets all resolve to
//! `universal`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::error::PresetError;
use super::markdown::parse_document;
use super::path::resolve_path;
use crate::schema::ContentItem;
use crate::utils::UNIVERSAL_PRESET;

/// Preset document shipped with the crate
const BUILTIN_DOCUMENT: &str = include_str!("../../presets/PRESETS.md");

static BUILTIN: LazyLock<PresetCatalogue> = LazyLock::new(|| {
    PresetCatalogue::from_markdown(BUILTIN_DOCUMENT)
        .expect("BUG: shipped presets/PRESETS.md is statically valid")
});

/// One output column: header label plus the path that fills each cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    pub path: String,
}

impl ColumnDef {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: path.into(),
        }
    }

    /// Display string for this column's cell in `item`
    #[must_use]
    pub fn extract(&self, item: &ContentItem) -> String {
        resolve_path(item, &self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetDefinition {
    pub id: String,
    pub label: String,
    pub description: String,
    pub enabled: bool,
    pub columns: Vec<ColumnDef>,
}

impl PresetDefinition {
    /// Whether lookups may return this preset rather than the fallback
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.columns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalogue {
    version: u32,
    presets: BTreeMap<String, PresetDefinition>,
    /// Copy of `universal`, held so fallback lookups skip the map
    fallback: PresetDefinition,
}

impl PresetCatalogue {
    /// Build a catalogue from preset definitions
    ///
    /// # Errors
    ///
    /// Returns an error if two presets share an id or if `universal` is
    /// missing, disabled, or has no columns.
    pub fn new(
        version: u32,
        presets: impl IntoIterator<Item = PresetDefinition>,
    ) -> Result<Self, PresetError> {
        let mut by_id = BTreeMap::new();
        for preset in presets {
            if by_id.contains_key(&preset.id) {
                return Err(PresetError::DuplicatePreset(preset.id));
            }
            by_id.insert(preset.id.clone(), preset);
        }

        let fallback = match by_id.get(UNIVERSAL_PRESET) {
            None => return Err(PresetError::MissingFallback(UNIVERSAL_PRESET.to_string())),
            Some(universal) if !universal.is_usable() => {
                return Err(PresetError::UnusableFallback(UNIVERSAL_PRESET.to_string()));
            }
            Some(universal) => universal.clone(),
        };

        Ok(Self {
            version,
            presets: by_id,
            fallback,
        })
    }

    /// Parse a preset document (see `presets/PRESETS.md` for the format)
    ///
    /// # Errors
    ///
    /// Returns an error for malformed lines or an unusable `universal` preset.
    pub fn from_markdown(doc: &str) -> Result<Self, PresetError> {
        let parsed = parse_document(doc)?;
        Self::new(parsed.version, parsed.presets)
    }

    /// Catalogue parsed from the shipped preset document
    #[must_use]
    pub fn builtin() -> &'static PresetCatalogue {
        &BUILTIN
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Exact lookup without fallback
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PresetDefinition> {
        self.presets.get(id)
    }

    /// All presets, ordered by id
    pub fn list(&self) -> impl Iterator<Item = &PresetDefinition> {
        self.presets.values()
    }

    /// The preset to render for `id`, falling back to `universal`
    #[must_use]
    pub fn resolve(&self, id: &str) -> &PresetDefinition {
        match self.presets.get(id) {
            Some(preset) if preset.is_usable() => preset,
            _ => {
                if id != UNIVERSAL_PRESET {
                    log::debug!("Preset '{id}' unavailable, using '{UNIVERSAL_PRESET}'");
                }
                &self.fallback
            }
        }
    }

    /// Columns for `id`, falling back to `universal`
    #[must_use]
    pub fn columns_for(&self, id: &str) -> &[ColumnDef] {
        &self.resolve(id).columns
    }
}

impl Default for PresetCatalogue {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(id: &str, enabled: bool, columns: Vec<ColumnDef>) -> PresetDefinition {
        PresetDefinition {
            id: id.to_string(),
            label: id.to_string(),
            description: String::new(),
            enabled,
            columns,
        }
    }

    #[test]
    fn test_builtin_catalogue_loads() {
        let catalogue = PresetCatalogue::builtin();
        assert_eq!(catalogue.version(), 1);
        assert!(catalogue.get("universal").is_some_and(PresetDefinition::is_usable));
        assert!(catalogue.get("legacy-qa").is_some_and(|p| !p.enabled));
        let ids: Vec<&str> = catalogue.list().map(|p| p.id.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_fallback_for_unknown_and_disabled() {
        let catalogue = PresetCatalogue::builtin();
        let universal = catalogue.columns_for("universal");
        assert_eq!(catalogue.columns_for("nonexistent-preset"), universal);
        assert_eq!(catalogue.columns_for("legacy-qa"), universal);
        assert_ne!(catalogue.columns_for("content-only"), universal);
    }

    #[test]
    fn test_enabled_but_empty_falls_back() {
        let catalogue = PresetCatalogue::new(
            1,
            vec![
                preset("universal", true, vec![ColumnDef::new("c", "Content", "content.value")]),
                preset("hollow", true, Vec::new()),
            ],
        )
        .unwrap();
        assert_eq!(catalogue.resolve("hollow").id, "universal");
    }

    #[test]
    fn test_construction_requires_usable_universal() {
        assert_eq!(
            PresetCatalogue::new(1, Vec::new()).unwrap_err(),
            PresetError::MissingFallback("universal".into())
        );
        assert_eq!(
            PresetCatalogue::new(1, vec![preset("universal", false, vec![ColumnDef::new("a", "A", "id")])])
                .unwrap_err(),
            PresetError::UnusableFallback("universal".into())
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let columns = vec![ColumnDef::new("a", "A", "id")];
        let err = PresetCatalogue::new(
            1,
            vec![preset("universal", true, columns.clone()), preset("universal", true, columns)],
        )
        .unwrap_err();
        assert_eq!(err, PresetError::DuplicatePreset("universal".into()));
    }
}

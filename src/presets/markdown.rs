//! Parser for the human-authored preset document
//!
//! The document is Markdown. A `version: N` line before the first preset sets
//! the catalogue version. Each preset is a `## <id>` section with
//! `label:`, `description:` and `enabled:` lines, then a `columns:` line
//! followed by `- key, label, path` bullets. Prose anywhere is ignored.

use super::catalogue::{ColumnDef, PresetDefinition};
use super::error::PresetError;

/// Catalogue contents before fallback rules are checked
pub(super) struct ParsedDocument {
    pub version: u32,
    pub presets: Vec<PresetDefinition>,
}

struct Section {
    preset: PresetDefinition,
    in_columns: bool,
}

pub(super) fn parse_document(doc: &str) -> Result<ParsedDocument, PresetError> {
    let mut version = 1;
    let mut presets = Vec::new();
    let mut current: Option<Section> = None;

    for (index, raw_line) in doc.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if let Some(id) = line.strip_prefix("## ") {
            if let Some(section) = current.take() {
                presets.push(section.preset);
            }
            let id = id.trim().to_string();
            current = Some(Section {
                preset: PresetDefinition {
                    label: id.clone(),
                    id,
                    description: String::new(),
                    enabled: true,
                    columns: Vec::new(),
                },
                in_columns: false,
            });
            continue;
        }

        if current.is_none() {
            if let Some(value) = line.strip_prefix("version:") {
                let value = value.trim();
                version = value.parse().map_err(|_| PresetError::InvalidVersion {
                    line: line_no,
                    value: value.to_string(),
                })?;
                continue;
            }
            if is_attribute_line(line) {
                return Err(PresetError::OutsidePreset {
                    line: line_no,
                    text: line.to_string(),
                });
            }
            continue;
        }

        let Some(section) = current.as_mut() else {
            continue;
        };

        if let Some(value) = line.strip_prefix("label:") {
            section.preset.label = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("description:") {
            section.preset.description = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("enabled:") {
            section.preset.enabled = parse_flag(value.trim()).ok_or_else(|| {
                PresetError::InvalidEnabled {
                    preset: section.preset.id.clone(),
                    line: line_no,
                    value: value.trim().to_string(),
                }
            })?;
        } else if line == "columns:" {
            section.in_columns = true;
        } else if section.in_columns
            && let Some(column_line) = line.strip_prefix("- ")
        {
            let column = parse_column(column_line).ok_or_else(|| PresetError::MalformedColumn {
                preset: section.preset.id.clone(),
                line: line_no,
                text: line.to_string(),
            })?;
            section.preset.columns.push(column);
        }
    }

    if let Some(section) = current {
        presets.push(section.preset);
    }

    Ok(ParsedDocument { version, presets })
}

fn is_attribute_line(line: &str) -> bool {
    ["label:", "description:", "enabled:"]
        .iter()
        .any(|prefix| line.starts_with(prefix))
        || line == "columns:"
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// `key, label, path`; the label may itself contain commas
fn parse_column(line: &str) -> Option<ColumnDef> {
    let (key, rest) = line.split_once(',')?;
    let (label, path) = rest.rsplit_once(',')?;
    let (key, label, path) = (key.trim(), label.trim(), path.trim());
    if key.is_empty() || label.is_empty() || path.is_empty() {
        return None;
    }
    Some(ColumnDef::new(key, label, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections_and_columns() {
        let doc = "\
# Presets

version: 4

## universal
label: Universal
description: All fields.
enabled: true
columns:
- content, Content, content.value
- visible, Visible, meta.visible

## empty
enabled: no
columns:
";
        let parsed = parse_document(doc).unwrap();
        assert_eq!(parsed.version, 4);
        assert_eq!(parsed.presets.len(), 2);

        let universal = &parsed.presets[0];
        assert_eq!(universal.id, "universal");
        assert_eq!(universal.label, "Universal");
        assert_eq!(universal.description, "All fields.");
        assert!(universal.enabled);
        assert_eq!(universal.columns.len(), 2);
        assert_eq!(universal.columns[1].path, "meta.visible");

        let empty = &parsed.presets[1];
        assert_eq!(empty.label, "empty");
        assert!(!empty.enabled);
        assert!(empty.columns.is_empty());
    }

    #[test]
    fn test_bullets_before_columns_are_prose() {
        let doc = "## universal\n- not a column\ncolumns:\n- a, A, a\n";
        let parsed = parse_document(doc).unwrap();
        assert_eq!(parsed.presets[0].columns.len(), 1);
    }

    #[test]
    fn test_label_with_commas() {
        let column = parse_column("price, Price, incl. tax, content.value").unwrap();
        assert_eq!(column.key, "price");
        assert_eq!(column.label, "Price, incl. tax");
        assert_eq!(column.path, "content.value");
    }

    #[test]
    fn test_malformed_column_reports_line() {
        let doc = "## universal\ncolumns:\n- only-a-key\n";
        let err = parse_document(doc).err().unwrap();
        assert_eq!(
            err,
            PresetError::MalformedColumn {
                preset: "universal".into(),
                line: 3,
                text: "- only-a-key".into()
            }
        );
    }

    #[test]
    fn test_invalid_enabled_and_version() {
        assert!(matches!(
            parse_document("## universal\nenabled: maybe\n"),
            Err(PresetError::InvalidEnabled { line: 2, .. })
        ));
        assert!(matches!(
            parse_document("version: two\n"),
            Err(PresetError::InvalidVersion { line: 1, .. })
        ));
    }

    #[test]
    fn test_attribute_outside_preset() {
        assert!(matches!(
            parse_document("label: Orphan\n## universal\n"),
            Err(PresetError::OutsidePreset { line: 1, .. })
        ));
    }
}

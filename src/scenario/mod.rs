//! Scenario panels
//!
//! Six fixed interaction flows, each a thin adapter from operator inputs to
//! one dispatcher call. Every panel implements [`ScenarioForm`]: the drawing
//! and event layers only see fields, toggles and edits, while each module
//! owns its presence checks, request building and response interpretation.
//!
//! Panels validate presence only ("at least one JSON file"); file contents
//! are read at build time and never schema-validated locally.

pub mod image;
pub mod tags;
pub mod translate;

use crate::dispatch::{FilePart, RequestSpec};
use crate::types::Scenario;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Toggle,
}

/// One drawable form field: a label, its kind, and the current display value
/// (text content, or a checked/unchecked marker for toggles).
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
}

/// The seam between a scenario's input state and the generic form UI.
pub trait ScenarioForm {
    fn fields(&self) -> Vec<FieldSpec>;

    /// Flip a toggle (or select a radio entry); no-op for text fields.
    fn toggle(&mut self, index: usize);

    /// Current raw text of a field, used as the initial edit buffer.
    fn edit_value(&self, index: usize) -> String;

    /// Commit an edited value back into a text field.
    fn commit(&mut self, index: usize, value: String);

    /// Presence-only validation; an `Err` is surfaced as a local warning and
    /// nothing is dispatched.
    fn validate(&self) -> Result<(), String>;

    /// Read the inputs (and any referenced local files) into a request.
    fn build(&self) -> Result<RequestSpec, String>;
}

/// Input state for all five dispatchable panels.
#[derive(Debug, Default)]
pub struct ScenarioForms {
    pub resolve_multi: tags::ResolveMultiInput,
    pub resolve_upload: tags::ResolveUploadInput,
    pub translate_single: translate::TranslateSingleInput,
    pub translate_multi: translate::TranslateMultiInput,
    pub localization: image::LocalizationInput,
}

impl ScenarioForms {
    pub fn get(&self, scenario: Scenario) -> Option<&dyn ScenarioForm> {
        match scenario {
            Scenario::ResolveMulti => Some(&self.resolve_multi),
            Scenario::ResolveUpload => Some(&self.resolve_upload),
            Scenario::TranslateSingle => Some(&self.translate_single),
            Scenario::TranslateMulti => Some(&self.translate_multi),
            Scenario::ImageLocalization => Some(&self.localization),
            Scenario::Results => None,
        }
    }

    pub fn get_mut(&mut self, scenario: Scenario) -> Option<&mut dyn ScenarioForm> {
        match scenario {
            Scenario::ResolveMulti => Some(&mut self.resolve_multi),
            Scenario::ResolveUpload => Some(&mut self.resolve_upload),
            Scenario::TranslateSingle => Some(&mut self.translate_single),
            Scenario::TranslateMulti => Some(&mut self.translate_multi),
            Scenario::ImageLocalization => Some(&mut self.localization),
            Scenario::Results => None,
        }
    }
}

/// Scenario-specific interpretation of a structured response body; `None`
/// means there is nothing beyond the raw JSON view.
pub fn response_lines(scenario: Scenario, data: &Value) -> Option<Vec<String>> {
    match scenario {
        Scenario::ResolveMulti => tags::multi_result_lines(data),
        Scenario::TranslateSingle => translate::translated_node_lines(data),
        Scenario::TranslateMulti => translate::multi_result_lines(data),
        Scenario::ImageLocalization => image::analysis_lines(data),
        Scenario::ResolveUpload | Scenario::Results => None,
    }
}

pub fn health_request() -> RequestSpec {
    RequestSpec::get("/health")
}

/// Split a comma-separated list into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a comma-separated path list into trimmed, non-empty paths.
pub fn split_paths(input: &str) -> Vec<PathBuf> {
    split_list(input).into_iter().map(PathBuf::from).collect()
}

/// Content type derived from the file extension, for path-based uploads.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Read one local file into a multipart part. A read failure is treated like
/// missing input: a local warning, no dispatch.
pub fn read_file_part(field: &'static str, path: &Path) -> Result<FilePart, String> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("Could not read {}: {}", path.display(), e))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("file")
        .to_string();

    Ok(FilePart {
        field: field.to_string(),
        filename,
        bytes,
        content_type: content_type_for_path(path).to_string(),
    })
}

/// Sample DOMX document for quick testing: three nodes covering a heading, a
/// button and a paragraph.
pub fn sample_domx() -> Value {
    json!({
        "nodes": {
            "node1": {
                "id": "node1",
                "text": "Welcome to our website",
                "type": "heading"
            },
            "node2": {
                "id": "node2",
                "text": "Click here to learn more",
                "type": "button"
            },
            "node3": {
                "id": "node3",
                "text": "Contact us at info@example.com",
                "type": "paragraph"
            }
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("Dutch, Russian , ,Swedish"),
            vec!["Dutch", "Russian", "Swedish"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_content_type_for_known_extensions() {
        assert_eq!(content_type_for_path(Path::new("a.json")), "application/json");
        assert_eq!(content_type_for_path(Path::new("a.PNG")), "image/png");
        assert_eq!(content_type_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(content_type_for_path(Path::new("a.webp")), "image/webp");
    }

    #[test]
    fn test_content_type_defaults_to_octet_stream() {
        assert_eq!(content_type_for_path(Path::new("a.bin")), "application/octet-stream");
        assert_eq!(content_type_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_read_file_part_missing_file_is_an_error() {
        let err = read_file_part("json_files", Path::new("/definitely/not/here.json"))
            .unwrap_err();
        assert!(err.contains("Could not read"));
    }

    #[test]
    fn test_read_file_part_carries_field_and_bytes() {
        let path = test_support::fixture("part.json", br#"{"nodes":{}}"#);
        let part = read_file_part("json_file", &path).unwrap();
        assert_eq!(part.field, "json_file");
        assert_eq!(part.bytes, br#"{"nodes":{}}"#.to_vec());
        assert_eq!(part.content_type, "application/json");
        assert!(part.filename.ends_with("part.json"));
    }

    #[test]
    fn test_sample_domx_has_three_nodes() {
        let sample = sample_domx();
        assert_eq!(sample["nodes"].as_object().unwrap().len(), 3);
        assert_eq!(sample["nodes"]["node1"]["type"], "heading");
    }
}

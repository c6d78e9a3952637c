//! Translation scenarios
//!
//! Scenario 3 translates one DOMX document into one target language via
//! `/v1/translate`; on success the embedded `translated_json` string is
//! parsed into nodes and rendered one line per node. Scenario 4 fans N
//! documents out over M languages via `/v1/translate/multi`.

use super::{read_file_part, split_list, split_paths, FieldKind, FieldSpec, ScenarioForm};
use crate::dispatch::RequestSpec;
use crate::utils::excerpt;
use serde::Deserialize;
use serde_json::Value;

pub const LANGUAGES: [&str; 10] = [
    "Spanish",
    "French",
    "German",
    "Italian",
    "Portuguese",
    "Japanese",
    "Chinese",
    "Korean",
    "Arabic",
    "Hindi",
];

/// The remote API signals a per-language translation failure with a literal
/// text prefix instead of a structured error field. Fragile, but it is the
/// backend's contract; keep the check in one place.
pub fn is_error_text(content: &str) -> bool {
    content.starts_with("Error")
}

#[derive(Debug, Deserialize)]
struct TranslatedNode {
    id: String,
    text: String,
}

/// Inputs for single translation: a fixed-list language pick, an optional
/// freeform language that wins when present, and one document path.
#[derive(Debug, Default)]
pub struct TranslateSingleInput {
    pub language_index: usize,
    pub custom_language: String,
    pub json_path: String,
}

impl TranslateSingleInput {
    /// Freeform entry wins over the fixed-list selection.
    pub fn target_language(&self) -> String {
        let custom = self.custom_language.trim();
        if custom.is_empty() {
            LANGUAGES[self.language_index.min(LANGUAGES.len() - 1)].to_string()
        } else {
            custom.to_string()
        }
    }
}

impl ScenarioForm for TranslateSingleInput {
    fn fields(&self) -> Vec<FieldSpec> {
        let mut fields: Vec<FieldSpec> = LANGUAGES
            .iter()
            .enumerate()
            .map(|(idx, language)| FieldSpec {
                label: *language,
                kind: FieldKind::Toggle,
                value: (if idx == self.language_index { "(x)" } else { "( )" }).to_string(),
            })
            .collect();

        fields.push(FieldSpec {
            label: "Custom language (overrides selection)",
            kind: FieldKind::Text,
            value: self.custom_language.clone(),
        });
        fields.push(FieldSpec {
            label: "JSON file",
            kind: FieldKind::Text,
            value: self.json_path.clone(),
        });
        fields
    }

    fn toggle(&mut self, index: usize) {
        if index < LANGUAGES.len() {
            self.language_index = index;
        }
    }

    fn edit_value(&self, index: usize) -> String {
        match index {
            i if i == LANGUAGES.len() => self.custom_language.clone(),
            i if i == LANGUAGES.len() + 1 => self.json_path.clone(),
            _ => String::new(),
        }
    }

    fn commit(&mut self, index: usize, value: String) {
        match index {
            i if i == LANGUAGES.len() => self.custom_language = value,
            i if i == LANGUAGES.len() + 1 => self.json_path = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.json_path.trim().is_empty() {
            return Err("Please provide a JSON file".to_string());
        }
        Ok(())
    }

    fn build(&self) -> Result<RequestSpec, String> {
        self.validate()?;

        let mut spec = RequestSpec::post("/v1/translate");
        spec.files.push(read_file_part(
            "json_file",
            std::path::Path::new(self.json_path.trim()),
        )?);
        spec.fields
            .push(("language".to_string(), self.target_language()));

        Ok(spec)
    }
}

/// Inputs for multi translation: a checkbox per fixed language, freeform
/// comma-separated additions, and N document paths.
#[derive(Debug)]
pub struct TranslateMultiInput {
    pub selected: [bool; LANGUAGES.len()],
    pub custom_languages: String,
    pub json_paths: String,
}

impl Default for TranslateMultiInput {
    fn default() -> Self {
        let mut selected = [false; LANGUAGES.len()];
        // Spanish and French pre-selected
        selected[0] = true;
        selected[1] = true;
        Self {
            selected,
            custom_languages: String::new(),
            json_paths: String::new(),
        }
    }
}

impl TranslateMultiInput {
    /// Selection order first, then freeform additions. Deliberately not
    /// de-duplicated; the joined field mirrors the operator's input verbatim.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = LANGUAGES
            .iter()
            .zip(self.selected.iter())
            .filter(|(_, selected)| **selected)
            .map(|(language, _)| language.to_string())
            .collect();
        languages.extend(split_list(&self.custom_languages));
        languages
    }

    pub fn joined_languages(&self) -> String {
        self.languages().join(",")
    }
}

impl ScenarioForm for TranslateMultiInput {
    fn fields(&self) -> Vec<FieldSpec> {
        let mut fields: Vec<FieldSpec> = LANGUAGES
            .iter()
            .zip(self.selected.iter())
            .map(|(language, selected)| FieldSpec {
                label: *language,
                kind: FieldKind::Toggle,
                value: (if *selected { "[x]" } else { "[ ]" }).to_string(),
            })
            .collect();

        fields.push(FieldSpec {
            label: "Additional languages (comma-separated)",
            kind: FieldKind::Text,
            value: self.custom_languages.clone(),
        });
        fields.push(FieldSpec {
            label: "JSON files (comma-separated paths)",
            kind: FieldKind::Text,
            value: self.json_paths.clone(),
        });
        fields
    }

    fn toggle(&mut self, index: usize) {
        if index < LANGUAGES.len() {
            self.selected[index] = !self.selected[index];
        }
    }

    fn edit_value(&self, index: usize) -> String {
        match index {
            i if i == LANGUAGES.len() => self.custom_languages.clone(),
            i if i == LANGUAGES.len() + 1 => self.json_paths.clone(),
            _ => String::new(),
        }
    }

    fn commit(&mut self, index: usize, value: String) {
        match index {
            i if i == LANGUAGES.len() => self.custom_languages = value,
            i if i == LANGUAGES.len() + 1 => self.json_paths = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if split_paths(&self.json_paths).is_empty() {
            return Err("Please provide at least one JSON file".to_string());
        }
        if self.languages().is_empty() {
            return Err("Please select at least one language".to_string());
        }
        Ok(())
    }

    fn build(&self) -> Result<RequestSpec, String> {
        self.validate()?;

        let mut spec = RequestSpec::post("/v1/translate/multi");
        for path in split_paths(&self.json_paths) {
            spec.files.push(read_file_part("json_files", &path)?);
        }
        spec.fields
            .push(("languages".to_string(), self.joined_languages()));

        Ok(spec)
    }
}

/// Render the single-translation response: parse the embedded
/// `translated_json` string into nodes, falling back to the raw string.
pub fn translated_node_lines(data: &Value) -> Option<Vec<String>> {
    let raw = data.get("translated_json")?.as_str()?;

    match serde_json::from_str::<Vec<TranslatedNode>>(raw) {
        Ok(nodes) => Some(
            nodes
                .iter()
                .map(|node| format!("Node {}: {}", node.id, node.text))
                .collect(),
        ),
        Err(_) => Some(vec![raw.to_string()]),
    }
}

/// Render the multi-translation response: filename → language → translated
/// content or an error string.
pub fn multi_result_lines(data: &Value) -> Option<Vec<String>> {
    let files = data.as_object()?;
    let mut lines = Vec::new();

    for (filename, translations) in files {
        lines.push(format!("── {}", filename));

        let Some(languages) = translations.as_object() else {
            lines.push(format!("  {}", translations));
            continue;
        };

        for (language, content) in languages {
            let Some(text) = content.as_str() else {
                lines.push(format!("  {}: {}", language, content));
                continue;
            };

            if is_error_text(text) {
                lines.push(format!("  {}: {}", language, text));
                continue;
            }

            // A successful entry is itself a JSON document of nodes; preview
            // the first few texts like the operator console does.
            match serde_json::from_str::<Vec<Value>>(text) {
                Ok(nodes) => {
                    lines.push(format!("  {}:", language));
                    for node in nodes.iter().take(3) {
                        let node_text = node.get("text").and_then(Value::as_str).unwrap_or("N/A");
                        lines.push(format!("    - {}", excerpt(node_text, 100)));
                    }
                }
                Err(_) => lines.push(format!("  {}: {}", language, excerpt(text, 500))),
            }
        }
    }

    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::test_support::fixture;
    use serde_json::json;

    #[test]
    fn test_target_language_prefers_custom_entry() {
        let mut input = TranslateSingleInput::default();
        input.language_index = 2;
        assert_eq!(input.target_language(), "German");

        input.custom_language = " Basque ".to_string();
        assert_eq!(input.target_language(), "Basque");
    }

    #[test]
    fn test_joined_languages_keeps_order_and_appends_custom() {
        // Defaults select Spanish and French
        let input = TranslateMultiInput {
            custom_languages: "Dutch".to_string(),
            ..Default::default()
        };
        assert_eq!(input.joined_languages(), "Spanish,French,Dutch");
    }

    #[test]
    fn test_joined_languages_does_not_deduplicate() {
        let input = TranslateMultiInput {
            custom_languages: "Spanish, Spanish".to_string(),
            ..Default::default()
        };
        assert_eq!(input.joined_languages(), "Spanish,French,Spanish,Spanish");
    }

    #[test]
    fn test_translate_multi_build_sends_joined_field() {
        let a = fixture("tm-a.json", b"{}");
        let b = fixture("tm-b.json", b"{}");

        let input = TranslateMultiInput {
            custom_languages: "Dutch".to_string(),
            json_paths: format!("{},{}", a.display(), b.display()),
            ..Default::default()
        };

        let spec = input.build().unwrap();
        assert_eq!(spec.endpoint, "/v1/translate/multi");
        assert_eq!(spec.files.len(), 2);
        assert!(spec.files.iter().all(|f| f.field == "json_files"));
        assert_eq!(
            spec.fields,
            vec![("languages".to_string(), "Spanish,French,Dutch".to_string())]
        );
    }

    #[test]
    fn test_translate_multi_requires_files_and_languages() {
        let input = TranslateMultiInput {
            json_paths: String::new(),
            ..Default::default()
        };
        assert!(input.validate().is_err());

        let mut input = TranslateMultiInput {
            json_paths: "/tmp/whatever.json".to_string(),
            ..Default::default()
        };
        input.selected = [false; LANGUAGES.len()];
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_translate_single_build_sends_language_field() {
        let doc = fixture("ts.json", br#"{"nodes":{}}"#);
        let input = TranslateSingleInput {
            language_index: 5,
            custom_language: String::new(),
            json_path: doc.display().to_string(),
        };

        let spec = input.build().unwrap();
        assert_eq!(spec.endpoint, "/v1/translate");
        assert_eq!(spec.files[0].field, "json_file");
        assert_eq!(
            spec.fields,
            vec![("language".to_string(), "Japanese".to_string())]
        );
    }

    #[test]
    fn test_translated_node_lines_surfaces_nodes() {
        let data = json!({
            "translated_json": "[{\"id\":\"node1\",\"text\":\"Bienvenido\"}]"
        });
        let lines = translated_node_lines(&data).unwrap();
        assert_eq!(lines, vec!["Node node1: Bienvenido"]);
    }

    #[test]
    fn test_translated_node_lines_falls_back_to_raw_string() {
        let data = json!({"translated_json": "not a node list"});
        let lines = translated_node_lines(&data).unwrap();
        assert_eq!(lines, vec!["not a node list"]);
    }

    #[test]
    fn test_translated_node_lines_absent_without_field() {
        assert!(translated_node_lines(&json!({"other": 1})).is_none());
    }

    #[test]
    fn test_is_error_text_matches_literal_prefix() {
        assert!(is_error_text("Error: model unavailable"));
        assert!(!is_error_text("fine"));
        assert!(!is_error_text(" error lowercase"));
    }

    #[test]
    fn test_multi_result_lines_renders_errors_and_previews() {
        let data = json!({
            "a.json": {
                "Spanish": "[{\"id\":\"n1\",\"text\":\"Hola\"},{\"id\":\"n2\",\"text\":\"Adios\"}]",
                "French": "Error: quota exceeded"
            }
        });

        let lines = multi_result_lines(&data).unwrap();
        let joined = lines.join("\n");
        assert!(joined.contains("── a.json"));
        assert!(joined.contains("- Hola"));
        assert!(joined.contains("- Adios"));
        assert!(joined.contains("French: Error: quota exceeded"));
    }
}

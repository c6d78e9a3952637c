//! Tag resolution scenarios
//!
//! Scenario 1 sends N DOMX documents (plus optional images or remote image
//! references) to `/v1/tags/resolve/multi` and renders one outcome per file.
//! Scenario 2 sends a single document with an optional direct image upload to
//! `/v1/tags/resolve/upload`.

use super::{read_file_part, split_paths, FieldKind, FieldSpec, ScenarioForm};
use crate::dispatch::RequestSpec;
use serde_json::Value;

/// Inputs for the multi-document panel: comma-separated local paths plus an
/// optional remote path list that is forwarded verbatim as a form field.
#[derive(Debug, Default)]
pub struct ResolveMultiInput {
    pub json_paths: String,
    pub image_paths: String,
    pub remote_image_paths: String,
}

impl ScenarioForm for ResolveMultiInput {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                label: "JSON files (comma-separated paths)",
                kind: FieldKind::Text,
                value: self.json_paths.clone(),
            },
            FieldSpec {
                label: "Images (comma-separated paths)",
                kind: FieldKind::Text,
                value: self.image_paths.clone(),
            },
            FieldSpec {
                label: "Remote image paths (s3:// or local)",
                kind: FieldKind::Text,
                value: self.remote_image_paths.clone(),
            },
        ]
    }

    fn toggle(&mut self, _index: usize) {}

    fn edit_value(&self, index: usize) -> String {
        match index {
            0 => self.json_paths.clone(),
            1 => self.image_paths.clone(),
            2 => self.remote_image_paths.clone(),
            _ => String::new(),
        }
    }

    fn commit(&mut self, index: usize, value: String) {
        match index {
            0 => self.json_paths = value,
            1 => self.image_paths = value,
            2 => self.remote_image_paths = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        if split_paths(&self.json_paths).is_empty() {
            return Err("Please provide at least one JSON file".to_string());
        }
        Ok(())
    }

    fn build(&self) -> Result<RequestSpec, String> {
        self.validate()?;

        let mut spec = RequestSpec::post("/v1/tags/resolve/multi");
        for path in split_paths(&self.json_paths) {
            spec.files.push(read_file_part("json_files", &path)?);
        }
        for path in split_paths(&self.image_paths) {
            spec.files.push(read_file_part("images", &path)?);
        }

        let remote = self.remote_image_paths.trim();
        if !remote.is_empty() {
            spec.fields
                .push(("image_paths".to_string(), remote.to_string()));
        }

        Ok(spec)
    }
}

/// Inputs for the single-document upload panel.
#[derive(Debug, Default)]
pub struct ResolveUploadInput {
    pub json_path: String,
    pub image_path: String,
}

impl ScenarioForm for ResolveUploadInput {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                label: "JSON file",
                kind: FieldKind::Text,
                value: self.json_path.clone(),
            },
            FieldSpec {
                label: "Image file (optional)",
                kind: FieldKind::Text,
                value: self.image_path.clone(),
            },
        ]
    }

    fn toggle(&mut self, _index: usize) {}

    fn edit_value(&self, index: usize) -> String {
        match index {
            0 => self.json_path.clone(),
            1 => self.image_path.clone(),
            _ => String::new(),
        }
    }

    fn commit(&mut self, index: usize, value: String) {
        match index {
            0 => self.json_path = value,
            1 => self.image_path = value,
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

        let mut spec = RequestSpec::post("/v1/tags/resolve/upload");
        spec.files.push(read_file_part(
            "json_file",
            std::path::Path::new(self.json_path.trim()),
        )?);

        let image = self.image_path.trim();
        if !image.is_empty() {
            spec.files
                .push(read_file_part("image_file", std::path::Path::new(image))?);
        }

        Ok(spec)
    }
}

/// Render the multi-resolve response: an ordered sequence of per-file
/// outcomes, each with an optional error, an image source, and a `result`
/// string that is itself expected to parse as JSON.
pub fn multi_result_lines(data: &Value) -> Option<Vec<String>> {
    let entries = data.as_array()?;
    let mut lines = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        let filename = entry
            .get("filename")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("File {}", idx));
        lines.push(format!("── {}", filename));

        if let Some(error) = entry.get("error").and_then(Value::as_str) {
            lines.push(format!("  error: {}", error));
            continue;
        }

        let image_source = entry
            .get("image_source")
            .and_then(Value::as_str)
            .unwrap_or("none");
        lines.push(format!("  image source: {}", image_source));

        match entry.get("result").and_then(Value::as_str) {
            Some(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(parsed) => {
                    let pretty =
                        serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| raw.to_string());
                    for line in pretty.lines() {
                        lines.push(format!("  {}", line));
                    }
                }
                Err(_) => lines.push(format!("  {}", raw)),
            },
            None => lines.push("  no result".to_string()),
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
    fn test_resolve_multi_requires_json_files() {
        let input = ResolveMultiInput::default();
        assert!(input.validate().is_err());
        assert!(input.build().is_err());

        let input = ResolveMultiInput {
            json_paths: " , ".to_string(),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_resolve_multi_builds_repeated_parts_in_order() {
        let a = fixture("multi-a.json", b"{}");
        let b = fixture("multi-b.json", b"{}");
        let img = fixture("multi.png", b"\x89PNG");

        let input = ResolveMultiInput {
            json_paths: format!("{}, {}", a.display(), b.display()),
            image_paths: img.display().to_string(),
            remote_image_paths: "s3://bucket/one.jpg, /srv/two.png".to_string(),
        };

        let spec = input.build().unwrap();
        assert_eq!(spec.endpoint, "/v1/tags/resolve/multi");

        let fields: Vec<&str> = spec.files.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["json_files", "json_files", "images"]);
        assert_eq!(spec.files[2].content_type, "image/png");
        assert_eq!(
            spec.fields,
            vec![(
                "image_paths".to_string(),
                "s3://bucket/one.jpg, /srv/two.png".to_string()
            )]
        );
    }

    #[test]
    fn test_resolve_upload_optional_image() {
        let doc = fixture("upload.json", br#"{"nodes":{}}"#);

        let input = ResolveUploadInput {
            json_path: doc.display().to_string(),
            image_path: String::new(),
        };
        let spec = input.build().unwrap();
        assert_eq!(spec.endpoint, "/v1/tags/resolve/upload");
        assert_eq!(spec.files.len(), 1);
        assert_eq!(spec.files[0].field, "json_file");
    }

    #[test]
    fn test_resolve_upload_requires_json() {
        let input = ResolveUploadInput::default();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_multi_result_lines_mixes_errors_and_results() {
        let data = json!([
            {"filename": "a.json", "error": "image not found"},
            {"filename": "b.json", "image_source": "s3", "result": "{\"resolved\": 2}"},
            {"filename": "c.json", "result": "not json"}
        ]);

        let lines = multi_result_lines(&data).unwrap();
        let joined = lines.join("\n");
        assert!(joined.contains("── a.json"));
        assert!(joined.contains("error: image not found"));
        assert!(joined.contains("image source: s3"));
        assert!(joined.contains("\"resolved\": 2"));
        assert!(joined.contains("not json"));
    }

    #[test]
    fn test_multi_result_lines_tolerates_missing_keys() {
        let data = json!([{}]);
        let lines = multi_result_lines(&data).unwrap();
        assert!(lines[0].contains("File 0"));
        assert!(lines.iter().any(|l| l.contains("no result")));
    }

    #[test]
    fn test_multi_result_lines_needs_a_sequence() {
        assert!(multi_result_lines(&json!({"not": "a list"})).is_none());
    }
}

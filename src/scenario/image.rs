//! Image localization scenario
//!
//! Drives `/v1/image/full-localization-pipeline`: one original image (local
//! upload or remote path reference), a target locale, website context, an
//! auto-generate flag and an optional custom prompt. The response is either a
//! generated image (binary) or a structured suitability analysis.

use super::{read_file_part, FieldKind, FieldSpec, ScenarioForm};
use crate::dispatch::RequestSpec;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug)]
pub struct LocalizationInput {
    pub image_path: String,
    pub remote_image_path: String,
    pub target_locale: String,
    pub website_context: String,
    pub auto_generate: bool,
    pub custom_prompt: String,
}

impl Default for LocalizationInput {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            remote_image_path: String::new(),
            target_locale: "Japanese market".to_string(),
            website_context: "Professional B2B software company website".to_string(),
            auto_generate: true,
            custom_prompt: String::new(),
        }
    }
}

impl ScenarioForm for LocalizationInput {
    fn fields(&self) -> Vec<FieldSpec> {
        vec![
            FieldSpec {
                label: "Original image (local path)",
                kind: FieldKind::Text,
                value: self.image_path.clone(),
            },
            FieldSpec {
                label: "Or image path (s3:// or local)",
                kind: FieldKind::Text,
                value: self.remote_image_path.clone(),
            },
            FieldSpec {
                label: "Target locale",
                kind: FieldKind::Text,
                value: self.target_locale.clone(),
            },
            FieldSpec {
                label: "Website context",
                kind: FieldKind::Text,
                value: self.website_context.clone(),
            },
            FieldSpec {
                label: "Auto-generate localized image",
                kind: FieldKind::Toggle,
                value: (if self.auto_generate { "[x]" } else { "[ ]" }).to_string(),
            },
            FieldSpec {
                label: "Custom generation prompt (optional)",
                kind: FieldKind::Text,
                value: self.custom_prompt.clone(),
            },
        ]
    }

    fn toggle(&mut self, index: usize) {
        if index == 4 {
            self.auto_generate = !self.auto_generate;
        }
    }

    fn edit_value(&self, index: usize) -> String {
        match index {
            0 => self.image_path.clone(),
            1 => self.remote_image_path.clone(),
            2 => self.target_locale.clone(),
            3 => self.website_context.clone(),
            5 => self.custom_prompt.clone(),
            _ => String::new(),
        }
    }

    fn commit(&mut self, index: usize, value: String) {
        match index {
            0 => self.image_path = value,
            1 => self.remote_image_path = value,
            2 => self.target_locale = value,
            3 => self.website_context = value,
            5 => self.custom_prompt = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), String> {
        let has_image =
            !self.image_path.trim().is_empty() || !self.remote_image_path.trim().is_empty();
        if !has_image || self.target_locale.trim().is_empty() || self.website_context.trim().is_empty()
        {
            return Err("Please provide an image and fill in all required fields".to_string());
        }
        Ok(())
    }

    fn build(&self) -> Result<RequestSpec, String> {
        self.validate()?;

        let mut spec = RequestSpec::post("/v1/image/full-localization-pipeline");

        let upload = self.image_path.trim();
        if !upload.is_empty() {
            spec.files
                .push(read_file_part("original_image", std::path::Path::new(upload))?);
        }

        spec.fields.push((
            "target_locale".to_string(),
            self.target_locale.trim().to_string(),
        ));
        spec.fields.push((
            "website_context".to_string(),
            self.website_context.trim().to_string(),
        ));
        spec.fields.push((
            "auto_generate".to_string(),
            (if self.auto_generate { "true" } else { "false" }).to_string(),
        ));

        let remote = self.remote_image_path.trim();
        if !remote.is_empty() {
            spec.fields
                .push(("original_image_path".to_string(), remote.to_string()));
        }

        let prompt = self.custom_prompt.trim();
        if self.auto_generate && !prompt.is_empty() {
            spec.fields
                .push(("custom_generation_prompt".to_string(), prompt.to_string()));
        }

        Ok(spec)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct AnalysisView {
    overall_suitability_score: Option<Value>,
    positive_elements: Vec<String>,
    problematic_elements: Vec<ProblematicElementView>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProblematicElementView {
    element: Option<String>,
    reason: Option<String>,
    suggested_change: Option<String>,
}

fn score_display(score: &Option<Value>) -> String {
    match score {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

/// Render the structured (non-binary) pipeline response: the suitability
/// analysis, free-text suggestions, and a generation-failure notice when the
/// backend could not produce an image.
pub fn analysis_lines(data: &Value) -> Option<Vec<String>> {
    let obj = data.as_object()?;
    let mut lines = Vec::new();

    if let Some(analysis) = obj.get("analysis") {
        let view: AnalysisView = serde_json::from_value(analysis.clone()).unwrap_or_default();

        lines.push(format!(
            "Suitability score: {}/10",
            score_display(&view.overall_suitability_score)
        ));
        lines.push(format!(
            "Problematic elements: {}",
            view.problematic_elements.len()
        ));

        if !view.positive_elements.is_empty() {
            lines.push("Positive elements:".to_string());
            for element in &view.positive_elements {
                lines.push(format!("  • {}", element));
            }
        }

        if !view.problematic_elements.is_empty() {
            lines.push("Problematic elements:".to_string());
            for element in &view.problematic_elements {
                lines.push(format!("  {}", element.element.as_deref().unwrap_or("N/A")));
                lines.push(format!(
                    "    reason: {}",
                    element.reason.as_deref().unwrap_or("N/A")
                ));
                lines.push(format!(
                    "    suggestion: {}",
                    element.suggested_change.as_deref().unwrap_or("N/A")
                ));
            }
        }
    }

    if let Some(suggestions) = obj.get("suggestions").and_then(Value::as_str) {
        lines.push(format!("Suggestions: {}", suggestions));
    }

    if obj.get("generated_image_available").and_then(Value::as_bool) == Some(false) {
        let error = obj
            .get("generation_error")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        lines.push(format!("Image generation was not successful: {}", error));
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines)
    }
}

use std::fmt;

/// The six fixed interaction flows exposed to the operator, each mapped to one
/// remote endpoint (the last one aggregates stored outcomes instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scenario {
    ResolveMulti,
    ResolveUpload,
    TranslateSingle,
    TranslateMulti,
    ImageLocalization,
    Results,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::ResolveMulti,
        Scenario::ResolveUpload,
        Scenario::TranslateSingle,
        Scenario::TranslateMulti,
        Scenario::ImageLocalization,
        Scenario::Results,
    ];

    /// Tab title shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Scenario::ResolveMulti => "Tags Resolve Multi",
            Scenario::ResolveUpload => "Tags Resolve Upload",
            Scenario::TranslateSingle => "Translate Single",
            Scenario::TranslateMulti => "Translate Multi",
            Scenario::ImageLocalization => "Image Localization",
            Scenario::Results => "Results",
        }
    }

    /// Stable key used for the named-result bag and its JSON export.
    pub fn slug(&self) -> &'static str {
        match self {
            Scenario::ResolveMulti => "resolve_multi",
            Scenario::ResolveUpload => "resolve_upload",
            Scenario::TranslateSingle => "translate_single",
            Scenario::TranslateMulti => "translate_multi",
            Scenario::ImageLocalization => "localization",
            Scenario::Results => "results",
        }
    }

    /// Index into per-form UI state; `None` for the aggregate view.
    pub fn form_index(&self) -> Option<usize> {
        match self {
            Scenario::ResolveMulti => Some(0),
            Scenario::ResolveUpload => Some(1),
            Scenario::TranslateSingle => Some(2),
            Scenario::TranslateMulti => Some(3),
            Scenario::ImageLocalization => Some(4),
            Scenario::Results => None,
        }
    }

    pub fn next(&self) -> Scenario {
        let idx = Scenario::ALL.iter().position(|s| s == self).unwrap_or(0);
        Scenario::ALL[(idx + 1) % Scenario::ALL.len()]
    }

    pub fn previous(&self) -> Scenario {
        let idx = Scenario::ALL.iter().position(|s| s == self).unwrap_or(0);
        Scenario::ALL[(idx + Scenario::ALL.len() - 1) % Scenario::ALL.len()]
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    /// Inline editing of the selected form field.
    EditingField,
    /// Settings modal (base URL + API key).
    Settings,
    /// Confirmation before a bulk clear.
    ConfirmClear(ClearTarget),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearTarget {
    History,
    Results,
}

/// Tracks which main panel has focus on a scenario tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelFocus {
    Form,
    Response,
}

/// Tracks which field is active in the settings modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsField {
    BaseUrl,
    ApiKey,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One-line feedback shown under the body (local warnings, save paths, etc).
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Info }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Success }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Warning }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), level: StatusLevel::Error }
    }
}

/// Actions the event layer hands back to the run loop because they need the
/// dispatcher (and therefore an await) to complete.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserAction {
    Run(Scenario),
    HealthCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_next_wraps_around() {
        assert_eq!(Scenario::Results.next(), Scenario::ResolveMulti);
        assert_eq!(Scenario::ResolveMulti.previous(), Scenario::Results);
    }

    #[test]
    fn test_scenario_slugs_are_unique() {
        let mut slugs: Vec<&str> = Scenario::ALL.iter().map(|s| s.slug()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Scenario::ALL.len());
    }

    #[test]
    fn test_only_results_has_no_form() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.form_index().is_none(), scenario == Scenario::Results);
        }
    }
}

//! Interest catalog: the service categories a prospective client can pick.
//!
//! Built once at startup and shared read-only (`Arc<InterestCatalog>`); used
//! only to render a friendly label into notification emails.

/// Label used when no interest is given or the code is unknown.
pub const DEFAULT_INTEREST_LABEL: &str = "General Consultation";

/// A single catalog entry: the form's option value and its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interest {
    pub value: String,
    pub label: String,
}

/// Immutable mapping from interest code to label.
#[derive(Debug, Clone)]
pub struct InterestCatalog {
    entries: Vec<Interest>,
}

/// Options offered by the site's contact form.
const STANDARD_INTERESTS: &[(&str, &str)] = &[
    ("residential-design", "Residential Design"),
    ("commercial-fit-out", "Commercial Fit-Out"),
    ("office-design", "Office Design"),
    ("hospitality-design", "Hospitality Design"),
    ("renovation", "Renovation & Remodelling"),
    ("space-planning", "Space Planning"),
    ("furniture-styling", "Furniture & Styling"),
    ("consultation", "General Consultation"),
];

impl InterestCatalog {
    pub fn new(entries: Vec<Interest>) -> Self {
        Self { entries }
    }

    /// The catalog matching the options rendered by the public contact form.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_INTERESTS
                .iter()
                .map(|(value, label)| Interest {
                    value: (*value).to_string(),
                    label: (*label).to_string(),
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[Interest] {
        &self.entries
    }

    /// Resolve an interest code to its label.
    ///
    /// Absent, empty or unrecognized codes resolve to
    /// [`DEFAULT_INTEREST_LABEL`].
    pub fn label_for(&self, code: Option<&str>) -> &str {
        code.filter(|c| !c.is_empty())
            .and_then(|c| self.entries.iter().find(|i| i.value == c))
            .map(|i| i.label.as_str())
            .unwrap_or(DEFAULT_INTEREST_LABEL)
    }
}

impl Default for InterestCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

//! Urgency classification

use serde::{Deserialize, Serialize};

/// Discrete urgency of a request (Value Object)
///
/// Exactly one class is selected per request: either from an explicit
/// override token or by keyword scan of the request text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyClass {
    Override,
    Critical,
    Elevated,
    #[default]
    Routine,
}

/// Keyword sets in priority order; the first set with a match wins.
const KEYWORDS: [(UrgencyClass, &[&str]); 3] = [
    (
        UrgencyClass::Override,
        &["emergency", "crisis", "crash", "critical", "immediate"],
    ),
    (UrgencyClass::Critical, &["meeting", "today", "deadline", "soon"]),
    (
        UrgencyClass::Elevated,
        &["should i", "recommend", "strategy", "analyze"],
    ),
];

impl UrgencyClass {
    pub const ALL: [UrgencyClass; 4] = [
        UrgencyClass::Override,
        UrgencyClass::Critical,
        UrgencyClass::Elevated,
        UrgencyClass::Routine,
    ];

    /// Numeric urgency weight U in [0, 1].
    pub fn weight(&self) -> f64 {
        match self {
            UrgencyClass::Override => 1.00,
            UrgencyClass::Critical => 0.75,
            UrgencyClass::Elevated => 0.50,
            UrgencyClass::Routine => 0.25,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyClass::Override => "SOVEREIGN OVERRIDE",
            UrgencyClass::Critical => "CRITICAL",
            UrgencyClass::Elevated => "ELEVATED",
            UrgencyClass::Routine => "ROUTINE",
        }
    }

    /// Legacy colour code (RED / YELLOW / GREEN / BLUE).
    pub fn color(&self) -> &'static str {
        match self {
            UrgencyClass::Override => "RED",
            UrgencyClass::Critical => "YELLOW",
            UrgencyClass::Elevated => "GREEN",
            UrgencyClass::Routine => "BLUE",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyClass::Override => "OVERRIDE",
            UrgencyClass::Critical => "CRITICAL",
            UrgencyClass::Elevated => "ELEVATED",
            UrgencyClass::Routine => "ROUTINE",
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, UrgencyClass::Override)
    }

    /// Derive the class from request text.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| text.contains(w)))
            .map(|(class, _)| *class)
            .unwrap_or(UrgencyClass::Routine)
    }

    /// Parse an override token by class name or colour code.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "override" | "red" => Some(UrgencyClass::Override),
            "critical" | "yellow" => Some(UrgencyClass::Critical),
            "elevated" | "green" => Some(UrgencyClass::Elevated),
            "routine" | "blue" => Some(UrgencyClass::Routine),
            _ => None,
        }
    }

    /// Select the class for a request.
    ///
    /// A supplied override bypasses the text scan entirely; an unknown
    /// override token resolves to `Routine`.
    pub fn resolve(override_token: Option<&str>, text: &str) -> Self {
        match override_token {
            Some(token) => Self::from_token(token).unwrap_or_default(),
            None => Self::classify(text),
        }
    }
}

impl std::fmt::Display for UrgencyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

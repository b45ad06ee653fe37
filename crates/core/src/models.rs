use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate proposal as typed by the user. No validation happens here;
/// the service decides what to do with empty fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: String,
    pub abstract_text: String,
}

impl SearchQuery {
    pub fn new(title: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }
}

/// Identifier of a matched project. The service promises uniqueness only
/// within one response set, so it stays opaque: numeric ids and string ids
/// both decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ResultId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ResultId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(value) => write!(formatter, "{value}"),
            ResultId::Text(value) => write!(formatter, "{value}"),
        }
    }
}

/// One ranked match, kept exactly as the service returned it. The response
/// order is the service's ranking and is never re-sorted client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: ResultId,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub matching_score: f64,
    #[serde(default)]
    pub matching_comments: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tier {
    Recommended,
    Neutral,
    NotRecommended,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

/// Go/no-go verdict derived from the best matching score of a response set.
/// Never read off the wire; always derived locally.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Recommendation {
    pub tier: Tier,
    pub severity: Severity,
    pub message: &'static str,
}

/// Lifecycle of one search session. Loading and Failed carry no results, so
/// a loading session with stale rows cannot be represented at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        results: Vec<SearchResult>,
        recommendation: Option<Recommendation>,
    },
    Failed {
        message: String,
    },
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    /// Ranked matches of the last completed submission, empty otherwise.
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SessionState::Succeeded { results, .. } => results,
            _ => &[],
        }
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            SessionState::Succeeded { recommendation, .. } => recommendation.as_ref(),
            _ => None,
        }
    }
}

/// Status text returned by the maintenance endpoints. The service may omit
/// the message entirely; callers supply their own fallback wording.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MaintenanceOutcome {
    #[serde(default)]
    pub message: Option<String>,
}

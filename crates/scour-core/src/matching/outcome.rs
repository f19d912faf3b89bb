use crate::matching::safety::PenaltyBreakdown;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How well a token lines up with a `used_for` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    /// One of token/keyword contains the other.
    Partial,
    /// Token equals keyword.
    Exact,
}

/// A token's best keyword hit for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMatch {
    pub token: String,
    pub keyword: String,
    pub quality: MatchQuality,
    pub points: u32,
}

/// Score contributed by one token set (item name or task description).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldScore {
    /// Tokens that hit a keyword; tokens scoring 0 are omitted.
    pub matches: Vec<TokenMatch>,
    /// Sum of per-token points before weighting.
    pub raw: u32,
    pub weight: u32,
    pub weighted: u32,
}

/// Scoring details for a single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateScore {
    pub chemical_id: String,
    pub chemical_name: String,
    /// True when the chemical has no usable `used_for` keywords and was
    /// never scored.
    pub skipped: bool,
    pub item_name: FieldScore,
    pub task_description: FieldScore,
    pub penalty: PenaltyBreakdown,
    /// Final score, clamped at zero.
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    /// Task description empty or "N/A".
    NoTask,
    EmptyCatalog,
    /// Neither input produced a single token.
    NoTokens,
    /// Candidates were scored but none ended above zero.
    NoPositiveScore,
}

impl fmt::Display for NoMatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoMatchReason::NoTask => write!(f, "task description is empty or N/A"),
            NoMatchReason::EmptyCatalog => write!(f, "catalog is empty"),
            NoMatchReason::NoTokens => write!(f, "no matchable words in item name or task"),
            NoMatchReason::NoPositiveScore => write!(f, "no chemical scored above zero"),
        }
    }
}

/// Full account of one matcher call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub item_name: String,
    pub task_description: String,
    pub item_tokens: Vec<String>,
    pub task_tokens: Vec<String>,
    /// Candidates in catalog order. Empty when the call short-circuited.
    pub candidates: Vec<CandidateScore>,
    /// Id of the winning chemical.
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_match_reason: Option<NoMatchReason>,
}

impl MatchReport {
    pub fn selected_candidate(&self) -> Option<&CandidateScore> {
        let id = self.selected.as_deref()?;
        self.candidates.iter().find(|c| c.chemical_id == id)
    }
}

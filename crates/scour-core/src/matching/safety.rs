use crate::model::Chemical;
use serde::{Deserialize, Serialize};

/// Hazard keywords looked for in the toxicological text, with their weight.
pub const TOXICOLOGY_PENALTIES: &[(&str, u32)] = &[
    ("fatal", 100),
    ("toxic", 80),
    ("poison", 80),
    ("corrosive", 70),
    ("carcinogen", 90),
    ("mutagen", 90),
    ("reproductive toxin", 90),
    ("aspiration hazard", 60),
    ("severe", 50),
    ("harmful", 30),
    ("irritant", 20),
    ("sensitizer", 20),
    ("danger", 40),
];

/// Protective-equipment keywords looked for in the PPE text.
pub const PROTECTION_PENALTIES: &[(&str, u32)] = &[
    ("respirator", 70),
    ("scba", 80),
    ("ventilated hood", 60),
    ("full-face shield", 50),
    ("chemical-resistant suit", 70),
    ("goggles", 20),
    ("safety glasses", 10),
    ("gloves", 10),
    ("apron", 10),
    ("mask", 10),
];

/// Flat charge for having any hazard text at all.
pub const INFO_PRESENT_PENALTY: u32 = 5;

const NOT_SPECIFIED: &str = "not specified";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltySource {
    Toxicology,
    Protection,
}

/// One term that contributed to a safety penalty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTerm {
    pub source: PenaltySource,
    /// The table keyword, or `None` for the flat info-present charge.
    pub keyword: Option<String>,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    pub terms: Vec<PenaltyTerm>,
}

impl PenaltyBreakdown {
    pub fn total(&self) -> u32 {
        self.terms.iter().map(|t| t.weight).sum()
    }
}

/// Penalty used to push hazardous products below safer ones that match
/// equally well. Weights are additive across all keywords found.
pub fn safety_penalty(chemical: &Chemical) -> u32 {
    penalty_breakdown(chemical).total()
}

/// Same as [`safety_penalty`], keeping each contributing term.
pub fn penalty_breakdown(chemical: &Chemical) -> PenaltyBreakdown {
    let mut terms = Vec::new();

    collect_terms(
        chemical.toxicological_info.as_deref(),
        TOXICOLOGY_PENALTIES,
        PenaltySource::Toxicology,
        &mut terms,
    );
    collect_terms(
        chemical.personal_protection.as_deref(),
        PROTECTION_PENALTIES,
        PenaltySource::Protection,
        &mut terms,
    );

    PenaltyBreakdown { terms }
}

fn collect_terms(
    text: Option<&str>,
    table: &[(&str, u32)],
    source: PenaltySource,
    terms: &mut Vec<PenaltyTerm>,
) {
    let Some(text) = text else {
        return;
    };
    let lower = text.to_lowercase();

    for &(keyword, weight) in table {
        if lower.contains(keyword) {
            terms.push(PenaltyTerm {
                source,
                keyword: Some(keyword.to_string()),
                weight,
            });
        }
    }

    if is_specified(text) {
        terms.push(PenaltyTerm {
            source,
            keyword: None,
            weight: INFO_PRESENT_PENALTY,
        });
    }
}

/// Hazard text counts as given unless it is blank or the "Not specified"
/// placeholder written by the data-sheet extractor.
fn is_specified(text: &str) -> bool {
    !text.trim().is_empty() && text.to_lowercase() != NOT_SPECIFIED
}

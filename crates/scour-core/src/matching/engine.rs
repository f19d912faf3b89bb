use crate::matching::outcome::{
    CandidateScore, FieldScore, MatchQuality, MatchReport, NoMatchReason, TokenMatch,
};
use crate::matching::safety::{penalty_breakdown, safety_penalty};
use crate::matching::tokenize::tokenize;
use crate::model::Chemical;
use std::collections::BTreeSet;

/// Item-name hits name the equipment directly, so they count for more than
/// hits in the task text.
pub const ITEM_NAME_WEIGHT: u32 = 5;
pub const TASK_DESC_WEIGHT: u32 = 2;

pub const EXACT_MATCH_SCORE: u32 = 10;
pub const PARTIAL_MATCH_SCORE: u32 = 1;

impl MatchQuality {
    pub fn points(self) -> u32 {
        match self {
            MatchQuality::Exact => EXACT_MATCH_SCORE,
            MatchQuality::Partial => PARTIAL_MATCH_SCORE,
        }
    }
}

/// Pick the catalog entry that best fits a cleaning task.
///
/// Returns the chemical id, or `None` when the task is empty/"N/A", the
/// catalog is empty, nothing tokenizes, or no candidate scores above zero.
/// On equal scores the earliest catalog entry wins.
pub fn find_best_chemical(
    item_name: &str,
    task_description: &str,
    chemicals: &[Chemical],
) -> Option<String> {
    let (item_tokens, task_tokens) = match prepare(item_name, task_description, chemicals) {
        Ok(tokens) => tokens,
        Err(reason) => {
            tracing::trace!(item = item_name, %reason, "no chemical match");
            return None;
        }
    };

    let mut best: Option<(&Chemical, u32)> = None;

    for chemical in chemicals {
        let keywords = chemical.keywords();
        if keywords.is_empty() {
            continue;
        }

        let content = content_score(&item_tokens, &keywords) * ITEM_NAME_WEIGHT
            + content_score(&task_tokens, &keywords) * TASK_DESC_WEIGHT;
        let score = content.saturating_sub(safety_penalty(chemical));

        if beats(score, best.map(|(_, s)| s)) {
            best = Some((chemical, score));
        }
    }

    let selected = best.map(|(c, _)| c.id.clone());
    tracing::debug!(item = item_name, task = task_description, ?selected, "chemical match");
    selected
}

/// Score every candidate and report how the winner was chosen.
///
/// Uses the same rules as [`find_best_chemical`] and always selects the
/// same chemical.
pub fn rank_chemicals(
    item_name: &str,
    task_description: &str,
    chemicals: &[Chemical],
) -> MatchReport {
    let mut report = MatchReport {
        item_name: item_name.to_string(),
        task_description: task_description.to_string(),
        item_tokens: Vec::new(),
        task_tokens: Vec::new(),
        candidates: Vec::new(),
        selected: None,
        no_match_reason: None,
    };

    let (item_tokens, task_tokens) = match prepare(item_name, task_description, chemicals) {
        Ok(tokens) => tokens,
        Err(reason) => {
            report.item_tokens = tokenize(item_name).into_iter().collect();
            report.task_tokens = tokenize(task_description).into_iter().collect();
            report.no_match_reason = Some(reason);
            return report;
        }
    };

    let mut best: Option<(usize, u32)> = None;

    for (idx, chemical) in chemicals.iter().enumerate() {
        let candidate = score_candidate(chemical, &item_tokens, &task_tokens);
        if !candidate.skipped && beats(candidate.score, best.map(|(_, s)| s)) {
            best = Some((idx, candidate.score));
        }
        report.candidates.push(candidate);
    }

    report.selected = best.map(|(idx, _)| report.candidates[idx].chemical_id.clone());
    if report.selected.is_none() {
        report.no_match_reason = Some(NoMatchReason::NoPositiveScore);
    }
    report.item_tokens = item_tokens.into_iter().collect();
    report.task_tokens = task_tokens.into_iter().collect();
    report
}

/// Apply the short-circuit checks and tokenize both inputs.
fn prepare(
    item_name: &str,
    task_description: &str,
    chemicals: &[Chemical],
) -> Result<(BTreeSet<String>, BTreeSet<String>), NoMatchReason> {
    if is_missing_task(task_description) {
        return Err(NoMatchReason::NoTask);
    }
    if chemicals.is_empty() {
        return Err(NoMatchReason::EmptyCatalog);
    }

    let item_tokens = tokenize(item_name);
    let task_tokens = tokenize(task_description);
    if item_tokens.is_empty() && task_tokens.is_empty() {
        return Err(NoMatchReason::NoTokens);
    }

    Ok((item_tokens, task_tokens))
}

/// The generator writes "N/A" for frequencies that do not apply.
fn is_missing_task(task_description: &str) -> bool {
    let trimmed = task_description.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a")
}

/// A new candidate must be strictly above both zero and the current best.
fn beats(score: u32, best: Option<u32>) -> bool {
    match best {
        Some(b) => score > 0 && score > b,
        None => score > 0,
    }
}

/// Best quality of `token` against any keyword.
pub fn best_keyword_match<'k>(
    token: &str,
    keywords: &'k BTreeSet<String>,
) -> Option<(&'k str, MatchQuality)> {
    let mut best: Option<(&str, MatchQuality)> = None;
    for keyword in keywords {
        let quality = if keyword == token {
            MatchQuality::Exact
        } else if keyword.contains(token) || token.contains(keyword.as_str()) {
            MatchQuality::Partial
        } else {
            continue;
        };
        if best.map_or(true, |(_, q)| quality > q) {
            best = Some((keyword.as_str(), quality));
            if quality == MatchQuality::Exact {
                break;
            }
        }
    }
    best
}

/// Unweighted score of a token set: each token adds only its single best
/// keyword hit, never one per matching keyword.
fn content_score(tokens: &BTreeSet<String>, keywords: &BTreeSet<String>) -> u32 {
    tokens
        .iter()
        .filter_map(|t| best_keyword_match(t, keywords))
        .map(|(_, q)| q.points())
        .sum()
}

fn field_score(tokens: &BTreeSet<String>, keywords: &BTreeSet<String>, weight: u32) -> FieldScore {
    let matches: Vec<TokenMatch> = tokens
        .iter()
        .filter_map(|token| {
            best_keyword_match(token, keywords).map(|(keyword, quality)| TokenMatch {
                token: token.clone(),
                keyword: keyword.to_string(),
                quality,
                points: quality.points(),
            })
        })
        .collect();
    let raw = matches.iter().map(|m| m.points).sum::<u32>();

    FieldScore {
        matches,
        raw,
        weight,
        weighted: raw * weight,
    }
}

fn score_candidate(
    chemical: &Chemical,
    item_tokens: &BTreeSet<String>,
    task_tokens: &BTreeSet<String>,
) -> CandidateScore {
    let keywords = chemical.keywords();
    if keywords.is_empty() {
        return CandidateScore {
            chemical_id: chemical.id.clone(),
            chemical_name: chemical.name.clone(),
            skipped: true,
            item_name: FieldScore::default(),
            task_description: FieldScore::default(),
            penalty: Default::default(),
            score: 0,
        };
    }

    let item_name = field_score(item_tokens, &keywords, ITEM_NAME_WEIGHT);
    let task_description = field_score(task_tokens, &keywords, TASK_DESC_WEIGHT);
    let penalty = penalty_breakdown(chemical);
    let score = (item_name.weighted + task_description.weighted).saturating_sub(penalty.total());

    tracing::trace!(
        chemical = %chemical.id,
        item = item_name.weighted,
        task = task_description.weighted,
        penalty = penalty.total(),
        score,
        "scored candidate"
    );

    CandidateScore {
        chemical_id: chemical.id.clone(),
        chemical_name: chemical.name.clone(),
        skipped: false,
        item_name,
        task_description,
        penalty,
        score,
    }
}

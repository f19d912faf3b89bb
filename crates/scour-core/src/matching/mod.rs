pub mod engine;
pub mod outcome;
pub mod safety;
pub mod tokenize;

pub use engine::{find_best_chemical, rank_chemicals};
pub use outcome::{CandidateScore, FieldScore, MatchQuality, MatchReport, NoMatchReason};
pub use safety::{safety_penalty, PenaltyBreakdown};
pub use tokenize::tokenize;

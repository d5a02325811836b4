mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicationRequest, JobPosting, MatchCriterion};

/// Stateless evaluator applying a posting's eligibility rules to one
/// application.
#[derive(Debug, Default)]
pub struct MatchEvaluator;

impl MatchEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Decide whether `application` satisfies every criterion advertised by
    /// `posting`.
    ///
    /// Pure and deterministic: repeated evaluation of the same pair always
    /// yields the same outcome.
    pub fn evaluate(&self, application: &ApplicationRequest, posting: &JobPosting) -> MatchOutcome {
        match rules::first_failing_criterion(application, posting) {
            None => MatchOutcome::Accepted,
            Some(criterion) => MatchOutcome::Rejected(criterion),
        }
    }
}

/// Accept/reject decision for one (application, posting) pair, computed fresh
/// on every evaluation and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Accepted,
    /// Rejected, carrying the first criterion the application missed.
    Rejected(MatchCriterion),
}

impl MatchOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, MatchOutcome::Accepted)
    }
}

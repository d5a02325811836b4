use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for job postings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PostingId(pub u64);

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive `[min, max]` bound used by the notice-period and experience rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub min: u32,
    pub max: u32,
}

impl InclusiveRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Unordered collection of acceptable identifiers along one matching axis.
pub type CriterionSet = BTreeSet<u32>;

/// Eligibility criteria advertised by a posting. Read-only to the engine;
/// posting management lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: PostingId,
    pub posted_on: NaiveDate,
    pub notice_period: InclusiveRange,
    pub budget_ceiling: u32,
    pub experience: InclusiveRange,
    pub locations: CriterionSet,
    pub technologies: CriterionSet,
    pub work_modes: CriterionSet,
    pub qualifications: CriterionSet,
    pub shifts: CriterionSet,
    pub job_types: CriterionSet,
}

/// One batch element: a candidate's requested terms plus the posting it targets.
///
/// Candidate names are not guaranteed unique; the request is consumed once per
/// batch and never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub candidate: String,
    pub posting_id: PostingId,
    pub notice_period: u32,
    pub budget: u32,
    pub experience: u32,
    pub locations: CriterionSet,
    pub technologies: CriterionSet,
    pub work_modes: CriterionSet,
    pub qualifications: CriterionSet,
    pub shifts: CriterionSet,
    pub job_types: CriterionSet,
}

/// The matching axes, in the order the evaluator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchCriterion {
    NoticePeriod,
    Budget,
    Location,
    TechnologyStack,
    WorkMode,
    Experience,
    Qualification,
    Shift,
    JobType,
}

impl MatchCriterion {
    pub const fn label(self) -> &'static str {
        match self {
            MatchCriterion::NoticePeriod => "notice_period",
            MatchCriterion::Budget => "budget",
            MatchCriterion::Location => "location",
            MatchCriterion::TechnologyStack => "technology_stack",
            MatchCriterion::WorkMode => "work_mode",
            MatchCriterion::Experience => "experience",
            MatchCriterion::Qualification => "qualification",
            MatchCriterion::Shift => "shift",
            MatchCriterion::JobType => "job_type",
        }
    }
}

impl fmt::Display for MatchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

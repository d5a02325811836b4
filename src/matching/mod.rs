//! Batch screening of job applications against posting criteria.
//!
//! [`MatchDispatcher`] fans a batch out across bounded concurrent tasks. Each
//! task resolves the referenced posting through [`JobPostingLookup`], runs the
//! [`MatchEvaluator`] rule chain, and publishes its outcome into a shared
//! collector that is drained only after every task has finished.

pub mod dispatcher;
pub mod domain;
pub(crate) mod evaluation;
pub mod lookup;

#[cfg(test)]
mod tests;

pub use dispatcher::{
    DispatchError, DispatcherConfig, Disposition, MatchDispatcher, ScreeningOutcome,
};
pub use domain::{
    ApplicationRequest, CriterionSet, InclusiveRange, JobPosting, MatchCriterion, PostingId,
};
pub use evaluation::{MatchEvaluator, MatchOutcome};
pub use lookup::{InMemoryPostingStore, JobPostingLookup, LookupError};

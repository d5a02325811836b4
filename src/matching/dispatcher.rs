use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::debug;

use super::domain::{ApplicationRequest, MatchCriterion};
use super::evaluation::{MatchEvaluator, MatchOutcome};
use super::lookup::JobPostingLookup;

/// Tuning for a screening batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Upper bound on lookups kept in flight at once. Clamped to at least 1.
    pub max_in_flight: usize,
}

impl DispatcherConfig {
    pub const DEFAULT_MAX_IN_FLIGHT: usize = 32;
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_in_flight: Self::DEFAULT_MAX_IN_FLIGHT,
        }
    }
}

/// How a single batch element fared. Lookup failures are reported here but
/// never escalate to the batch-level error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Disposition {
    Accepted,
    Rejected(MatchCriterion),
    LookupFailed(String),
}

/// Per-application screening result returned by
/// [`MatchDispatcher::screen_batch`].
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub application: ApplicationRequest,
    pub disposition: Disposition,
}

/// Error raised when the dispatch machinery itself fails. Per-item lookup or
/// evaluation problems never surface through this type.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("evaluation task did not run to completion: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Orchestrates one lookup-and-evaluate task per application, bounded fan-out,
/// channel fan-in.
pub struct MatchDispatcher<L> {
    lookup: Arc<L>,
    evaluator: Arc<MatchEvaluator>,
    config: DispatcherConfig,
}

impl<L> MatchDispatcher<L>
where
    L: JobPostingLookup + 'static,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self::with_config(lookup, DispatcherConfig::default())
    }

    pub fn with_config(lookup: Arc<L>, config: DispatcherConfig) -> Self {
        let config = DispatcherConfig {
            max_in_flight: config.max_in_flight.max(1),
        };
        Self {
            lookup,
            evaluator: Arc::new(MatchEvaluator::new()),
            config,
        }
    }

    /// Screen a batch and return only the applications satisfying every rule.
    ///
    /// Applications whose posting cannot be resolved are dropped without
    /// surfacing an error, so an empty result does not distinguish "nothing
    /// matched" from "every lookup failed"; use [`Self::screen_batch`] when
    /// that distinction matters. The returned order is unspecified.
    pub async fn process_batch(
        &self,
        applications: Vec<ApplicationRequest>,
    ) -> Result<Vec<ApplicationRequest>, DispatchError> {
        let outcomes = self.screen_batch(applications).await?;
        Ok(outcomes
            .into_iter()
            .filter(|outcome| outcome.disposition == Disposition::Accepted)
            .map(|outcome| outcome.application)
            .collect())
    }

    /// Like [`Self::process_batch`] but keeps every application alongside its
    /// disposition, so callers can tell rule rejections from failed lookups.
    pub async fn screen_batch(
        &self,
        applications: Vec<ApplicationRequest>,
    ) -> Result<Vec<ScreeningOutcome>, DispatchError> {
        let limiter = Arc::new(Semaphore::new(self.config.max_in_flight));
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let mut tasks = JoinSet::new();

        for application in applications {
            let lookup = Arc::clone(&self.lookup);
            let evaluator = Arc::clone(&self.evaluator);
            let limiter = Arc::clone(&limiter);
            let outcome_tx = outcome_tx.clone();

            tasks.spawn(async move {
                // Holds the permit across the lookup so at most
                // `max_in_flight` lookups are outstanding.
                let Ok(_permit) = limiter.acquire_owned().await else {
                    return;
                };

                let disposition = match lookup.fetch_posting(application.posting_id).await {
                    Ok(posting) => match evaluator.evaluate(&application, &posting) {
                        MatchOutcome::Accepted => Disposition::Accepted,
                        MatchOutcome::Rejected(criterion) => {
                            debug!(
                                candidate = %application.candidate,
                                posting = %application.posting_id,
                                criterion = %criterion,
                                "application rejected"
                            );
                            Disposition::Rejected(criterion)
                        }
                    },
                    Err(err) => {
                        debug!(
                            candidate = %application.candidate,
                            posting = %application.posting_id,
                            error = %err,
                            "posting lookup failed, application dropped"
                        );
                        Disposition::LookupFailed(err.to_string())
                    }
                };

                let _ = outcome_tx.send(ScreeningOutcome {
                    application,
                    disposition,
                });
            });
        }
        drop(outcome_tx);

        // The collector reports closure only once every task has dropped its
        // sender, so this drain doubles as the completion barrier.
        let mut outcomes = Vec::new();
        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
        }

        while let Some(joined) = tasks.join_next().await {
            joined?;
        }

        Ok(outcomes)
    }
}

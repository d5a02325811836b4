use std::collections::HashMap;

use async_trait::async_trait;

use super::domain::{JobPosting, PostingId};

/// Read-side contract for resolving the posting an application references.
///
/// Implementations are called concurrently from many evaluation tasks and may
/// block on storage or network I/O; they must not share mutable cursor state
/// across calls.
#[async_trait]
pub trait JobPostingLookup: Send + Sync {
    async fn fetch_posting(&self, id: PostingId) -> Result<JobPosting, LookupError>;
}

/// Error enumeration for posting resolution failures.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no posting with id {0}")]
    NotFound(PostingId),
    #[error("posting store unavailable: {0}")]
    Unavailable(String),
}

/// Posting catalog kept in process memory so the engine can run without a
/// database (CLI batches, tests).
#[derive(Debug, Default, Clone)]
pub struct InMemoryPostingStore {
    postings: HashMap<PostingId, JobPosting>,
}

impl InMemoryPostingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_postings(postings: impl IntoIterator<Item = JobPosting>) -> Self {
        Self {
            postings: postings
                .into_iter()
                .map(|posting| (posting.id, posting))
                .collect(),
        }
    }

    /// Insert or replace a posting under its own identifier.
    pub fn insert(&mut self, posting: JobPosting) {
        self.postings.insert(posting.id, posting);
    }

    pub fn postings(&self) -> impl Iterator<Item = &JobPosting> {
        self.postings.values()
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[async_trait]
impl JobPostingLookup for InMemoryPostingStore {
    async fn fetch_posting(&self, id: PostingId) -> Result<JobPosting, LookupError> {
        self.postings
            .get(&id)
            .cloned()
            .ok_or(LookupError::NotFound(id))
    }
}

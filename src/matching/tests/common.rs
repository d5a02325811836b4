use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::matching::domain::{ApplicationRequest, InclusiveRange, JobPosting, PostingId};
use crate::matching::lookup::{InMemoryPostingStore, JobPostingLookup, LookupError};

/// Posting every builder application satisfies: notice [20, 50], budget cap
/// 600_000, experience [1, 3], one shared ID per criterion set.
pub(super) fn posting(id: u64) -> JobPosting {
    JobPosting {
        id: PostingId(id),
        posted_on: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date"),
        notice_period: InclusiveRange::new(20, 50),
        budget_ceiling: 600_000,
        experience: InclusiveRange::new(1, 3),
        locations: [10, 11].into(),
        technologies: [1, 2].into(),
        work_modes: [20].into(),
        qualifications: [30, 31].into(),
        shifts: [40].into(),
        job_types: [50].into(),
    }
}

pub(super) fn application(candidate: &str, posting_id: u64) -> ApplicationRequest {
    ApplicationRequest {
        candidate: candidate.to_string(),
        posting_id: PostingId(posting_id),
        notice_period: 30,
        budget: 4_000,
        experience: 2,
        locations: [10].into(),
        technologies: [1].into(),
        work_modes: [20].into(),
        qualifications: [30].into(),
        shifts: [40].into(),
        job_types: [50].into(),
    }
}

pub(super) fn store_with(postings: impl IntoIterator<Item = JobPosting>) -> Arc<InMemoryPostingStore> {
    Arc::new(InMemoryPostingStore::with_postings(postings))
}

/// Lookup that always reports a storage outage.
pub(super) struct OfflineStore;

#[async_trait]
impl JobPostingLookup for OfflineStore {
    async fn fetch_posting(&self, _id: PostingId) -> Result<JobPosting, LookupError> {
        Err(LookupError::Unavailable("maintenance window".to_string()))
    }
}

/// Wraps the in-memory store and records the peak number of concurrent
/// lookups, pausing briefly so sibling tasks overlap.
pub(super) struct GaugedStore {
    inner: InMemoryPostingStore,
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl GaugedStore {
    pub(super) fn new(inner: InMemoryPostingStore) -> Self {
        Self {
            inner,
            current: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub(super) fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobPostingLookup for GaugedStore {
    async fn fetch_posting(&self, id: PostingId) -> Result<JobPosting, LookupError> {
        let in_flight = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(in_flight, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5)).await;
        let result = self.inner.fetch_posting(id).await;
        self.current.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

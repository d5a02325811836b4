//! Concurrent screening of job applications against posting criteria.
//!
//! A batch of [`matching::ApplicationRequest`] values is fanned out across
//! bounded concurrent tasks; each task resolves the referenced posting through
//! a [`matching::JobPostingLookup`] implementation, runs the eligibility rules,
//! and publishes its outcome into a shared collector. The caller receives the
//! subset of applications that satisfied every rule.

pub mod config;
pub mod matching;
pub mod telemetry;

use super::super::domain::{ApplicationRequest, CriterionSet, JobPosting, MatchCriterion};

/// Walk the rule chain in posting order and report the first criterion the
/// application misses, or `None` when every rule passes.
///
/// Intersection axes treat an empty posting set as unsatisfiable: a posting
/// that advertises no acceptable IDs on an axis matches no application there.
/// The technology rule is the one exception; its floor-division threshold
/// degrades to zero for postings listing fewer than two technologies, which
/// makes the rule pass with no shared ID at all.
pub(crate) fn first_failing_criterion(
    application: &ApplicationRequest,
    posting: &JobPosting,
) -> Option<MatchCriterion> {
    if !posting.notice_period.contains(application.notice_period) {
        return Some(MatchCriterion::NoticePeriod);
    }
    if application.budget > posting.budget_ceiling {
        return Some(MatchCriterion::Budget);
    }
    if !intersects(&application.locations, &posting.locations) {
        return Some(MatchCriterion::Location);
    }
    // Half of the posting's technologies, rounded down.
    let required = posting.technologies.len() / 2;
    if shared_count(&application.technologies, &posting.technologies) < required {
        return Some(MatchCriterion::TechnologyStack);
    }
    if !intersects(&application.work_modes, &posting.work_modes) {
        return Some(MatchCriterion::WorkMode);
    }
    if !posting.experience.contains(application.experience) {
        return Some(MatchCriterion::Experience);
    }
    if !intersects(&application.qualifications, &posting.qualifications) {
        return Some(MatchCriterion::Qualification);
    }
    if !intersects(&application.shifts, &posting.shifts) {
        return Some(MatchCriterion::Shift);
    }
    if !intersects(&application.job_types, &posting.job_types) {
        return Some(MatchCriterion::JobType);
    }
    None
}

fn intersects(requested: &CriterionSet, acceptable: &CriterionSet) -> bool {
    requested.intersection(acceptable).next().is_some()
}

fn shared_count(requested: &CriterionSet, acceptable: &CriterionSet) -> usize {
    requested.intersection(acceptable).count()
}

use crate::core::constraint::evaluate_age_range;
use crate::core::direct::score_direct;
use crate::core::requirements::score_requirements;
use crate::models::{FieldName, MatchReport, ProfileRecord, RequirementBreakdown};

/// A pair is a match when ages are mutually acceptable and the averaged
/// requirement percentage is strictly above this value.
pub const MATCH_THRESHOLD: u8 = 0;

/// Compare two profiles and explain the verdict
///
/// Requirement scoring runs in both directions and is averaged; direct
/// attribute scoring is symmetric and runs once.
pub fn compare(a: &ProfileRecord, b: &ProfileRecord) -> MatchReport {
    let age_difference = a.age.abs_diff(b.age);
    let age_compatible = evaluate_age_range(b.requirements.age_range.as_ref(), a.age)
        && evaluate_age_range(a.requirements.age_range.as_ref(), b.age);

    let forward = score_requirements(a, b);
    let backward = score_requirements(b, a);

    let requirement_match_percentage =
        ((forward.percentage as f64 + backward.percentage as f64) / 2.0).round() as u8;
    let requirement_matching_fields = union_in_order(&forward.satisfied_fields, &backward.satisfied_fields);

    let direct = score_direct(a, b);

    MatchReport {
        matching_fields: requirement_matching_fields.clone(),
        match_percentage: requirement_match_percentage,
        requirement_match_percentage,
        direct_match_percentage: direct.percentage,
        requirement_matching_fields,
        direct_matching_fields: direct.matched_fields,
        age_difference,
        age_compatible,
        is_match: age_compatible && requirement_match_percentage > MATCH_THRESHOLD,
        requirement_breakdown: RequirementBreakdown {
            a_requires_b: forward.into(),
            b_requires_a: backward.into(),
        },
    }
}

/// Union of two field lists, each field once, in requirement order
fn union_in_order(left: &[FieldName], right: &[FieldName]) -> Vec<FieldName> {
    let mut present = [false; FieldName::COUNT];
    for field in left.iter().chain(right) {
        present[field.order()] = true;
    }
    FieldName::REQUIREMENT_ORDER
        .into_iter()
        .filter(|field| present[field.order()])
        .collect()
}

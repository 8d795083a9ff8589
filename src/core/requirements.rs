use crate::core::constraint::{
    evaluate, evaluate_age_range, evaluate_height_range, is_height_range_open, Requirement,
};
use crate::models::{DirectionalScore, FieldName, ProfileRecord};

/// Result of scoring one profile's requirements against a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementScore {
    /// 0-100
    pub percentage: u8,
    /// Counted fields that passed, in [`FieldName::REQUIREMENT_ORDER`]
    pub satisfied_fields: Vec<FieldName>,
    /// Fields the requirer actually constrained
    pub counted_fields: usize,
}

impl From<RequirementScore> for DirectionalScore {
    fn from(score: RequirementScore) -> Self {
        DirectionalScore {
            percentage: score.percentage,
            satisfied_fields: score.satisfied_fields,
        }
    }
}

/// Score `candidate` against the preferences declared by `requirer`
///
/// Wildcard fields are left out of both numerator and denominator. A
/// requirer with no counted field is satisfied by anyone (100%).
pub fn score_requirements(requirer: &ProfileRecord, candidate: &ProfileRecord) -> RequirementScore {
    let mut counted = 0usize;
    let mut satisfied_fields = Vec::new();

    for field in FieldName::REQUIREMENT_ORDER {
        if let Some(satisfied) = evaluate_field(field, requirer, candidate) {
            counted += 1;
            if satisfied {
                satisfied_fields.push(field);
            }
        }
    }

    RequirementScore {
        percentage: percentage_of(satisfied_fields.len(), counted),
        satisfied_fields,
        counted_fields: counted,
    }
}

/// `None` when the field is a wildcard for this requirer
fn evaluate_field(field: FieldName, requirer: &ProfileRecord, candidate: &ProfileRecord) -> Option<bool> {
    let requirements = &requirer.requirements;

    match field {
        FieldName::AgeRange => {
            let range = requirements.age_range.as_ref()?;
            Some(evaluate_age_range(Some(range), candidate.age))
        }
        FieldName::HeightRange => {
            let range = requirements.height_range.as_ref();
            if is_height_range_open(range) {
                return None;
            }
            Some(evaluate_height_range(range, &candidate.height))
        }
        _ => {
            let values = requirements.values(field)?;
            if Requirement::classify(values).is_open() {
                return None;
            }
            let candidate_value = candidate.attribute(field).unwrap_or_default();
            let own_value = requirer.attribute(field).unwrap_or_default();
            Some(evaluate(values, candidate_value, own_value))
        }
    }
}

/// `round(100 * part / whole)`, with an empty whole counting as 100
#[inline]
pub fn percentage_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 100;
    }
    let pct = (100.0 * part as f64 / whole as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

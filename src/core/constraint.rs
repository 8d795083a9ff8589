use crate::core::normalize::{is_self_reference, is_wildcard, normalize_height, tokens_equal, WILDCARD_TOKEN};
use crate::models::{AgeRange, HeightRange};

/// A list requirement after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement<'a> {
    /// No effective constraint
    Open,
    /// Must equal the requirer's own value; carries the token's label
    SameAsOwn(&'a str),
    /// Must be one of these literals
    OneOf(&'a [String]),
}

impl<'a> Requirement<'a> {
    pub fn classify(values: &'a [String]) -> Self {
        if is_wildcard(values) {
            Requirement::Open
        } else if let Some(label) = is_self_reference(values) {
            Requirement::SameAsOwn(label)
        } else {
            Requirement::OneOf(values)
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Requirement::Open)
    }
}

/// Evaluate one list requirement against a candidate value
///
/// A self-reference replaces the accepted set with `anchor_own_value`.
/// Blank values on either side never satisfy a counted requirement.
pub fn evaluate(values: &[String], candidate_value: &str, anchor_own_value: &str) -> bool {
    match Requirement::classify(values) {
        Requirement::Open => true,
        Requirement::SameAsOwn(_) => tokens_equal(candidate_value, anchor_own_value),
        Requirement::OneOf(accepted) => accepted
            .iter()
            .any(|value| tokens_equal(value, candidate_value)),
    }
}

/// Inclusive age range test. An undeclared range accepts any age.
#[inline]
pub fn evaluate_age_range(range: Option<&AgeRange>, candidate_age: u8) -> bool {
    match range {
        None => true,
        Some(range) => candidate_age >= range.min && candidate_age <= range.max,
    }
}

/// True when neither height bound carries a value
pub fn is_height_range_open(range: Option<&HeightRange>) -> bool {
    match range {
        None => true,
        Some(range) => is_open_bound(&range.min) && is_open_bound(&range.max),
    }
}

/// Inclusive height range test
///
/// A blank or "Any" bound leaves that side open. An unparsable candidate
/// height or bound fails the test.
pub fn evaluate_height_range(range: Option<&HeightRange>, candidate_height: &str) -> bool {
    let range = match range {
        Some(range) if !is_height_range_open(Some(range)) => range,
        _ => return true,
    };

    let Some(height) = normalize_height(candidate_height) else {
        return false;
    };

    let lower_ok = match bound(&range.min) {
        Bound::Open => true,
        Bound::Value(min) => height >= min,
        Bound::Malformed => false,
    };
    let upper_ok = match bound(&range.max) {
        Bound::Open => true,
        Bound::Value(max) => height <= max,
        Bound::Malformed => false,
    };

    lower_ok && upper_ok
}

enum Bound {
    Open,
    Value(f64),
    Malformed,
}

fn is_open_bound(raw: &str) -> bool {
    let raw = raw.trim();
    raw.is_empty() || raw.eq_ignore_ascii_case(WILDCARD_TOKEN)
}

fn bound(raw: &str) -> Bound {
    if is_open_bound(raw) {
        return Bound::Open;
    }
    match normalize_height(raw) {
        Some(value) => Bound::Value(value),
        None => Bound::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn heights(min: &str, max: &str) -> HeightRange {
        HeightRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    #[test]
    fn test_wildcard_accepts_anything() {
        for candidate in ["Rajput", "", "???"] {
            assert!(evaluate(&[], candidate, "Syed"));
            assert!(evaluate(&list(&["Syed", "Any"]), candidate, "Syed"));
        }
    }

    #[test]
    fn test_literal_membership_is_case_insensitive() {
        let accepted = list(&["Syed", "Rajput"]);
        assert!(evaluate(&accepted, "rajput", ""));
        assert!(evaluate(&accepted, " SYED ", ""));
        assert!(!evaluate(&accepted, "Arain", ""));
        assert!(!evaluate(&accepted, "", ""));
    }

    #[test]
    fn test_self_reference_uses_requirer_value() {
        let same = list(&["Same Cast"]);
        assert!(evaluate(&same, "syed", "Syed"));
        assert!(!evaluate(&same, "Rajput", "Syed"));
        // Missing own value fails closed
        assert!(!evaluate(&same, "Syed", ""));
    }

    #[test]
    fn test_self_reference_overrides_literals() {
        let mixed = list(&["Rajput", "Same Cast"]);
        assert!(!evaluate(&mixed, "Rajput", "Syed"));
        assert!(evaluate(&mixed, "Syed", "Syed"));
    }

    #[test]
    fn test_classify() {
        let any = list(&["Any"]);
        let same = list(&["Same Maslak"]);
        let lits = list(&["Hanafi"]);
        assert!(Requirement::classify(&any).is_open());
        assert_eq!(Requirement::classify(&same), Requirement::SameAsOwn("Maslak"));
        assert_eq!(Requirement::classify(&lits), Requirement::OneOf(&lits[..]));
    }

    #[test]
    fn test_age_range_inclusive() {
        let range = AgeRange { min: 25, max: 35 };
        assert!(evaluate_age_range(Some(&range), 25));
        assert!(evaluate_age_range(Some(&range), 35));
        assert!(!evaluate_age_range(Some(&range), 24));
        assert!(!evaluate_age_range(Some(&range), 36));
        assert!(evaluate_age_range(None, 80));
    }

    #[test]
    fn test_height_range_inclusive() {
        let range = heights("5.2", "5.8");
        assert!(evaluate_height_range(Some(&range), "5.2"));
        assert!(evaluate_height_range(Some(&range), "5.8"));
        assert!(evaluate_height_range(Some(&range), "5.5"));
        assert!(!evaluate_height_range(Some(&range), "5.9"));
    }

    #[test]
    fn test_height_unparsable_candidate_fails_closed() {
        let range = heights("5.0", "6.0");
        assert!(!evaluate_height_range(Some(&range), "tall"));
        assert!(!evaluate_height_range(Some(&range), ""));
    }

    #[test]
    fn test_height_open_bounds() {
        assert!(is_height_range_open(Some(&heights("", "Any"))));
        assert!(is_height_range_open(None));
        assert!(evaluate_height_range(Some(&heights("5.5", "")), "6.1"));
        assert!(!evaluate_height_range(Some(&heights("5.5", "")), "5.1"));
    }

    #[test]
    fn test_height_malformed_bound_fails_closed() {
        assert!(!evaluate_height_range(Some(&heights("five", "6.0")), "5.5"));
    }
}

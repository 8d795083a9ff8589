use crate::core::normalize::tokens_equal;
use crate::core::requirements::percentage_of;
use crate::models::{FieldName, ProfileRecord};

/// Result of comparing two profiles' raw attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectScore {
    /// 0-100
    pub percentage: u8,
    /// Matching attributes in [`FieldName::DIRECT_ATTRIBUTES`] order
    pub matched_fields: Vec<FieldName>,
}

/// Compare raw attributes of two profiles, ignoring stated preferences
///
/// The denominator is always the full attribute set: a blank value on
/// either side is a non-match rather than an exclusion. Education and
/// occupation require the whole string to match.
pub fn score_direct(a: &ProfileRecord, b: &ProfileRecord) -> DirectScore {
    let matched_fields: Vec<FieldName> = FieldName::DIRECT_ATTRIBUTES
        .into_iter()
        .filter(|field| {
            let left = a.attribute(*field).unwrap_or_default();
            let right = b.attribute(*field).unwrap_or_default();
            tokens_equal(left, right)
        })
        .collect();

    DirectScore {
        percentage: percentage_of(matched_fields.len(), FieldName::DIRECT_ATTRIBUTES.len()),
        matched_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, RequirementSet};

    fn profile(id: &str) -> ProfileRecord {
        ProfileRecord {
            id: id.to_string(),
            name: format!("Profile {}", id),
            gender: Some(Gender::Male),
            age: 30,
            height: "5.9".to_string(),
            weight: "70".to_string(),
            cast: format!("cast-{}", id),
            maslak: format!("maslak-{}", id),
            marital_status: format!("status-{}", id),
            mother_tongue: format!("tongue-{}", id),
            belongs: format!("belongs-{}", id),
            education: format!("education-{}", id),
            occupation: format!("occupation-{}", id),
            house_type: format!("house-{}", id),
            family_type: format!("family-{}", id),
            location: format!("location-{}", id),
            status: None,
            requirements: RequirementSet::default(),
        }
    }

    #[test]
    fn test_single_shared_maslak_scores_13() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.maslak = "Hanafi".to_string();
        b.maslak = "Hanafi".to_string();

        let score = score_direct(&a, &b);

        assert_eq!(score.percentage, 13);
        assert_eq!(score.matched_fields, vec![FieldName::Maslak]);
    }

    #[test]
    fn test_identical_attributes_score_100() {
        let a = profile("a");
        let score = score_direct(&a, &a.clone());

        assert_eq!(score.percentage, 100);
        assert_eq!(score.matched_fields.len(), 8);
    }

    #[test]
    fn test_blank_values_do_not_match() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.cast.clear();
        b.cast.clear();

        assert_eq!(score_direct(&a, &b).percentage, 0);
    }

    #[test]
    fn test_education_needs_full_string() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.education = "BSc".to_string();
        b.education = "BSc Computer Science".to_string();
        assert!(score_direct(&a, &b).matched_fields.is_empty());

        b.education = "bsc".to_string();
        assert_eq!(score_direct(&a, &b).matched_fields, vec![FieldName::Education]);
    }

    #[test]
    fn test_identity_fields_ignored() {
        let a = profile("a");
        let mut b = profile("b");
        b.name = a.name.clone();
        b.gender = a.gender;

        assert_eq!(score_direct(&a, &b).percentage, 0);
    }

    #[test]
    fn test_symmetric() {
        let mut a = profile("a");
        let mut b = profile("b");
        a.cast = "Syed".to_string();
        b.cast = "SYED".to_string();
        a.occupation = "Engineer".to_string();
        b.occupation = "engineer ".to_string();

        assert_eq!(score_direct(&a, &b), score_direct(&b, &a));
        assert_eq!(score_direct(&a, &b).percentage, 25);
    }
}

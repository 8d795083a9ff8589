use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Profile gender. Matching pairs opposite genders only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse a stored gender value, case-insensitively
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Listing status. Only active profiles take part in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileStatus {
    Active,
    Inactive,
}

impl ProfileStatus {
    /// Parse a stored status value
    ///
    /// Blank means unset. Any value other than "active" (e.g. "Suspended",
    /// "Pending") is treated as inactive.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "active" => Some(ProfileStatus::Active),
            _ => Some(ProfileStatus::Inactive),
        }
    }
}

/// Snapshot of one person's profile as the matching engine sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_gender")]
    pub gender: Option<Gender>,
    #[serde(deserialize_with = "number_or_string")]
    pub age: u8,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub maslak: String,
    #[serde(default)]
    pub marital_status: String,
    #[serde(default)]
    pub mother_tongue: String,
    #[serde(default)]
    pub belongs: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub house_type: String,
    #[serde(default)]
    pub family_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<ProfileStatus>,
    #[serde(default)]
    pub requirements: RequirementSet,
}

impl ProfileRecord {
    /// An unset status counts as active
    pub fn is_active(&self) -> bool {
        matches!(self.status, None | Some(ProfileStatus::Active))
    }

    /// Raw value of a string attribute. Range fields have no single value.
    pub fn attribute(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::AgeRange => return None,
            FieldName::HeightRange => &self.height,
            FieldName::Education => &self.education,
            FieldName::Occupation => &self.occupation,
            FieldName::FamilyType => &self.family_type,
            FieldName::Location => &self.location,
            FieldName::Cast => &self.cast,
            FieldName::Maslak => &self.maslak,
            FieldName::MaritalStatus => &self.marital_status,
            FieldName::MotherTongue => &self.mother_tongue,
            FieldName::Belongs => &self.belongs,
            FieldName::HouseType => &self.house_type,
        };
        Some(value.as_str())
    }
}

/// Inclusive age preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    #[serde(deserialize_with = "number_or_string")]
    pub min: u8,
    #[serde(deserialize_with = "number_or_string")]
    pub max: u8,
}

/// Inclusive height preference in feet-decimal strings, e.g. "5.2" to "5.83"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

/// Partner preferences owned by one profile
///
/// List fields hold either nothing, the wildcard `"Any"`, a self-reference
/// such as `"Same Cast"`, or acceptable literal values. Stored documents may
/// carry a bare string instead of a list; both forms deserialize to a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSet {
    #[serde(default)]
    pub age_range: Option<AgeRange>,
    #[serde(default)]
    pub height_range: Option<HeightRange>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub education: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub occupation: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub family_type: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub location: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub cast: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub maslak: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub marital_status: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub mother_tongue: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub belongs: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub house_type: Vec<String>,
}

impl RequirementSet {
    /// Accepted values for a list field. Range fields return `None`.
    pub fn values(&self, field: FieldName) -> Option<&[String]> {
        let values = match field {
            FieldName::AgeRange | FieldName::HeightRange => return None,
            FieldName::Education => &self.education,
            FieldName::Occupation => &self.occupation,
            FieldName::FamilyType => &self.family_type,
            FieldName::Location => &self.location,
            FieldName::Cast => &self.cast,
            FieldName::Maslak => &self.maslak,
            FieldName::MaritalStatus => &self.marital_status,
            FieldName::MotherTongue => &self.mother_tongue,
            FieldName::Belongs => &self.belongs,
            FieldName::HouseType => &self.house_type,
        };
        Some(values.as_slice())
    }
}

/// Field vocabulary used in every report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    AgeRange,
    HeightRange,
    Education,
    Occupation,
    FamilyType,
    Location,
    Cast,
    Maslak,
    MaritalStatus,
    MotherTongue,
    Belongs,
    HouseType,
}

impl FieldName {
    pub const COUNT: usize = 12;

    /// Evaluation order of a requirement set. Reported field lists follow it.
    pub const REQUIREMENT_ORDER: [FieldName; FieldName::COUNT] = [
        FieldName::AgeRange,
        FieldName::HeightRange,
        FieldName::Education,
        FieldName::Occupation,
        FieldName::FamilyType,
        FieldName::Location,
        FieldName::Cast,
        FieldName::Maslak,
        FieldName::MaritalStatus,
        FieldName::MotherTongue,
        FieldName::Belongs,
        FieldName::HouseType,
    ];

    /// Attributes compared by raw equality
    pub const DIRECT_ATTRIBUTES: [FieldName; 8] = [
        FieldName::Cast,
        FieldName::Maslak,
        FieldName::MotherTongue,
        FieldName::Belongs,
        FieldName::HouseType,
        FieldName::MaritalStatus,
        FieldName::Education,
        FieldName::Occupation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::AgeRange => "ageRange",
            FieldName::HeightRange => "heightRange",
            FieldName::Education => "education",
            FieldName::Occupation => "occupation",
            FieldName::FamilyType => "familyType",
            FieldName::Location => "location",
            FieldName::Cast => "cast",
            FieldName::Maslak => "maslak",
            FieldName::MaritalStatus => "maritalStatus",
            FieldName::MotherTongue => "motherTongue",
            FieldName::Belongs => "belongs",
            FieldName::HouseType => "houseType",
        }
    }

    /// Position in [`FieldName::REQUIREMENT_ORDER`]
    pub fn order(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One direction of requirement scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalScore {
    pub percentage: u8,
    #[serde(rename = "satisfiedFields")]
    pub satisfied_fields: Vec<FieldName>,
}

/// Per-direction requirement scores behind the averaged percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementBreakdown {
    #[serde(rename = "aRequiresB")]
    pub a_requires_b: DirectionalScore,
    #[serde(rename = "bRequiresA")]
    pub b_requires_a: DirectionalScore,
}

/// Outcome of comparing two profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    #[serde(rename = "matchingFields")]
    pub matching_fields: Vec<FieldName>,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "requirementMatchPercentage")]
    pub requirement_match_percentage: u8,
    #[serde(rename = "directMatchPercentage")]
    pub direct_match_percentage: u8,
    #[serde(rename = "requirementMatchingFields")]
    pub requirement_matching_fields: Vec<FieldName>,
    #[serde(rename = "directMatchingFields")]
    pub direct_matching_fields: Vec<FieldName>,
    #[serde(rename = "ageDifference")]
    pub age_difference: u8,
    #[serde(rename = "ageCompatible")]
    pub age_compatible: bool,
    #[serde(rename = "isMatch")]
    pub is_match: bool,
    #[serde(rename = "requirementBreakdown")]
    pub requirement_breakdown: RequirementBreakdown,
}

/// Candidate accepted by the pool matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub profile: ProfileRecord,
    pub score: u8,
    #[serde(rename = "matchedFields")]
    pub matched_fields: Vec<FieldName>,
    #[serde(rename = "ageDifference")]
    pub age_difference: u8,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<Option<String>>),
}

/// Accept `"Syed"`, `["Syed", "Rajput"]` or `null` and yield a list.
/// Comma separated strings are split.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<StringOrList> = Option::deserialize(deserializer)?;
    let values = match raw {
        None => Vec::new(),
        Some(StringOrList::One(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect(),
        Some(StringOrList::Many(list)) => list
            .into_iter()
            .flatten()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect(),
    };
    Ok(values)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

fn number_or_string<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => u8::try_from(n).map_err(D::Error::custom),
        NumberOrString::Text(s) => s.trim().parse::<u8>().map_err(D::Error::custom),
    }
}

fn lenient_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Gender::parse))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<ProfileStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ProfileStatus::parse))
}

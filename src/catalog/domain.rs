use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered users, issued by the auth collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

/// Identifier wrapper for catalog records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScholarshipId(pub u64);

/// Reservation categories recognized by the catalog. On a scholarship record
/// `Gen` doubles as the wildcard: open to every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "GEN")]
    Gen,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    Minority,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Gen => "GEN",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Minority => "Minority",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "GEN" => Some(Category::Gen),
            "OBC" => Some(Category::Obc),
            "SC" => Some(Category::Sc),
            "ST" => Some(Category::St),
            "Minority" => Some(Category::Minority),
            _ => None,
        }
    }
}

/// Academic and financial profile a user fills in after registration. Every
/// scoring-relevant field is optional; the matching rubric decides per
/// dimension whether absence skips or penalizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub highest_education: Option<String>,
    /// 0-10 scale.
    pub cgpa: Option<f64>,
    /// Annual family income in currency units.
    pub family_income: Option<u64>,
    pub category: Option<Category>,
    pub state: Option<String>,
    pub interests: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Upsert payload for a profile, keyed by the caller's identity at the
/// service boundary. Numeric coercion happens during deserialization; range
/// checks live in [`ProfileUpdate::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub highest_education: Option<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(default)]
    pub family_income: Option<u64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub interests: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(cgpa) = self.cgpa {
            if !(0.0..=10.0).contains(&cgpa) {
                return Err("cgpa: CGPA must be between 0 and 10".to_string());
            }
        }
        Ok(())
    }

    pub fn into_profile(self, user_id: UserId) -> UserProfile {
        UserProfile {
            user_id,
            highest_education: self.highest_education,
            cgpa: self.cgpa,
            family_income: self.family_income,
            category: self.category,
            state: self.state,
            interests: self.interests,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
        }
    }
}

/// Catalog record describing one scholarship. `eligibility` and
/// `required_documents` are newline-joined blocks authored by administrators
/// and split into lines at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    pub id: ScholarshipId,
    pub name: String,
    pub description: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub eligibility: String,
    pub required_documents: String,
    pub official_website: Option<String>,
    /// Family income ceiling; `None` means the scholarship sets no limit.
    pub annual_income: Option<u64>,
    pub category: Option<Category>,
    pub education_level: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: UserId,
}

impl Scholarship {
    pub fn eligibility_lines(&self) -> Vec<String> {
        split_lines(&self.eligibility)
    }

    pub fn required_document_lines(&self) -> Vec<String> {
        split_lines(&self.required_documents)
    }
}

fn split_lines(block: &str) -> Vec<String> {
    if block.is_empty() {
        return Vec::new();
    }
    block.split('\n').map(str::to_string).collect()
}

/// Create/update payload for a scholarship; identifiers, activity flag, and
/// audit fields are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipDraft {
    pub name: String,
    pub description: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub eligibility: String,
    pub required_documents: String,
    #[serde(default)]
    pub official_website: Option<String>,
    #[serde(default)]
    pub annual_income: Option<u64>,
    #[serde(default)]
    pub category: Option<Category>,
    pub education_level: String,
}

/// Role attached to a caller by the upstream auth middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallerRole {
    Admin,
    Applicant,
}

impl CallerRole {
    /// Anything other than the admin literal is treated as a regular
    /// applicant, matching the upstream token contract.
    pub fn from_header(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("admin") {
            CallerRole::Admin
        } else {
            CallerRole::Applicant
        }
    }
}

/// Authenticated identity handed over by the out-of-scope auth layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub role: CallerRole,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == CallerRole::Admin
    }
}

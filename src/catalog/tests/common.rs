use std::sync::Arc;

use axum::response::Response;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::catalog::domain::{
    Caller, CallerRole, Category, Scholarship, ScholarshipDraft, ScholarshipId, UserId,
    UserProfile,
};
use crate::catalog::memory::MemoryCatalog;
use crate::catalog::repository::{
    ProfileRepository, RepositoryError, ScholarshipRepository,
};
use crate::catalog::service::CatalogService;

pub(super) fn scholarship(education_level: &str) -> Scholarship {
    Scholarship {
        id: ScholarshipId(1),
        name: "National Merit Scholarship".to_string(),
        description: "Merit award for high-performing students.".to_string(),
        amount: "50,000 per year".to_string(),
        deadline: NaiveDate::from_ymd_opt(2026, 3, 31).expect("valid date"),
        eligibility: "Enrolled full-time\nMinimum CGPA 7.5".to_string(),
        required_documents: "Mark sheet\nEnrollment certificate".to_string(),
        official_website: None,
        annual_income: None,
        category: None,
        education_level: education_level.to_string(),
        is_active: true,
        created_at: Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).single().expect("valid timestamp"),
        created_by: UserId(1),
    }
}

pub(super) fn profile(education: &str) -> UserProfile {
    UserProfile {
        user_id: UserId(7),
        highest_education: Some(education.to_string()),
        cgpa: None,
        family_income: None,
        category: None,
        state: None,
        interests: None,
        gender: None,
        date_of_birth: None,
    }
}

pub(super) fn draft(name: &str, education_level: &str) -> ScholarshipDraft {
    ScholarshipDraft {
        name: name.to_string(),
        description: "Support for continuing students.".to_string(),
        amount: "25,000 one-time".to_string(),
        deadline: NaiveDate::from_ymd_opt(2026, 6, 30).expect("valid date"),
        eligibility: "Enrolled full-time".to_string(),
        required_documents: "Mark sheet".to_string(),
        official_website: None,
        annual_income: None,
        category: None,
        education_level: education_level.to_string(),
    }
}

pub(super) fn admin() -> Caller {
    Caller {
        user_id: UserId(1),
        role: CallerRole::Admin,
    }
}

pub(super) fn applicant(id: u64) -> Caller {
    Caller {
        user_id: UserId(id),
        role: CallerRole::Applicant,
    }
}

pub(super) fn build_service() -> (
    CatalogService<MemoryCatalog, MemoryCatalog>,
    Arc<MemoryCatalog>,
) {
    let catalog = Arc::new(MemoryCatalog::default());
    let service = CatalogService::new(catalog.clone(), catalog.clone());
    (service, catalog)
}

pub(super) fn sc_category() -> Option<Category> {
    Some(Category::Sc)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository double simulating a database outage.
pub(super) struct UnavailableCatalog;

impl ScholarshipRepository for UnavailableCatalog {
    fn insert(
        &self,
        _draft: ScholarshipDraft,
        _created_by: UserId,
    ) -> Result<Scholarship, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _id: ScholarshipId, _draft: ScholarshipDraft) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn deactivate(&self, _id: ScholarshipId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: ScholarshipId) -> Result<Option<Scholarship>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn active_by_deadline(&self) -> Result<Vec<Scholarship>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn active_recent_first(&self) -> Result<Vec<Scholarship>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

impl ProfileRepository for UnavailableCatalog {
    fn fetch(&self, _user: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _profile: UserProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

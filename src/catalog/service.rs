use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    Caller, Category, ProfileUpdate, Scholarship, ScholarshipDraft, ScholarshipId, UserProfile,
};
use super::matching::{eligible_candidates, match_score, MatchResult, FULL_MATCH};
use super::repository::{ProfileRepository, RepositoryError, ScholarshipRepository};

/// Service facade composing the catalog repository, the profile repository,
/// and the matching engine. Admin callers manage records and see the
/// unfiltered catalog; applicants see a filtered, scored view.
pub struct CatalogService<S, P> {
    scholarships: Arc<S>,
    profiles: Arc<P>,
}

impl<S, P> CatalogService<S, P>
where
    S: ScholarshipRepository + 'static,
    P: ProfileRepository + 'static,
{
    pub fn new(scholarships: Arc<S>, profiles: Arc<P>) -> Self {
        Self {
            scholarships,
            profiles,
        }
    }

    /// List active scholarships for the caller. Admin mode bypasses the
    /// candidate filter and reports every record as a full match, a display
    /// convention for people who manage the catalog rather than apply to it.
    pub fn list(&self, caller: &Caller) -> Result<Vec<ScholarshipMatchView>, CatalogServiceError> {
        if caller.is_admin() {
            let catalog = self.scholarships.active_recent_first()?;
            return Ok(catalog.iter().map(ScholarshipMatchView::admin).collect());
        }

        let profile = self
            .profiles
            .fetch(&caller.user_id)?
            .ok_or(CatalogServiceError::ProfileIncomplete)?;

        let catalog = self.scholarships.active_by_deadline()?;
        let education = profile.highest_education.as_deref().unwrap_or("");
        let views = eligible_candidates(&catalog, education)
            .into_iter()
            .map(|scholarship| {
                ScholarshipMatchView::scored(scholarship, match_score(scholarship, Some(&profile)))
            })
            .collect();

        Ok(views)
    }

    /// Fetch a single scholarship with match data for the caller. Direct
    /// lookups skip the candidate filter, so the scorer's strict education
    /// gate is the only eligibility check applied here, for every role.
    pub fn get(
        &self,
        caller: &Caller,
        id: ScholarshipId,
    ) -> Result<ScholarshipMatchView, CatalogServiceError> {
        let scholarship = self
            .scholarships
            .fetch(id)?
            .ok_or(CatalogServiceError::Repository(RepositoryError::NotFound))?;
        let profile = self.profiles.fetch(&caller.user_id)?;
        let result = match_score(&scholarship, profile.as_ref());
        Ok(ScholarshipMatchView::scored(&scholarship, result))
    }

    pub fn create(
        &self,
        caller: &Caller,
        draft: ScholarshipDraft,
    ) -> Result<Scholarship, CatalogServiceError> {
        self.require_admin(caller)?;
        Ok(self.scholarships.insert(draft, caller.user_id)?)
    }

    pub fn update(
        &self,
        caller: &Caller,
        id: ScholarshipId,
        draft: ScholarshipDraft,
    ) -> Result<(), CatalogServiceError> {
        self.require_admin(caller)?;
        Ok(self.scholarships.update(id, draft)?)
    }

    /// Soft delete: the record leaves both listings but stays fetchable.
    pub fn deactivate(
        &self,
        caller: &Caller,
        id: ScholarshipId,
    ) -> Result<(), CatalogServiceError> {
        self.require_admin(caller)?;
        Ok(self.scholarships.deactivate(id)?)
    }

    pub fn profile(&self, caller: &Caller) -> Result<Option<UserProfile>, CatalogServiceError> {
        Ok(self.profiles.fetch(&caller.user_id)?)
    }

    pub fn update_profile(
        &self,
        caller: &Caller,
        update: ProfileUpdate,
    ) -> Result<(), CatalogServiceError> {
        let profile = update.into_profile(caller.user_id);
        Ok(self.profiles.upsert(profile)?)
    }

    fn require_admin(&self, caller: &Caller) -> Result<(), CatalogServiceError> {
        if caller.is_admin() {
            Ok(())
        } else {
            Err(CatalogServiceError::Forbidden)
        }
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    /// Applicants must complete a profile before listings can be scored.
    #[error("Please complete your profile first")]
    ProfileIncomplete,
    #[error("administrator role required")]
    Forbidden,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Merged presentation shape: the scholarship record with its match data and
/// the newline blocks split for rendering. This is the only contract the
/// scorer honors towards downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScholarshipMatchView {
    pub id: ScholarshipId,
    pub name: String,
    pub description: String,
    pub amount: String,
    pub deadline: NaiveDate,
    pub eligibility: Vec<String>,
    #[serde(rename = "requiredDocuments")]
    pub required_documents: Vec<String>,
    pub official_website: Option<String>,
    pub annual_income: Option<u64>,
    pub category: Option<Category>,
    pub education_level: String,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "failedCriteria")]
    pub failed_criteria: Vec<String>,
}

impl ScholarshipMatchView {
    /// Admin listing convention: flat 100%, no failed criteria.
    pub fn admin(scholarship: &Scholarship) -> Self {
        Self::from_parts(scholarship, FULL_MATCH, Vec::new())
    }

    pub fn scored(scholarship: &Scholarship, result: MatchResult) -> Self {
        Self::from_parts(scholarship, result.score, result.reasons)
    }

    fn from_parts(scholarship: &Scholarship, score: u8, reasons: Vec<String>) -> Self {
        Self {
            id: scholarship.id,
            name: scholarship.name.clone(),
            description: scholarship.description.clone(),
            amount: scholarship.amount.clone(),
            deadline: scholarship.deadline,
            eligibility: scholarship.eligibility_lines(),
            required_documents: scholarship.required_document_lines(),
            official_website: scholarship.official_website.clone(),
            annual_income: scholarship.annual_income,
            category: scholarship.category,
            education_level: scholarship.education_level.clone(),
            match_percentage: score,
            failed_criteria: reasons,
        }
    }
}

//! Scholarship catalog: domain records, the eligibility matching engine, the
//! persistence seam, the service facade, and the HTTP router.

pub mod domain;
pub mod matching;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Caller, CallerRole, Category, ProfileUpdate, Scholarship, ScholarshipDraft, ScholarshipId,
    UserId, UserProfile,
};
pub use matching::{eligible_candidates, match_score, MatchOutcome, MatchResult};
pub use memory::MemoryCatalog;
pub use repository::{ProfileRepository, RepositoryError, ScholarshipRepository};
pub use router::catalog_router;
pub use service::{CatalogService, CatalogServiceError, ScholarshipMatchView};

use super::domain::{Scholarship, ScholarshipDraft, ScholarshipId, UserId, UserProfile};

/// Storage abstraction for the scholarship catalog so the service module can
/// be exercised in isolation. Listing methods return only active records in
/// the order the HTTP layer presents them.
pub trait ScholarshipRepository: Send + Sync {
    fn insert(
        &self,
        draft: ScholarshipDraft,
        created_by: UserId,
    ) -> Result<Scholarship, RepositoryError>;
    fn update(&self, id: ScholarshipId, draft: ScholarshipDraft) -> Result<(), RepositoryError>;
    /// Soft delete: the record stays fetchable by id but leaves both listings.
    fn deactivate(&self, id: ScholarshipId) -> Result<(), RepositoryError>;
    fn fetch(&self, id: ScholarshipId) -> Result<Option<Scholarship>, RepositoryError>;
    /// User-mode listing order: ascending deadline.
    fn active_by_deadline(&self) -> Result<Vec<Scholarship>, RepositoryError>;
    /// Admin-mode listing order: most recently created first.
    fn active_recent_first(&self) -> Result<Vec<Scholarship>, RepositoryError>;
}

/// Storage abstraction for user profiles (at most one per user).
pub trait ProfileRepository: Send + Sync {
    fn fetch(&self, user: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
    fn upsert(&self, profile: UserProfile) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::{Duration, Utc};

use super::domain::{
    Category, Scholarship, ScholarshipDraft, ScholarshipId, UserId, UserProfile,
};
use super::repository::{ProfileRepository, RepositoryError, ScholarshipRepository};

/// In-memory implementation of both repository traits, backing the binary and
/// the test suites.
#[derive(Default)]
pub struct MemoryCatalog {
    scholarships: Mutex<BTreeMap<ScholarshipId, Scholarship>>,
    profiles: Mutex<HashMap<UserId, UserProfile>>,
    sequence: AtomicU64,
}

impl MemoryCatalog {
    /// Catalog pre-populated with a handful of records so `serve` and the
    /// `match` subcommand have something to score out of the box.
    pub fn seeded() -> Self {
        let catalog = Self::default();
        let admin = UserId(1);
        let today = Utc::now().date_naive();

        let seeds = [
            ScholarshipDraft {
                name: "National Merit Scholarship".to_string(),
                description: "Merit award for high-performing undergraduate students."
                    .to_string(),
                amount: "50,000 per year".to_string(),
                deadline: today + Duration::days(45),
                eligibility: "Enrolled in a recognized institution\nMinimum CGPA 7.5".to_string(),
                required_documents: "Mark sheet\nEnrollment certificate".to_string(),
                official_website: Some("https://scholarships.gov.example/merit".to_string()),
                annual_income: None,
                category: Some(Category::Gen),
                education_level: "Undergraduate".to_string(),
            },
            ScholarshipDraft {
                name: "Post-Matric SC Scholarship".to_string(),
                description: "Income-linked support for SC students continuing after matriculation."
                    .to_string(),
                amount: "35,000 per year".to_string(),
                deadline: today + Duration::days(30),
                eligibility: "SC category certificate\nFamily income within ceiling".to_string(),
                required_documents: "Caste certificate\nIncome certificate".to_string(),
                official_website: None,
                annual_income: Some(250_000),
                category: Some(Category::Sc),
                education_level: "Undergraduate".to_string(),
            },
            ScholarshipDraft {
                name: "Minority Welfare Research Grant".to_string(),
                description: "Postgraduate research grant for minority community students."
                    .to_string(),
                amount: "60,000 one-time".to_string(),
                deadline: today + Duration::days(60),
                eligibility: "Minority community certificate\nResearch proposal".to_string(),
                required_documents: "Community certificate\nProposal abstract".to_string(),
                official_website: None,
                annual_income: Some(600_000),
                category: Some(Category::Minority),
                education_level: "Postgraduate".to_string(),
            },
        ];

        for draft in seeds {
            // Inserts into a fresh map cannot fail.
            let _ = catalog.insert(draft, admin);
        }

        catalog
    }

    fn next_id(&self) -> ScholarshipId {
        ScholarshipId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl ScholarshipRepository for MemoryCatalog {
    fn insert(
        &self,
        draft: ScholarshipDraft,
        created_by: UserId,
    ) -> Result<Scholarship, RepositoryError> {
        let id = self.next_id();
        let record = Scholarship {
            id,
            name: draft.name,
            description: draft.description,
            amount: draft.amount,
            deadline: draft.deadline,
            eligibility: draft.eligibility,
            required_documents: draft.required_documents,
            official_website: draft.official_website,
            annual_income: draft.annual_income,
            category: draft.category,
            education_level: draft.education_level,
            is_active: true,
            created_at: Utc::now(),
            created_by,
        };

        let mut guard = self.scholarships.lock().expect("catalog mutex poisoned");
        guard.insert(id, record.clone());
        Ok(record)
    }

    fn update(&self, id: ScholarshipId, draft: ScholarshipDraft) -> Result<(), RepositoryError> {
        let mut guard = self.scholarships.lock().expect("catalog mutex poisoned");
        let record = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;

        record.name = draft.name;
        record.description = draft.description;
        record.amount = draft.amount;
        record.deadline = draft.deadline;
        record.eligibility = draft.eligibility;
        record.required_documents = draft.required_documents;
        record.official_website = draft.official_website;
        record.annual_income = draft.annual_income;
        record.category = draft.category;
        record.education_level = draft.education_level;
        Ok(())
    }

    fn deactivate(&self, id: ScholarshipId) -> Result<(), RepositoryError> {
        let mut guard = self.scholarships.lock().expect("catalog mutex poisoned");
        let record = guard.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        record.is_active = false;
        Ok(())
    }

    fn fetch(&self, id: ScholarshipId) -> Result<Option<Scholarship>, RepositoryError> {
        let guard = self.scholarships.lock().expect("catalog mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn active_by_deadline(&self) -> Result<Vec<Scholarship>, RepositoryError> {
        let guard = self.scholarships.lock().expect("catalog mutex poisoned");
        let mut records: Vec<Scholarship> = guard
            .values()
            .filter(|record| record.is_active)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.deadline.cmp(&b.deadline).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    fn active_recent_first(&self) -> Result<Vec<Scholarship>, RepositoryError> {
        let guard = self.scholarships.lock().expect("catalog mutex poisoned");
        let mut records: Vec<Scholarship> = guard
            .values()
            .filter(|record| record.is_active)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}

impl ProfileRepository for MemoryCatalog {
    fn fetch(&self, user: &UserId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.profiles.lock().expect("profile mutex poisoned");
        Ok(guard.get(user).cloned())
    }

    fn upsert(&self, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.profiles.lock().expect("profile mutex poisoned");
        guard.insert(profile.user_id, profile);
        Ok(())
    }
}

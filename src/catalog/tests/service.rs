use std::sync::Arc;

use super::common::*;
use crate::catalog::domain::{Category, ProfileUpdate, ScholarshipId};
use crate::catalog::repository::RepositoryError;
use crate::catalog::service::{CatalogService, CatalogServiceError};

fn seeded_profile_update(education: &str) -> ProfileUpdate {
    ProfileUpdate {
        highest_education: Some(education.to_string()),
        cgpa: Some(8.0),
        family_income: Some(200_000),
        category: Some(Category::Sc),
        state: None,
        interests: None,
        gender: None,
        date_of_birth: None,
    }
}

#[test]
fn admin_listing_reports_every_record_as_full_match() {
    let (service, _) = build_service();
    service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");
    service
        .create(&admin(), draft("Research Grant", "Postgraduate"))
        .expect("create succeeds");

    let views = service.list(&admin()).expect("admin listing");

    assert_eq!(views.len(), 2);
    for view in &views {
        assert_eq!(view.match_percentage, 100);
        assert!(view.failed_criteria.is_empty());
    }
    // Recent first: the second record leads.
    assert_eq!(views[0].name, "Research Grant");
}

#[test]
fn applicant_listing_requires_a_profile() {
    let (service, _) = build_service();
    service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");

    match service.list(&applicant(7)) {
        Err(CatalogServiceError::ProfileIncomplete) => {}
        other => panic!("expected profile-incomplete error, got {other:?}"),
    }
}

#[test]
fn applicant_listing_filters_by_level_and_scores() {
    let (service, _) = build_service();
    let caller = applicant(7);
    service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");
    service
        .create(&admin(), draft("Research Grant", "Postgraduate"))
        .expect("create succeeds");
    service
        .update_profile(&caller, seeded_profile_update("Undergraduate"))
        .expect("profile stored");

    let views = service.list(&caller).expect("listing");

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "Merit Award");
    // Education 40 + CGPA 20; income and category skip because the draft
    // carries neither ceiling nor reservation.
    assert_eq!(views[0].match_percentage, 60);
    assert!(views[0].failed_criteria.is_empty());
}

#[test]
fn applicant_listing_orders_by_deadline() {
    let (service, _) = build_service();
    let caller = applicant(7);
    let mut late = draft("Late Deadline", "Undergraduate");
    late.deadline = chrono::NaiveDate::from_ymd_opt(2026, 9, 30).expect("valid date");
    let mut early = draft("Early Deadline", "Undergraduate");
    early.deadline = chrono::NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date");

    service.create(&admin(), late).expect("create succeeds");
    service.create(&admin(), early).expect("create succeeds");
    service
        .update_profile(&caller, seeded_profile_update("Undergraduate"))
        .expect("profile stored");

    let views = service.list(&caller).expect("listing");

    let names: Vec<&str> = views.iter().map(|view| view.name.as_str()).collect();
    assert_eq!(names, vec!["Early Deadline", "Late Deadline"]);
}

#[test]
fn detail_lookup_bypasses_the_selector() {
    // The filter would forgive a case difference; the detail path must not.
    let (service, _) = build_service();
    let caller = applicant(7);
    let record = service
        .create(&admin(), draft("Merit Award", "UNDERGRADUATE"))
        .expect("create succeeds");
    service
        .update_profile(&caller, seeded_profile_update("Undergraduate"))
        .expect("profile stored");

    let view = service.get(&caller, record.id).expect("detail");

    assert_eq!(view.match_percentage, 0);
    assert_eq!(
        view.failed_criteria,
        vec!["Education level mismatch (Requires UNDERGRADUATE)".to_string()]
    );
}

#[test]
fn detail_without_profile_reports_profile_missing() {
    let (service, _) = build_service();
    let record = service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");

    let view = service.get(&applicant(9), record.id).expect("detail");

    assert_eq!(view.match_percentage, 0);
    assert_eq!(view.failed_criteria, vec!["Profile not completed.".to_string()]);
}

#[test]
fn detail_splits_newline_blocks_into_lines() {
    let (service, _) = build_service();
    let mut payload = draft("Merit Award", "Undergraduate");
    payload.eligibility = "Line one\nLine two".to_string();
    payload.required_documents = String::new();
    let record = service.create(&admin(), payload).expect("create succeeds");

    let view = service.get(&admin(), record.id).expect("detail");

    assert_eq!(view.eligibility, vec!["Line one", "Line two"]);
    assert!(view.required_documents.is_empty());
}

#[test]
fn unknown_scholarship_is_not_found() {
    let (service, _) = build_service();

    match service.get(&admin(), ScholarshipId(404)) {
        Err(CatalogServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn mutations_require_the_admin_role() {
    let (service, _) = build_service();
    let record = service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");

    let caller = applicant(7);
    assert!(matches!(
        service.create(&caller, draft("Rogue", "Undergraduate")),
        Err(CatalogServiceError::Forbidden)
    ));
    assert!(matches!(
        service.update(&caller, record.id, draft("Rogue", "Undergraduate")),
        Err(CatalogServiceError::Forbidden)
    ));
    assert!(matches!(
        service.deactivate(&caller, record.id),
        Err(CatalogServiceError::Forbidden)
    ));
}

#[test]
fn update_replaces_catalog_fields() {
    let (service, _) = build_service();
    let record = service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");

    let mut revised = draft("Merit Award (Revised)", "Undergraduate");
    revised.annual_income = Some(400_000);
    service
        .update(&admin(), record.id, revised)
        .expect("update succeeds");

    let view = service.get(&admin(), record.id).expect("detail");
    assert_eq!(view.name, "Merit Award (Revised)");
    assert_eq!(view.annual_income, Some(400_000));
}

#[test]
fn update_of_unknown_record_is_not_found() {
    let (service, _) = build_service();

    match service.update(&admin(), ScholarshipId(404), draft("Ghost", "Undergraduate")) {
        Err(CatalogServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not-found, got {other:?}"),
    }
}

#[test]
fn deactivated_records_leave_listings_but_stay_fetchable() {
    let (service, _) = build_service();
    let caller = applicant(7);
    let record = service
        .create(&admin(), draft("Merit Award", "Undergraduate"))
        .expect("create succeeds");
    service
        .update_profile(&caller, seeded_profile_update("Undergraduate"))
        .expect("profile stored");

    service
        .deactivate(&admin(), record.id)
        .expect("deactivate succeeds");

    assert!(service.list(&admin()).expect("admin listing").is_empty());
    assert!(service.list(&caller).expect("user listing").is_empty());
    // Soft delete: the detail endpoint still resolves the record.
    assert!(service.get(&admin(), record.id).is_ok());
}

#[test]
fn profile_upsert_roundtrip_and_overwrite() {
    let (service, _) = build_service();
    let caller = applicant(7);

    assert!(service.profile(&caller).expect("fetch").is_none());

    service
        .update_profile(&caller, seeded_profile_update("Undergraduate"))
        .expect("profile stored");
    let stored = service
        .profile(&caller)
        .expect("fetch")
        .expect("profile present");
    assert_eq!(stored.highest_education.as_deref(), Some("Undergraduate"));
    assert_eq!(stored.cgpa, Some(8.0));

    let mut revised = seeded_profile_update("Postgraduate");
    revised.cgpa = Some(6.5);
    service
        .update_profile(&caller, revised)
        .expect("profile stored");
    let stored = service
        .profile(&caller)
        .expect("fetch")
        .expect("profile present");
    assert_eq!(stored.highest_education.as_deref(), Some("Postgraduate"));
    assert_eq!(stored.cgpa, Some(6.5));
}

#[test]
fn repository_outage_surfaces_as_service_error() {
    let catalog = Arc::new(UnavailableCatalog);
    let service = CatalogService::new(catalog.clone(), catalog);

    match service.list(&admin()) {
        Err(CatalogServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}

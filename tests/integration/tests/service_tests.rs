//! Service-level tests over the in-memory ports
//!
//! No external services are needed. Run with:
//! cargo test -p integration-tests --test service_tests

use chrono::{NaiveDate, Utc};
use integration_tests::*;
use portal_common::{AppError, BootstrapAdminConfig, UploadFailurePolicy};
use portal_core::{DomainError, Position, PublicView, Sections, ViewCache};
use portal_service::{
    AccessService, AuthService, ChangePasswordRequest, DashboardService, EventService,
    GalleryService, ImageInput, LandingService, LoginRequest, NewsRequest, NewsService,
    OfficerService, ServiceError,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn login(name: &str, password: &str) -> LoginRequest {
    LoginRequest {
        name: name.to_string(),
        password: password.to_string(),
    }
}

fn domain(err: &ServiceError) -> &DomainError {
    err.as_domain()
        .unwrap_or_else(|| panic!("expected a domain error, got {err:?}"))
}

// ============================================================================
// Officer uniqueness
// ============================================================================

#[tokio::test]
async fn test_duplicate_member_id_is_rejected_without_write() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    officers
        .create(officer_request("Jane Doe", "12345", "Staff", "Education"), ImageInput::None)
        .await
        .unwrap();

    let err = officers
        .create(officer_request("John Roe", "12345", "Staff", "Education"), ImageInput::None)
        .await
        .unwrap_err();

    assert!(matches!(domain(&err), DomainError::MemberIdTaken(id) if id == "12345"));
    assert_eq!(err.status_code(), 409);
    assert_eq!(t.store.officer_count(), 1);
    assert_eq!(t.store.officer_by_member_id("12345").unwrap().name, "Jane Doe");
}

#[tokio::test]
async fn test_singleton_position_names_current_holder() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    let first = officers
        .create(officer_request("Dana Director", "D001", "Director", "Education"), ImageInput::None)
        .await
        .unwrap();

    let err = officers
        .create(officer_request("Eve Other", "D002", "Director", "Education"), ImageInput::None)
        .await
        .unwrap_err();
    match domain(&err) {
        DomainError::PositionOccupied { position, holder } => {
            assert_eq!(position, "Director");
            assert_eq!(holder, "Dana Director");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Dana Director"));

    // An inactive holder frees the seat
    officers.set_active(first.id.unwrap(), false).await.unwrap();
    officers
        .create(officer_request("Eve Other", "D002", "Director", "Education"), ImageInput::None)
        .await
        .unwrap();

    // and cannot take it back while someone else holds it
    let err = officers.set_active(first.id.unwrap(), true).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::PositionOccupied { holder, .. } if holder == "Eve Other"));
}

#[tokio::test]
async fn test_one_head_per_division() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    officers
        .create(officer_request("Hana Head", "H001", "Head of Division", "Education"), ImageInput::None)
        .await
        .unwrap();

    let err = officers
        .create(officer_request("Ivan Head", "H002", "Head of Division", "Education"), ImageInput::None)
        .await
        .unwrap_err();
    assert!(matches!(
        domain(&err),
        DomainError::DivisionHeadOccupied { division, holder }
            if division == "Education" && holder == "Hana Head"
    ));

    officers
        .create(officer_request("Ivan Head", "H002", "Head of Division", "Secretariat"), ImageInput::None)
        .await
        .unwrap();
    assert_eq!(t.store.officer_count(), 2);
}

#[tokio::test]
async fn test_role_and_division_follow_position() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    let created = officers
        .create(officer_request("Wes Master", "W001", "Web Master", "Education"), ImageInput::None)
        .await
        .unwrap();
    let officer = officers.get(created.id.unwrap()).await.unwrap();

    assert_eq!(officer.division, "Information & Creative Media");
    assert_eq!(officer.access_role.as_str(), "ADMIN");
    assert!(officer.must_change_password);

    let err = officers
        .create(officer_request("Nia Nowhere", "N001", "Staff", "Marketing"), ImageInput::None)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::UnknownDivision(_)));
}

#[tokio::test]
async fn test_blank_required_field_is_a_validation_error() {
    let t = TestContext::new();
    let err = OfficerService::new(&t.ctx)
        .create(officer_request("   ", "X001", "Staff", "Education"), ImageInput::None)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert_eq!(t.store.officer_count(), 0);
}

// ============================================================================
// Sign-in and passwords
// ============================================================================

#[tokio::test]
async fn test_legacy_login_then_password_change() {
    let t = TestContext::new();
    seed_officer(&t.store, "Lee Legacy", "L001", Position::Staff, "Education", None);
    let auth = AuthService::new(&t.ctx);

    let outcome = auth.login(login("Lee Legacy", "L001")).await.unwrap();
    assert!(outcome.response.must_change_password);
    assert_eq!(outcome.response.user.member_id, "L001");
    assert!(!outcome.session.token.is_empty());

    auth.change_password(ChangePasswordRequest {
        member_id: "L001".into(),
        old_password: "L001".into(),
        new_password: "fresh-pass".into(),
    })
    .await
    .unwrap();

    let err = auth.login(login("Lee Legacy", "L001")).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidCredential));
    assert_eq!(err.status_code(), 401);

    let outcome = auth.login(login("Lee Legacy", "fresh-pass")).await.unwrap();
    assert!(!outcome.response.must_change_password);
}

#[tokio::test]
async fn test_new_officer_signs_in_with_member_id() {
    let t = TestContext::new();
    OfficerService::new(&t.ctx)
        .create(officer_request("Nora New", "N100", "Staff", "Education"), ImageInput::None)
        .await
        .unwrap();

    let outcome = AuthService::new(&t.ctx)
        .login(login("Nora New", "N100"))
        .await
        .unwrap();
    assert!(outcome.response.must_change_password);
}

#[tokio::test]
async fn test_disabled_officer_cannot_sign_in() {
    let t = TestContext::new();
    let officer = seed_officer(&t.store, "Dee Disabled", "D100", Position::Staff, "Education", Some("right-pass"));
    OfficerService::new(&t.ctx)
        .set_active(officer.id, false)
        .await
        .unwrap();

    let err = AuthService::new(&t.ctx)
        .login(login("Dee Disabled", "right-pass"))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AccountDisabled));
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_unknown_name_is_not_found() {
    let t = TestContext::new();
    let err = AuthService::new(&t.ctx)
        .login(login("Nobody", "whatever"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_wrong_old_password_keeps_credential() {
    let t = TestContext::new();
    seed_officer(&t.store, "Pat Pass", "P001", Position::Staff, "Education", Some("first-pass"));
    let auth = AuthService::new(&t.ctx);

    let err = auth
        .change_password(ChangePasswordRequest {
            member_id: "P001".into(),
            old_password: "not-it".into(),
            new_password: "second-pass".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidCredential));

    auth.login(login("Pat Pass", "first-pass")).await.unwrap();
}

#[tokio::test]
async fn test_password_change_for_unknown_member_id() {
    let t = TestContext::new();
    let err = AuthService::new(&t.ctx)
        .change_password(ChangePasswordRequest {
            member_id: "X999".into(),
            old_password: "whatever".into(),
            new_password: "second-pass".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::OfficerNotFound(id) if id == "X999"));
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_disabled_officer_can_change_password() {
    let t = TestContext::new();
    let officer = seed_officer(&t.store, "Dee Disabled", "D100", Position::Staff, "Education", Some("right-pass"));
    OfficerService::new(&t.ctx)
        .set_active(officer.id, false)
        .await
        .unwrap();
    let auth = AuthService::new(&t.ctx);

    auth.change_password(ChangePasswordRequest {
        member_id: "D100".into(),
        old_password: "right-pass".into(),
        new_password: "next-pass".into(),
    })
    .await
    .unwrap();

    // Still disabled, but the new password is the one checked
    let err = auth.login(login("Dee Disabled", "right-pass")).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidCredential));
    let err = auth.login(login("Dee Disabled", "next-pass")).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::AccountDisabled));
}

#[tokio::test]
async fn test_bootstrap_admin_only_on_empty_store() {
    let t = TestContext::new();
    let auth = AuthService::new(&t.ctx);
    let config = BootstrapAdminConfig {
        name: "First Admin".to_string(),
        member_id: "B0001".to_string(),
    };

    let officer = auth.bootstrap_admin(&config).await.unwrap().expect("admin created");
    assert_eq!(officer.access_role.as_str(), "ADMIN");
    assert!(officer.must_change_password);

    let outcome = auth.login(login("First Admin", "B0001")).await.unwrap();
    assert!(outcome.response.must_change_password);

    assert!(auth.bootstrap_admin(&config).await.unwrap().is_none());
    assert_eq!(t.store.officer_count(), 1);
}

// ============================================================================
// Access policy
// ============================================================================

#[tokio::test]
async fn test_staff_is_kept_out_of_personnel() {
    let t = TestContext::new();
    let staff = seed_officer(&t.store, "Sam Staff", "S001", Position::Staff, "Education", Some("pw-staff"));
    let session = t.ctx.session_tokens().issue(&staff).unwrap();
    let access = AccessService::new(&t.ctx);

    access.authorize(&session.claims, Sections::EVENTS).await.unwrap();
    let err = access
        .authorize(&session.claims, Sections::PERSONNEL)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::AccessRestricted(_)));
    assert_eq!(err.status_code(), 403);

    let head = seed_officer(&t.store, "Hal Head", "H900", Position::HeadOfDivision, "Education", Some("pw-head"));
    let session = t.ctx.session_tokens().issue(&head).unwrap();
    access.authorize(&session.claims, Sections::ADD_PERSONNEL).await.unwrap();
}

#[tokio::test]
async fn test_session_of_deleted_officer_is_invalid() {
    let t = TestContext::new();
    let officer = seed_officer(&t.store, "Gus Gone", "G001", Position::Staff, "Education", Some("pw-gone"));
    let session = t.ctx.session_tokens().issue(&officer).unwrap();

    OfficerService::new(&t.ctx).delete(officer.id).await.unwrap();

    let err = AccessService::new(&t.ctx)
        .authorize(&session.claims, Sections::DASHBOARD)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::App(AppError::InvalidSession)));
    assert_eq!(err.status_code(), 401);
}

// ============================================================================
// Pagination and search
// ============================================================================

#[tokio::test]
async fn test_officer_pages_are_stable() {
    let t = TestContext::new();
    for n in 0..23 {
        seed_officer(&t.store, &format!("Member {n:02}"), &format!("M{n:03}"), Position::Staff, "Education", None);
    }
    let officers = OfficerService::new(&t.ctx);

    let first = officers.search("", 2).await.unwrap();
    let again = officers.search("", 2).await.unwrap();

    assert_eq!(first.total, 23);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.current_page, 2);
    assert_eq!(first.data.len(), 10);
    let ids: Vec<i64> = first.data.iter().map(|o| o.id).collect();
    let ids_again: Vec<i64> = again.data.iter().map(|o| o.id).collect();
    assert_eq!(ids, ids_again);

    let last = officers.search("", 3).await.unwrap();
    assert_eq!(last.data.len(), 3);

    // Page 0 is read as page 1
    let zero = officers.search("", 0).await.unwrap();
    assert_eq!(zero.current_page, 1);
}

#[tokio::test]
async fn test_officer_search_ignores_case() {
    let t = TestContext::new();
    seed_officer(&t.store, "Jane Doe", "J001", Position::Staff, "Education", None);
    seed_officer(&t.store, "John Roe", "J002", Position::Staff, "Education", None);

    let found = OfficerService::new(&t.ctx).search("JANE", 1).await.unwrap();
    assert_eq!(found.total, 1);
    assert_eq!(found.data[0].name, "Jane Doe");
}

// ============================================================================
// Content
// ============================================================================

#[tokio::test]
async fn test_news_round_trip_keeps_content_exactly() {
    let t = TestContext::new();
    let news = NewsService::new(&t.ctx);
    let content = "  First line\n\n\tIndented second line  \r\nemoji: \u{1F389}";

    let created = news
        .create(news_request("Quarterly Report", content, Some("Ria Writer")), ImageInput::None)
        .await
        .unwrap();
    let item = news.get(created.id.unwrap()).await.unwrap();

    assert_eq!(item.title, "Quarterly Report");
    assert_eq!(item.content, content);
    assert_eq!(item.author, "Ria Writer");
    assert_eq!(item.category, "Update");
}

#[tokio::test]
async fn test_news_is_dated_when_published() {
    let t = TestContext::new();
    let news = NewsService::new(&t.ctx);
    let before = Utc::now();

    let request = NewsRequest {
        date: Some("2001-01-01".into()),
        ..news_request("Backdated", "Body", None)
    };
    let created = news.create(request, ImageInput::None).await.unwrap();
    let id = created.id.unwrap();
    let item = news.get(id).await.unwrap();
    assert!(item.date >= before);

    // Editors may still correct the date afterwards
    let request = NewsRequest {
        date: Some("2026-02-03".into()),
        ..news_request("Backdated", "Body", None)
    };
    news.update(id, request, ImageInput::None).await.unwrap();
    assert_eq!(news.get(id).await.unwrap().date.date_naive(), day("2026-02-03"));
}

#[tokio::test]
async fn test_deleting_missing_items_is_not_found() {
    let t = TestContext::new();

    let err = EventService::new(&t.ctx).delete(404).await.unwrap_err();
    assert!(matches!(domain(&err), DomainError::EventNotFound(404)));
    assert_eq!(err.status_code(), 404);

    let err = NewsService::new(&t.ctx).delete(404).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = GalleryService::new(&t.ctx).delete(404).await.unwrap_err();
    assert_eq!(err.status_code(), 404);

    let err = OfficerService::new(&t.ctx).delete(404).await.unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_event_moves_from_upcoming_to_past() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);
    events
        .create(event_request("Workshop A", "2026-03-01", "Education"), ImageInput::None)
        .await
        .unwrap();

    let upcoming = events.upcoming_on(day("2026-02-01"), 10).await.unwrap();
    assert!(upcoming.iter().any(|e| e.title == "Workshop A"));

    let upcoming = events.upcoming_on(day("2026-04-01"), 10).await.unwrap();
    assert!(upcoming.iter().all(|e| e.title != "Workshop A"));
    let past = events.past_on(day("2026-04-01"), 1).await.unwrap();
    assert!(past.data.iter().any(|e| e.title == "Workshop A"));

    // An event on the current day is still upcoming
    let upcoming = events.upcoming_on(day("2026-03-01"), 10).await.unwrap();
    assert_eq!(upcoming.len(), 1);
}

#[tokio::test]
async fn test_calendar_returns_month_in_date_order() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);
    for (title, date) in [("Late", "2026-03-28"), ("Early", "2026-03-02"), ("April", "2026-04-01")] {
        events
            .create(event_request(title, date, "Social"), ImageInput::None)
            .await
            .unwrap();
    }

    let march = events.calendar(2026, 3).await.unwrap();
    let titles: Vec<&str> = march.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["Early", "Late"]);
}

#[tokio::test]
async fn test_invalid_event_date_is_rejected() {
    let t = TestContext::new();
    let err = EventService::new(&t.ctx)
        .create(event_request("Bad Date", "03/01/2026", "Social"), ImageInput::None)
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::InvalidDate(_)));
}

#[tokio::test]
async fn test_event_update_keeps_or_replaces_poster() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);

    let created = events
        .create(
            event_request("Hackathon", "2026-06-01", "Competition"),
            ImageInput::File(png_file("poster.png")),
        )
        .await
        .unwrap();
    let id = created.id.unwrap();
    let original = events.get(id).await.unwrap().poster;
    assert!(original.starts_with("/uploads/events/"));
    assert!(t.storage.contains(&original));

    // No new poster keeps the current one
    events
        .update(id, event_request("Hackathon 2026", "2026-06-02", "Competition"), ImageInput::None)
        .await
        .unwrap();
    let updated = events.get(id).await.unwrap();
    assert_eq!(updated.title, "Hackathon 2026");
    assert_eq!(updated.poster, original);

    // A new poster replaces the reference; the old file may be shared
    events
        .update(
            id,
            event_request("Hackathon 2026", "2026-06-02", "Competition"),
            ImageInput::File(png_file("poster-v2.png")),
        )
        .await
        .unwrap();
    let replaced = events.get(id).await.unwrap().poster;
    assert_ne!(replaced, original);
    assert!(t.storage.contains(&original));
    assert!(t.storage.contains(&replaced));

    events.delete(id).await.unwrap();
    assert!(t.storage.contains(&replaced));
}

#[tokio::test]
async fn test_gallery_defaults() {
    let t = TestContext::new();
    let gallery = GalleryService::new(&t.ctx);

    let created = gallery
        .create(gallery_request("Opening night", "Events"), ImageInput::None)
        .await
        .unwrap();
    let item = gallery.get(created.id.unwrap()).await.unwrap();

    assert_eq!(item.author, "Admin");
    assert_eq!(item.image, "/placeholder-gallery.jpg");

    // Placeholders are not managed files; deleting must still succeed
    gallery.delete(item.id).await.unwrap();
}

#[tokio::test]
async fn test_image_url_from_earlier_upload_is_kept() {
    let t = TestContext::new();
    let news = NewsService::new(&t.ctx);

    let created = news
        .create(
            news_request("With image", "Body", None),
            ImageInput::Url("/uploads/news/1-cover.png".into()),
        )
        .await
        .unwrap();
    assert_eq!(news.get(created.id.unwrap()).await.unwrap().image, "/uploads/news/1-cover.png");
}

#[tokio::test]
async fn test_news_sharing_an_officer_photo_leaves_it_on_delete() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);
    officers
        .create(
            officer_request("Jane Doe", "J100", "Staff", "Education"),
            ImageInput::File(png_file("jane.png")),
        )
        .await
        .unwrap();
    let photo = t.store.officer_by_member_id("J100").unwrap().image.unwrap();
    assert!(t.storage.contains(&photo));

    let news = NewsService::new(&t.ctx);
    let created = news
        .create(news_request("Meet Jane", "Body", None), ImageInput::Url(photo.clone()))
        .await
        .unwrap();
    let id = created.id.unwrap();

    news.update(id, news_request("Meet Jane", "Body", None), ImageInput::File(png_file("new.png")))
        .await
        .unwrap();
    news.delete(id).await.unwrap();

    assert!(t.storage.contains(&photo));
}

#[tokio::test]
async fn test_officer_photo_must_be_uploaded_with_form() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    let err = officers
        .create(
            officer_request("Jane Doe", "J100", "Staff", "Education"),
            ImageInput::Url("/uploads/news/1-cover.png".into()),
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(t.store.officer_count(), 0);

    // External and placeholder addresses are not managed files
    officers
        .create(
            officer_request("Jane Doe", "J100", "Staff", "Education"),
            ImageInput::Url("/placeholder-officer.jpg".into()),
        )
        .await
        .unwrap();
    assert_eq!(
        t.store.officer_by_member_id("J100").unwrap().image.as_deref(),
        Some("/placeholder-officer.jpg")
    );
}

#[tokio::test]
async fn test_officer_delete_removes_stored_photo() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);
    let created = officers
        .create(
            officer_request("Jane Doe", "J100", "Staff", "Education"),
            ImageInput::File(png_file("jane.png")),
        )
        .await
        .unwrap();
    let photo = t.store.officer_by_member_id("J100").unwrap().image.unwrap();
    assert!(photo.starts_with("/uploads/officers/"));
    assert!(t.storage.contains(&photo));

    officers.delete(created.id.unwrap()).await.unwrap();

    assert!(!t.storage.contains(&photo));
    assert_eq!(t.store.officer_count(), 0);
}

#[tokio::test]
async fn test_officer_delete_skips_placeholder_photo() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);
    officers
        .create(
            officer_request("John Roe", "J200", "Staff", "Education"),
            ImageInput::File(png_file("john.png")),
        )
        .await
        .unwrap();
    let john_photo = t.store.officer_by_member_id("J200").unwrap().image.unwrap();
    let created = officers
        .create(
            officer_request("Jane Doe", "J100", "Staff", "Education"),
            ImageInput::Url("/placeholder-officer.jpg".into()),
        )
        .await
        .unwrap();

    officers.delete(created.id.unwrap()).await.unwrap();

    assert_eq!(t.store.officer_count(), 1);
    assert_eq!(t.storage.len(), 1);
    assert!(t.storage.contains(&john_photo));
}

// ============================================================================
// Upload failure policy
// ============================================================================

#[tokio::test]
async fn test_degraded_upload_saves_item_with_warning() {
    let t = TestContext::with_policy(UploadFailurePolicy::Degrade);
    t.storage.set_failing(true);

    let created = NewsService::new(&t.ctx)
        .create(news_request("No picture", "Body", None), ImageInput::File(png_file("cover.png")))
        .await
        .unwrap();

    assert!(created.success);
    let warning = created.warning.expect("warning is reported");
    assert!(warning.contains("cover.png"));

    let item = NewsService::new(&t.ctx).get(created.id.unwrap()).await.unwrap();
    assert_eq!(item.image, "");
}

#[tokio::test]
async fn test_rejected_upload_fails_without_write() {
    let t = TestContext::with_policy(UploadFailurePolicy::Reject);
    t.storage.set_failing(true);
    let news = NewsService::new(&t.ctx);

    let err = news
        .create(news_request("No picture", "Body", None), ImageInput::File(png_file("cover.png")))
        .await
        .unwrap_err();
    assert!(matches!(domain(&err), DomainError::StorageError(_)));
    assert_eq!(news.list(1).await.unwrap().total, 0);
}

// ============================================================================
// Cached public views
// ============================================================================

#[tokio::test]
async fn test_writes_invalidate_cached_views() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);

    events.list(1).await.unwrap();
    events.list(1).await.unwrap();
    assert_eq!(t.cache.hits(), 1);
    assert!(t.cache.is_cached(PublicView::Events, "page:1"));

    events
        .create(event_request("Fresh", "2026-09-01", "Social"), ImageInput::None)
        .await
        .unwrap();

    assert!(!t.cache.is_cached(PublicView::Events, "page:1"));
    let invalidated = t.cache.invalidated();
    assert!(invalidated.contains(&PublicView::Events));
    assert!(invalidated.contains(&PublicView::Landing));

    let page = events.list(1).await.unwrap();
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn test_late_store_after_write_is_not_served() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);

    // A reader loads the empty page under the current generation...
    let generation = t.cache.generation(PublicView::Events).await.unwrap();
    assert_eq!(events.list(1).await.unwrap().total, 0);
    let stale = t
        .cache
        .fetch(PublicView::Events, generation, "page:1")
        .await
        .unwrap()
        .expect("page cached");

    // ...a write lands, then the reader's store arrives late
    events
        .create(event_request("Fresh", "2026-09-01", "Social"), ImageInput::None)
        .await
        .unwrap();
    t.cache
        .store(PublicView::Events, generation, "page:1", &stale)
        .await
        .unwrap();

    let hits = t.cache.hits();
    assert_eq!(events.list(1).await.unwrap().total, 1);
    assert_eq!(t.cache.hits(), hits);
    assert!(t.cache.generation(PublicView::Events).await.unwrap() > generation);
}

#[tokio::test]
async fn test_officer_changes_refresh_directory() {
    let t = TestContext::new();
    let officers = OfficerService::new(&t.ctx);

    assert!(officers.directory().await.unwrap().is_empty());

    officers
        .create(officer_request("Cora Core", "C001", "Advisor", "Education"), ImageInput::None)
        .await
        .unwrap();

    let directory = officers.directory().await.unwrap();
    assert_eq!(directory.len(), 1);
    assert_eq!(directory[0].division, "Advisory Board");
    assert_eq!(directory[0].officers[0].name, "Cora Core");
}

// ============================================================================
// Dashboard and landing
// ============================================================================

#[tokio::test]
async fn test_dashboard_counts_and_recent_items() {
    let t = TestContext::new();
    seed_officer(&t.store, "Ann", "O001", Position::Staff, "Education", None);
    seed_officer(&t.store, "Ben", "O002", Position::Staff, "Education", None);
    seed_officer(&t.store, "Cal", "O003", Position::Staff, "Secretariat", None);
    seed_officer(&t.store, "Dot", "O004", Position::Director, "Executive Board", None);

    EventService::new(&t.ctx)
        .create(event_request("Seminar", "2026-05-01", "Education"), ImageInput::None)
        .await
        .unwrap();
    NewsService::new(&t.ctx)
        .create(news_request("Hello", "World", None), ImageInput::None)
        .await
        .unwrap();
    GalleryService::new(&t.ctx)
        .create(gallery_request("Group photo", "Retreat"), ImageInput::None)
        .await
        .unwrap();

    let stats = DashboardService::new(&t.ctx).stats().await.unwrap();

    assert_eq!(stats.total_members, 4);
    assert_eq!(stats.total_divisions, 2);
    assert_eq!(stats.total_content, 3);
    assert_eq!(stats.recent_events[0].author, "Admin");
    assert_eq!(stats.recent_news[0].category, "News");
    assert_eq!(stats.recent_gallery[0].title, "Group photo");
    assert_eq!(stats.recent_gallery[0].category, "Retreat");
}

#[tokio::test]
async fn test_landing_collects_previews() {
    let t = TestContext::new();
    let events = EventService::new(&t.ctx);
    for n in 1..=4 {
        events
            .create(event_request(&format!("Event {n}"), &format!("2026-07-0{n}"), "Social"), ImageInput::None)
            .await
            .unwrap();
    }
    let news = NewsService::new(&t.ctx);
    for author in ["Ann", "Ben", "Ann", "Cal"] {
        news.create(news_request("Post", "Body", Some(author)), ImageInput::None)
            .await
            .unwrap();
    }

    let landing = LandingService::new(&t.ctx)
        .landing_on(day("2026-06-30"))
        .await
        .unwrap();

    assert_eq!(landing.upcoming_events.len(), 3);
    assert_eq!(landing.upcoming_events[0].title, "Event 1");
    assert_eq!(landing.latest_news.len(), 3);
    assert_eq!(landing.writers, 3);
    assert!(landing.latest_gallery.is_empty());
}

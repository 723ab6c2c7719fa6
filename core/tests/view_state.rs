use complisense_core::advisor::model::Role;
use complisense_core::advisor::responses::KeywordAdvisor;
use complisense_core::error::CoreError;
use complisense_core::store::model::ReportStatus;
use complisense_core::store::repository::{FixtureStore, Repository};
use complisense_core::views::advisor::AdvisorPage;
use complisense_core::views::dashboard::DashboardPage;
use complisense_core::views::login::LoginForm;
use complisense_core::views::report_detail::{render_not_found_markdown, ReportDetailPage};
use complisense_core::views::reports::ReportsPage;

#[test]
fn login_issues_mock_bearer_token_and_dashboard_redirect() {
    let session = LoginForm::new("compliance@startup.inc", "hunter2")
        .submit()
        .unwrap();
    assert!(session.access_token.starts_with("mock_jwt_token_compliance@startup.inc_"));
    assert_eq!(session.token_type, "bearer");
    assert_eq!(session.redirect_to, "/dashboard");
}

#[test]
fn login_rejects_blank_email() {
    let err = LoginForm::new("   ", "pw").submit().unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput(_)));
}

#[test]
fn dashboard_stats_derive_from_fixture_feed() {
    let store = FixtureStore::new();
    let page = DashboardPage::load(&store);
    let stats = page.stats();

    // alerts 1-3 require action, alert 4 does not
    assert_eq!(stats.active_alerts, 3);
    // seeded generated set is {1, 2}
    assert_eq!(stats.reports_generated, 2);
    assert_eq!(stats.compliance_score, "87%");
}

#[test]
fn generate_report_validates_alert_and_is_idempotent() {
    let store = FixtureStore::new();
    let mut page = DashboardPage::load(&store);

    let redirect = page.generate_report(3).unwrap();
    assert_eq!(redirect, "/reports");
    assert!(page.has_generated_report(3));
    assert_eq!(page.stats().reports_generated, 3);

    // same alert again: no double counting
    page.generate_report(3).unwrap();
    assert_eq!(page.stats().reports_generated, 3);

    let err = page.generate_report(999).unwrap_err();
    assert!(matches!(
        err,
        CoreError::NotFound {
            entity: "alert",
            id: 999
        }
    ));
}

#[test]
fn reports_search_matches_title_and_alert_id() {
    let store = FixtureStore::new();
    let mut page = ReportsPage::load(&store);

    assert_eq!(page.filtered().len(), 3);

    page.set_search("vat");
    let hits = page.filtered();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    page.set_search("2");
    assert!(page.filtered().iter().any(|r| r.alert_id == 2));

    page.set_search("no such report");
    assert!(page.filtered().is_empty());
    assert!(page.render_markdown().contains("No reports match"));
}

#[test]
fn reports_status_counts_tally_the_fixture_set() {
    let store = FixtureStore::new();
    let page = ReportsPage::load(&store);
    let counts = page.status_counts();
    assert_eq!(counts.approved, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.draft, 1);
}

#[test]
fn reports_index_csv_lists_every_report() {
    let store = FixtureStore::new();
    let page = ReportsPage::load(&store);
    let index = page.render_reports_index_csv().unwrap();
    let mut lines = index.lines();
    assert_eq!(
        lines.next(),
        Some("report_id,alert_id,title,status,created_at")
    );
    assert_eq!(index.lines().count(), 1 + store.reports().len());
}

#[test]
fn unknown_report_id_renders_not_found_instead_of_failing() {
    let store = FixtureStore::new();
    let err = ReportDetailPage::load(&store, 999).unwrap_err();
    assert!(matches!(
        err,
        CoreError::NotFound {
            entity: "report",
            id: 999
        }
    ));

    let page = render_not_found_markdown(999);
    assert!(page.contains("No report exists with id 999"));
    assert!(page.contains("/reports"));
}

#[test]
fn approval_mutates_only_the_page_local_status() {
    let store = FixtureStore::new();
    let mut detail = ReportDetailPage::load(&store, 1).unwrap();
    assert_eq!(detail.status(), ReportStatus::Pending);

    let notice = detail.approve();
    assert_eq!(notice.title, "Report Approved");
    assert_eq!(detail.status(), ReportStatus::Approved);

    // the store still holds the original status
    assert_eq!(store.report(1).unwrap().status, ReportStatus::Pending);
    // a fresh page load sees the original status too
    let fresh = ReportDetailPage::load(&store, 1).unwrap();
    assert_eq!(fresh.status(), ReportStatus::Pending);
}

#[test]
fn revision_request_raises_notice_without_status_change() {
    let store = FixtureStore::new();
    let detail = ReportDetailPage::load(&store, 3).unwrap();
    let notice = detail.request_revision();
    assert_eq!(notice.title, "Revision Requested");
    assert_eq!(detail.status(), ReportStatus::Draft);
}

#[test]
fn advisor_page_runs_one_exchange_end_to_end() {
    let mut page = AdvisorPage::new(Box::new(KeywordAdvisor));
    assert!(page.suggested_questions().is_some());

    page.submit("What are the AML thresholds?").unwrap();
    assert!(page.suggested_questions().is_none());

    let messages = page.conversation().messages();
    assert_eq!(messages.len(), 3); // greeting + user + assistant
    assert_eq!(messages[2].role, Role::Assistant);
    assert!(messages[2].content.contains("Anti-Money Laundering"));

    let transcript = page.render_transcript_markdown().unwrap();
    assert!(transcript.contains("**You:** What are the AML thresholds?"));
    assert!(transcript.contains("> Sources:"));
    assert!(transcript.contains("GCC AML Regulations"));
}

#[test]
fn advisor_page_rejects_empty_question() {
    let mut page = AdvisorPage::new(Box::new(KeywordAdvisor));
    let err = page.submit("   ").unwrap_err();
    assert!(matches!(err, CoreError::EmptySubmission));
    assert_eq!(page.conversation().messages().len(), 1);
}

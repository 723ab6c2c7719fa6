use complisense_core::advisor::responses::{CannedAdvisor, KeywordAdvisor};
use complisense_core::audit::event::{Actor, AuditEvent};
use complisense_core::audit::log::AuditLog;
use complisense_core::error::CoreError;
use complisense_core::ids::now_rfc3339_utc;
use complisense_core::store::model::ReportStatus;
use complisense_core::store::repository::{FixtureStore, Repository};
use complisense_core::views::advisor::AdvisorPage;
use complisense_core::views::dashboard::DashboardPage;
use complisense_core::views::login::LoginForm;
use complisense_core::views::report_detail::{render_not_found_markdown, ReportDetailPage};
use complisense_core::views::reports::ReportsPage;
use serde_json::json;

fn main() {
    // session_runner drives the full surface end to end: login, dashboard,
    // report generation, report review (including the not-found path), and
    // one advisor exchange per shipped advisor. It prints each checked
    // property with PASS/FAIL and exits non-zero on any failure.
    let mut failures = 0usize;
    let mut check = |name: &str, ok: bool| {
        println!("{} {}", name, if ok { "PASS" } else { "FAIL" });
        if !ok {
            failures += 1;
        }
    };

    let tmp = tempfile::tempdir().expect("tempdir");
    let audit_path = tmp.path().join("audit.ndjson");
    let mut audit = AuditLog::open_or_create(&audit_path).expect("open audit log");

    let store = FixtureStore::new();
    check(
        "FIXTURE.REFERENTIAL_INTEGRITY",
        store.referential_check().is_ok(),
    );

    // Login
    let session = LoginForm::new("compliance@startup.inc", "demo")
        .submit()
        .expect("login");
    check(
        "LOGIN.MOCK_TOKEN_ISSUED",
        session.access_token.starts_with("mock_jwt_token_") && session.redirect_to == "/dashboard",
    );
    record(
        &mut audit,
        &session.session_id,
        "SESSION_STARTED",
        Actor::System,
        json!({}),
    );
    record(
        &mut audit,
        &session.session_id,
        "LOGIN_SUCCEEDED",
        Actor::User,
        json!({"email": session.email}),
    );

    // Dashboard
    let mut dashboard = DashboardPage::load(&store);
    check("DASHBOARD.ACTIVE_ALERTS", dashboard.stats().active_alerts == 3);
    check(
        "DASHBOARD.SEEDED_GENERATED_SET",
        dashboard.stats().reports_generated == 2,
    );
    let redirect = dashboard.generate_report(3).expect("generate report");
    check(
        "DASHBOARD.GENERATE_REDIRECTS_TO_REPORTS",
        redirect == "/reports" && dashboard.stats().reports_generated == 3,
    );
    record(
        &mut audit,
        &session.session_id,
        "REPORT_GENERATION_REQUESTED",
        Actor::User,
        json!({"alert_id": 3}),
    );
    println!("\n{}\n", dashboard.render_markdown());

    // Reports list
    let mut reports = ReportsPage::load(&store);
    reports.set_search("aml");
    check("REPORTS.SEARCH_FILTERS_LIST", reports.filtered().len() == 1);
    reports.set_search("");
    let csv = reports.render_reports_index_csv().expect("reports csv");
    check("REPORTS.CSV_INDEX_COMPLETE", csv.lines().count() == 4);
    println!("\n{}\n", reports.render_markdown());

    // Report review
    let mut detail = ReportDetailPage::load(&store, 1).expect("load report 1");
    let notice = detail.approve();
    check(
        "REPORT.APPROVAL_IS_PAGE_LOCAL",
        detail.status() == ReportStatus::Approved
            && store.report(1).expect("report 1").status == ReportStatus::Pending,
    );
    println!("{}: {}", notice.title, notice.description);
    record(
        &mut audit,
        &session.session_id,
        "REPORT_APPROVED",
        Actor::User,
        json!({"report_id": 1}),
    );

    let draft = ReportDetailPage::load(&store, 3).expect("load report 3");
    let notice = draft.request_revision();
    check(
        "REPORT.REVISION_KEEPS_STATUS",
        draft.status() == ReportStatus::Draft,
    );
    println!("{}: {}", notice.title, notice.description);
    record(
        &mut audit,
        &session.session_id,
        "REVISION_REQUESTED",
        Actor::User,
        json!({"report_id": 3}),
    );

    // Not-found surface
    let missing = ReportDetailPage::load(&store, 999);
    check(
        "REPORT.UNKNOWN_ID_IS_NOT_FOUND",
        matches!(
            missing,
            Err(CoreError::NotFound {
                entity: "report",
                id: 999
            })
        ),
    );
    println!("\n{}\n", render_not_found_markdown(999));

    // Advisor: keyword-routed exchange
    let mut advisor = AdvisorPage::new(Box::new(KeywordAdvisor));
    let question = "What are the data residency requirements?";
    record(
        &mut audit,
        &session.session_id,
        "ADVISOR_QUESTION_SUBMITTED",
        Actor::User,
        json!({"question": question}),
    );
    advisor.submit(question).expect("advisor submit");
    let last = advisor
        .conversation()
        .messages()
        .last()
        .expect("advisor reply")
        .clone();
    check(
        "ADVISOR.KEYWORD_REPLY_DELIVERED",
        !last.is_error && last.content.contains("CBUAE"),
    );
    record(
        &mut audit,
        &session.session_id,
        "ADVISOR_REPLY_DELIVERED",
        Actor::System,
        json!({"citation_count": last.citations.len()}),
    );
    check(
        "ADVISOR.LOG_GREW_BY_TWO",
        advisor.conversation().messages().len() == 3,
    );
    println!(
        "\n{}\n",
        advisor
            .render_transcript_markdown()
            .expect("render transcript")
    );

    // Advisor: canned exchange
    let mut canned = AdvisorPage::new(Box::new(CannedAdvisor));
    canned.submit("Can we launch BNPL in the GCC?").expect("canned submit");
    let reply = canned
        .conversation()
        .messages()
        .last()
        .expect("canned reply")
        .clone();
    check(
        "ADVISOR.CANNED_REPLY_IS_CITED",
        reply.citations.len() == 3 && !reply.is_error,
    );

    println!(
        "\nsession audit trail written to {}",
        audit_path.display()
    );

    if failures > 0 {
        eprintln!("{} properties FAILED", failures);
        std::process::exit(1);
    }
    println!("all properties PASS");
}

fn record(
    audit: &mut AuditLog,
    session_id: &str,
    event_type: &str,
    actor: Actor,
    details: serde_json::Value,
) {
    audit
        .append(AuditEvent {
            ts_utc: now_rfc3339_utc(),
            event_type: event_type.to_string(),
            session_id: session_id.to_string(),
            actor,
            details,
            prev_event_hash: String::new(),
            event_hash: String::new(),
        })
        .expect("append audit event");
}

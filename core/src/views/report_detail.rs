use crate::error::CoreResult;
use crate::store::model::{Report, ReportStatus};
use crate::store::repository::Repository;

use super::Notice;

/// Review view for a single report. The status shown (and approved) here is a
/// page-local copy; the store entry is never written back.
#[derive(Debug)]
pub struct ReportDetailPage {
    report: Report,
    status: ReportStatus,
}

impl ReportDetailPage {
    /// Unknown ids surface as `CoreError::NotFound`; callers recover by
    /// rendering [`render_not_found_markdown`] with a path back to the list.
    pub fn load(repo: &dyn Repository, id: i64) -> CoreResult<Self> {
        let report = repo.report(id)?;
        let status = report.status;
        Ok(Self { report, status })
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn approve(&mut self) -> Notice {
        self.status = ReportStatus::Approved;
        Notice::new(
            "Report Approved",
            "The report has been successfully approved.",
        )
    }

    pub fn request_revision(&self) -> Notice {
        Notice::new(
            "Revision Requested",
            "A revision request has been sent to the AI team.",
        )
    }

    pub fn render_markdown(&self) -> String {
        let mut out = Vec::new();
        out.push(format!("# {}", self.report.title));
        out.push("".to_string());
        out.push(format!(
            "Generated from Alert #{} | Status: {} | Created: {}",
            self.report.alert_id,
            self.status.label(),
            self.report.created_at
        ));
        out.push("".to_string());
        out.push("---".to_string());
        out.push("".to_string());
        out.push(self.report.content_markdown.clone());
        out.push("".to_string());
        out.join("\n")
    }
}

/// The one defined error surface: an unresolved report id renders a
/// recoverable not-found state instead of failing the page.
pub fn render_not_found_markdown(id: i64) -> String {
    [
        "# Report not found".to_string(),
        "".to_string(),
        format!("No report exists with id {}.", id),
        "".to_string(),
        "[Back to Reports](/reports)".to_string(),
        "".to_string(),
    ]
    .join("\n")
}

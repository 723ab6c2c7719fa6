use serde::Serialize;

use crate::error::CoreResult;
use crate::store::model::{Report, ReportStatus};
use crate::store::repository::Repository;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub approved: usize,
    pub pending: usize,
    pub draft: usize,
}

/// Report list view state: the full report set plus a local search filter.
pub struct ReportsPage {
    reports: Vec<Report>,
    search: String,
}

impl ReportsPage {
    pub fn load(repo: &dyn Repository) -> Self {
        Self {
            reports: repo.reports(),
            search: String::new(),
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    /// Case-insensitive match on the title, plus a plain substring match on
    /// the source alert id's decimal form. An empty term matches everything.
    pub fn filtered(&self) -> Vec<&Report> {
        let lowered = self.search.to_lowercase();
        self.reports
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&lowered)
                    || r.alert_id.to_string().contains(&self.search)
            })
            .collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        let count = |status: ReportStatus| {
            self.reports.iter().filter(|r| r.status == status).count()
        };
        StatusCounts {
            approved: count(ReportStatus::Approved),
            pending: count(ReportStatus::Pending),
            draft: count(ReportStatus::Draft),
        }
    }

    pub fn render_markdown(&self) -> String {
        let counts = self.status_counts();
        let mut out = Vec::new();
        out.push("# Reports".to_string());
        out.push("".to_string());
        out.push("AI-generated compliance reports".to_string());
        out.push("".to_string());
        out.push(format!(
            "Approved: {} | Pending: {} | Draft: {}",
            counts.approved, counts.pending, counts.draft
        ));
        out.push("".to_string());
        out.push("| ID | Title | Alert | Status | Created |".to_string());
        out.push("|---|---|---|---|---|".to_string());
        let filtered = self.filtered();
        for report in &filtered {
            out.push(format!(
                "| {} | {} | #{} | {} | {} |",
                report.id,
                report.title,
                report.alert_id,
                report.status.label(),
                report.created_at
            ));
        }
        if filtered.is_empty() {
            out.push("".to_string());
            out.push("No reports match the current search.".to_string());
        }
        out.push("".to_string());
        out.join("\n")
    }

    pub fn render_reports_index_csv(&self) -> CoreResult<String> {
        let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
        wtr.write_record(["report_id", "alert_id", "title", "status", "created_at"])?;
        for report in &self.reports {
            wtr.write_record([
                report.id.to_string(),
                report.alert_id.to_string(),
                report.title.clone(),
                report.status.label().to_string(),
                report.created_at.clone(),
            ])?;
        }
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
    }
}

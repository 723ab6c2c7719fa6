use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

/// Regulatory change alert detected by the watchtower feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub source: String,
    pub severity: Severity,
    pub action_required: bool,
    pub created_at: String, // RFC3339 UTC string
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Draft,
    Pending,
    Approved,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Draft",
            ReportStatus::Pending => "Pending Review",
            ReportStatus::Approved => "Approved",
        }
    }
}

/// Generated compliance report, always traceable to the alert it covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub alert_id: i64,
    pub title: String,
    pub status: ReportStatus,
    pub created_at: String, // RFC3339 UTC string
    pub content_markdown: String,
}

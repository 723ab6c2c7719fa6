use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::store::model::Alert;
use crate::store::repository::Repository;

pub const COMPLIANCE_SCORE: &str = "87%";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_alerts: usize,
    pub reports_generated: usize,
    pub compliance_score: String,
}

/// Dashboard view state: the alert feed plus the set of alert ids a report
/// has already been generated for. Both live on the page, seeded from the
/// store; nothing is written back.
pub struct DashboardPage {
    alerts: Vec<Alert>,
    generated_reports: BTreeSet<i64>,
}

impl DashboardPage {
    pub fn load(repo: &dyn Repository) -> Self {
        Self {
            alerts: repo.alerts(),
            // alerts 1 and 2 already have reports in the seed data
            generated_reports: BTreeSet::from([1, 2]),
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn has_generated_report(&self, alert_id: i64) -> bool {
        self.generated_reports.contains(&alert_id)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            active_alerts: self.alerts.iter().filter(|a| a.action_required).count(),
            reports_generated: self.generated_reports.len(),
            compliance_score: COMPLIANCE_SCORE.to_string(),
        }
    }

    /// Mark a report as generated for the given alert and hand back the
    /// follow-up navigation target. Repeat requests for the same alert are
    /// idempotent.
    pub fn generate_report(&mut self, alert_id: i64) -> CoreResult<&'static str> {
        if !self.alerts.iter().any(|a| a.id == alert_id) {
            return Err(CoreError::NotFound {
                entity: "alert",
                id: alert_id,
            });
        }
        self.generated_reports.insert(alert_id);
        Ok("/reports")
    }

    pub fn render_markdown(&self) -> String {
        let stats = self.stats();
        let mut out = Vec::new();
        out.push("# Compliance Dashboard".to_string());
        out.push("".to_string());
        out.push("Stay ahead of regulatory changes".to_string());
        out.push("".to_string());
        out.push("| Active Alerts | Reports Generated | Compliance Score |".to_string());
        out.push("|---|---|---|".to_string());
        out.push(format!(
            "| {} | {} | {} |",
            stats.active_alerts, stats.reports_generated, stats.compliance_score
        ));
        out.push("".to_string());
        out.push("## Compliance Alert Feed".to_string());
        out.push("".to_string());
        for alert in &self.alerts {
            out.push(format!(
                "### [{}] {} ({})",
                alert.severity.label(),
                alert.title,
                alert.source
            ));
            out.push("".to_string());
            out.push(alert.description.clone());
            out.push("".to_string());
            let report_line = if self.has_generated_report(alert.id) {
                format!("Report generated. See /reports for alert #{}.", alert.id)
            } else if alert.action_required {
                format!("Action required. Generate a report for alert #{}.", alert.id)
            } else {
                "No action required.".to_string()
            };
            out.push(report_line);
            out.push("".to_string());
        }
        out.join("\n")
    }
}

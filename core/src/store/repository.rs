use crate::error::{CoreError, CoreResult};

use super::fixtures::{seed_alerts, seed_reports};
use super::model::{Alert, Report};

/// Read-only data seam for the views. The fixture implementation below is the
/// only one shipped; a real backend slots in behind the same trait without
/// touching view logic.
pub trait Repository {
    fn alerts(&self) -> Vec<Alert>;
    fn reports(&self) -> Vec<Report>;

    fn alert(&self, id: i64) -> CoreResult<Alert> {
        self.alerts()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or(CoreError::NotFound {
                entity: "alert",
                id,
            })
    }

    fn report(&self, id: i64) -> CoreResult<Report> {
        self.reports()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "report",
                id,
            })
    }
}

/// Immutable in-memory store seeded once at construction. Reads hand out
/// owned copies so page-local state can never alias the seed data.
pub struct FixtureStore {
    alerts: Vec<Alert>,
    reports: Vec<Report>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self {
            alerts: seed_alerts(),
            reports: seed_reports(),
        }
    }

    /// Every report must point at an alert that exists in the same store.
    pub fn referential_check(&self) -> CoreResult<()> {
        for report in &self.reports {
            if !self.alerts.iter().any(|a| a.id == report.alert_id) {
                return Err(CoreError::InvalidInput(format!(
                    "report {} references missing alert {}",
                    report.id, report.alert_id
                )));
            }
        }
        Ok(())
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for FixtureStore {
    fn alerts(&self) -> Vec<Alert> {
        self.alerts.clone()
    }

    fn reports(&self) -> Vec<Report> {
        self.reports.clone()
    }
}

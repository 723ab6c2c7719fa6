pub mod advisor;
pub mod dashboard;
pub mod login;
pub mod report_detail;
pub mod reports;

use serde::Serialize;

/// User-facing confirmation raised by a page action (the prototype showed
/// these as toasts).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

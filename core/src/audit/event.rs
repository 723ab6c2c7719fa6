use crate::audit::canonical;
use crate::error::{CoreError, CoreResult};
use crate::ids::sha256_hex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    System,
    User,
}

/// One line of the session trail. Events are hash-chained: each one commits
/// to the hash of the previous line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEvent {
    pub ts_utc: String, // RFC3339 UTC string
    pub event_type: String,
    pub session_id: String,
    pub actor: Actor,
    pub details: serde_json::Value,
    pub prev_event_hash: String, // hex 64
    pub event_hash: String,      // hex 64
}

pub const ZERO_HASH_64: &str = "0000000000000000000000000000000000000000000000000000000000000000";

// event_hash = SHA-256(canonical bytes of the envelope with event_hash forced
// to ZERO_HASH_64), so the hash covers every other field including the chain
// pointer.
pub fn compute_event_hash(event: &AuditEvent) -> CoreResult<String> {
    let mut e = event.clone();
    e.event_hash = ZERO_HASH_64.to_string();
    let bytes = canonical::to_canonical_bytes(&e)?;
    Ok(sha256_hex(&bytes))
}

pub fn finalize_event(mut event: AuditEvent) -> CoreResult<AuditEvent> {
    if event.prev_event_hash.len() != 64
        || !event.prev_event_hash.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(CoreError::InvalidInput(
            "prev_event_hash must be 64 hex chars".to_string(),
        ));
    }
    validate_event_taxonomy(&event)?;
    let eh = compute_event_hash(&event)?;
    event.event_hash = eh;
    Ok(event)
}

fn validate_event_taxonomy(event: &AuditEvent) -> CoreResult<()> {
    let allowed = [
        "SESSION_STARTED",
        "LOGIN_SUCCEEDED",
        "REPORT_GENERATION_REQUESTED",
        "REPORT_APPROVED",
        "REVISION_REQUESTED",
        "ADVISOR_QUESTION_SUBMITTED",
        "ADVISOR_REPLY_DELIVERED",
        "ADVISOR_REPLY_FAILED",
    ];
    if !allowed.contains(&event.event_type.as_str()) {
        return Err(CoreError::InvalidInput(format!(
            "unknown event_type {}",
            event.event_type
        )));
    }
    let required = required_detail_keys(&event.event_type);
    for k in required {
        if event.details.get(k).is_none() {
            return Err(CoreError::InvalidInput(format!(
                "event {} missing details.{}",
                event.event_type, k
            )));
        }
    }
    Ok(())
}

fn required_detail_keys(event_type: &str) -> &'static [&'static str] {
    match event_type {
        "LOGIN_SUCCEEDED" => &["email"],
        "REPORT_GENERATION_REQUESTED" => &["alert_id"],
        "REPORT_APPROVED" => &["report_id"],
        "REVISION_REQUESTED" => &["report_id"],
        "ADVISOR_QUESTION_SUBMITTED" => &["question"],
        "ADVISOR_REPLY_DELIVERED" => &["citation_count"],
        "ADVISOR_REPLY_FAILED" => &["reason"],
        _ => &[],
    }
}

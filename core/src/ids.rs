use sha2::{Digest, Sha256};
use ulid::Ulid;

pub fn session_id_ulid() -> String {
    format!("s_{}", Ulid::new().to_string())
}

pub fn message_id_ulid() -> String {
    format!("m_{}", Ulid::new().to_string())
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

pub fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::ids::session_id_ulid;

/// Mock bearer-token session. Any non-blank email signs in; there is no
/// credential check behind this surface.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub email: String,
    pub access_token: String,
    pub token_type: String,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn submit(&self) -> CoreResult<Session> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::InvalidInput("email cannot be empty".to_string()));
        }
        let issued_at = time::OffsetDateTime::now_utc().unix_timestamp();
        Ok(Session {
            session_id: session_id_ulid(),
            email: email.to_string(),
            access_token: format!("mock_jwt_token_{}_{}", email, issued_at),
            token_type: "bearer".to_string(),
            redirect_to: "/dashboard".to_string(),
        })
    }
}

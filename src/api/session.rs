// ==========================================
// Nationality Quota Engine - Session Context
// ==========================================
// Role: who is acting, passed explicitly to API calls
// Red line: no module-level session singleton; callers own the
//           lifecycle (login populates it, logout drops it)
// ==========================================

use serde::{Deserialize, Serialize};

/// The acting user's session, threaded through API calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: i64,
    /// Establishment the user is working under, when one is selected
    pub entity_id: Option<String>,
}

impl SessionContext {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            entity_id: None,
        }
    }

    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }
}

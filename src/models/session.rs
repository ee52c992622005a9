use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Fan,
    Artist,
    Venue,
}

impl Role {
    /// Commission projections are an affiliate surface; fans never see them.
    pub fn can_view_commissions(&self) -> bool {
        matches!(self, Role::Artist | Role::Venue)
    }
}

/// Current-user identity, created at login and invalidated at logout.
/// Always passed by value into whatever needs identity or role; there is
/// no ambient global session.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: Uuid,
    pub user_id: Uuid,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

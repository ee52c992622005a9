use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::models::session::{Role, Session};

/// Issues and resolves sessions. Stands in for the hosted auth provider;
/// sessions exist from login until logout and are always handed to callers
/// as values, never read from a global.
pub struct SessionService {
    sessions: DashMap<Uuid, Session>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn login(&self, user_id: Uuid, role: Role) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            user_id,
            role,
            created_at: Utc::now(),
        };
        self.sessions.insert(session.token, session.clone());
        info!("Session created for user {}", user_id);
        session
    }

    pub fn resolve(&self, token: Uuid) -> Option<Session> {
        self.sessions.get(&token).map(|entry| entry.clone())
    }

    pub fn logout(&self, token: Uuid) -> bool {
        let removed = self.sessions.remove(&token).is_some();
        if removed {
            info!("Session {} invalidated", token);
        }
        removed
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_resolve_logout_lifecycle() {
        let service = SessionService::new();
        let user_id = Uuid::new_v4();
        let session = service.login(user_id, Role::Artist);

        let resolved = service.resolve(session.token).unwrap();
        assert_eq!(resolved.user_id, user_id);
        assert_eq!(resolved.role, Role::Artist);

        assert!(service.logout(session.token));
        assert!(service.resolve(session.token).is_none());
        assert!(!service.logout(session.token));
    }

    #[test]
    fn commission_gate_by_role() {
        assert!(!Role::Fan.can_view_commissions());
        assert!(Role::Artist.can_view_commissions());
        assert!(Role::Venue.can_view_commissions());
    }
}

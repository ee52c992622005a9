pub mod config;

use std::sync::Arc;

use crate::services::{DonationService, SessionService};

/// Shared handler state. Everything inside is Arc'd; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub donations: Arc<DonationService>,
    pub sessions: Arc<SessionService>,
}

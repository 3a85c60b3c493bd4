//! Shared application state for all routes. Built once at startup and handed to the router.

use crate::config::StatusProfile;
use crate::store::UserStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub status_profile: StatusProfile,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, status_profile: StatusProfile) -> Self {
        AppState {
            store,
            status_profile,
        }
    }
}

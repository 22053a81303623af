use std::sync::Arc;

use service::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    admin_password: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<ContentStore>, admin_password: impl Into<String>) -> Self {
        Self { store, admin_password: Arc::from(admin_password.into()) }
    }

    /// Plain equality against the configured password. An empty configured
    /// password rejects everything.
    pub fn admin_password_matches(&self, candidate: &str) -> bool {
        !self.admin_password.is_empty() && candidate == &*self.admin_password
    }
}

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::userdb::UserStore;

/// Shared application state: read-only after construction, cloned per
/// request by axum.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub users: Arc<UserStore>,
}

impl AppState {
    pub fn new(config: GatewayConfig, users: UserStore) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(users),
        }
    }
}

use std::sync::Arc;

use crate::config::Config;

/// Shared application state.
///
/// Ranking is stateless; handlers only need the configured limits.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

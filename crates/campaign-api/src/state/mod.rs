//! Shared application state
//!
//! One `AppState` is cloned into every handler: the service context wires
//! repositories and the JWT signer together, and the configuration feeds
//! request-independent values such as the public base URL embedded in
//! downloadable reports.

use std::sync::Arc;

use campaign_common::{AppConfig, JwtService};
use campaign_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Repositories and shared services behind the handlers
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Token verifier used by the auth extractors
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    /// Externally reachable base URL, used for shareable post links in the
    /// post-details report
    pub fn public_base_url(&self) -> &str {
        &self.config.app.public_base_url
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("app", &self.config.app.name)
            .field("env", &self.config.app.env)
            .finish_non_exhaustive()
    }
}

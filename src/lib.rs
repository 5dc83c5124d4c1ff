pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

use crate::services::dispatch_service::{ConsoleChannel, HttpChannel, NotificationChannel};
use crate::services::pipeline_service::PipelineService;
use crate::services::stage_registry::StageRegistry;
use crate::services::sync_service::{HttpBackend, NullBackend, PersistenceBackend};
use crate::services::template_service::TemplateService;
use crate::store::ApplicationStore;
use std::sync::Arc;

pub struct AppState {
    pub pipeline: PipelineService,
}

impl AppState {
    /// Wires the pipeline from the global config: HTTP channel/backend when
    /// gateway and backend URLs are configured, console/null otherwise.
    pub fn new() -> Self {
        let config = crate::config::get_config();

        let channel: Arc<dyn NotificationChannel> = match &config.notify_gateway_url {
            Some(url) => Arc::new(HttpChannel::new(url.clone(), config.http_timeout_secs)),
            None => Arc::new(ConsoleChannel),
        };
        let backend: Arc<dyn PersistenceBackend> = match &config.backend_base_url {
            Some(url) => Arc::new(HttpBackend::new(
                url.clone(),
                config.api_token.clone(),
                config.http_timeout_secs,
            )),
            None => Arc::new(NullBackend),
        };

        let registry = StageRegistry::default();
        let templates = TemplateService::with_company(&config.company_name);
        let pipeline = PipelineService::new(
            registry,
            templates,
            channel,
            backend,
            ApplicationStore::new(),
        );

        Self { pipeline }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::dto::stage_dto::StageUpdateRequest;
use crate::error::Result;
use crate::models::application::Application;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use uuid::Uuid;

/// Opaque persistence backend the pipeline syncs to after each local apply.
#[async_trait]
pub trait PersistenceBackend: Send + Sync {
    async fn create_application(&self, app: &Application) -> Result<()>;
    async fn fetch_applications(&self) -> Result<Vec<Application>>;
    async fn patch_applicant_stage(&self, id: Uuid, patch: &StageUpdateRequest) -> Result<()>;
}

/// REST backend client. Calls carry a bearer credential when one is
/// configured; without a credential calls are short-circuited rather than
/// failing, so an unauthenticated session keeps working locally.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: String, token: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client for persistence backend");
        Self {
            client,
            base_url,
            token,
        }
    }

    fn authorized(&self) -> Option<&str> {
        if self.token.is_none() {
            debug!("no API credential configured, skipping backend call");
        }
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PersistenceBackend for HttpBackend {
    async fn create_application(&self, app: &Application) -> Result<()> {
        let Some(token) = self.authorized() else {
            return Ok(());
        };
        self.client
            .post(self.url("applications"))
            .bearer_auth(token)
            .json(app)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn fetch_applications(&self) -> Result<Vec<Application>> {
        let Some(token) = self.authorized() else {
            return Ok(Vec::new());
        };
        let apps = self
            .client
            .get(self.url("applications"))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Application>>()
            .await?;
        Ok(apps)
    }

    async fn patch_applicant_stage(&self, id: Uuid, patch: &StageUpdateRequest) -> Result<()> {
        let Some(token) = self.authorized() else {
            return Ok(());
        };
        self.client
            .patch(self.url(&format!("applications/{}/stage", id)))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Backend for fully offline sessions; every call succeeds without effect.
pub struct NullBackend;

#[async_trait]
impl PersistenceBackend for NullBackend {
    async fn create_application(&self, _app: &Application) -> Result<()> {
        Ok(())
    }

    async fn fetch_applications(&self) -> Result<Vec<Application>> {
        Ok(Vec::new())
    }

    async fn patch_applicant_stage(&self, _id: Uuid, _patch: &StageUpdateRequest) -> Result<()> {
        Ok(())
    }
}

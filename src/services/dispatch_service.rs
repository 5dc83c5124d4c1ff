use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::{info, warn};

/// Candidate-facing delivery channel for email and WhatsApp.
///
/// Sends never return an error: a failed delivery reports `false` and the
/// calling pipeline step records the attempt and proceeds.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool;
    async fn send_whatsapp(&self, phone: &str, message: &str) -> bool;
}

/// Offline variant: logs the message and reports success.
pub struct ConsoleChannel;

#[async_trait]
impl NotificationChannel for ConsoleChannel {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool {
        info!(%to, %subject, body_len = body.len(), "email (console channel)");
        true
    }

    async fn send_whatsapp(&self, phone: &str, message: &str) -> bool {
        info!(%phone, %message, "whatsapp (console channel)");
        true
    }
}

/// Networked variant: posts to an external notification gateway.
pub struct HttpChannel {
    client: Client,
    gateway_url: String,
}

impl HttpChannel {
    pub fn new(gateway_url: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client for notification gateway");
        Self {
            client,
            gateway_url,
        }
    }

    async fn post(&self, path: &str, payload: serde_json::Value) -> bool {
        let url = format!("{}/{}", self.gateway_url.trim_end_matches('/'), path);
        match self.client.post(&url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => true,
            Ok(resp) => {
                warn!(%url, status = %resp.status(), "notification gateway rejected send");
                false
            }
            Err(err) => {
                warn!(%url, %err, "notification gateway unreachable");
                false
            }
        }
    }
}

#[async_trait]
impl NotificationChannel for HttpChannel {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> bool {
        self.post("email", json!({ "to": to, "subject": subject, "body": body }))
            .await
    }

    async fn send_whatsapp(&self, phone: &str, message: &str) -> bool {
        self.post("whatsapp", json!({ "phone": phone, "message": message }))
            .await
    }
}

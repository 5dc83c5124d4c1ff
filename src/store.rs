use crate::models::application::Application;
use crate::services::stage_registry::StageRegistry;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory cache of candidate applications for the current operator
/// session. Mutation goes through the pipeline service; the store itself
/// only inserts and replaces whole aggregates.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    apps: HashMap<Uuid, Application>,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, app: Application) {
        self.apps.insert(app.id, app);
    }

    pub fn get(&self, id: &Uuid) -> Option<&Application> {
        self.apps.get(id)
    }

    /// Applications sorted newest-applied first, as the tracking board shows
    /// them.
    pub fn list(&self) -> Vec<&Application> {
        let mut apps: Vec<&Application> = self.apps.values().collect();
        apps.sort_by(|a, b| b.applied_date.cmp(&a.applied_date));
        apps
    }

    pub fn replace_all(&mut self, apps: Vec<Application>) {
        self.apps = apps.into_iter().map(|a| (a.id, a)).collect();
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// Sample applications for the demo binary, sitting at the start stage.
pub fn demo_applications(registry: &StageRegistry) -> Vec<Application> {
    let start = registry.start_stage();

    let mut john = Application::received(
        "1",
        "Senior React Engineer",
        "John Doe",
        Some("john@example.com".to_string()),
        Some("+1 (555) 010-9988".to_string()),
        start,
    );
    john.location = Some("San Jose, CA".to_string());
    john.linkedin_url = Some("https://linkedin.com/in/johndoe".to_string());
    john.portfolio_url = Some("https://johndoe.dev".to_string());
    john.answers.insert(
        "Portfolio URL".to_string(),
        serde_json::json!("https://johndoe.dev"),
    );
    john.answers.insert(
        "Years of React Experience".to_string(),
        serde_json::json!(5),
    );

    let mut jane = Application::received(
        "2",
        "Product Designer",
        "Jane Smith",
        Some("jane@example.com".to_string()),
        Some("+1 (555) 123-4567".to_string()),
        start,
    );
    jane.location = Some("Austin, TX".to_string());
    jane.rating = 4;
    jane.tags = vec!["Strong Portfolio".to_string(), "Senior".to_string()];

    vec![john, jane]
}

use crate::dto::interview_dto::InterviewRequest;
use crate::dto::stage_dto::StageUpdateRequest;
use crate::error::{Error, Result};
use crate::models::application::{
    Application, ApplicationStatus, HistoryEntry, SyncState, TimelineEvent, TimelineEventKind,
};
use crate::models::interview::Interview;
use crate::models::stage::Stage;
use crate::services::dispatch_service::NotificationChannel;
use crate::services::stage_registry::StageRegistry;
use crate::services::sync_service::PersistenceBackend;
use crate::services::template_service::TemplateService;
use crate::store::ApplicationStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

/// The hiring-pipeline state machine. Sole mutator of stage-related fields:
/// every transition validates against the stage registry, attempts the
/// candidate notifications, writes both ledgers, recomputes the derived
/// status and finally syncs to the persistence backend.
///
/// Operations take `&mut self`, so a read-modify-write on one application
/// can never interleave with another mutation.
pub struct PipelineService {
    registry: StageRegistry,
    templates: TemplateService,
    channel: Arc<dyn NotificationChannel>,
    backend: Arc<dyn PersistenceBackend>,
    store: ApplicationStore,
}

impl PipelineService {
    pub fn new(
        registry: StageRegistry,
        templates: TemplateService,
        channel: Arc<dyn NotificationChannel>,
        backend: Arc<dyn PersistenceBackend>,
        store: ApplicationStore,
    ) -> Self {
        Self {
            registry,
            templates,
            channel,
            backend,
            store,
        }
    }

    pub fn registry(&self) -> &StageRegistry {
        &self.registry
    }

    pub fn application(&self, id: &Uuid) -> Option<&Application> {
        self.store.get(id)
    }

    pub fn applications(&self) -> Vec<&Application> {
        self.store.list()
    }

    /// Registers a newly submitted application locally and creates it on the
    /// backend. A failed backend write leaves the application cached but
    /// marked out of sync.
    pub async fn register_application(&mut self, mut app: Application) -> Result<Application> {
        match self.backend.create_application(&app).await {
            Ok(()) => app.sync = SyncState::Synced,
            Err(err) => {
                warn!(application = %app.id, %err, "backend create failed, application marked out of sync");
                app.sync = SyncState::OutOfSync;
            }
        }
        self.store.upsert(app.clone());
        Ok(app)
    }

    /// Replaces the local cache with the backend's view.
    pub async fn refresh(&mut self) -> Result<usize> {
        let apps = self.backend.fetch_applications().await?;
        let count = apps.len();
        self.store.replace_all(apps);
        Ok(count)
    }

    /// Moves an application to any stage of the pipeline, forward or
    /// backward; no ordinal monotonicity is enforced and terminal stages do
    /// not block operator overrides.
    ///
    /// Effect order: notify (per channel, independently) → history entry →
    /// timeline events → stage fields → derived status → backend sync.
    pub async fn update_stage(
        &mut self,
        app_id: Uuid,
        req: StageUpdateRequest,
        notify: bool,
        operator: &str,
    ) -> Result<Application> {
        req.validate()?;
        let mut app = self.cloned(app_id)?;
        let stage = self
            .registry
            .get(&req.stage)
            .cloned()
            .ok_or_else(|| Error::UnknownStage(req.stage.clone()))?;

        let now = Utc::now();
        let mut events = Vec::new();
        let mut email_sent = false;
        let mut whatsapp_sent = false;

        if notify {
            match self.templates.render_stage(&stage.id, &stage_context(&app, &stage)) {
                Some(rendered) => {
                    if let Some(to) = app.email.as_deref() {
                        email_sent = self
                            .channel
                            .send_email(to, &rendered.email_subject, &rendered.email_body)
                            .await;
                        if email_sent {
                            events.push(TimelineEvent::new(
                                TimelineEventKind::Email,
                                format!("Email sent: {}", rendered.email_subject),
                                "System",
                                now,
                            ));
                        } else {
                            warn!(application = %app_id, stage = %stage.id, "email send failed");
                        }
                    }
                    if let Some(phone) = app.phone.as_deref() {
                        whatsapp_sent = self.channel.send_whatsapp(phone, &rendered.whatsapp).await;
                        if whatsapp_sent {
                            events.push(TimelineEvent::new(
                                TimelineEventKind::Whatsapp,
                                format!("WhatsApp sent: {} update", stage.name),
                                "System",
                                now,
                            ));
                        } else {
                            warn!(application = %app_id, stage = %stage.id, "whatsapp send failed");
                        }
                    }
                }
                None => {
                    debug!(stage = %stage.id, "no notification template for stage, skipping sends");
                }
            }
        }

        app.stage_history.push(HistoryEntry {
            stage_id: stage.id.clone(),
            stage_name: stage.name.clone(),
            status: req.status,
            updated_at: now,
            updated_by: operator.to_string(),
            note: req.note.clone(),
            email_sent,
            whatsapp_sent,
            interview_scheduled: None,
        });

        events.push(TimelineEvent::new(
            TimelineEventKind::StatusChange,
            format!("Moved to {} ({})", stage.name, req.status),
            operator,
            now,
        ));
        if let Some(note) = &req.note {
            events.push(TimelineEvent::new(
                TimelineEventKind::Note,
                note.clone(),
                operator,
                now,
            ));
        }
        app.prepend_events(events);

        app.current_stage_id = stage.id.clone();
        app.current_stage_status = req.status;
        app.status = ApplicationStatus::derive(&stage, req.status);

        info!(
            application = %app_id,
            stage = %stage.id,
            status = %req.status,
            derived = %app.status,
            "stage updated"
        );

        match self.backend.patch_applicant_stage(app_id, &req).await {
            Ok(()) => app.sync = SyncState::Synced,
            Err(err) => {
                warn!(application = %app_id, %err, "backend sync failed, local state marked out of sync");
                app.sync = SyncState::OutOfSync;
            }
        }

        self.store.upsert(app.clone());
        Ok(app)
    }

    /// Schedules a new interview, replacing any existing upcoming one. Only
    /// the timeline and a synthetic history entry retain a trace of the
    /// replaced interview.
    pub async fn schedule_interview(
        &mut self,
        app_id: Uuid,
        req: InterviewRequest,
        notify: bool,
        operator: &str,
    ) -> Result<Application> {
        req.validate()?;
        let mut app = self.cloned(app_id)?;
        let interview = Interview::scheduled(req);

        let now = Utc::now();
        let mut events = Vec::new();
        let mut email_sent = false;
        let mut whatsapp_sent = false;

        if notify {
            let rendered = self
                .templates
                .render_interview(&interview_context(&app, &interview));
            if let Some(to) = app.email.as_deref() {
                email_sent = self
                    .channel
                    .send_email(to, &rendered.email_subject, &rendered.email_body)
                    .await;
                if email_sent {
                    events.push(TimelineEvent::new(
                        TimelineEventKind::Email,
                        "Interview Invitation Sent",
                        "System",
                        now,
                    ));
                } else {
                    warn!(application = %app_id, "interview email send failed");
                }
            }
            if let Some(phone) = app.phone.as_deref() {
                whatsapp_sent = self.channel.send_whatsapp(phone, &rendered.whatsapp).await;
                if whatsapp_sent {
                    events.push(TimelineEvent::new(
                        TimelineEventKind::Whatsapp,
                        "WhatsApp Interview Reminder Sent",
                        "System",
                        now,
                    ));
                } else {
                    warn!(application = %app_id, "interview whatsapp send failed");
                }
            }
        }

        events.push(
            TimelineEvent::new(
                TimelineEventKind::Interview,
                format!("Interview Scheduled: {} @ {}", interview.date, interview.time),
                operator,
                now,
            )
            .with_meta(serde_json::to_value(&interview)?),
        );
        app.prepend_events(events);

        app.stage_history.push(HistoryEntry {
            stage_id: app.current_stage_id.clone(),
            stage_name: "Interview Scheduled".to_string(),
            status: app.current_stage_status,
            updated_at: now,
            updated_by: operator.to_string(),
            note: Some(format!("Interview with {}", interview.interviewer_name)),
            email_sent,
            whatsapp_sent,
            interview_scheduled: Some(true),
        });

        info!(
            application = %app_id,
            interviewer = %interview.interviewer_name,
            date = %interview.date,
            "interview scheduled"
        );
        app.upcoming_interview = Some(interview);

        self.store.upsert(app.clone());
        Ok(app)
    }

    /// Prepends a note to the timeline and overwrites the latest-note scalar;
    /// earlier notes stay in the timeline.
    pub async fn append_note(
        &mut self,
        app_id: Uuid,
        note: &str,
        operator: &str,
    ) -> Result<Application> {
        let mut app = self.cloned(app_id)?;
        let now = Utc::now();
        app.prepend_events(vec![TimelineEvent::new(
            TimelineEventKind::Note,
            note,
            operator,
            now,
        )]);
        app.notes = note.to_string();

        self.store.upsert(app.clone());
        Ok(app)
    }

    /// Deprecated direct coarse-status setter; bypasses the stage machinery
    /// and only leaves a timeline trace. Kept for the legacy board view.
    pub async fn override_status(
        &mut self,
        app_id: Uuid,
        status: ApplicationStatus,
        operator: &str,
    ) -> Result<Application> {
        let mut app = self.cloned(app_id)?;
        let now = Utc::now();
        app.prepend_events(vec![TimelineEvent::new(
            TimelineEventKind::StatusChange,
            format!("Legacy status changed to {}", status),
            operator,
            now,
        )]);
        app.status = status;

        self.store.upsert(app.clone());
        Ok(app)
    }

    /// Sets the 0–5 operator rating. No ledger entry is written.
    pub async fn set_rating(&mut self, app_id: Uuid, rating: u8) -> Result<Application> {
        if rating > 5 {
            return Err(Error::RatingOutOfRange(rating));
        }
        let mut app = self.cloned(app_id)?;
        app.rating = rating;

        self.store.upsert(app.clone());
        Ok(app)
    }

    fn cloned(&self, app_id: Uuid) -> Result<Application> {
        self.store
            .get(&app_id)
            .cloned()
            .ok_or(Error::ApplicationNotFound(app_id))
    }
}

fn stage_context(app: &Application, stage: &Stage) -> Vec<(&'static str, String)> {
    vec![
        ("candidateName", app.candidate_name.clone()),
        ("jobTitle", app.job_title.clone()),
        ("stageName", stage.name.clone()),
    ]
}

fn interview_context(app: &Application, interview: &Interview) -> Vec<(&'static str, String)> {
    vec![
        ("candidateName", app.candidate_name.clone()),
        ("jobTitle", app.job_title.clone()),
        ("date", interview.date.to_string()),
        ("time", interview.time.format("%H:%M").to_string()),
        ("mode", interview.mode.to_string()),
        (
            "meetingLink",
            interview
                .meeting_link
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        ("interviewerName", interview.interviewer_name.clone()),
    ]
}

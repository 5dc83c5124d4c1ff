use chrono::{NaiveDate, NaiveTime};
use pipeline_core::config::init_config;
use pipeline_core::dto::interview_dto::InterviewRequest;
use pipeline_core::dto::stage_dto::StageUpdateRequest;
use pipeline_core::models::interview::InterviewMode;
use pipeline_core::models::stage::StageStatus;
use pipeline_core::store::demo_applications;
use pipeline_core::AppState;
use tracing::info;

/// Walks a demo candidate through a few pipeline operations so the whole
/// path (templates, dispatch, ledgers, sync) can be observed from the logs.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;

    let mut state = AppState::new();

    let seeded = demo_applications(state.pipeline.registry());
    let mut ids = Vec::new();
    for app in seeded {
        let app = state.pipeline.register_application(app).await?;
        ids.push(app.id);
    }
    info!(count = ids.len(), "seeded demo applications");

    let id = ids[0];
    state
        .pipeline
        .update_stage(
            id,
            StageUpdateRequest::new("2_resume_screen", StageStatus::Cleared)
                .with_note("Strong CV, moving forward"),
            true,
            "Admin User",
        )
        .await?;

    state
        .pipeline
        .schedule_interview(
            id,
            InterviewRequest {
                date: NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date"),
                time: NaiveTime::from_hms_opt(10, 30, 0).expect("valid time"),
                mode: InterviewMode::Online,
                meeting_link: Some("https://meet.example.com/abc".to_string()),
                interviewer_name: "Priya Nair".to_string(),
                notes: None,
            },
            true,
            "Admin User",
        )
        .await?;

    let app = state
        .pipeline
        .append_note(id, "Candidate confirmed availability", "Admin User")
        .await?;

    info!(
        application = %app.id,
        status = %app.status,
        stage = %app.current_stage_id,
        history_entries = app.stage_history.len(),
        timeline_events = app.timeline.len(),
        progress = ?state.pipeline.registry().progress(&app.current_stage_id),
        "demo run complete"
    );

    Ok(())
}

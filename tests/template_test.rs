use pipeline_core::models::template::NotificationTemplate;
use pipeline_core::services::template_service::TemplateService;

fn ctx(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
}

#[test]
fn replaces_every_occurrence_and_leaves_unknown_tokens() {
    let template = NotificationTemplate {
        email_subject: "Update for {candidateName}".to_string(),
        email_body: "Hi {candidateName}, {candidateName}, about {jobTitle}. {foo}".to_string(),
        whatsapp: "{candidateName}: {jobTitle} {bar}".to_string(),
    };

    let rendered = template.render(&ctx(&[
        ("candidateName", "Jane"),
        ("jobTitle", "Engineer"),
    ]));

    assert_eq!(rendered.email_subject, "Update for Jane");
    assert_eq!(rendered.email_body, "Hi Jane, Jane, about Engineer. {foo}");
    assert_eq!(rendered.whatsapp, "Jane: Engineer {bar}");
}

#[test]
fn default_catalog_covers_every_stage_and_renders_received() {
    let templates = TemplateService::with_company("CareersAdmin");

    let rendered = templates
        .render_stage(
            "1_received",
            &ctx(&[
                ("candidateName", "Jane"),
                ("jobTitle", "Engineer"),
                ("stageName", "Application Received"),
            ]),
        )
        .expect("template for 1_received");

    assert_eq!(
        rendered.email_subject,
        "CareersAdmin: Update on Your Application — Application Received"
    );
    assert!(rendered.email_body.starts_with("Hi Jane,"));
    assert!(rendered.email_body.contains("position of Engineer"));
    assert!(rendered.email_body.contains("**Application Received**"));
    assert!(rendered
        .whatsapp
        .contains("'Application Received' stage"));
    assert!(!rendered.email_body.contains('{'));
}

#[test]
fn missing_stage_template_yields_none() {
    let templates = TemplateService::with_company("CareersAdmin");
    assert!(templates.render_stage("99_nope", &ctx(&[])).is_none());

    let empty = TemplateService::empty("CareersAdmin");
    assert!(empty.render_stage("1_received", &ctx(&[])).is_none());
    assert!(empty.stage_template("1_received").is_none());
}

#[test]
fn interview_template_renders_all_placeholders() {
    let templates = TemplateService::with_company("CareersAdmin");

    let rendered = templates.render_interview(&ctx(&[
        ("candidateName", "Jane"),
        ("jobTitle", "Engineer"),
        ("date", "2026-09-01"),
        ("time", "10:30"),
        ("mode", "Online"),
        ("meetingLink", "N/A"),
        ("interviewerName", "Priya Nair"),
    ]));

    assert_eq!(rendered.email_subject, "Interview Scheduled — Engineer");
    assert!(rendered.email_body.contains("• Date: 2026-09-01"));
    assert!(rendered.email_body.contains("• Time: 10:30"));
    assert!(rendered.email_body.contains("• Mode: Online"));
    assert!(rendered.email_body.contains("• Meeting Link: N/A"));
    assert!(rendered.email_body.contains("• Interviewer: Priya Nair"));
    assert!(rendered
        .whatsapp
        .contains("scheduled on 2026-09-01 at 10:30"));
}

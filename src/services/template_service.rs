use crate::models::template::{NotificationTemplate, RenderedNotification};
use std::collections::HashMap;

/// Catalog of candidate-facing notification templates, keyed by stage id,
/// plus the dedicated interview-scheduling template.
#[derive(Debug, Clone)]
pub struct TemplateService {
    stage_templates: HashMap<String, NotificationTemplate>,
    interview: NotificationTemplate,
}

/// Stage templates share a fixed skeleton; only the detail line and the
/// WhatsApp tail vary per stage.
fn stage_template(company: &str, stage_name: &str, detail: &str, wa_tail: &str) -> NotificationTemplate {
    NotificationTemplate {
        email_subject: format!("{company}: Update on Your Application — {stage_name}"),
        email_body: format!(
            "Hi {{candidateName}},\n\nYour application for the position of {{jobTitle}} has progressed to:\n**{stage_name}**\n\n{detail}\n\nBest Regards,\n{company} Hiring Team"
        ),
        whatsapp: format!(
            "Hi {{candidateName}}, your application for {{jobTitle}} is now in the '{stage_name}' stage. {wa_tail}"
        ),
    }
}

fn interview_template(company: &str) -> NotificationTemplate {
    NotificationTemplate {
        email_subject: "Interview Scheduled — {jobTitle}".to_string(),
        email_body: format!(
            "Hi {{candidateName}},\n\nYour interview for the position of {{jobTitle}} is scheduled.\n\n• Date: {{date}}\n• Time: {{time}}\n• Mode: {{mode}}\n• Meeting Link: {{meetingLink}}\n• Interviewer: {{interviewerName}}\n\nPlease be available 10 minutes before the scheduled time.\n\nThanks,\n{company} HR Team"
        ),
        whatsapp: format!(
            "Your interview for {{jobTitle}} is scheduled on {{date}} at {{time}}. Mode: {{mode}}. Link: {{meetingLink}}. - {company}"
        ),
    }
}

impl TemplateService {
    pub fn new(
        stage_templates: HashMap<String, NotificationTemplate>,
        interview: NotificationTemplate,
    ) -> Self {
        Self {
            stage_templates,
            interview,
        }
    }

    /// The default catalog covering every stage of the standard pipeline.
    pub fn with_company(company: &str) -> Self {
        let entries: [(&str, &str, &str, &str); 13] = [
            ("1_received", "Application Received",
             "We have received your application and are currently reviewing it.",
             "We are reviewing it now!"),
            ("2_resume_screen", "Resume Screening",
             "We are currently reviewing your profile in detail.",
             "We are checking your profile."),
            ("3_hr_screen", "HR Screening",
             "We would like to schedule a short call to discuss your background.",
             "Expect a call soon!"),
            ("4_tech_test", "Technical Test",
             "Please check your email for the test link and instructions.",
             "Check email for test link."),
            ("5_tech_interview", "Technical Interview",
             "Your test results were great! We are moving to the technical interview round.",
             "Congrats!"),
            ("6_manager_interview", "Managerial Interview",
             "We are excited to have you speak with our Hiring Manager.",
             "Good luck!"),
            ("7_hr_final", "HR Final Round",
             "We are in the final stages. Let's discuss culture fit and next steps.",
             "Almost there!"),
            ("8_doc_verify", "Document Verification",
             "Please submit the required documents for verification.",
             "Please upload docs."),
            ("9_offer_prep", "Offer Preparation",
             "We are preparing your offer letter!",
             "Offer coming soon!"),
            ("10_offer_issued", "Offer Issued",
             "Congratulations! Please check the attached offer letter.",
             "Congrats! Check your email."),
            ("11_offer_accepted", "Offer Accepted",
             "We are thrilled you accepted! We look forward to working with you.",
             "Welcome aboard!"),
            ("12_preboarding", "Preboarding",
             "Here is some info to get you ready for Day 1.",
             "Getting ready for your start date."),
            ("13_joined", "Joined",
             "Welcome to the team!",
             "Have a great first day!"),
        ];

        let stage_templates = entries
            .into_iter()
            .map(|(id, name, detail, wa_tail)| {
                (id.to_string(), stage_template(company, name, detail, wa_tail))
            })
            .collect();

        Self {
            stage_templates,
            interview: interview_template(company),
        }
    }

    /// An empty stage catalog (interview template only). Stage transitions
    /// against this catalog skip the notification step entirely.
    pub fn empty(company: &str) -> Self {
        Self {
            stage_templates: HashMap::new(),
            interview: interview_template(company),
        }
    }

    pub fn stage_template(&self, stage_id: &str) -> Option<&NotificationTemplate> {
        self.stage_templates.get(stage_id)
    }

    /// `None` when no template exists for the stage; the caller then skips
    /// the notification step.
    pub fn render_stage(
        &self,
        stage_id: &str,
        ctx: &[(&str, String)],
    ) -> Option<RenderedNotification> {
        self.stage_templates.get(stage_id).map(|t| t.render(ctx))
    }

    pub fn render_interview(&self, ctx: &[(&str, String)]) -> RenderedNotification {
        self.interview.render(ctx)
    }
}

use serde::{Deserialize, Serialize};

/// Candidate-facing message texts for one stage (or for interview
/// scheduling), each holding `{placeholder}` tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTemplate {
    pub email_subject: String,
    pub email_body: String,
    pub whatsapp: String,
}

/// The template texts with every provided placeholder substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNotification {
    pub email_subject: String,
    pub email_body: String,
    pub whatsapp: String,
}

impl NotificationTemplate {
    /// Substitutes each `{placeholder}` for which the context carries a value,
    /// replacing every occurrence literally. Tokens without a context value
    /// are left verbatim; this is not an error.
    pub fn render(&self, ctx: &[(&str, String)]) -> RenderedNotification {
        RenderedNotification {
            email_subject: substitute(&self.email_subject, ctx),
            email_body: substitute(&self.email_body, ctx),
            whatsapp: substitute(&self.whatsapp, ctx),
        }
    }
}

fn substitute(text: &str, ctx: &[(&str, String)]) -> String {
    let mut out = text.to_string();
    for (token, value) in ctx {
        out = out.replace(&format!("{{{}}}", token), value);
    }
    out
}

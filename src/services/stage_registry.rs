use crate::models::stage::{Stage, StageKind};

/// Ordered, process-wide constant catalog of the hiring pipeline stages.
#[derive(Debug, Clone)]
pub struct StageRegistry {
    stages: Vec<Stage>,
}

fn stage(id: &str, name: &str, description: &str, ordinal: usize, kind: StageKind) -> Stage {
    Stage {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        ordinal,
        kind,
    }
}

impl Default for StageRegistry {
    fn default() -> Self {
        use StageKind::*;
        Self {
            stages: vec![
                stage("1_received", "Application Received", "Candidate has submitted application", 1, Start),
                stage("2_resume_screen", "Resume Screening", "Reviewing CV and application details", 2, Active),
                stage("3_hr_screen", "HR Screening", "Initial phone call with HR", 3, Active),
                stage("4_tech_test", "Technical Test", "Take-home assignment or coding test", 4, Active),
                stage("5_tech_interview", "Technical Interview", "Live technical interview with team", 5, Active),
                stage("6_manager_interview", "Managerial Interview", "Interview with hiring manager", 6, Active),
                stage("7_hr_final", "HR Final Round", "Culture fit and salary discussion", 7, Active),
                stage("8_doc_verify", "Document Verification", "Background checks and doc verification", 8, Active),
                stage("9_offer_prep", "Offer Preparation", "Creating the offer letter", 9, Active),
                stage("10_offer_issued", "Offer Issued", "Offer sent to candidate", 10, Active),
                stage("11_offer_accepted", "Offer Accepted", "Candidate accepted the offer", 11, Active),
                stage("12_preboarding", "Preboarding", "Preparing for joining day", 12, Active),
                stage("13_joined", "Joined", "Candidate has joined the company", 13, TerminalSuccess),
            ],
        }
    }
}

impl StageRegistry {
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn get(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    pub fn start_stage(&self) -> &Stage {
        &self.stages[0]
    }

    /// Pipeline progress for the progress bar: (position + 1) / total.
    pub fn progress(&self, id: &str) -> Option<f32> {
        let idx = self.stages.iter().position(|s| s.id == id)?;
        Some((idx + 1) as f32 / self.stages.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_are_ordered_by_ordinal() {
        let registry = StageRegistry::default();
        let ordinals: Vec<usize> = registry.stages().iter().map(|s| s.ordinal).collect();
        let mut sorted = ordinals.clone();
        sorted.sort_unstable();
        assert_eq!(ordinals, sorted);
        assert_eq!(registry.stages().len(), 13);
    }

    #[test]
    fn lookup_and_progress() {
        let registry = StageRegistry::default();
        assert_eq!(registry.get("3_hr_screen").unwrap().name, "HR Screening");
        assert!(registry.get("99_unknown").is_none());
        assert!((registry.progress("1_received").unwrap() - 1.0 / 13.0).abs() < f32::EPSILON);
        assert!((registry.progress("13_joined").unwrap() - 1.0).abs() < f32::EPSILON);
        assert!(registry.progress("99_unknown").is_none());
    }

    #[test]
    fn terminal_flags() {
        let registry = StageRegistry::default();
        assert_eq!(registry.start_stage().kind, StageKind::Start);
        assert!(registry.get("13_joined").unwrap().is_terminal());
        assert!(!registry.get("12_preboarding").unwrap().is_terminal());
    }
}

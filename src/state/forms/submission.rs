//! Busy flag and last outcome of a form's submission

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Tracks the single in-flight submission a form may have
#[derive(Debug, Clone, Default)]
pub struct Submission {
    phase: SubmissionPhase,
}

impl Submission {
    /// Enter `Submitting`. Returns false, changing nothing, if already busy.
    pub fn begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        true
    }

    /// Record the outcome and clear the busy flag
    pub fn settle(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Failed
        };
    }

    /// Clear the busy flag without an outcome
    pub fn release(&mut self) {
        if self.is_busy() {
            self.phase = SubmissionPhase::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_begin_rejects_second_submission() {
        let mut submission = Submission::default();
        assert!(submission.begin());
        assert!(!submission.begin());
        assert!(submission.is_busy());
    }

    #[test]
    fn test_settle_clears_busy() {
        let mut submission = Submission::default();
        submission.begin();
        submission.settle(false);
        assert!(!submission.is_busy());
        assert_eq!(submission.phase, SubmissionPhase::Failed);
        assert!(submission.begin());
    }

    #[test]
    fn test_release_only_affects_busy_state() {
        let mut submission = Submission::default();
        submission.begin();
        submission.settle(true);
        submission.release();
        assert_eq!(submission.phase, SubmissionPhase::Succeeded);

        submission.begin();
        submission.release();
        assert_eq!(submission.phase, SubmissionPhase::Idle);
    }
}

//! Submission orchestration
//!
//! Turns a final-step submit into a backend call and routes the outcome back
//! into the form: analytics on success, an acknowledgment or error notice,
//! then a reset (contact) or the results step (ROI).

use crate::analytics::Analytics;
use crate::api::{
    ApiError, ApiResult, ContactFormData, LeadBackend, RoiCalculationData, RoiProjection,
};
use crate::state::{FormKind, FormState, MultiStepForm, Submission};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Wire payload captured from a form at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    Contact(ContactFormData),
    Roi(RoiCalculationData),
}

impl SubmissionPayload {
    /// Snapshot the form's values as the payload for its kind
    pub fn from_form(form: &MultiStepForm) -> Self {
        let values = form.values();
        match form.kind() {
            FormKind::Contact => SubmissionPayload::Contact(contact_data(values)),
            FormKind::Roi => SubmissionPayload::Roi(roi_data(values)),
        }
    }

    pub fn kind(&self) -> FormKind {
        match self {
            SubmissionPayload::Contact(_) => FormKind::Contact,
            SubmissionPayload::Roi(_) => FormKind::Roi,
        }
    }
}

fn contact_data(values: &FormState) -> ContactFormData {
    let text = |field: &str| values.text(field).to_string();
    ContactFormData {
        name: text("name"),
        email: text("email"),
        company: text("company"),
        role: text("role"),
        project_type: text("projectType"),
        timeline: text("timeline"),
        budget: text("budget"),
        description: text("description"),
        preferred_time: text("preferredTime"),
        urgency: text("urgency"),
    }
}

fn roi_data(values: &FormState) -> RoiCalculationData {
    RoiCalculationData {
        company_size: values.text("company_size").to_string(),
        industry: values.text("industry").to_string(),
        current_processes: values.list("current_processes").to_vec(),
        pain_points: values.list("pain_points").to_vec(),
        budget_range: values.text("budget_range").to_string(),
        timeline: values.text("timeline").to_string(),
    }
}

/// What the user is told once a submission settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Outcome of a spawned submission, sent back to the UI task
#[derive(Debug)]
pub struct SettledSubmission {
    pub payload: SubmissionPayload,
    pub result: ApiResult<Value>,
}

/// Clears the busy flag if the inline path is dropped before settling
struct BusyGuard<'a>(&'a mut Submission);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.release();
    }
}

/// Send the payload to the backend matching its kind
pub async fn dispatch(backend: &dyn LeadBackend, payload: &SubmissionPayload) -> ApiResult<Value> {
    match payload {
        SubmissionPayload::Contact(data) => backend.submit_contact(data).await,
        SubmissionPayload::Roi(data) => backend.calculate_roi(data).await,
    }
}

/// Coordinates submissions for both lead forms
#[derive(Clone)]
pub struct Orchestrator {
    backend: Arc<dyn LeadBackend>,
    analytics: Analytics,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn LeadBackend>, analytics: Analytics) -> Self {
        Self { backend, analytics }
    }

    pub fn backend(&self) -> &Arc<dyn LeadBackend> {
        &self.backend
    }

    /// Enter `Submitting` and capture the payload.
    ///
    /// Returns `None` without side effects when the form is not on its last
    /// input step, its gate fails, or a submission is already in flight.
    pub fn begin(&self, form: &mut MultiStepForm) -> Option<SubmissionPayload> {
        if !form.can_submit() || !form.submission.begin() {
            return None;
        }
        let payload = SubmissionPayload::from_form(form);
        tracing::info!(
            form = ?payload.kind(),
            backend = self.backend.label(),
            "Submitting form"
        );
        Some(payload)
    }

    /// Apply a settled result to the form and produce the notice to show
    pub fn settle(
        &self,
        form: &mut MultiStepForm,
        payload: &SubmissionPayload,
        result: ApiResult<Value>,
    ) -> Notice {
        let schema = form.schema();

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(
                    form = ?payload.kind(),
                    status = ?err.status(),
                    error = %err,
                    "Submission failed"
                );
                form.submission.settle(false);
                let message = err.message().unwrap_or(schema.failure_fallback);
                return Notice::Error(message.to_string());
            }
        };

        let message = data
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(schema.success_default)
            .to_string();

        match payload {
            SubmissionPayload::Contact(contact) => {
                self.analytics.track_contact_form_submission(contact);
                form.submission.settle(true);
                form.reset();
            }
            SubmissionPayload::Roi(roi) => {
                let Some(projection) = RoiProjection::from_payload(&data) else {
                    tracing::warn!(payload = %data, "ROI response is missing projections");
                    form.submission.settle(false);
                    return Notice::Error(schema.failure_fallback.to_string());
                };
                self.analytics
                    .track_roi_calculation(roi, &projection.roi_percentage);
                form.submission.settle(true);
                form.show_results(projection);
            }
        }

        tracing::info!(form = ?payload.kind(), "Submission succeeded");
        Notice::Success(message)
    }

    /// Submit and await the result on the calling task
    pub async fn submit(&self, form: &mut MultiStepForm) -> Option<Notice> {
        let payload = self.begin(form)?;
        let result = {
            let _busy = BusyGuard(&mut form.submission);
            dispatch(self.backend.as_ref(), &payload).await
        };
        Some(self.settle(form, &payload, result))
    }

    /// Submit on a background task; the outcome arrives on `settled`.
    ///
    /// Returns false if the submit was not started. A task that panics is
    /// reported as [`ApiError::Aborted`] so the form always leaves `Submitting`.
    pub fn spawn(&self, form: &mut MultiStepForm, settled: UnboundedSender<SettledSubmission>) -> bool {
        let Some(payload) = self.begin(form) else {
            return false;
        };
        let backend = Arc::clone(&self.backend);

        tokio::spawn(async move {
            let request = payload.clone();
            let call = tokio::spawn(async move { dispatch(backend.as_ref(), &request).await });
            let result = call.await.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Submission task ended abnormally");
                Err(ApiError::Aborted)
            });
            if settled.send(SettledSubmission { payload, result }).is_err() {
                tracing::debug!("Submission settled after the UI closed");
            }
        });
        true
    }
}

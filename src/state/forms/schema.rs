//! Static form definitions: steps, fields, and the gates between steps

use super::field::{FieldSpec, SelectOption};
use super::form_state::FormState;

/// Which lead form a schema describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Roi,
}

/// Condition a step places on the form before moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Text field must be non-empty
    Filled(&'static str),
    /// List field must hold at least one entry
    AnyOf(&'static str),
}

impl Requirement {
    pub fn is_met(&self, state: &FormState) -> bool {
        match self {
            Requirement::Filled(field) => state.is_filled(field),
            Requirement::AnyOf(field) => !state.list(field).is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
    pub requires: &'static [Requirement],
}

/// Everything that distinguishes one multi-step form from another
#[derive(Debug)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Input steps, in order
    pub steps: &'static [StepSpec],
    /// A results step follows the input steps, reached only by submitting
    pub has_results_step: bool,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    /// Acknowledgment shown when the server sends no message
    pub success_default: &'static str,
    /// Failure text when the error carries no message
    pub failure_fallback: &'static str,
}

impl FormSchema {
    /// Number of input steps
    pub fn input_steps(&self) -> usize {
        self.steps.len()
    }

    /// Total step count, including the results step
    pub fn total_steps(&self) -> usize {
        self.steps.len() + usize::from(self.has_results_step)
    }

    pub fn results_step(&self) -> Option<usize> {
        self.has_results_step.then(|| self.steps.len() + 1)
    }

    /// 1-based lookup of an input step
    pub fn step(&self, step: usize) -> Option<&StepSpec> {
        step.checked_sub(1).and_then(|i| self.steps.get(i))
    }

    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        let steps: &'static [StepSpec] = self.steps;
        steps.iter().flat_map(|s| s.fields.iter())
    }

    /// Whether every requirement of `step` holds
    pub fn requirements_met(&self, step: usize, state: &FormState) -> bool {
        self.step(step)
            .is_some_and(|s| s.requires.iter().all(|r| r.is_met(state)))
    }

    /// Whether "Next" is enabled on `step`.
    ///
    /// Only input steps before the last one move forward; the last input
    /// step submits instead and the results step is never advanced from.
    pub fn can_advance(&self, step: usize, state: &FormState) -> bool {
        step >= 1 && step < self.input_steps() && self.requirements_met(step, state)
    }

    /// Whether the submit control on the last input step is enabled
    pub fn can_submit(&self, state: &FormState) -> bool {
        self.requirements_met(self.input_steps(), state)
    }

    /// Fresh state for this form
    pub fn empty_state(&self) -> FormState {
        FormState::new(self.all_fields())
    }
}

const PROJECT_TYPES: &[SelectOption] = &[
    SelectOption::new("ai-implementation", "AI Implementation"),
    SelectOption::new("mlops", "MLOps Setup"),
    SelectOption::new("data-strategy", "Data Strategy"),
    SelectOption::new("training", "Team Training"),
    SelectOption::new("consultation", "General Consultation"),
];

const CONTACT_TIMELINES: &[SelectOption] = &[
    SelectOption::new("urgent", "ASAP (< 30 days)"),
    SelectOption::new("soon", "1-3 months"),
    SelectOption::new("planning", "3-6 months"),
    SelectOption::new("future", "6+ months"),
];

const CONTACT_BUDGETS: &[SelectOption] = &[
    SelectOption::new("under-25k", "Under $25K"),
    SelectOption::new("25k-50k", "$25K - $50K"),
    SelectOption::new("50k-100k", "$50K - $100K"),
    SelectOption::new("100k-plus", "$100K+"),
];

const MEETING_TIMES: &[SelectOption] = &[
    SelectOption::new("morning", "Morning (9AM - 12PM EST)"),
    SelectOption::new("afternoon", "Afternoon (12PM - 5PM EST)"),
    SelectOption::new("evening", "Evening (5PM - 8PM EST)"),
    SelectOption::new("flexible", "I'm flexible"),
];

const URGENCY: &[SelectOption] = &[
    SelectOption::new("high", "High - Need to start immediately"),
    SelectOption::new("medium", "Medium - Within next month"),
    SelectOption::new("low", "Low - Just exploring options"),
];

const COMPANY_SIZES: &[SelectOption] = &[
    SelectOption::new("startup", "Startup (1-50 employees)"),
    SelectOption::new("small", "Small Business (51-200 employees)"),
    SelectOption::new("medium", "Medium Business (201-1000 employees)"),
    SelectOption::new("large", "Large Enterprise (1000+ employees)"),
];

const INDUSTRIES: &[SelectOption] = &[
    SelectOption::new("fintech", "FinTech"),
    SelectOption::new("healthcare", "Healthcare"),
    SelectOption::new("retail", "Retail & E-commerce"),
    SelectOption::new("manufacturing", "Manufacturing"),
    SelectOption::new("logistics", "Logistics & Supply Chain"),
    SelectOption::new("energy", "Energy & Utilities"),
    SelectOption::new("other", "Other"),
];

const PROCESSES: &[SelectOption] = &[
    SelectOption::new("customer_service", "Customer Service"),
    SelectOption::new("data_analysis", "Data Analysis"),
    SelectOption::new("inventory_management", "Inventory Management"),
    SelectOption::new("fraud_detection", "Fraud Detection"),
    SelectOption::new("quality_control", "Quality Control"),
    SelectOption::new("demand_forecasting", "Demand Forecasting"),
    SelectOption::new("document_processing", "Document Processing"),
    SelectOption::new("risk_assessment", "Risk Assessment"),
];

const PAIN_POINTS: &[SelectOption] = &[
    SelectOption::new("manual_tasks", "Too many manual tasks"),
    SelectOption::new("slow_decisions", "Slow decision making"),
    SelectOption::new("data_silos", "Data silos and inconsistency"),
    SelectOption::new("high_errors", "High error rates"),
    SelectOption::new("scalability", "Scalability challenges"),
    SelectOption::new("compliance", "Compliance and reporting"),
    SelectOption::new("customer_satisfaction", "Customer satisfaction issues"),
];

const ROI_BUDGETS: &[SelectOption] = &[
    SelectOption::new("under_50k", "Under $50K"),
    SelectOption::new("50k_100k", "$50K - $100K"),
    SelectOption::new("100k_250k", "$100K - $250K"),
    SelectOption::new("250k_500k", "$250K - $500K"),
    SelectOption::new("500k_plus", "$500K+"),
];

const ROI_TIMELINES: &[SelectOption] = &[
    SelectOption::new("immediate", "Immediate (< 30 days)"),
    SelectOption::new("short_term", "Short term (1-3 months)"),
    SelectOption::new("medium_term", "Medium term (3-6 months)"),
    SelectOption::new("long_term", "Long term (6+ months)"),
];

pub static CONTACT_FORM: FormSchema = FormSchema {
    kind: FormKind::Contact,
    title: "Contact Us",
    subtitle: "Book a free consultation",
    steps: &[
        StepSpec {
            title: "Tell us about your project",
            description: "Basic information about your needs",
            fields: &[
                FieldSpec::text("name", "Full Name *", "John Smith"),
                FieldSpec::text("email", "Email *", "john@company.com"),
                FieldSpec::text("company", "Company *", "Acme Corp"),
                FieldSpec::text("role", "Your Role", "CTO, CEO, etc."),
            ],
            requires: &[
                Requirement::Filled("name"),
                Requirement::Filled("email"),
                Requirement::Filled("company"),
            ],
        },
        StepSpec {
            title: "Project details",
            description: "Timeline, budget, and requirements",
            fields: &[
                FieldSpec::select("projectType", "Project Type *", PROJECT_TYPES),
                FieldSpec::select("timeline", "Timeline", CONTACT_TIMELINES),
                FieldSpec::select("budget", "Budget Range", CONTACT_BUDGETS),
                FieldSpec::multiline(
                    "description",
                    "Project Description",
                    "Tell us about your AI goals and challenges...",
                ),
            ],
            requires: &[Requirement::Filled("projectType")],
        },
        StepSpec {
            title: "Schedule consultation",
            description: "Pick a time that works for you",
            fields: &[
                FieldSpec::select("preferredTime", "Preferred Meeting Time", MEETING_TIMES),
                FieldSpec::select("urgency", "How urgent is this project?", URGENCY),
            ],
            requires: &[],
        },
    ],
    has_results_step: false,
    submit_label: "Send Message",
    busy_label: "Sending...",
    success_default: "Thank you! We'll be in touch within 24 hours.",
    failure_fallback: "Something went wrong. Please try again.",
};

pub static ROI_FORM: FormSchema = FormSchema {
    kind: FormKind::Roi,
    title: "AI ROI Calculator",
    subtitle: "Discover your potential savings and ROI with our 30-day AI implementation",
    steps: &[
        StepSpec {
            title: "Company Information",
            description: "Tell us who you are",
            fields: &[
                FieldSpec::select("company_size", "Company Size *", COMPANY_SIZES),
                FieldSpec::select("industry", "Industry *", INDUSTRIES),
            ],
            requires: &[
                Requirement::Filled("company_size"),
                Requirement::Filled("industry"),
            ],
        },
        StepSpec {
            title: "Current Processes & Challenges",
            description: "Select all that apply",
            fields: &[
                FieldSpec::multi_select(
                    "current_processes",
                    "Which processes would you like to optimize with AI? *",
                    PROCESSES,
                ),
                FieldSpec::multi_select(
                    "pain_points",
                    "What are your main pain points? *",
                    PAIN_POINTS,
                ),
            ],
            requires: &[
                Requirement::AnyOf("current_processes"),
                Requirement::AnyOf("pain_points"),
            ],
        },
        StepSpec {
            title: "Budget & Timeline",
            description: "Plan the investment",
            fields: &[
                FieldSpec::select("budget_range", "Budget Range *", ROI_BUDGETS),
                FieldSpec::select("timeline", "Implementation Timeline *", ROI_TIMELINES),
            ],
            requires: &[
                Requirement::Filled("budget_range"),
                Requirement::Filled("timeline"),
            ],
        },
    ],
    has_results_step: true,
    submit_label: "Calculate ROI",
    busy_label: "Calculating...",
    success_default: "Your AI ROI projection is ready.",
    failure_fallback: "Failed to calculate ROI. Please try again.",
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contact_step_one_gate() {
        let mut state = CONTACT_FORM.empty_state();
        state.update("name", "John Doe");
        state.update("company", "Test Corp");
        assert!(!CONTACT_FORM.can_advance(1, &state));

        state.update("email", "john@example.com");
        assert!(CONTACT_FORM.can_advance(1, &state));
    }

    #[test]
    fn test_contact_role_is_optional() {
        let mut state = CONTACT_FORM.empty_state();
        for (field, value) in [("name", "J"), ("email", "j@x.io"), ("company", "X")] {
            state.update(field, value);
        }
        assert_eq!(state.text("role"), "");
        assert!(CONTACT_FORM.can_advance(1, &state));
    }

    #[test]
    fn test_contact_step_two_gate() {
        let mut state = CONTACT_FORM.empty_state();
        state.update("timeline", "soon");
        assert!(!CONTACT_FORM.can_advance(2, &state));
        state.update("projectType", "mlops");
        assert!(CONTACT_FORM.can_advance(2, &state));
    }

    #[test]
    fn test_contact_last_step_submits_without_requirements() {
        let state = CONTACT_FORM.empty_state();
        assert!(!CONTACT_FORM.can_advance(3, &state));
        assert!(CONTACT_FORM.can_submit(&state));
    }

    #[test]
    fn test_roi_step_two_needs_both_lists() {
        let mut state = ROI_FORM.empty_state();
        state.toggle("current_processes", "data_analysis");
        assert!(!ROI_FORM.can_advance(2, &state));
        state.toggle("pain_points", "manual_tasks");
        assert!(ROI_FORM.can_advance(2, &state));
    }

    #[test]
    fn test_roi_step_three_gates_submit() {
        let mut state = ROI_FORM.empty_state();
        state.update("budget_range", "50k_100k");
        assert!(!ROI_FORM.can_submit(&state));
        state.update("timeline", "immediate");
        assert!(ROI_FORM.can_submit(&state));
        // The last input step submits rather than advancing
        assert!(!ROI_FORM.can_advance(3, &state));
    }

    #[test]
    fn test_out_of_range_steps_never_advance() {
        let state = ROI_FORM.empty_state();
        assert!(!ROI_FORM.can_advance(0, &state));
        assert!(!ROI_FORM.can_advance(4, &state));
        assert!(!ROI_FORM.can_advance(9, &state));
    }

    #[test]
    fn test_can_advance_is_pure() {
        let mut state = CONTACT_FORM.empty_state();
        state.update("name", "J");
        let before = state.clone();
        let first = CONTACT_FORM.can_advance(1, &state);
        let second = CONTACT_FORM.can_advance(1, &state);
        assert_eq!(first, second);
        assert_eq!(state, before);
    }

    #[test]
    fn test_step_counts() {
        assert_eq!(CONTACT_FORM.total_steps(), 3);
        assert_eq!(CONTACT_FORM.results_step(), None);
        assert_eq!(ROI_FORM.total_steps(), 4);
        assert_eq!(ROI_FORM.results_step(), Some(4));
    }

    #[test]
    fn test_empty_state_has_all_keys() {
        let contact = CONTACT_FORM.empty_state();
        let names: Vec<_> = contact.field_names().collect();
        for key in [
            "name",
            "email",
            "company",
            "role",
            "projectType",
            "timeline",
            "budget",
            "description",
            "preferredTime",
            "urgency",
        ] {
            assert!(names.contains(&key), "missing {key}");
        }
        assert_eq!(names.len(), 10);

        let roi = ROI_FORM.empty_state();
        assert_eq!(roi.field_names().count(), 6);
        assert!(roi.list("pain_points").is_empty());
    }
}

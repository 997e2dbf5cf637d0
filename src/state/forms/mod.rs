//! Form domain layer
//!
//! One generic multi-step machine, configured per form by a static
//! [`FormSchema`].

mod field;
mod form_state;
mod schema;
mod submission;
mod wizard;

pub use field::{FieldKind, FieldSpec};
pub use form_state::FormState;
pub use schema::{FormKind, CONTACT_FORM, ROI_FORM};
pub use submission::Submission;
pub use wizard::{Control, MultiStepForm};

//! Upload Wizard
//!
//! - **types**: upload type, steps, file references, the finished submission
//! - **machine**: the step state machine with its validation gates
//! - **error**: validation rejections

pub mod error;
pub mod machine;
pub mod types;

pub use error::{WizardError, WizardResult};
pub use machine::UploadWizard;
pub use types::{FileRef, ReleaseExtras, Submission, UploadType, WizardStep};

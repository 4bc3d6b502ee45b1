//! Gift finder: a four-question wizard that turns a shopper's answers into a
//! catalog query.

pub mod error;
pub mod steps;
pub mod wizard;

pub use error::WizardError;
pub use steps::{StepKind, StepOption, StepSpec, STEPS};
pub use wizard::{GiftFinder, StepIndicator, StepState, CATALOG_PATH};

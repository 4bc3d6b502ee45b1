use thiserror::Error;

/// Illegal wizard transition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("option {option:?} does not belong to step {step}")]
    UnknownOption { step: usize, option: String },

    #[error("step {0} is out of range")]
    StepOutOfRange(usize),

    #[error("step {0} has no selection")]
    Unanswered(usize),

    #[error("already on the last step")]
    AlreadyLastStep,

    #[error("search is only available from the last step (current step {0})")]
    NotLastStep(usize),
}

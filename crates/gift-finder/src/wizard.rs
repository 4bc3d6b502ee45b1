//! Wizard state machine.
//!
//! The cursor moves forward one step at a time or jumps anywhere through the
//! step indicator. Answers are kept per step, so jumping back and forth never
//! loses them. The continue/find control only looks at the displayed step.

use serde::Serialize;
use tracing::debug;

use doudou_catalog::{to_query, AgeBucket, BudgetRange, Color, FilterSelection};

use crate::error::WizardError;
use crate::steps::{StepKind, StepSpec, STEPS};

/// Route the search lands on.
pub const CATALOG_PATH: &str = "/magazin";

const STEP_COUNT: usize = STEPS.len();
const LAST_STEP: usize = STEP_COUNT - 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Current,
    Visited,
    Upcoming,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub index: usize,
    pub state: StepState,
    pub answered: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GiftFinder {
    current: usize,
    selections: [Option<&'static str>; STEP_COUNT],
}

impl GiftFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn step(&self) -> &'static StepSpec {
        &STEPS[self.current]
    }

    pub fn selection(&self, step: usize) -> Option<&'static str> {
        self.selections.get(step).copied().flatten()
    }

    pub fn is_last_step(&self) -> bool {
        self.current == LAST_STEP
    }

    /// Whether the continue/find control is enabled.
    pub fn can_continue(&self) -> bool {
        self.selections[self.current].is_some()
    }

    /// Answer the displayed step with the option at `index`, replacing any
    /// earlier answer for that step.
    pub fn select(&mut self, index: usize) -> Result<(), WizardError> {
        let step = self.step();
        let option = step.options.get(index).ok_or_else(|| WizardError::UnknownOption {
            step: self.current,
            option: index.to_string(),
        })?;
        self.selections[self.current] = Some(option.id);
        Ok(())
    }

    /// Answer the displayed step by option id.
    pub fn select_id(&mut self, id: &str) -> Result<(), WizardError> {
        let option = self.step().option(id).ok_or_else(|| WizardError::UnknownOption {
            step: self.current,
            option: id.to_string(),
        })?;
        self.selections[self.current] = Some(option.id);
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), WizardError> {
        if self.is_last_step() {
            return Err(WizardError::AlreadyLastStep);
        }
        if !self.can_continue() {
            return Err(WizardError::Unanswered(self.current));
        }
        self.current += 1;
        Ok(())
    }

    /// Jump straight to `step`, as the step indicator does.
    pub fn jump_to(&mut self, step: usize) -> Result<(), WizardError> {
        if step >= STEP_COUNT {
            return Err(WizardError::StepOutOfRange(step));
        }
        self.current = step;
        Ok(())
    }

    pub fn step_indicators(&self) -> Vec<StepIndicator> {
        (0..STEP_COUNT)
            .map(|index| StepIndicator {
                index,
                state: match index.cmp(&self.current) {
                    std::cmp::Ordering::Equal => StepState::Current,
                    std::cmp::Ordering::Less => StepState::Visited,
                    std::cmp::Ordering::Greater => StepState::Upcoming,
                },
                answered: self.selections[index].is_some(),
            })
            .collect()
    }

    /// Catalog filters implied by the answers so far.
    ///
    /// Age, color and budget become singleton sets. The product type has no
    /// catalog axis and the `multicolor` answer matches no color tag, so neither
    /// narrows the search.
    pub fn to_selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::default();
        for (step, answer) in STEPS.iter().zip(self.selections.iter()) {
            let Some(id) = answer else { continue };
            match step.kind {
                StepKind::Age => {
                    if let Some(age) = AgeBucket::from_key(id) {
                        selection.ages.insert(age);
                    }
                }
                StepKind::Color => {
                    if let Some(color) = Color::from_key(id) {
                        selection.colors.insert(color);
                    }
                }
                StepKind::Budget => {
                    if let Some(budget) = BudgetRange::from_key(id) {
                        selection.budgets.insert(budget);
                    }
                }
                StepKind::Type => {}
            }
        }
        selection
    }

    /// Finish the wizard: the catalog URL to navigate to.
    pub fn find(&self) -> Result<String, WizardError> {
        if !self.is_last_step() {
            return Err(WizardError::NotLastStep(self.current));
        }
        if !self.can_continue() {
            return Err(WizardError::Unanswered(self.current));
        }

        let query = to_query(&self.to_selection());
        debug!(answers = ?self.selections, %query, "gift finder search");

        if query.is_empty() {
            Ok(CATALOG_PATH.to_string())
        } else {
            Ok(format!("{CATALOG_PATH}?{query}"))
        }
    }

    /// Start over.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

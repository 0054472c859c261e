// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::WizardStep;
use ski_book_domain::{DomainError, FieldError};

/// Errors that can occur during session transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command does not belong to the session's current step.
    CommandNotAllowed {
        /// The step the session is in.
        step: WizardStep,
        /// The rejected command's name.
        command: &'static str,
    },
    /// The requested step transition is not part of the wizard.
    StepTransitionNotAllowed {
        /// The step the session is in.
        from: WizardStep,
        /// The step that was requested.
        to: WizardStep,
    },
    /// A time slot was chosen before a date.
    NoDateSelected,
    /// The selection is missing a piece required to move on.
    IncompleteSelection {
        /// What is missing.
        missing: &'static str,
    },
    /// Contact details failed validation; the step is unchanged.
    ValidationFailed(Vec<FieldError>),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CommandNotAllowed { step, command } => {
                write!(f, "Command {command} is not allowed in step {step}")
            }
            Self::StepTransitionNotAllowed { from, to } => {
                write!(f, "Cannot move from step {from} to step {to}")
            }
            Self::NoDateSelected => {
                write!(f, "A date must be selected before choosing a time slot")
            }
            Self::IncompleteSelection { missing } => {
                write!(f, "Selection is incomplete: missing {missing}")
            }
            Self::ValidationFailed(errors) => {
                let fields: Vec<&str> = errors
                    .iter()
                    .map(|error| error.field.as_str())
                    .collect();
                write!(f, "Contact details failed validation: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

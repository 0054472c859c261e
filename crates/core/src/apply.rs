// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Session, TransitionResult, WizardStep};
use chrono::NaiveDate;
use ski_book_domain::{
    DomainError, PhoneValidator, TimeSlot, is_date_selectable, selectable_time_slots, shift_month,
    validate_contact_details,
};

/// Applies a command to a session, producing a new session and its
/// recomputed view.
///
/// The input session is never mutated: a failing command leaves it
/// untouched, and a succeeding command returns a fresh session with
/// every piece of derived state (quote, grid, slots, titles) rebuilt
/// synchronously.
///
/// Commands are gated by wizard step: option changes belong to
/// [`WizardStep::SelectOptions`], calendar interaction to
/// [`WizardStep::SelectDateTime`], contact entry and submission to
/// [`WizardStep::EnterDetails`]. A submitted session accepts nothing.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `today` - The current calendar day
/// * `phones` - The phone input collaborator, used on submission
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session and its view
/// * `Err(CoreError)` if the command is invalid for this session
///
/// # Errors
///
/// Returns an error if:
/// - The command does not belong to the session's current step
/// - The command violates a domain rule (bad count, unselectable date,
///   unavailable slot)
/// - A step advance lacks a required selection
/// - Submission fails contact validation
#[allow(clippy::too_many_lines)]
pub fn apply(
    session: &Session,
    command: Command,
    today: NaiveDate,
    phones: &dyn PhoneValidator,
) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    tracing::debug!(command = command_name, step = %session.step, "applying booking command");

    match command {
        Command::SelectSport { sport } => {
            require_step(session, WizardStep::SelectOptions, command_name)?;

            let mut next: Session = session.clone();
            next.selection.sport = sport;
            finish(next, today)
        }
        Command::SelectTier { tier } => {
            require_step(session, WizardStep::SelectOptions, command_name)?;

            let mut next: Session = session.clone();
            next.selection.tier = tier;

            // A slot picked for the old tier may not exist for the new
            // one; a selected slot must always be one of the offered
            // slots.
            if let Some(slot) = next.selection.selected_slot {
                let offered: Vec<TimeSlot> = selectable_time_slots(tier, &next.context.window);
                if !offered.contains(&slot) {
                    next.selection.selected_slot = None;
                }
            }
            finish(next, today)
        }
        Command::SetParticipants { count } => {
            require_step(session, WizardStep::SelectOptions, command_name)?;
            if count < 1 {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidParticipantCount { count },
                ));
            }

            let mut next: Session = session.clone();
            next.selection.participants = count;
            finish(next, today)
        }
        Command::SetDays { count } => {
            require_step(session, WizardStep::SelectOptions, command_name)?;
            if count < 1 {
                return Err(CoreError::DomainViolation(DomainError::InvalidDayCount {
                    count,
                }));
            }

            let mut next: Session = session.clone();
            next.selection.days = count;
            finish(next, today)
        }
        Command::NavigateMonth { delta } => {
            require_step(session, WizardStep::SelectDateTime, command_name)?;

            let (year, month) = session.visible_month;
            let mut next: Session = session.clone();
            next.visible_month = shift_month(year, month, delta)?;
            finish(next, today)
        }
        Command::SelectDate { date } => {
            require_step(session, WizardStep::SelectDateTime, command_name)?;
            if !is_date_selectable(date, today, &session.context.window) {
                return Err(CoreError::DomainViolation(DomainError::DateNotSelectable {
                    date,
                }));
            }

            let mut next: Session = session.clone();
            next.selection.selected_date = Some(date);
            finish(next, today)
        }
        Command::SelectTimeSlot { slot } => {
            require_step(session, WizardStep::SelectDateTime, command_name)?;
            if session.selection.selected_date.is_none() {
                return Err(CoreError::NoDateSelected);
            }

            let offered: Vec<TimeSlot> =
                selectable_time_slots(session.selection.tier, &session.context.window);
            if !offered.contains(&slot) {
                return Err(CoreError::DomainViolation(DomainError::SlotNotAvailable {
                    slot: slot.value(),
                }));
            }

            let mut next: Session = session.clone();
            next.selection.selected_slot = Some(slot);
            finish(next, today)
        }
        Command::AdvanceStep => {
            let to: WizardStep = match session.step {
                WizardStep::SelectOptions => WizardStep::SelectDateTime,
                WizardStep::SelectDateTime => WizardStep::EnterDetails,
                step => {
                    return Err(CoreError::CommandNotAllowed {
                        step,
                        command: command_name,
                    });
                }
            };
            if !session.step.can_transition_to(to) {
                return Err(CoreError::StepTransitionNotAllowed {
                    from: session.step,
                    to,
                });
            }
            if to == WizardStep::EnterDetails {
                if session.selection.selected_date.is_none() {
                    return Err(CoreError::IncompleteSelection { missing: "a date" });
                }
                if session.selection.selected_slot.is_none() {
                    return Err(CoreError::IncompleteSelection {
                        missing: "a time slot",
                    });
                }
            }

            let mut next: Session = session.clone();
            next.step = to;
            finish(next, today)
        }
        Command::RetreatStep => {
            let Some(to) = session.step.previous() else {
                return Err(CoreError::CommandNotAllowed {
                    step: session.step,
                    command: command_name,
                });
            };

            let mut next: Session = session.clone();
            next.step = to;
            finish(next, today)
        }
        Command::UpdateContactDetails { details } => {
            require_step(session, WizardStep::EnterDetails, command_name)?;

            let mut next: Session = session.clone();
            next.contact = details;
            finish(next, today)
        }
        Command::Submit => {
            require_step(session, WizardStep::EnterDetails, command_name)?;

            // A failing field never blocks the others; all failures are
            // surfaced together and the step stays put.
            validate_contact_details(&session.contact, phones)
                .map_err(CoreError::ValidationFailed)?;

            let mut next: Session = session.clone();
            next.step = WizardStep::Submitted;
            tracing::info!(
                title = %next.selection.title(),
                "booking submitted; one notification attempt follows"
            );
            finish(next, today)
        }
    }
}

/// Rejects a command issued outside its wizard step.
fn require_step(
    session: &Session,
    expected: WizardStep,
    command: &'static str,
) -> Result<(), CoreError> {
    if session.step == expected {
        return Ok(());
    }
    Err(CoreError::CommandNotAllowed {
        step: session.step,
        command,
    })
}

/// Recomputes the derived view and wraps up the transition.
fn finish(new_session: Session, today: NaiveDate) -> Result<TransitionResult, CoreError> {
    let view = new_session.view(today)?;
    Ok(TransitionResult { new_session, view })
}

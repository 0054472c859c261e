// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    AcceptAllPhones, RejectAllPhones, complete_contact, create_test_session, date,
    session_at_datetime_step, session_at_details_step, step, today,
};
use crate::{Command, CoreError, Session, TransitionResult, WizardStep, apply};
use ski_book_domain::{ContactField, DomainError, LessonTier, Sport, TimeSlot};

#[test]
fn test_select_sport_updates_selection_and_title() {
    let session: Session = create_test_session();

    let result: TransitionResult = apply(
        &session,
        Command::SelectSport {
            sport: Sport::Snowboard,
        },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();

    assert_eq!(result.new_session.selection.sport, Sport::Snowboard);
    assert_eq!(result.view.booking_title, "2 Hours Snowboard Lesson");
}

#[test]
fn test_quote_recomputed_on_every_option_change() {
    let session: Session = create_test_session();

    let result: TransitionResult = apply(
        &session,
        Command::SetParticipants { count: 3 },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();
    assert_eq!(result.view.quote.total, 180);

    let result: TransitionResult = apply(
        &result.new_session,
        Command::SetDays { count: 5 },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();
    assert_eq!(result.view.quote.total, 864);
    assert_eq!(result.view.quote.deposit, 173);
    assert_eq!(result.view.quote.remaining, 691);
}

#[test]
fn test_zero_counts_rejected_defensively() {
    let session: Session = create_test_session();

    let result = apply(
        &session,
        Command::SetParticipants { count: 0 },
        today(),
        &AcceptAllPhones,
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidParticipantCount { count: 0 }
        ))
    );

    let result = apply(
        &session,
        Command::SetDays { count: 0 },
        today(),
        &AcceptAllPhones,
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDayCount {
            count: 0
        }))
    );
}

#[test]
fn test_select_date_accepts_selectable_day() {
    let session: Session = session_at_datetime_step();

    let result: TransitionResult = apply(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 12),
        },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();

    assert_eq!(
        result.new_session.selection.selected_date,
        Some(date(2026, 1, 12))
    );

    let selected_cells: usize = result
        .view
        .grid
        .cells
        .iter()
        .filter(|cell| cell.selected)
        .count();
    assert_eq!(selected_cells, 1);
}

#[test]
fn test_select_date_rejects_past_day() {
    let session: Session = session_at_datetime_step();

    let result = apply(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 9),
        },
        today(),
        &AcceptAllPhones,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DateNotSelectable {
            date: date(2026, 1, 9)
        }))
    );
}

#[test]
fn test_select_date_rejects_day_outside_window() {
    let session: Session = session_at_datetime_step();

    let result = apply(
        &session,
        Command::SelectDate {
            date: date(2026, 5, 1),
        },
        today(),
        &AcceptAllPhones,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::DateNotSelectable { .. }
        ))
    ));
}

#[test]
fn test_time_slot_requires_a_date_first() {
    let session: Session = session_at_datetime_step();

    let result = apply(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(10),
        },
        today(),
        &AcceptAllPhones,
    );

    assert_eq!(result, Err(CoreError::NoDateSelected));
}

#[test]
fn test_time_slot_must_be_offered_for_the_tier() {
    let session: Session = session_at_datetime_step();
    let session: Session = step(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 12),
        },
    );

    // 16:00 would end a two-hour lesson at 18:00, past close
    let result = apply(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(16),
        },
        today(),
        &AcceptAllPhones,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::SlotNotAvailable {
            slot: String::from("16:00")
        }))
    );
}

#[test]
fn test_navigate_month_shifts_the_grid() {
    let session: Session = session_at_datetime_step();
    assert_eq!(session.visible_month, (2026, 1));

    let result: TransitionResult = apply(
        &session,
        Command::NavigateMonth { delta: 1 },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();

    assert_eq!(result.new_session.visible_month, (2026, 2));
    assert_eq!(result.view.grid.title, "February 2026");

    let result: TransitionResult = apply(
        &result.new_session,
        Command::NavigateMonth { delta: -2 },
        today(),
        &AcceptAllPhones,
    )
    .unwrap();

    assert_eq!(result.new_session.visible_month, (2025, 12));
}

#[test]
fn test_advance_to_details_requires_date_and_slot() {
    let session: Session = session_at_datetime_step();

    let result = apply(&session, Command::AdvanceStep, today(), &AcceptAllPhones);
    assert_eq!(
        result,
        Err(CoreError::IncompleteSelection { missing: "a date" })
    );

    let session: Session = step(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 12),
        },
    );
    let result = apply(&session, Command::AdvanceStep, today(), &AcceptAllPhones);
    assert_eq!(
        result,
        Err(CoreError::IncompleteSelection {
            missing: "a time slot"
        })
    );

    let session: Session = step(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(10),
        },
    );
    let session: Session = step(&session, Command::AdvanceStep);
    assert_eq!(session.step, WizardStep::EnterDetails);
}

#[test]
fn test_tier_change_drops_slot_the_new_tier_does_not_offer() {
    // Pick the last two-hour slot, walk back, and switch to three hours:
    // 15:00 is no longer offered, so the selection must drop it.
    let session: Session = session_at_datetime_step();
    let session: Session = step(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 12),
        },
    );
    let session: Session = step(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(15),
        },
    );
    let session: Session = step(&session, Command::RetreatStep);

    let session: Session = step(
        &session,
        Command::SelectTier {
            tier: LessonTier::ThreeHour,
        },
    );

    assert_eq!(session.selection.selected_slot, None);
    assert_eq!(session.selection.selected_date, Some(date(2026, 1, 12)));
}

#[test]
fn test_tier_change_keeps_slot_still_offered() {
    let session: Session = session_at_datetime_step();
    let session: Session = step(
        &session,
        Command::SelectDate {
            date: date(2026, 1, 12),
        },
    );
    let session: Session = step(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(12),
        },
    );
    let session: Session = step(&session, Command::RetreatStep);

    let session: Session = step(
        &session,
        Command::SelectTier {
            tier: LessonTier::ThreeHour,
        },
    );

    assert_eq!(
        session.selection.selected_slot,
        Some(TimeSlot::hourly(12))
    );
}

#[test]
fn test_submit_with_invalid_contact_reports_every_field() {
    let session: Session = session_at_details_step();

    // Contact details were never entered
    let result = apply(&session, Command::Submit, today(), &AcceptAllPhones);

    let Err(CoreError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    let fields: Vec<ContactField> = errors.iter().map(|error| error.field).collect();
    assert_eq!(
        fields,
        vec![
            ContactField::FullName,
            ContactField::Phone,
            ContactField::Email,
            ContactField::SkillLevel,
        ]
    );
}

#[test]
fn test_submit_validation_failure_leaves_step_unchanged() {
    let session: Session = session_at_details_step();
    let session: Session = step(
        &session,
        Command::UpdateContactDetails {
            details: complete_contact(),
        },
    );

    // The phone widget collaborator decides phone validity
    let result = apply(&session, Command::Submit, today(), &RejectAllPhones);

    let Err(CoreError::ValidationFailed(errors)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, ContactField::Phone);
    assert_eq!(session.step, WizardStep::EnterDetails);
}

#[test]
fn test_submit_with_valid_contact_finalizes_the_booking() {
    let session: Session = session_at_details_step();
    let session: Session = step(
        &session,
        Command::UpdateContactDetails {
            details: complete_contact(),
        },
    );

    let session: Session = step(&session, Command::Submit);

    assert_eq!(session.step, WizardStep::Submitted);
}

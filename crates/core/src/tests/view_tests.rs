// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_session, date, session_at_datetime_step, step, today};
use crate::{Command, Session, SessionView};
use ski_book_domain::{GRID_CELLS, LessonTier, TimeSlot};

#[test]
fn test_initial_view_uses_the_default_selection() {
    let session: Session = create_test_session();
    let view: SessionView = session.view(today()).unwrap();

    assert_eq!(view.quote.total, 100);
    assert_eq!(view.quote.deposit, 20);
    assert_eq!(view.quote.remaining, 80);
    assert_eq!(view.quote.discount_text, "");
    assert_eq!(view.booking_title, "2 Hours Ski Lesson");
    assert_eq!(view.date_time_summary, None);
}

#[test]
fn test_title_suffixes_appear_only_above_one() {
    let session: Session = create_test_session();
    let session: Session = step(&session, Command::SetParticipants { count: 3 });
    let session: Session = step(&session, Command::SetDays { count: 5 });

    let view: SessionView = session.view(today()).unwrap();

    assert_eq!(view.booking_title, "2 Hours Ski Lesson with 3 Persons x 5 Days");
}

#[test]
fn test_grid_is_always_full_size() {
    let session: Session = create_test_session();
    let view: SessionView = session.view(today()).unwrap();

    assert_eq!(view.grid.cells.len(), GRID_CELLS);
    assert_eq!(view.grid.title, "January 2026");
}

#[test]
fn test_slot_list_follows_the_tier() {
    let session: Session = create_test_session();
    let view: SessionView = session.view(today()).unwrap();
    assert_eq!(view.slots.len(), 6); // 10:00 through 15:00

    let session: Session = step(
        &session,
        Command::SelectTier {
            tier: LessonTier::FullDay,
        },
    );
    let view: SessionView = session.view(today()).unwrap();
    assert_eq!(view.slots.len(), 1);
    assert!(view.slots[0].is_full_day());
}

#[test]
fn test_date_time_summary_appears_once_both_are_chosen() {
    let session: Session = session_at_datetime_step();
    let session: Session = step(
        &session,
        Command::SelectDate {
            date: date(2026, 2, 2),
        },
    );

    let view: SessionView = session.view(today()).unwrap();
    assert_eq!(view.date_time_summary, None);

    let session: Session = step(
        &session,
        Command::SelectTimeSlot {
            slot: TimeSlot::hourly(10),
        },
    );
    let view: SessionView = session.view(today()).unwrap();

    // Day numbers are not zero-padded
    assert_eq!(
        view.date_time_summary.as_deref(),
        Some("Monday, February 2, 2026 at 10:00")
    );
}

#[test]
fn test_calendar_opens_on_window_start_before_the_season() {
    let session: Session = Session::new(
        crate::SessionContext::default(),
        date(2025, 10, 1),
    );

    assert_eq!(session.visible_month, (2025, 12));

    let view: SessionView = session.view(date(2025, 10, 1)).unwrap();
    assert_eq!(view.grid.title, "December 2025");
}

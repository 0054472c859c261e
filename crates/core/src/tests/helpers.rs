// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Session, SessionContext, TransitionResult, apply};
use chrono::NaiveDate;
use ski_book_domain::{ContactDetails, PhoneValidator, SkillLevel, TimeSlot};

/// Phone validator double that accepts everything.
pub struct AcceptAllPhones;

impl PhoneValidator for AcceptAllPhones {
    fn is_valid(&self, _raw: &str) -> bool {
        true
    }

    fn normalize(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

/// Phone validator double that rejects everything.
pub struct RejectAllPhones;

impl PhoneValidator for RejectAllPhones {
    fn is_valid(&self, _raw: &str) -> bool {
        false
    }

    fn normalize(&self, _raw: &str) -> Option<String> {
        None
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A mid-season day well inside the default booking window.
pub fn today() -> NaiveDate {
    date(2026, 1, 10)
}

pub fn create_test_session() -> Session {
    Session::new(SessionContext::default(), today())
}

/// Applies a command that is expected to succeed.
pub fn step(session: &Session, command: Command) -> Session {
    let result: TransitionResult = apply(session, command, today(), &AcceptAllPhones).unwrap();
    result.new_session
}

/// A session advanced to the date/time step.
pub fn session_at_datetime_step() -> Session {
    step(&create_test_session(), Command::AdvanceStep)
}

/// A session advanced to the contact-details step, with a date and slot
/// already chosen.
pub fn session_at_details_step() -> Session {
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
            slot: TimeSlot::hourly(10),
        },
    );
    step(&session, Command::AdvanceStep)
}

pub fn complete_contact() -> ContactDetails {
    ContactDetails::new(
        String::from("Nino Beridze"),
        String::from("+995599123456"),
        String::from("nino@example.com"),
        Some(SkillLevel::Intermediate),
        String::from("Second week on skis"),
    )
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use ski_book_domain::{ContactDetails, LessonTier, Sport, TimeSlot};

/// A command represents user intent as data only.
///
/// Commands are the only way to change a booking session. Each command is
/// applied by [`crate::apply`], which rejects commands that do not belong
/// to the session's current wizard step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the lesson's sport tab.
    SelectSport {
        /// The sport to book.
        sport: Sport,
    },
    /// Switch the lesson duration tier.
    SelectTier {
        /// The duration tier.
        tier: LessonTier,
    },
    /// Set the number of participants.
    SetParticipants {
        /// The participant count (at least 1).
        count: u8,
    },
    /// Set the number of lesson days.
    SetDays {
        /// The day count (at least 1).
        count: u8,
    },
    /// Move the visible calendar month forward or backward.
    NavigateMonth {
        /// Months to move by; negative values go backward.
        delta: i32,
    },
    /// Select a lesson start date from the calendar.
    SelectDate {
        /// The clicked date.
        date: NaiveDate,
    },
    /// Select a starting time slot for the chosen date.
    SelectTimeSlot {
        /// The clicked slot.
        slot: TimeSlot,
    },
    /// Move forward to the next wizard step.
    AdvanceStep,
    /// Move back to the previous wizard step.
    RetreatStep,
    /// Replace the contact details entered on the personal-info step.
    UpdateContactDetails {
        /// The entered details.
        details: ContactDetails,
    },
    /// Validate the contact details and finalize the booking.
    Submit,
}

impl Command {
    /// Returns the command's name for diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectSport { .. } => "SelectSport",
            Self::SelectTier { .. } => "SelectTier",
            Self::SetParticipants { .. } => "SetParticipants",
            Self::SetDays { .. } => "SetDays",
            Self::NavigateMonth { .. } => "NavigateMonth",
            Self::SelectDate { .. } => "SelectDate",
            Self::SelectTimeSlot { .. } => "SelectTimeSlot",
            Self::AdvanceStep => "AdvanceStep",
            Self::RetreatStep => "RetreatStep",
            Self::UpdateContactDetails { .. } => "UpdateContactDetails",
            Self::Submit => "Submit",
        }
    }
}

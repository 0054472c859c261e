// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Lesson tier string is not a known tier.
    UnknownTier(String),
    /// Sport string is not a known sport.
    UnknownSport(String),
    /// Skill level string is not a known skill level.
    UnknownSkillLevel(String),
    /// Participant count is out of range.
    InvalidParticipantCount {
        /// The invalid count value.
        count: u8,
    },
    /// Day count is out of range.
    InvalidDayCount {
        /// The invalid count value.
        count: u8,
    },
    /// Booking window configuration is inconsistent.
    InvalidBookingWindow {
        /// Description of the validation error.
        reason: String,
    },
    /// Discount schedule configuration is inconsistent.
    InvalidDiscountSchedule {
        /// Description of the validation error.
        reason: String,
    },
    /// Calendar month is not in the range 1-12.
    InvalidMonth {
        /// The invalid month value.
        month: u32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Date cannot be selected for a lesson.
    DateNotSelectable {
        /// The rejected date.
        date: NaiveDate,
    },
    /// Time slot is not offered for the selected tier and window.
    SlotNotAvailable {
        /// The rejected slot in "HH:00" form.
        slot: String,
    },
    /// Full name is empty.
    EmptyFullName,
    /// Phone number did not pass the phone validator.
    InvalidPhoneNumber,
    /// Email address does not match the required shape.
    InvalidEmail(String),
    /// No skill level was selected.
    MissingSkillLevel,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTier(value) => write!(f, "Unknown lesson tier: '{value}'"),
            Self::UnknownSport(value) => write!(f, "Unknown sport: '{value}'"),
            Self::UnknownSkillLevel(value) => write!(f, "Unknown skill level: '{value}'"),
            Self::InvalidParticipantCount { count } => {
                write!(f, "Invalid participant count: {count}. Must be at least 1")
            }
            Self::InvalidDayCount { count } => {
                write!(f, "Invalid day count: {count}. Must be at least 1")
            }
            Self::InvalidBookingWindow { reason } => {
                write!(f, "Invalid booking window: {reason}")
            }
            Self::InvalidDiscountSchedule { reason } => {
                write!(f, "Invalid discount schedule: {reason}")
            }
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateNotSelectable { date } => {
                write!(f, "Date {date} cannot be selected for a lesson")
            }
            Self::SlotNotAvailable { slot } => {
                write!(f, "Time slot {slot} is not offered for this lesson")
            }
            Self::EmptyFullName => write!(f, "Full name cannot be empty"),
            Self::InvalidPhoneNumber => write!(f, "Phone number is not valid"),
            Self::InvalidEmail(value) => write!(f, "Invalid email address: '{value}'"),
            Self::MissingSkillLevel => write!(f, "A skill level must be selected"),
        }
    }
}

impl std::error::Error for DomainError {}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the notification boundary.

use ski_book_domain::DomainError;
use thiserror::Error;

/// Notification boundary errors.
///
/// These are distinct from domain/core errors: a send rejection is an
/// operational event answered by the mailto fallback, never a hard
/// failure of the booking itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotifyError {
    /// The outbound send was rejected by the delivery collaborator.
    #[error("Notification send rejected: {reason}")]
    SendRejected {
        /// The collaborator's failure reason.
        reason: String,
    },

    /// The configured resort timezone is not a known IANA timezone.
    #[error("Invalid resort timezone: '{0}'")]
    InvalidTimezone(String),

    /// The lesson's wall-clock start cannot be resolved in the resort
    /// timezone (ambiguous or non-existent due to DST).
    #[error("Could not resolve local time {datetime} in timezone {timezone}")]
    UnresolvableLocalTime {
        /// The wall-clock datetime that failed to resolve.
        datetime: String,
        /// The timezone it was resolved against.
        timezone: String,
    },

    /// The slot start hour does not form a valid time of day.
    #[error("Invalid lesson start hour: {hour}")]
    InvalidStartHour {
        /// The offending hour.
        hour: u8,
    },

    /// The session is missing a piece the message needs.
    #[error("Booking is incomplete: missing {missing}")]
    IncompleteBooking {
        /// What is missing.
        missing: &'static str,
    },

    /// The phone number could not be normalized for the message.
    #[error("Phone number could not be normalized")]
    UnnormalizablePhoneNumber,

    /// A domain rule failed while deriving the final quote.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

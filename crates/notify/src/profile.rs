// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The resort's fixed notification profile.
///
/// Immutable, injected at construction. The timezone is an IANA name and
/// is parsed at use time; a bad name surfaces as
/// [`crate::NotifyError::InvalidTimezone`] rather than a panic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResortProfile {
    /// Event location string, e.g. "Gudauri Ski Resort".
    location: String,
    /// IANA timezone the resort operates in, e.g. "Asia/Tbilisi".
    timezone: String,
    /// Inbox booking notifications are addressed to.
    booking_inbox: String,
}

impl ResortProfile {
    /// Creates a new `ResortProfile`.
    ///
    /// # Arguments
    ///
    /// * `location` - Event location string
    /// * `timezone` - IANA timezone the resort operates in
    /// * `booking_inbox` - Inbox booking notifications are addressed to
    #[must_use]
    pub const fn new(location: String, timezone: String, booking_inbox: String) -> Self {
        Self {
            location,
            timezone,
            booking_inbox,
        }
    }

    /// Returns the event location string.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the IANA timezone name.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Returns the booking inbox address.
    #[must_use]
    pub fn booking_inbox(&self) -> &str {
        &self.booking_inbox
    }
}

impl Default for ResortProfile {
    fn default() -> Self {
        Self::new(
            String::from("Gudauri Ski Resort"),
            String::from("Asia/Tbilisi"),
            String::from("info@skischool.ge"),
        )
    }
}

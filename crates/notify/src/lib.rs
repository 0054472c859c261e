// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod encode;
mod error;
mod event_link;
mod message;
mod profile;
mod sender;

pub use error::NotifyError;
pub use event_link::event_url;
pub use message::{BookingMessage, build_booking_message, mailto_url};
pub use profile::ResortProfile;
pub use sender::{DeliveryOutcome, NotificationSender, dispatch_with_fallback};

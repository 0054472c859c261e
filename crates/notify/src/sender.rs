// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Notification dispatch with a local mail-composition fallback.
//!
//! Delivery is asynchronous with two outcomes. A failed send is not
//! retried and carries no timeout; it is logged and answered with a
//! mailto link carrying the same subject and body, so the booking
//! detail is never lost when the delivery collaborator is down.

use crate::error::NotifyError;
use crate::message::{BookingMessage, mailto_url};
use std::future::Future;
use tracing::{info, warn};

/// The delivery collaborator seam.
///
/// Implementations wrap an outbound email service. The engine only
/// requires a single awaitable attempt resolving to success or failure.
pub trait NotificationSender {
    /// Attempts to deliver the booking message once.
    fn send(&self, message: &BookingMessage)
    -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// How a booking notification ended up reaching the resort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The collaborator accepted the message.
    Delivered,
    /// The send failed; the guest is handed a mailto link instead.
    FellBack {
        /// Mailto URL carrying the same subject and body.
        mailto: String,
    },
}

/// Makes exactly one delivery attempt, falling back to a mailto link.
///
/// The failure is reported to the operational log and never escalated:
/// a booking whose notification could not be sent still completes, only
/// the delivery mechanism changes.
///
/// # Arguments
///
/// * `sender` - The delivery collaborator
/// * `message` - The booking message to deliver
pub async fn dispatch_with_fallback<S: NotificationSender>(
    sender: &S,
    message: &BookingMessage,
) -> DeliveryOutcome {
    match sender.send(message).await {
        Ok(()) => {
            info!(to = %message.to, "booking notification delivered");
            DeliveryOutcome::Delivered
        }
        Err(err) => {
            warn!(
                to = %message.to,
                error = %err,
                "booking notification failed; falling back to local mail composition"
            );
            DeliveryOutcome::FellBack {
                mailto: mailto_url(message),
            }
        }
    }
}

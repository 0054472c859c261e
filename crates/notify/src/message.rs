// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking message construction.
//!
//! The booking message is the payload handed to the delivery
//! collaborator: destination inbox, subject line, plain-text body, and
//! the sender's own contact coordinates. The body embeds the final
//! quote, a WhatsApp link for the guest's phone, and the calendar-event
//! URL.

use crate::encode::component_encode;
use crate::error::NotifyError;
use crate::event_link::event_url;
use crate::profile::ResortProfile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ski_book::Session;
use ski_book_domain::{
    FULL_DAY_EVENT_HOURS, PhoneValidator, PriceQuote, SkillLevel, TimeSlot, compute_price_quote,
};

/// The payload handed to the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingMessage {
    /// Destination inbox.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// The guest's name, used as the sender name.
    pub from_name: String,
    /// The guest's email, used as the reply address.
    pub from_email: String,
    /// The guest's normalized international phone number.
    pub phone: String,
}

/// Builds the booking message for a completed session.
///
/// The session must carry a full selection (date and slot) and validated
/// contact details; submission guarantees both, and this function checks
/// them again defensively.
///
/// # Arguments
///
/// * `session` - The submitted booking session
/// * `resort` - The resort profile (inbox, location, timezone)
/// * `phones` - The phone input collaborator, used to normalize the
///   guest's number
///
/// # Returns
///
/// The [`BookingMessage`] ready for one delivery attempt.
///
/// # Errors
///
/// Returns an error if:
/// - The selection is missing its date, slot, or skill level
/// - The phone number cannot be normalized
/// - The quote or calendar link cannot be derived
pub fn build_booking_message(
    session: &Session,
    resort: &ResortProfile,
    phones: &dyn PhoneValidator,
) -> Result<BookingMessage, NotifyError> {
    let selection = &session.selection;
    let contact = &session.contact;

    let start_date: NaiveDate = selection
        .selected_date
        .ok_or(NotifyError::IncompleteBooking { missing: "a date" })?;
    let slot: TimeSlot = selection
        .selected_slot
        .ok_or(NotifyError::IncompleteBooking {
            missing: "a time slot",
        })?;
    let skill_level: SkillLevel =
        contact
            .skill_level
            .ok_or(NotifyError::IncompleteBooking {
                missing: "a skill level",
            })?;
    let phone: String = phones
        .normalize(&contact.phone)
        .ok_or(NotifyError::UnnormalizablePhoneNumber)?;

    let quote: PriceQuote = compute_price_quote(
        &session.context.pricing,
        &session.context.discounts,
        selection.tier,
        selection.participants,
        selection.days,
    )?;

    let headline: String = booking_headline(session);
    let date_time: String = selection
        .date_time_summary()
        .ok_or(NotifyError::IncompleteBooking {
            missing: "a date and time",
        })?;

    let additional_info: &str = if contact.additional_info.is_empty() {
        "None"
    } else {
        &contact.additional_info
    };

    let details: String = format!(
        "Full Name: {}\n\
         Phone (WhatsApp): {phone}\n\
         Email: {}\n\
         Skill level: {skill_level}\n\
         Additional information: {additional_info}\n\
         \n\
         Total amount: ${}\n\
         20% deposit: ${}\n\
         Remaining balance: ${}",
        contact.full_name, contact.email, quote.total, quote.deposit, quote.remaining,
    );

    let duration_hours: u8 = selection
        .tier
        .duration_hours()
        .unwrap_or(FULL_DAY_EVENT_HOURS);
    let calendar_link: String = event_url(
        &headline,
        &details,
        start_date,
        slot.start_hour(),
        duration_hours,
        selection.days,
        resort,
    )?;

    let whatsapp: String = format!("https://wa.me/{}", phone.replace('+', ""));
    let body: String = format!(
        "{headline}\n\
         {date_time}\n\
         \n\
         Full Name: {}\n\
         Phone (WhatsApp): {whatsapp}\n\
         Email: {}\n\
         Skill level: {skill_level}\n\
         Additional information: {additional_info}\n\
         \n\
         Total amount: ${}\n\
         20% deposit: ${}\n\
         Remaining balance: ${}\n\
         \n\
         Google Calendar Link: {calendar_link}",
        contact.full_name, contact.email, quote.total, quote.deposit, quote.remaining,
    );

    Ok(BookingMessage {
        to: resort.booking_inbox().to_string(),
        subject: format!("Booking: {headline}"),
        body,
        from_name: contact.full_name.clone(),
        from_email: contact.email.clone(),
        phone,
    })
}

/// Builds the mailto fallback link carrying the same subject and body.
#[must_use]
pub fn mailto_url(message: &BookingMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        message.to,
        component_encode(&message.subject),
        component_encode(&message.body)
    )
}

/// The one-line booking headline used for the subject, the body's first
/// line, and the calendar-event title, e.g.
/// "2 Hours Ski Lesson with 2 Persons x 3 days".
fn booking_headline(session: &Session) -> String {
    let selection = &session.selection;
    let participants_text: String = if selection.participants == 1 {
        String::from("1 Person")
    } else {
        format!("{} Persons", selection.participants)
    };
    format!(
        "{} {} Lesson with {participants_text} x {} days",
        selection.tier.label(),
        selection.sport.label(),
        selection.days,
    )
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use chrono::NaiveDate;
use ski_book_domain::{
    BookingWindow, ContactDetails, DiscountSchedule, LessonTier, MonthGrid, PriceQuote,
    PricingConfig, Sport, TimeSlot, build_month_grid, compute_price_quote, initial_month,
    selectable_time_slots,
};

/// Represents the wizard step a booking session is in.
///
/// Steps govern which commands are accepted: option changes happen in
/// `SelectOptions`, calendar interaction in `SelectDateTime`, contact
/// entry and submission in `EnterDetails`. A `Submitted` session accepts
/// nothing further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Choosing sport, tier, participants, and days.
    #[default]
    SelectOptions,
    /// Choosing a date and a time slot.
    SelectDateTime,
    /// Entering contact details.
    EnterDetails,
    /// Booking finalized; exactly one notification attempt follows.
    Submitted,
}

impl WizardStep {
    /// Converts this step to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SelectOptions => "SelectOptions",
            Self::SelectDateTime => "SelectDateTime",
            Self::EnterDetails => "EnterDetails",
            Self::Submitted => "Submitted",
        }
    }

    /// Checks if a forward transition from this step to another is valid.
    ///
    /// Valid forward transitions are:
    /// - `SelectOptions` → `SelectDateTime`
    /// - `SelectDateTime` → `EnterDetails`
    /// - `EnterDetails` → `Submitted`
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::SelectOptions, Self::SelectDateTime)
                | (Self::SelectDateTime, Self::EnterDetails)
                | (Self::EnterDetails, Self::Submitted)
        )
    }

    /// Returns the step a `RetreatStep` command goes back to, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::SelectOptions | Self::Submitted => None,
            Self::SelectDateTime => Some(Self::SelectOptions),
            Self::EnterDetails => Some(Self::SelectDateTime),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The immutable configuration a session is constructed with.
///
/// This replaces module-level configuration: prices, discounts, and the
/// booking window are injected once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    /// Base prices and the extra-participant surcharge.
    pub pricing: PricingConfig,
    /// Per-day discount rules.
    pub discounts: DiscountSchedule,
    /// Bookable date range and operating hours.
    pub window: BookingWindow,
}

impl SessionContext {
    /// Creates a new `SessionContext`.
    ///
    /// # Arguments
    ///
    /// * `pricing` - Base prices and surcharge
    /// * `discounts` - Per-day discount rules
    /// * `window` - Bookable date range and operating hours
    #[must_use]
    pub const fn new(
        pricing: PricingConfig,
        discounts: DiscountSchedule,
        window: BookingWindow,
    ) -> Self {
        Self {
            pricing,
            discounts,
            window,
        }
    }
}

/// The user's current lesson selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    /// The sport to book.
    pub sport: Sport,
    /// The lesson duration tier.
    pub tier: LessonTier,
    /// Number of participants (at least 1).
    pub participants: u8,
    /// Number of lesson days (at least 1).
    pub days: u8,
    /// The selected start date, once chosen.
    pub selected_date: Option<NaiveDate>,
    /// The selected start slot, once chosen.
    pub selected_slot: Option<TimeSlot>,
}

impl BookingSelection {
    /// Builds the booking title shown on the personal-info step, e.g.
    /// "2 Hours Ski Lesson with 3 Persons x 5 Days".
    ///
    /// Participant and day suffixes are omitted for a single participant
    /// or a single day.
    #[must_use]
    pub fn title(&self) -> String {
        let participants_text: String = if self.participants == 1 {
            String::new()
        } else {
            format!(" with {} Persons", self.participants)
        };
        let days_text: String = if self.days == 1 {
            String::new()
        } else {
            format!(" x {} Days", self.days)
        };
        format!(
            "{} {} Lesson{participants_text}{days_text}",
            self.tier.label(),
            self.sport.label()
        )
    }

    /// Builds the selected date-time summary, e.g.
    /// "Monday, January 5, 2026 at 10:00".
    ///
    /// `None` until both a date and a slot are chosen.
    #[must_use]
    pub fn date_time_summary(&self) -> Option<String> {
        match (self.selected_date, self.selected_slot) {
            (Some(date), Some(slot)) => Some(format!(
                "{} at {}",
                date.format("%A, %B %-d, %Y"),
                slot.value()
            )),
            _ => None,
        }
    }
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            sport: Sport::Ski,
            tier: LessonTier::TwoHour,
            participants: 1,
            days: 1,
            selected_date: None,
            selected_slot: None,
        }
    }
}

/// A single booking session, from first option change to submission.
///
/// Sessions live in memory only: one is created when the form opens and
/// discarded after submission or abandonment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The immutable configuration injected at construction.
    pub context: SessionContext,
    /// The user's current lesson selection.
    pub selection: BookingSelection,
    /// Contact details from the personal-info step.
    pub contact: ContactDetails,
    /// The wizard step the session is in.
    pub step: WizardStep,
    /// The (year, month) the calendar is showing.
    pub visible_month: (i32, u32),
}

impl Session {
    /// Creates a new session at the first wizard step.
    ///
    /// The calendar opens on today's month, or on the booking window's
    /// first month when the season has not started yet.
    ///
    /// # Arguments
    ///
    /// * `context` - The immutable session configuration
    /// * `today` - The current calendar day
    #[must_use]
    pub fn new(context: SessionContext, today: NaiveDate) -> Self {
        let visible_month: (i32, u32) = initial_month(today, &context.window);
        Self {
            context,
            selection: BookingSelection::default(),
            contact: ContactDetails::default(),
            step: WizardStep::default(),
            visible_month,
        }
    }

    /// Recomputes the full derived view of this session.
    ///
    /// Everything the UI renders — quote, month grid, slot list, titles —
    /// is derived here from scratch. Nothing is cached between commands.
    ///
    /// # Arguments
    ///
    /// * `today` - The current calendar day
    ///
    /// # Errors
    ///
    /// Returns an error if the selection violates a domain rule or the
    /// visible month cannot be laid out.
    pub fn view(&self, today: NaiveDate) -> Result<SessionView, CoreError> {
        let quote: PriceQuote = compute_price_quote(
            &self.context.pricing,
            &self.context.discounts,
            self.selection.tier,
            self.selection.participants,
            self.selection.days,
        )?;

        let (year, month) = self.visible_month;
        let grid: MonthGrid = build_month_grid(
            year,
            month,
            today,
            &self.context.window,
            self.selection.selected_date,
        )?;

        let slots: Vec<TimeSlot> = selectable_time_slots(self.selection.tier, &self.context.window);

        Ok(SessionView {
            quote,
            grid,
            slots,
            booking_title: self.selection.title(),
            date_time_summary: self.selection.date_time_summary(),
        })
    }
}

/// Everything the UI renders for a session, recomputed after every
/// command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    /// The current price quote.
    pub quote: PriceQuote,
    /// The visible calendar month, laid out.
    pub grid: MonthGrid,
    /// The selectable slots for the current tier.
    pub slots: Vec<TimeSlot>,
    /// The booking title for the current selection.
    pub booking_title: String,
    /// The selected date-time summary, once date and slot are chosen.
    pub date_time_summary: Option<String>,
}

/// The result of a successful command application.
///
/// Transitions are atomic: a command either succeeds completely or
/// leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new session after the command.
    pub new_session: Session,
    /// The derived view of the new session.
    pub view: SessionView,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price quote calculation for lesson bookings.
//!
//! This module computes the total, deposit, and remaining balance for a
//! booking from:
//! - Lesson tier base price
//! - Participant count (per-extra-participant surcharge)
//! - Day count (per-day tiered discount)
//!
//! ## Invariants
//!
//! - Discounts apply per day index, never retroactively to earlier days
//! - `total = deposit + remaining` for every valid input
//! - Quotes are recomputed from scratch on every input change; nothing is
//!   cached or mutated
//!
//! ## Usage
//!
//! This logic is used by:
//! - The booking session (to refresh the displayed quote on every change)
//! - Notification building (to embed final amounts in the booking message)

use crate::error::DomainError;
use crate::types::{DiscountSchedule, LessonTier, PricingConfig};
use serde::{Deserialize, Serialize};

/// Fraction of the total collected up front.
const DEPOSIT_RATE: f64 = 0.20;

/// A computed price quote for a booking.
///
/// Amounts are whole currency units. A quote is a derived value object;
/// it is never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Total price across all days.
    pub total: u32,
    /// Up-front deposit (20% of the total, rounded).
    pub deposit: u32,
    /// Balance remaining after the deposit (`total` - `deposit`).
    pub remaining: u32,
    /// Human discount message, empty when no day was discounted.
    pub discount_text: String,
    /// The highest discount percent applied to any day, 0 when none.
    pub max_discount_percent: u8,
}

/// Computes the price quote for a booking.
///
/// The per-day price is the tier base price plus the surcharge for each
/// participant beyond the first. Each day index is discounted per the
/// schedule's highest satisfied threshold, then the discounted days are
/// summed and rounded.
///
/// # Arguments
///
/// * `config` - Base prices and surcharge
/// * `schedule` - Per-day discount rules
/// * `tier` - The lesson duration tier
/// * `participants` - Number of participants (at least 1)
/// * `days` - Number of lesson days (at least 1)
///
/// # Returns
///
/// A [`PriceQuote`] with total, deposit, remaining balance, and discount
/// message.
///
/// # Errors
///
/// Returns an error if `participants` or `days` is 0. The UI clamps both
/// via sliders, but the calculator rejects out-of-range values itself.
///
/// # Example
///
/// ```text
/// base 100, surcharge 40, defaults: 3 participants for 5 days
/// price_per_day = 100 + 2 * 40 = 180
/// days 1-3 at 0%, days 4-5 at 10%: 540 + 324 = 864
/// total 864, deposit 173, remaining 691
/// ```
pub fn compute_price_quote(
    config: &PricingConfig,
    schedule: &DiscountSchedule,
    tier: LessonTier,
    participants: u8,
    days: u8,
) -> Result<PriceQuote, DomainError> {
    if participants < 1 {
        return Err(DomainError::InvalidParticipantCount {
            count: participants,
        });
    }
    if days < 1 {
        return Err(DomainError::InvalidDayCount { count: days });
    }

    let base_price: u32 = config.base_price(tier);
    let price_per_day: u32 =
        base_price + (u32::from(participants) - 1) * config.extra_participant_surcharge();

    let mut sum: f64 = 0.0;
    let mut max_discount: Option<(u8, &str)> = None;

    for day in 1..=days {
        let percent: u8 = match schedule.discount_for_day(day) {
            Some(rule) => {
                // Thresholds decrease down the schedule, so the discount
                // grows (or holds) as the day index grows.
                if max_discount.is_none_or(|(best, _)| rule.percent > best) {
                    max_discount = Some((rule.percent, rule.day_range_label.as_str()));
                }
                rule.percent
            }
            None => 0,
        };
        sum += f64::from(price_per_day) * (1.0 - f64::from(percent) / 100.0);
    }

    let total: u32 = round_currency(sum);
    let deposit: u32 = round_currency(f64::from(total) * DEPOSIT_RATE);
    let remaining: u32 = total - deposit;

    let (max_discount_percent, discount_text) = match max_discount {
        Some((percent, label)) => (
            percent,
            format!("You save {percent}% on days {label}"),
        ),
        None => (0, String::new()),
    };

    Ok(PriceQuote {
        total,
        deposit,
        remaining,
        discount_text,
        max_discount_percent,
    })
}

/// Rounds an amount to whole currency units, halves away from zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_currency(amount: f64) -> u32 {
    amount.round() as u32
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the sport a lesson is booked for.
///
/// Sports are fixed domain constants matching the booking form's tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sport {
    /// Ski lesson.
    #[default]
    #[serde(rename = "ski")]
    Ski,
    /// Snowboard lesson.
    #[serde(rename = "snowboard")]
    Snowboard,
}

impl Sport {
    /// Parses a sport from its form value.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse ("ski" or "snowboard")
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known sport.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "ski" => Ok(Self::Ski),
            "snowboard" => Ok(Self::Snowboard),
            _ => Err(DomainError::UnknownSport(s.to_string())),
        }
    }

    /// Returns the form value of this sport.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ski => "ski",
            Self::Snowboard => "snowboard",
        }
    }

    /// Returns the display label of this sport.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ski => "Ski",
            Self::Snowboard => "Snowboard",
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents the duration tier of a lesson.
///
/// Each tier carries a fixed base price in [`PricingConfig`]. The timed
/// tiers occupy a fixed number of hours; a full-day lesson occupies the
/// whole operating day and is offered as a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LessonTier {
    /// Two-hour lesson.
    #[default]
    #[serde(rename = "2")]
    TwoHour,
    /// Three-hour lesson.
    #[serde(rename = "3")]
    ThreeHour,
    /// Full-day lesson.
    #[serde(rename = "full")]
    FullDay,
}

impl LessonTier {
    /// Parses a lesson tier from its form value.
    ///
    /// Unknown tiers are rejected here, at the boundary, rather than at
    /// price lookup time.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse ("2", "3", or "full")
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known tier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "2" => Ok(Self::TwoHour),
            "3" => Ok(Self::ThreeHour),
            "full" => Ok(Self::FullDay),
            _ => Err(DomainError::UnknownTier(s.to_string())),
        }
    }

    /// Returns the form value of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TwoHour => "2",
            Self::ThreeHour => "3",
            Self::FullDay => "full",
        }
    }

    /// Returns the display label of this tier.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TwoHour => "2 Hours",
            Self::ThreeHour => "3 Hours",
            Self::FullDay => "Full Day",
        }
    }

    /// Returns the lesson length in hours for timed tiers.
    ///
    /// A full-day lesson has no fixed hour count here; it occupies the
    /// whole operating day and yields `None`.
    #[must_use]
    pub const fn duration_hours(&self) -> Option<u8> {
        match self {
            Self::TwoHour => Some(2),
            Self::ThreeHour => Some(3),
            Self::FullDay => None,
        }
    }
}

impl std::fmt::Display for LessonTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents a participant's self-reported skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    /// First-time or early learner.
    Beginner,
    /// Comfortable on blue runs.
    Intermediate,
    /// Comfortable on red and black runs.
    Advanced,
}

impl SkillLevel {
    /// Parses a skill level from its form value.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse ("beginner", "intermediate", or "advanced")
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known skill level.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(DomainError::UnknownSkillLevel(s.to_string())),
        }
    }

    /// Returns the display label of this skill level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Base prices per lesson tier plus the per-extra-participant surcharge.
///
/// Amounts are whole currency units. The configuration is immutable and
/// injected at session construction; there is no module-level state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Base price of a two-hour lesson.
    two_hour_price: u32,
    /// Base price of a three-hour lesson.
    three_hour_price: u32,
    /// Base price of a full-day lesson.
    full_day_price: u32,
    /// Surcharge added per participant beyond the first, per day.
    extra_participant_surcharge: u32,
}

impl PricingConfig {
    /// Creates a new `PricingConfig`.
    ///
    /// # Arguments
    ///
    /// * `two_hour_price` - Base price of a two-hour lesson
    /// * `three_hour_price` - Base price of a three-hour lesson
    /// * `full_day_price` - Base price of a full-day lesson
    /// * `extra_participant_surcharge` - Surcharge per extra participant per day
    #[must_use]
    pub const fn new(
        two_hour_price: u32,
        three_hour_price: u32,
        full_day_price: u32,
        extra_participant_surcharge: u32,
    ) -> Self {
        Self {
            two_hour_price,
            three_hour_price,
            full_day_price,
            extra_participant_surcharge,
        }
    }

    /// Returns the base price for a tier.
    ///
    /// The mapping is exhaustive over [`LessonTier`]; unknown tiers cannot
    /// reach this point because they are rejected at parse time.
    #[must_use]
    pub const fn base_price(&self, tier: LessonTier) -> u32 {
        match tier {
            LessonTier::TwoHour => self.two_hour_price,
            LessonTier::ThreeHour => self.three_hour_price,
            LessonTier::FullDay => self.full_day_price,
        }
    }

    /// Returns the surcharge per participant beyond the first, per day.
    #[must_use]
    pub const fn extra_participant_surcharge(&self) -> u32 {
        self.extra_participant_surcharge
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(100, 140, 250, 40)
    }
}

/// A single discount rule: bookings reaching `min_day` earn `percent` off
/// on that day and later days, until a higher rule takes over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRule {
    /// The 1-based day index from which this rule applies.
    pub min_day: u8,
    /// The discount percent (1-100).
    pub percent: u8,
    /// Human label for the day range this rule covers (e.g., "6-7").
    pub day_range_label: String,
}

impl DiscountRule {
    /// Creates a new `DiscountRule`.
    ///
    /// # Arguments
    ///
    /// * `min_day` - The 1-based day index from which this rule applies
    /// * `percent` - The discount percent (1-100)
    /// * `day_range_label` - Human label for the covered day range
    #[must_use]
    pub const fn new(min_day: u8, percent: u8, day_range_label: String) -> Self {
        Self {
            min_day,
            percent,
            day_range_label,
        }
    }
}

/// An ordered list of discount rules, highest day threshold first.
///
/// ## Invariants
///
/// - Thresholds are strictly decreasing down the list
/// - Discount percents are strictly decreasing in the same order
/// - The rule applied to a day is the highest threshold the day satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountSchedule {
    /// The rules, highest `min_day` first.
    rules: Vec<DiscountRule>,
}

impl DiscountSchedule {
    /// Creates a new `DiscountSchedule`.
    ///
    /// An empty schedule is valid and means no day is ever discounted.
    ///
    /// # Arguments
    ///
    /// * `rules` - The rules, ordered by strictly decreasing `min_day`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any rule has `min_day` of 0 or `percent` outside 1-100
    /// - Thresholds are not strictly decreasing
    /// - Percents are not strictly decreasing alongside the thresholds
    pub fn new(rules: Vec<DiscountRule>) -> Result<Self, DomainError> {
        for rule in &rules {
            if rule.min_day < 1 {
                return Err(DomainError::InvalidDiscountSchedule {
                    reason: String::from("Day thresholds are 1-based"),
                });
            }
            if !(1..=100).contains(&rule.percent) {
                return Err(DomainError::InvalidDiscountSchedule {
                    reason: format!(
                        "Discount percent must be between 1 and 100, got {}",
                        rule.percent
                    ),
                });
            }
        }
        for pair in rules.windows(2) {
            if pair[1].min_day >= pair[0].min_day {
                return Err(DomainError::InvalidDiscountSchedule {
                    reason: String::from("Day thresholds must be strictly decreasing"),
                });
            }
            if pair[1].percent >= pair[0].percent {
                return Err(DomainError::InvalidDiscountSchedule {
                    reason: String::from(
                        "Discount percents must decrease along with their thresholds",
                    ),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Returns the rules, highest threshold first.
    #[must_use]
    pub fn rules(&self) -> &[DiscountRule] {
        &self.rules
    }

    /// Returns the rule applied to a 1-based day index, if any.
    ///
    /// The rule of the highest threshold the day satisfies wins.
    #[must_use]
    pub fn discount_for_day(&self, day: u8) -> Option<&DiscountRule> {
        self.rules.iter().find(|rule| day >= rule.min_day)
    }
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            rules: vec![
                DiscountRule::new(8, 20, String::from("8+")),
                DiscountRule::new(6, 15, String::from("6-7")),
                DiscountRule::new(4, 10, String::from("4-5")),
            ],
        }
    }
}

/// The season's bookable date range and the resort's operating hours.
///
/// ## Invariants
///
/// - `min_date` ≤ `max_date` (both inclusive)
/// - `lesson_start_hour` < `resort_close_hour`
/// - Hours are on the 24h clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// First selectable date (inclusive).
    min_date: NaiveDate,
    /// Last selectable date (inclusive).
    max_date: NaiveDate,
    /// Hour of the first lesson of the day.
    lesson_start_hour: u8,
    /// Hour the resort closes; lessons must finish by then.
    resort_close_hour: u8,
}

impl BookingWindow {
    /// Creates a new `BookingWindow`.
    ///
    /// # Arguments
    ///
    /// * `min_date` - First selectable date (inclusive)
    /// * `max_date` - Last selectable date (inclusive)
    /// * `lesson_start_hour` - Hour of the first lesson of the day (24h clock)
    /// * `resort_close_hour` - Hour the resort closes (24h clock)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_date` is after `max_date`
    /// - `lesson_start_hour` is not before `resort_close_hour`
    /// - Either hour is outside the 24h clock
    pub fn new(
        min_date: NaiveDate,
        max_date: NaiveDate,
        lesson_start_hour: u8,
        resort_close_hour: u8,
    ) -> Result<Self, DomainError> {
        if min_date > max_date {
            return Err(DomainError::InvalidBookingWindow {
                reason: format!("min date {min_date} is after max date {max_date}"),
            });
        }
        if lesson_start_hour > 23 || resort_close_hour > 24 {
            return Err(DomainError::InvalidBookingWindow {
                reason: format!(
                    "hours must be on the 24h clock, got start {lesson_start_hour} and close {resort_close_hour}"
                ),
            });
        }
        if lesson_start_hour >= resort_close_hour {
            return Err(DomainError::InvalidBookingWindow {
                reason: format!(
                    "lesson start hour {lesson_start_hour} must be before close hour {resort_close_hour}"
                ),
            });
        }
        Ok(Self {
            min_date,
            max_date,
            lesson_start_hour,
            resort_close_hour,
        })
    }

    /// Returns the first selectable date (inclusive).
    #[must_use]
    pub const fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Returns the last selectable date (inclusive).
    #[must_use]
    pub const fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// Returns the hour of the first lesson of the day.
    #[must_use]
    pub const fn lesson_start_hour(&self) -> u8 {
        self.lesson_start_hour
    }

    /// Returns the hour the resort closes.
    #[must_use]
    pub const fn resort_close_hour(&self) -> u8 {
        self.resort_close_hour
    }

    /// Checks whether a date falls inside the bookable range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min_date && date <= self.max_date
    }
}

impl Default for BookingWindow {
    fn default() -> Self {
        Self {
            min_date: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap_or(NaiveDate::MIN),
            max_date: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap_or(NaiveDate::MAX),
            lesson_start_hour: 10,
            resort_close_hour: 17,
        }
    }
}

/// Contact details entered on the personal-information step.
///
/// The phone field holds the raw widget text; validity and normalization
/// are delegated to the external phone input collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactDetails {
    /// The participant's full name.
    pub full_name: String,
    /// The raw phone number as entered in the phone widget.
    pub phone: String,
    /// The participant's email address.
    pub email: String,
    /// The selected skill level, if any.
    pub skill_level: Option<SkillLevel>,
    /// Free-form additional information.
    pub additional_info: String,
}

impl ContactDetails {
    /// Creates new `ContactDetails`.
    ///
    /// # Arguments
    ///
    /// * `full_name` - The participant's full name
    /// * `phone` - The raw phone number as entered
    /// * `email` - The participant's email address
    /// * `skill_level` - The selected skill level, if any
    /// * `additional_info` - Free-form additional information
    #[must_use]
    pub const fn new(
        full_name: String,
        phone: String,
        email: String,
        skill_level: Option<SkillLevel>,
        additional_info: String,
    ) -> Self {
        Self {
            full_name,
            phone,
            email,
            skill_level,
            additional_info,
        }
    }
}

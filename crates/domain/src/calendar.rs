// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar month grid layout for the date picker.
//!
//! This module lays out a month as a fixed 6-row, 7-column grid of day
//! cells, Monday-aligned. It is a pure layout function: the output is a
//! cell descriptor list, with no rendering coupling.
//!
//! ## Invariants
//!
//! - Every grid has exactly 42 cells
//! - Leading and trailing cells belonging to neighboring months are
//!   always disabled
//! - In-month cells are selectable per the availability rules
//! - The cell matching the selected date is marked selected; the cell
//!   matching today is marked today

use crate::availability::is_date_selectable;
use crate::error::DomainError;
use crate::types::BookingWindow;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of cells in a month grid (6 rows of 7 days).
pub const GRID_CELLS: usize = 42;

/// A single cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The day-of-month number printed in the cell.
    pub day: u32,
    /// The cell's date; `None` for leading/trailing other-month cells.
    pub date: Option<NaiveDate>,
    /// Whether the cell belongs to the grid's month.
    pub in_current_month: bool,
    /// Whether the cell can be clicked to select its date.
    pub selectable: bool,
    /// Whether the cell matches the currently selected date.
    pub selected: bool,
    /// Whether the cell matches today.
    pub is_today: bool,
}

/// A laid-out calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// The grid's year.
    pub year: i32,
    /// The grid's month (1-12).
    pub month: u32,
    /// Header title, e.g. "January 2026".
    pub title: String,
    /// The 42 day cells, row by row.
    pub cells: Vec<DayCell>,
}

/// Lays out the month grid for a year and month.
///
/// The grid starts on the Monday column: a month whose first day is a
/// Sunday gets six leading other-month cells. Leading and trailing cells
/// show the neighboring months' day numbers and are always disabled.
///
/// # Arguments
///
/// * `year` - The grid's year
/// * `month` - The grid's month (1-12)
/// * `today` - The current calendar day
/// * `window` - The configured booking window
/// * `selected` - The currently selected date, if any
///
/// # Returns
///
/// A [`MonthGrid`] with exactly [`GRID_CELLS`] cells.
///
/// # Errors
///
/// Returns an error if:
/// - `month` is outside 1-12
/// - The year is outside the supported date range
pub fn build_month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    window: &BookingWindow,
    selected: Option<NaiveDate>,
) -> Result<MonthGrid, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidMonth { month });
    }

    let first: NaiveDate = first_of_month(year, month)?;
    let days: u32 = days_in_month(year, month)?;
    let leading: u32 = first.weekday().num_days_from_monday();

    let mut cells: Vec<DayCell> = Vec::with_capacity(GRID_CELLS);

    // Trailing days of the previous month
    let (prev_year, prev_month) = shift_month(year, month, -1)?;
    let prev_days: u32 = days_in_month(prev_year, prev_month)?;
    for day in (prev_days - leading + 1)..=prev_days {
        cells.push(other_month_cell(day));
    }

    for day in 1..=days {
        let date: NaiveDate =
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                DomainError::DateArithmeticOverflow {
                    operation: format!("laying out {year}-{month:02}-{day:02}"),
                }
            })?;
        cells.push(DayCell {
            day,
            date: Some(date),
            in_current_month: true,
            selectable: is_date_selectable(date, today, window),
            selected: selected == Some(date),
            is_today: date == today,
        });
    }

    // Leading days of the next month fill the grid to 42 cells
    let trailing: u32 = u32::try_from(GRID_CELLS).unwrap_or(42) - leading - days;
    for day in 1..=trailing {
        cells.push(other_month_cell(day));
    }

    Ok(MonthGrid {
        year,
        month,
        title: month_title(year, month)?,
        cells,
    })
}

/// Formats the header title for a month, e.g. "January 2026".
///
/// # Errors
///
/// Returns an error if the year and month do not form a valid date.
pub fn month_title(year: i32, month: u32) -> Result<String, DomainError> {
    let first: NaiveDate = first_of_month(year, month)?;
    Ok(first.format("%B %Y").to_string())
}

/// Returns the month the calendar should open on for a new session.
///
/// The calendar opens on today's month, or on the booking window's first
/// month when the season has not started yet.
#[must_use]
pub fn initial_month(today: NaiveDate, window: &BookingWindow) -> (i32, u32) {
    let base: NaiveDate = today.max(window.min_date());
    (base.year(), base.month())
}

/// Shifts a (year, month) pair by a number of months.
///
/// Navigation is unclamped: months outside the booking window simply lay
/// out as fully disabled grids.
///
/// # Errors
///
/// Returns an error if the shifted year overflows the supported range.
pub fn shift_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32), DomainError> {
    let index: i64 = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    let shifted_year: i32 =
        i32::try_from(index.div_euclid(12)).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {year}-{month:02} by {delta} months"),
        })?;
    let shifted_month: u32 =
        u32::try_from(index.rem_euclid(12) + 1).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("shifting {year}-{month:02} by {delta} months"),
        })?;
    Ok((shifted_year, shifted_month))
}

/// Returns the number of days in a month.
fn days_in_month(year: i32, month: u32) -> Result<u32, DomainError> {
    let first: NaiveDate = first_of_month(year, month)?;
    let (next_year, next_month) = shift_month(year, month, 1)?;
    let next_first: NaiveDate = first_of_month(next_year, next_month)?;
    u32::try_from(next_first.signed_duration_since(first).num_days()).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("counting the days of {year}-{month:02}"),
        }
    })
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidMonth { month });
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| DomainError::DateArithmeticOverflow {
        operation: format!("resolving the first day of {year}-{month:02}"),
    })
}

const fn other_month_cell(day: u32) -> DayCell {
    DayCell {
        day,
        date: None,
        in_current_month: false,
        selectable: false,
        selected: false,
        is_today: false,
    }
}

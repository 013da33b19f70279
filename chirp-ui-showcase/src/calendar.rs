//! Month grid for the calendar demo

use chrono::{Datelike, Month, NaiveDate};
use serde::Serialize;

/// One month laid out in Sunday-first weeks
///
/// Days outside the month are `0`, so every week has exactly seven cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    /// Calendar year
    pub year: i32,
    /// Month, 1-12
    pub month: u32,
    /// Weeks of day numbers
    pub weeks: Vec<[u32; 7]>,
    /// Heading such as `March 2026`
    pub month_label: String,
    /// Link to the previous month
    pub prev_url: String,
    /// Link to the next month
    pub next_url: String,
}

impl MonthView {
    /// Lay out `month` of `year`, or `None` if the month does not exist
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(first)?;
        let name = Month::try_from(u8::try_from(month).ok()?).ok()?.name();

        let mut weeks = Vec::new();
        let mut week = [0; 7];
        let mut column = first.weekday().num_days_from_sunday() as usize;
        for day in 1..=days {
            week[column] = day;
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [0; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        let (prev_year, prev_month) = if month == 1 {
            (year - 1, 12)
        } else {
            (year, month - 1)
        };
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };

        Some(Self {
            year,
            month,
            weeks,
            month_label: format!("{name} {year}"),
            prev_url: format!("/calendar/{prev_year}/{prev_month}"),
            next_url: format!("/calendar/{next_year}/{next_month}"),
        })
    }

    /// The month containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next = first.checked_add_months(chrono::Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

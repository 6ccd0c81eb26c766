//! Date window of the analytics page.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_ANALYTICS_MONTHS;
use crate::errors::{Result, ValidationError};

/// Inclusive range of dates the analytics metrics cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AnalyticsRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ValidationError::InvalidInput(
                "Range start must not be after its end".to_string(),
            )
            .into());
        }
        Ok(Self { start, end })
    }

    /// The last `months` calendar months up to and including the month of
    /// `today`: first day of the earliest month through the last day of the
    /// current one.
    pub fn last_months(months: u32, today: NaiveDate) -> Self {
        let current = today.with_day(1).unwrap_or(today);
        let start = current
            .checked_sub_months(Months::new(months.saturating_sub(1)))
            .unwrap_or(current);
        let end = current
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(today);
        Self { start, end }
    }

    /// The default six-month window ending this month.
    pub fn default_for(today: NaiveDate) -> Self {
        Self::last_months(DEFAULT_ANALYTICS_MONTHS, today)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

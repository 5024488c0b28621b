//! Range filtering over pre-open records.
//!
//! pChange and price bounds are exclusive, turnover bounds are inclusive.

use crate::models::{FilteredRow, RawRecord};

/// Six numeric bounds supplied by the caller. No ordering is enforced
/// between a min and its max; inverted ranges simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub pchange_min: f64,
    pub pchange_max: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub turnover_min: f64,
    pub turnover_max: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            pchange_min: -20.0,
            pchange_max: 10.0,
            price_min: 100.0,
            price_max: 5000.0,
            turnover_min: 100_000.0,
            turnover_max: 500_000_000.0,
        }
    }
}

impl FilterCriteria {
    /// Ineligible records never match.
    pub fn matches(&self, record: &RawRecord) -> bool {
        match (record.symbol.as_ref(), record.p_change, record.last_price, record.total_turnover) {
            (Some(_), Some(p_change), Some(last_price), Some(turnover)) => {
                self.pchange_min < p_change
                    && p_change < self.pchange_max
                    && self.price_min < last_price
                    && last_price < self.price_max
                    && self.turnover_min <= turnover
                    && turnover <= self.turnover_max
            }
            _ => false,
        }
    }

    /// Names of the ranges whose min exceeds max.
    pub fn inverted_bounds(&self) -> Vec<&'static str> {
        let mut inverted = Vec::new();
        if self.pchange_min > self.pchange_max {
            inverted.push("% Change");
        }
        if self.price_min > self.price_max {
            inverted.push("Price");
        }
        if self.turnover_min > self.turnover_max {
            inverted.push("Total Turnover");
        }
        inverted
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutcome {
    /// The record sequence was empty.
    NoSourceData,
    /// Records were present but none passed the predicate.
    NoMatches,
    Rows(Vec<FilteredRow>),
}

impl FilterOutcome {
    pub fn rows(&self) -> &[FilteredRow] {
        match self {
            FilterOutcome::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FilterOutcome::NoSourceData => Some("No data received from API."),
            FilterOutcome::NoMatches => Some("No data matching the conditions found."),
            FilterOutcome::Rows(_) => None,
        }
    }
}

/// Projects every matching record into a [`FilteredRow`], keeping input order.
pub fn filter_records(records: &[RawRecord], criteria: &FilterCriteria) -> FilterOutcome {
    if records.is_empty() {
        return FilterOutcome::NoSourceData;
    }

    let rows: Vec<FilteredRow> = records
        .iter()
        .filter(|record| criteria.matches(record))
        .filter_map(FilteredRow::from_record)
        .collect();

    log::debug!("Filter kept {} of {} records", rows.len(), records.len());

    if rows.is_empty() {
        FilterOutcome::NoMatches
    } else {
        FilterOutcome::Rows(rows)
    }
}

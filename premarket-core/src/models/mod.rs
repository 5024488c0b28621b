mod de;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use de::{de_lenient_f64, de_lenient_number, de_lenient_string};

/// One `metadata` object from the pre-open response. Every field may be
/// missing on the wire.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub p_change: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub last_price: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_number")]
    pub final_quantity: Option<Number>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub total_turnover: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub year_low: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub year_high: Option<f64>,
}

impl RawRecord {
    /// A record takes part in filtering only when symbol, pChange,
    /// lastPrice and totalTurnover are all present.
    pub fn is_eligible(&self) -> bool {
        self.symbol.is_some()
            && self.p_change.is_some()
            && self.last_price.is_some()
            && self.total_turnover.is_some()
    }
}

/// Display projection of a matching record, in fixed column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredRow {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "pChange")]
    pub p_change: f64,
    #[serde(rename = "LastPrice")]
    pub last_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: Option<Number>,
    #[serde(rename = "TotalTurnover")]
    pub total_turnover: f64,
    #[serde(rename = "52W_Low")]
    pub year_low: Option<f64>,
    #[serde(rename = "52W_High")]
    pub year_high: Option<f64>,
}

impl FilteredRow {
    pub const COLUMNS: [&'static str; 7] = [
        "Symbol",
        "pChange",
        "LastPrice",
        "Quantity",
        "TotalTurnover",
        "52W_Low",
        "52W_High",
    ];

    /// Returns `None` for ineligible records.
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        Some(Self {
            symbol: record.symbol.clone()?,
            p_change: record.p_change?,
            last_price: record.last_price?,
            quantity: record.final_quantity.clone(),
            total_turnover: record.total_turnover?,
            year_low: record.year_low,
            year_high: record.year_high,
        })
    }
}

/// Records from one bootstrap + fetch cycle.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<RawRecord>,
    pub fetched_at: DateTime<Local>,
}

impl Snapshot {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self {
            records,
            fetched_at: Local::now(),
        }
    }

    pub fn eligible_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_eligible()).count()
    }
}

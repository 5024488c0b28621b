pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod models;
pub mod nse;

pub use config::NseConfig;
pub use error::{ErrorKind, PremarketError, Result};
pub use filter::{filter_records, FilterCriteria, FilterOutcome};
pub use models::{FilteredRow, RawRecord, Snapshot};
pub use nse::{decode_records, NseClient, SessionCookies};

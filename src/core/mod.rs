//! Core calculator logic: the conversion engine and session state

pub mod config;
pub mod conversion;
pub mod history;
pub mod log;
pub mod session;

// Re-export main types for cleaner imports
pub use conversion::{ConversionDirection, ConversionResult, Currency, FIXED_RATE, convert};
pub use history::{ConversionHistory, HistoryEntry};
pub use session::{Session, parse_amount};

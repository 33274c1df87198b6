// File: crates/aqi-core/src/error.rs
// Summary: Error type for city lookup, numeric input parsing and reference data loading.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AqiError {
    /// Strict lookup of a city that is not in the reference table.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A pollutant concentration that does not parse as a number.
    #[error("invalid numeric input for {field}: {value:?}")]
    InvalidNumericInput { field: &'static str, value: String },

    /// The embedded city table failed to parse.
    #[error("failed to parse city table: {0}")]
    CityTable(#[from] csv::Error),

    #[error("city table has no rows")]
    EmptyCityTable,
}

pub type Result<T> = std::result::Result<T, AqiError>;

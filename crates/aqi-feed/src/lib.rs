// File: crates/aqi-feed/src/lib.rs
// Summary: Best-effort live data feed; every call degrades to the synthetic generator on failure.

pub mod error;
pub mod reading;
pub mod client;
pub mod fallback;
pub mod session;
pub mod refresh;

pub use error::{FetchError, Result};
pub use reading::{CityReading, Concentrations};
pub use client::FeedClient;
pub use fallback::{Feed, Source, Sourced};
pub use session::{simulate_latency, Session, Ticket};
pub use refresh::Refresher;

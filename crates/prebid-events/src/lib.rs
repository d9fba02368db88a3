//! Wire model for the prebid event stream captured on an inspected page.
//!
//! The page instrumentation serializes every event the auction library
//! emits; this crate defines the shapes those events deserialize into. Only
//! a handful of event kinds carry data the inspector transforms; the rest
//! are filtered by kind and displayed as-is.

pub mod config;
pub mod event;
pub mod ortb2;

pub use {
    config::PrebidConfig,
    event::{AuctionEndArgs, BidderDoneArgs, Event},
    ortb2::Ortb2,
};

use serde::{Deserialize, Serialize};

/// Everything captured for one auction-library namespace on one frame.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrebidDetails {
    /// Version string reported by the library, if it exposes one.
    pub version: Option<String>,

    /// The captured event stream, in arrival order. Arrival order is load
    /// bearing: downstream consumers number auctions by position, not by
    /// timestamp.
    #[serde(default)]
    pub events: Vec<Event>,

    /// Snapshot of the library's global configuration at capture time.
    ///
    /// This object is mutated in place by the page as the session goes on,
    /// so it only ever reflects the most recent state. Historical questions
    /// must be answered from the events, never from here.
    pub config: Option<PrebidConfig>,
}

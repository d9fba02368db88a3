//! IOID auction reconstruction.
//!
//! The analytics adapter under inspection issues one IOID (impression
//! opportunity identifier) per auction and writes it into the library's
//! shared config, overwriting the previous value. This crate rebuilds the
//! per-auction, per-bidder view (which IOID was actually active when each
//! bidder's request was made) from the captured event stream, where every
//! `bidderDone` event froze a snapshot of the config at request time.

pub mod extract;
pub mod keywords;
pub mod reconstruct;
pub mod tracking;

// Re-export key types for convenience
pub use {
    keywords::{KeywordScan, extract_ioid_from_keywords},
    reconstruct::reconstruct,
    tracking::{AuctionIoid, BidderIoid, TrackingData},
};

//! Reconstructed per-auction IOID records.
//!
//! These are the rows the inspector panel renders. They serialize with the
//! same camelCase field names the panel's grid binds to.

use serde::{Deserialize, Serialize};

/// One bidder's participation in one auction.
///
/// Built once from the bidder's `bidderDone` event and never touched again;
/// both identifiers are `None` when the source event did not carry them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidderIoid {
    pub bidder_code: String,

    /// IOID from the site config snapshot frozen into the bidderDone event
    /// (`ortb2.site.ext.data.ioids`).
    pub global_ioid: Option<String>,

    /// IOID parsed out of the bid request's site keyword string
    /// (`ortb2.site.keywords`).
    pub bid_request_ioid: Option<String>,
}

/// One completed auction cycle.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionIoid {
    /// 1-based position among all observed `auctionEnd` events, in arrival
    /// order. Arrival order, not timestamp order: a late-arriving event gets
    /// the next cycle number even if it started earlier.
    pub auction_cycle: u64,

    /// The library's auction identifier, unique within the session.
    pub auction_id: String,

    /// Number of ad slots declared for this auction; 0 when the event did
    /// not list any.
    pub ad_unit_count: usize,

    /// Auction start time, epoch milliseconds; 0 when absent.
    pub timestamp: u64,

    /// One record per `bidderDone` event whose auction id matched, in the
    /// order those events arrived. A bidder that reported done twice is
    /// listed twice.
    pub bidders: Vec<BidderIoid>,
}

/// The full reconstructed dataset for the selected event stream.
///
/// An empty `auctions` list is a meaningful result ("no adapter activity
/// detected"), not an error or a loading state.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    pub auctions: Vec<AuctionIoid>,
}

impl TrackingData {
    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty()
    }
}

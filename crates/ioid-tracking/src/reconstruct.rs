//! Rebuilding per-auction IOID records from the event stream.
//!
//! One pass over the captured events: `auctionEnd` events define the
//! auctions (and their cycle numbers, by arrival order), `bidderDone`
//! events are grouped by auction id and joined in. Everything else in the
//! stream is ignored here.

use {
    crate::{
        extract,
        tracking::{AuctionIoid, BidderIoid, TrackingData},
    },
    itertools::Itertools,
    prebid_events::event::{BidderDoneArgs, Event},
    std::collections::HashMap,
};

/// Reconstructs the full tracking dataset from an event stream.
///
/// Total over any input: malformed events degrade field-by-field to
/// defaults, orphan `bidderDone` events (no matching `auctionEnd`) are
/// dropped, and an input without any `auctionEnd` yields the empty dataset.
/// Running it twice on the same input yields an equal result, so the caller
/// may recompute freely and swap the whole dataset each time.
pub fn reconstruct(events: &[Event]) -> TrackingData {
    let auction_ends = events
        .iter()
        .filter_map(|event| match event {
            Event::AuctionEnd(args) => Some(args),
            _ => None,
        })
        .collect_vec();
    if auction_ends.is_empty() {
        return TrackingData::default();
    }

    let done_by_auction: HashMap<&str, Vec<&BidderDoneArgs>> = events
        .iter()
        .filter_map(|event| match event {
            Event::BidderDone(args) => Some((args.auction_id.as_str(), args)),
            _ => None,
        })
        .into_group_map();

    let auctions = auction_ends
        .iter()
        .enumerate()
        .map(|(index, end)| {
            let bidders = done_by_auction
                .get(end.auction_id.as_str())
                .map(Vec::as_slice)
                .unwrap_or_default()
                .iter()
                .map(|done| BidderIoid {
                    bidder_code: done.bidder_code.clone(),
                    global_ioid: extract::site_ioid(done),
                    bid_request_ioid: extract::bid_request_ioid(done),
                })
                .collect();

            AuctionIoid {
                auction_cycle: index as u64 + 1,
                auction_id: end.auction_id.clone(),
                ad_unit_count: end.ad_unit_codes.as_ref().map(Vec::len).unwrap_or_default(),
                timestamp: end.timestamp.unwrap_or_default(),
                bidders,
            }
        })
        .collect();

    TrackingData { auctions }
}

//! Captured auction-library events.
//!
//! Events arrive as `{ "eventType": ..., "args": ... }` objects in a single
//! ordered stream per namespace. The enum below is adjacently tagged to
//! match that encoding. Payload fields that a page may omit carry defaults,
//! and unrecognized event kinds collapse into [`Event::Other`], so one
//! sloppy or unknown event degrades instead of failing the whole stream.

use {crate::ortb2::Ortb2, serde::{Deserialize, Serialize}};

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "eventType", content = "args", rename_all = "camelCase")]
pub enum Event {
    AuctionInit(AuctionEndArgs),
    AuctionEnd(AuctionEndArgs),
    BidRequested(BidRequestedArgs),
    BidResponse(BidArgs),
    NoBid(BidArgs),
    BidderDone(BidderDoneArgs),
    BidWon(BidArgs),
    AdRenderSucceeded(AdRenderArgs),
    PaapiRunAuction(PaapiArgs),
    PaapiBid(PaapiArgs),
    PaapiNoBid(PaapiArgs),

    /// Any event kind the library emits that the inspector has no view
    /// for (`auctionDebug`, `addAdUnits`, adapter-specific kinds, ...).
    /// Consumers filter by kind, so these pass through harmlessly instead
    /// of failing deserialization of the whole captured stream.
    #[serde(other)]
    Other,
}

/// Payload of `auctionInit` and `auctionEnd` (the library reports the same
/// shape for both ends of the cycle).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionEndArgs {
    #[serde(default)]
    pub auction_id: String,

    /// Auction start time, epoch milliseconds.
    pub timestamp: Option<u64>,

    /// Ad slot identifiers declared for this auction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_unit_codes: Option<Vec<String>>,
}

/// Payload of `bidderDone`: one bidder has finished its part of one auction.
///
/// The `ortb2` tree here is the bidder's request-time snapshot, frozen into
/// the event when the request completed. It is the only trustworthy record
/// of what the shared config looked like at that moment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidderDoneArgs {
    #[serde(default)]
    pub auction_id: String,

    #[serde(default)]
    pub bidder_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ortb2: Option<Ortb2>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequestedArgs {
    #[serde(default)]
    pub auction_id: String,
    #[serde(default)]
    pub bidder_code: String,
}

/// Payload shared by `bidResponse`, `noBid` and `bidWon`. The inspector
/// lists these by kind; none of their fields feed a transformation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidArgs {
    #[serde(default)]
    pub auction_id: String,
    #[serde(default)]
    pub bidder: String,
    #[serde(default)]
    pub ad_unit_code: String,
    pub cpm: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdRenderArgs {
    #[serde(default)]
    pub ad_id: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaapiArgs {
    #[serde(default)]
    pub auction_id: String,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn roundtrips_auction_end() {
        let event = Event::AuctionEnd(AuctionEndArgs {
            auction_id: "a-1".to_string(),
            timestamp: Some(1_700_000_000_000),
            ad_unit_codes: Some(vec!["div1".to_string(), "div2".to_string()]),
        });

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "eventType": "auctionEnd",
                "args": {
                    "auctionId": "a-1",
                    "timestamp": 1_700_000_000_000_u64,
                    "adUnitCodes": ["div1", "div2"],
                },
            }),
        );
        assert_eq!(
            serde_json::from_value::<Event>(serde_json::to_value(&event).unwrap()).unwrap(),
            event,
        );
    }

    #[test]
    fn deserializes_bidder_done_with_ortb2_snapshot() {
        let event: Event = serde_json::from_value(json!({
            "eventType": "bidderDone",
            "args": {
                "auctionId": "a-1",
                "bidderCode": "appnexus",
                "ortb2": {
                    "site": {
                        "keywords": "ioid=2222",
                        "ext": { "data": { "ioids": "1111" } },
                    }
                },
            },
        }))
        .unwrap();

        let Event::BidderDone(args) = event else {
            panic!("wrong variant");
        };
        assert_eq!(args.bidder_code, "appnexus");
        let ortb2 = args.ortb2.unwrap();
        assert_eq!(ortb2.site_keywords(), Some("ioid=2222"));
        assert_eq!(ortb2.site_ioids(), Some("1111"));
    }

    #[test]
    fn unknown_event_kinds_collapse_into_other() {
        let event: Event = serde_json::from_value(json!({
            "eventType": "auctionDebug",
            "args": { "type": "WARNING", "arguments": ["no bids"] },
        }))
        .unwrap();
        assert_eq!(event, Event::Other);

        // A whole stream with an unrecognized kind in the middle still
        // deserializes; the known events around it are untouched.
        let events: Vec<Event> = serde_json::from_value(json!([
            { "eventType": "auctionEnd", "args": { "auctionId": "a-1" } },
            { "eventType": "addAdUnits", "args": {} },
            { "eventType": "bidderDone", "args": { "bidderCode": "rubicon" } },
        ]))
        .unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], Event::Other);
    }

    #[test]
    fn missing_payload_fields_degrade_to_defaults() {
        let event: Event = serde_json::from_value(json!({
            "eventType": "bidderDone",
            "args": {},
        }))
        .unwrap();
        assert_eq!(
            event,
            Event::BidderDone(BidderDoneArgs::default()),
        );

        let event: Event = serde_json::from_value(json!({
            "eventType": "auctionEnd",
            "args": { "auctionId": "a-2" },
        }))
        .unwrap();
        let Event::AuctionEnd(args) = event else {
            panic!("wrong variant");
        };
        assert_eq!(args.timestamp, None);
        assert_eq!(args.ad_unit_codes, None);
    }
}

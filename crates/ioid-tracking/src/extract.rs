//! IOID extraction from captured events and config.
//!
//! All readers here are total: any missing level of the optional ortb2 path
//! yields `None`, which is the common case and not worth a diagnostic.

use {
    crate::keywords,
    prebid_events::{config::PrebidConfig, event::BidderDoneArgs},
    regex::Regex,
    std::sync::LazyLock,
};

/// IOID the site config carried at the moment this bidder finished its part
/// of the auction, read from the snapshot frozen into the `bidderDone`
/// event (`ortb2.site.ext.data.ioids`).
///
/// This is the correct source for per-auction history. The live config
/// holds the same path but is overwritten whenever a new identifier is
/// issued; see [`current_site_ioid`].
pub fn site_ioid(done: &BidderDoneArgs) -> Option<String> {
    done.ortb2.as_ref()?.site_ioids().map(str::to_owned)
}

/// IOID encoded into the bid request's site keyword string
/// (`ortb2.site.keywords`), or `None` when the event carries no keywords.
pub fn bid_request_ioid(done: &BidderDoneArgs) -> Option<String> {
    let keywords = done.ortb2.as_ref()?.site_keywords()?;
    keywords::extract_ioid_from_keywords(keywords).value
}

/// Most recent IOID in the live shared config.
///
/// NOT suitable for auction reconstruction: the page mutates this object in
/// place, so reading it after the fact silently attributes the latest
/// auction's identifier to every earlier auction. Use it only where
/// "current value" is the question being asked; historical questions go
/// through [`site_ioid`].
pub fn current_site_ioid(config: &PrebidConfig) -> Option<String> {
    config.ortb2.as_ref()?.site_ioids().map(str::to_owned)
}

static IOID_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("static pattern compiles")
});

/// Whether a value has the UUID shape IOIDs are expected to have. Display
/// only flags the mismatch; values that fail this check are still recorded.
pub fn looks_like_ioid(value: &str) -> bool {
    IOID_SHAPE.is_match(&value.to_ascii_lowercase())
}

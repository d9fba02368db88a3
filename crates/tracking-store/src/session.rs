//! The inspected-page session: frame map, frame/namespace selection, and
//! the recompute-on-change loop feeding the tracking store.

use {
    crate::store::TrackingStore,
    ioid_tracking::TrackingData,
    itertools::Itertools,
    prebid_events::{
        PrebidDetails,
        event::{AuctionEndArgs, BidderDoneArgs, Event},
    },
    serde::Deserialize,
    std::{collections::HashMap, sync::Arc},
    thiserror::Error,
};

/// Frame id the extension assigns to the page's top-level window.
pub const TOP_WINDOW: &str = "top-window";

/// Pseudo-namespace under which consent data is stored alongside the
/// auction library instances. Not an auction library, never selectable.
const TCF_NAMESPACE: &str = "tcf";

/// The auction library's canonical global name. Pages that rename the
/// instance expose something else, but when `pbjs` is present it is the
/// instance the user almost always means.
const PBJS_NAMESPACE: &str = "pbjs";

/// What the observation layer captured for one frame of the inspected page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrameInfo {
    /// Captured state per auction-library namespace, absent when the frame
    /// runs no auction library at all.
    pub prebids: Option<HashMap<String, PrebidDetails>>,
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("no frame {0:?} on the inspected page")]
    UnknownFrame(String),
    #[error("frame {frame:?} exposes no auction library instance {namespace:?}")]
    UnknownNamespace { frame: String, namespace: String },
}

/// Selection state plus the store holding the derived dataset.
///
/// Every successful mutation (new frame data arriving, or the user picking
/// a different frame or namespace) synchronously reruns reconstruction
/// over the newly selected event stream and swaps the complete result into
/// the store. There is no incremental path.
#[derive(Default)]
pub struct Session {
    frames: HashMap<String, FrameInfo>,
    frame_id: Option<String>,
    namespace: Option<String>,
    store: TrackingStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the frame map with a fresh capture from the page.
    ///
    /// Keeps the current frame/namespace selection when the new capture
    /// still offers it, otherwise falls back to the defaults. Either way
    /// the dataset is recomputed from the new events.
    pub fn update_frames(&mut self, frames: HashMap<String, FrameInfo>) {
        self.frames = frames;

        let frame_still_exists = self
            .frame_id
            .as_ref()
            .is_some_and(|id| self.frames.contains_key(id));
        if !frame_still_exists {
            self.frame_id = self.default_frame();
        }

        let namespace_still_exists = self
            .namespace
            .as_ref()
            .is_some_and(|ns| self.namespaces().contains(&ns.as_str()));
        if !namespace_still_exists {
            self.namespace = self.default_namespace();
        }

        self.recompute();
    }

    /// Points the session at a different frame, resetting the namespace to
    /// that frame's default.
    pub fn select_frame(&mut self, frame_id: &str) -> Result<(), SelectionError> {
        if !self.frames.contains_key(frame_id) {
            return Err(SelectionError::UnknownFrame(frame_id.to_string()));
        }
        self.frame_id = Some(frame_id.to_string());
        self.namespace = self.default_namespace();
        self.recompute();
        Ok(())
    }

    /// Points the session at a different auction-library instance of the
    /// current frame.
    pub fn select_namespace(&mut self, namespace: &str) -> Result<(), SelectionError> {
        if !self.namespaces().contains(&namespace) {
            return Err(SelectionError::UnknownNamespace {
                frame: self.frame_id.clone().unwrap_or_default(),
                namespace: namespace.to_string(),
            });
        }
        self.namespace = Some(namespace.to_string());
        self.recompute();
        Ok(())
    }

    pub fn frame_id(&self) -> Option<&str> {
        self.frame_id.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Auction-library namespaces the selected frame exposes, sorted for a
    /// stable dropdown order. The consent pseudo-namespace is excluded.
    pub fn namespaces(&self) -> Vec<&str> {
        self.selected_prebids()
            .map(|prebids| {
                prebids
                    .keys()
                    .map(String::as_str)
                    .filter(|namespace| *namespace != TCF_NAMESPACE)
                    .sorted()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The complete reconstructed dataset for the current selection.
    pub fn tracking_data(&self) -> Arc<TrackingData> {
        self.store.snapshot()
    }

    /// The selected namespace's raw event stream, in arrival order.
    pub fn events(&self) -> &[Event] {
        self.selected_details()
            .map(|details| details.events.as_slice())
            .unwrap_or_default()
    }

    /// All `auctionEnd` events of the selected stream, in arrival order.
    pub fn auction_end_events(&self) -> Vec<&AuctionEndArgs> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::AuctionEnd(args) => Some(args),
                _ => None,
            })
            .collect()
    }

    /// All `bidderDone` events of the selected stream, in arrival order.
    pub fn bidder_done_events(&self) -> Vec<&BidderDoneArgs> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::BidderDone(args) => Some(args),
                _ => None,
            })
            .collect()
    }

    /// Every ad slot mentioned by an `auctionInit` event, deduplicated,
    /// first mention first.
    pub fn ad_unit_codes(&self) -> Vec<&str> {
        self.events()
            .iter()
            .filter_map(|event| match event {
                Event::AuctionInit(args) => args.ad_unit_codes.as_deref(),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .unique()
            .collect()
    }

    fn selected_prebids(&self) -> Option<&HashMap<String, PrebidDetails>> {
        let frame = self.frames.get(self.frame_id.as_ref()?)?;
        frame.prebids.as_ref()
    }

    fn selected_details(&self) -> Option<&PrebidDetails> {
        self.selected_prebids()?.get(self.namespace.as_ref()?)
    }

    /// Prefer the top window when it runs an auction library, otherwise the
    /// first frame that does, otherwise the top window entry if present.
    fn default_frame(&self) -> Option<String> {
        let has_prebids = |id: &str| {
            self.frames
                .get(id)
                .is_some_and(|frame| frame.prebids.is_some())
        };

        if has_prebids(TOP_WINDOW) {
            return Some(TOP_WINDOW.to_string());
        }
        if let Some(id) = self.frames.keys().sorted().find(|id| has_prebids(id.as_str())) {
            return Some(id.clone());
        }
        self.frames.contains_key(TOP_WINDOW).then(|| TOP_WINDOW.to_string())
    }

    /// Prefer the canonical `pbjs` instance when the frame exposes it,
    /// otherwise the first namespace in display order.
    fn default_namespace(&self) -> Option<String> {
        let namespaces = self.namespaces();
        if namespaces.contains(&PBJS_NAMESPACE) {
            return Some(PBJS_NAMESPACE.to_string());
        }
        namespaces.first().map(|namespace| namespace.to_string())
    }

    fn recompute(&self) {
        let data = ioid_tracking::reconstruct(self.events());
        tracing::debug!(auctions = data.auctions.len(), "recomputed tracking data");
        self.store.replace(data);
    }
}

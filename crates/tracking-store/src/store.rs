use {arc_swap::ArcSwap, ioid_tracking::TrackingData, std::sync::Arc};

/// Whole-snapshot store for the reconstructed tracking data.
///
/// The store only supports two operations: replace the entire dataset, or
/// read the entire dataset. There is deliberately no way to patch a single
/// auction in place. Overlapping recomputations serialize to last write
/// wins, with every intermediate state being a complete dataset.
#[derive(Default)]
pub struct TrackingStore {
    data: ArcSwap<TrackingData>,
}

impl TrackingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the current dataset.
    pub fn replace(&self, data: TrackingData) {
        self.data.store(Arc::new(data));
    }

    /// The current complete dataset. The returned `Arc` stays valid and
    /// unchanged even if the store is replaced while the caller holds it.
    pub fn snapshot(&self) -> Arc<TrackingData> {
        self.data.load_full()
    }
}

#[cfg(test)]
mod tests {
    use {super::*, ioid_tracking::AuctionIoid};

    fn dataset(auction_ids: &[&str]) -> TrackingData {
        TrackingData {
            auctions: auction_ids
                .iter()
                .enumerate()
                .map(|(index, id)| AuctionIoid {
                    auction_cycle: index as u64 + 1,
                    auction_id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn replace_swaps_the_whole_dataset() {
        let store = TrackingStore::new();
        assert!(store.snapshot().is_empty());

        store.replace(dataset(&["A1", "A2"]));
        let before = store.snapshot();
        assert_eq!(before.auctions.len(), 2);

        // A snapshot taken before a replace keeps observing the old data.
        store.replace(dataset(&["A1"]));
        assert_eq!(before.auctions.len(), 2);
        assert_eq!(store.snapshot().auctions.len(), 1);
    }

    #[test]
    fn last_write_wins() {
        let store = TrackingStore::new();
        store.replace(dataset(&["stale"]));
        store.replace(dataset(&["current"]));
        assert_eq!(store.snapshot().auctions[0].auction_id, "current");
    }
}

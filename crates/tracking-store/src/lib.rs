//! Host-side state for the inspector panel: which frame and namespace are
//! being looked at, and the reconstructed tracking data derived from them.
//!
//! The derived dataset is a pure function of the selected event stream. On
//! every change it is recomputed in full and swapped into the store as one
//! atomic snapshot, so readers see either the previous complete dataset or
//! the new one, never a partially updated mix.

pub mod session;
pub mod store;

pub use {
    session::{FrameInfo, SelectionError, Session, TOP_WINDOW},
    store::TrackingStore,
};

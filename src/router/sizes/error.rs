//! Sizing errors

use crate::board::ItemId;

/// Contract violations by the caller of [`super::SizesSettings::init`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizingError {
    /// The anchor handle does not name a live item of the graph
    #[error("anchor item {0:?} is not part of the connectivity graph")]
    DetachedAnchor(ItemId),
}

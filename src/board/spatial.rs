//! R-tree index over item envelopes for picking the item under a point

use super::graph::ItemId;
use super::types::{Item, ItemKind, Point};
use rstar::{RTree, RTreeObject, AABB};

/// Item handle wrapper for R-tree spatial indexing
#[derive(Clone, Debug, PartialEq)]
pub struct IndexedItem {
    pub id: ItemId,
    pub bounds: AABB<[f64; 2]>,
}

impl IndexedItem {
    pub fn new(id: ItemId, item: &Item) -> Self {
        let b = item.bounds();
        Self {
            id,
            bounds: AABB::from_corners([b[0], b[1]], [b[2], b[3]]),
        }
    }
}

impl RTreeObject for IndexedItem {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.bounds
    }
}

impl rstar::PointDistance for IndexedItem {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.bounds.distance_2(point)
    }
}

/// Pick priority: point-like items win over traces at equal distance
fn kind_priority(kind: ItemKind) -> u8 {
    match kind {
        ItemKind::Via => 0,
        ItemKind::Solid => 1,
        ItemKind::Segment => 2,
        ItemKind::Arc => 3,
    }
}

pub(crate) struct SpatialIndex {
    tree: RTree<IndexedItem>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self { tree: RTree::new() }
    }
}

impl std::fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex").field("size", &self.tree.size()).finish()
    }
}

impl SpatialIndex {
    pub fn insert(&mut self, id: ItemId, item: &Item) {
        self.tree.insert(IndexedItem::new(id, item));
    }

    pub fn remove(&mut self, id: ItemId, item: &Item) {
        self.tree.remove(&IndexedItem::new(id, item));
    }

    /// Closest candidate within `max_distance`, ties broken by kind priority then handle
    pub fn nearest<'a, F>(&self, point: Point, max_distance: f64, lookup: F) -> Option<ItemId>
    where
        F: Fn(ItemId) -> Option<&'a Item>,
    {
        let p = point.as_f64();
        self.tree
            .locate_within_distance(p, max_distance * max_distance)
            .filter_map(|candidate| {
                let item = lookup(candidate.id)?;
                let d2 = rstar::PointDistance::distance_2(candidate, &p);
                Some((d2, kind_priority(item.kind()), candidate.id))
            })
            .min_by(|a, b| {
                a.0.total_cmp(&b.0)
                    .then(a.1.cmp(&b.1))
                    .then(a.2.cmp(&b.2))
            })
            .map(|(_, _, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::graph::ConnectivityGraph;
    use crate::board::types::{Item, Point, F_CU};

    #[test]
    fn test_pick_prefers_via_over_segment() {
        let mut graph = ConnectivityGraph::new();
        let seg = graph.add_item(Item::segment(Point::new(0, 0), Point::new(10_000, 0), 250, F_CU, Some(3)));
        let via = graph.add_item(Item::via(Point::new(0, 0), 800, 400, Some(3)));

        assert_eq!(graph.item_at(Point::new(0, 0), 100.0), Some(via));
        assert_eq!(graph.item_at(Point::new(5_000, 0), 100.0), Some(seg));
        assert_eq!(graph.item_at(Point::new(5_000, 50_000), 100.0), None);
    }

    #[test]
    fn test_removed_item_is_not_picked() {
        let mut graph = ConnectivityGraph::new();
        let via = graph.add_item(Item::via(Point::new(0, 0), 800, 400, None));
        graph.remove_item(via);
        assert_eq!(graph.item_at(Point::new(0, 0), 1_000.0), None);
    }
}

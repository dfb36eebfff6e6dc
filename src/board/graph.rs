//! Connectivity graph: an arena of items linked through shared-position joints
//!
//! Items are addressed by generation-checked [`ItemId`] handles, so a handle
//! kept across a removal is detected as stale instead of aliasing whatever
//! reuses the slot. Joints are keyed by (position, net).

use super::spatial::SpatialIndex;
use super::types::{Item, LayerRange, NetId, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable handle to an item in a [`ConnectivityGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId {
    index: u32,
    generation: u32,
}

impl ItemId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Key of a joint: items of one net meeting at one coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JointKey {
    pub pos: Point,
    pub net: Option<NetId>,
}

/// Set of items coincident at one board coordinate
#[derive(Debug, Clone)]
pub struct Joint {
    pub key: JointKey,
    /// Union of the layer spans of all linked items
    pub layers: LayerRange,
    links: Vec<ItemId>,
}

impl Joint {
    pub fn links(&self) -> &[ItemId] {
        &self.links
    }

    fn link(&mut self, id: ItemId, layers: &LayerRange) {
        if !self.links.contains(&id) {
            self.links.push(id);
        }
        self.layers = LayerRange::new(self.layers.start.min(layers.start), self.layers.end.max(layers.end));
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    item: Option<Item>,
}

/// Board connectivity graph
#[derive(Debug, Default)]
pub struct ConnectivityGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    joints: HashMap<JointKey, Joint>,
    spatial: SpatialIndex,
    live: usize,
}

impl ConnectivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item and link it into the joint at each of its anchor points
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &self.slots[index as usize];
                ItemId { index, generation: slot.generation }
            }
            None => {
                self.slots.push(Slot { generation: 0, item: None });
                ItemId { index: (self.slots.len() - 1) as u32, generation: 0 }
            }
        };

        for pos in item.anchors() {
            let key = JointKey { pos, net: item.net };
            self.joints
                .entry(key)
                .or_insert_with(|| Joint { key, layers: item.layers, links: Vec::new() })
                .link(id, &item.layers);
        }

        self.spatial.insert(id, &item);
        self.slots[id.index as usize].item = Some(item);
        self.live += 1;
        id
    }

    /// Remove an item, unlinking it from its joints. The handle becomes stale.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let item = slot.item.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;

        for pos in item.anchors() {
            let key = JointKey { pos, net: item.net };
            let now_empty = match self.joints.get_mut(&key) {
                Some(joint) => {
                    joint.links.retain(|l| *l != id);
                    joint.links.is_empty()
                }
                None => false,
            };
            if now_empty {
                self.joints.remove(&key);
            }
        }

        self.spatial.remove(id, &item);
        Some(item)
    }

    /// Look up a live item; `None` for stale or unknown handles
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.item.as_ref())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.item(id).is_some()
    }

    pub fn find_joint(&self, pos: Point, net: Option<NetId>) -> Option<&Joint> {
        self.joints.get(&JointKey { pos, net })
    }

    /// Items linked at a coordinate for a net (empty if there is no joint)
    pub fn links_at(&self, pos: Point, net: Option<NetId>) -> &[ItemId] {
        self.find_joint(pos, net).map(Joint::links).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterate live items with their handles
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.item.as_ref().map(|item| {
                (ItemId { index: index as u32, generation: slot.generation }, item)
            })
        })
    }

    /// Nearest live item whose copper envelope lies within `max_distance` of `point`
    pub fn item_at(&self, point: Point, max_distance: f64) -> Option<ItemId> {
        self.spatial.nearest(point, max_distance, |id| self.item(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{ItemKind, F_CU};

    fn seg(a: (i32, i32), b: (i32, i32), width: i32) -> Item {
        Item::segment(Point::new(a.0, a.1), Point::new(b.0, b.1), width, F_CU, Some(1))
    }

    #[test]
    fn test_items_share_joint_at_common_point() {
        let mut graph = ConnectivityGraph::new();
        let via = graph.add_item(Item::via(Point::new(0, 0), 800, 400, Some(1)));
        let s1 = graph.add_item(seg((0, 0), (1000, 0), 250));
        let _s2 = graph.add_item(seg((1000, 0), (2000, 0), 250));

        let joint = graph.find_joint(Point::new(0, 0), Some(1)).expect("joint at via");
        assert_eq!(joint.links(), &[via, s1]);
        assert_eq!(graph.links_at(Point::new(1000, 0), Some(1)).len(), 2);
        assert_eq!(graph.links_at(Point::new(2000, 0), Some(1)).len(), 1);
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_joints_are_split_by_net() {
        let mut graph = ConnectivityGraph::new();
        graph.add_item(Item::via(Point::new(0, 0), 800, 400, Some(1)));
        graph.add_item(Item::via(Point::new(0, 0), 800, 400, Some(2)));
        assert_eq!(graph.links_at(Point::new(0, 0), Some(1)).len(), 1);
        assert_eq!(graph.links_at(Point::new(0, 0), Some(2)).len(), 1);
        assert!(graph.links_at(Point::new(0, 0), None).is_empty());
    }

    #[test]
    fn test_remove_makes_handle_stale() {
        let mut graph = ConnectivityGraph::new();
        let s1 = graph.add_item(seg((0, 0), (1000, 0), 250));
        let removed = graph.remove_item(s1).expect("live item");
        assert_eq!(removed.kind(), ItemKind::Segment);
        assert!(!graph.contains(s1));
        assert!(graph.is_empty());
        assert!(graph.find_joint(Point::new(0, 0), Some(1)).is_none());
        assert!(graph.links_at(Point::new(1000, 0), Some(1)).is_empty());

        // Slot is reused with a new generation
        let s2 = graph.add_item(seg((0, 0), (500, 0), 200));
        assert_eq!(s2.index(), s1.index());
        assert_ne!(s2.generation(), s1.generation());
        assert!(graph.item(s1).is_none());
        assert!(graph.remove_item(s1).is_none());
        assert_eq!(graph.iter().count(), 1);
    }

    #[test]
    fn test_joint_layers_merge() {
        let mut graph = ConnectivityGraph::new();
        graph.add_item(Item::segment(Point::new(0, 0), Point::new(10, 0), 100, 2, None));
        graph.add_item(Item::segment(Point::new(0, 0), Point::new(0, 10), 100, 5, None));
        let joint = graph.find_joint(Point::new(0, 0), None).unwrap();
        assert_eq!(joint.layers, LayerRange::new(2, 5));
        assert_eq!(joint.key.pos, Point::new(0, 0));
        assert_eq!(joint.links().len(), 2);
    }
}

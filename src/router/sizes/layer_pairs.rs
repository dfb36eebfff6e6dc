//! Symmetric layer-pair map used for via stitching

use crate::board::{LayerId, B_CU, F_CU};
use serde::Serialize;
use std::collections::BTreeMap;

/// Layer pairs stored in both directions, ordered by layer id.
///
/// When several unrelated pairs coexist, `top`/`bottom` report the pair with
/// the smallest layer id, not the most recently added one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayerPairMap {
    pairs: BTreeMap<LayerId, LayerId>,
}

impl LayerPairMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Store a pair in both directions; argument order does not matter.
    /// A layer cannot pair with itself; such requests are ignored. A layer
    /// already paired elsewhere is unpaired first so every entry keeps its reverse.
    pub fn add(&mut self, a: LayerId, b: LayerId) {
        if a == b {
            tracing::warn!("Ignoring layer pair ({}, {}): a via needs two distinct layers", a, b);
            return;
        }
        let top = a.min(b);
        let bottom = a.max(b);
        self.unpair(top);
        self.unpair(bottom);
        self.pairs.insert(bottom, top);
        self.pairs.insert(top, bottom);
    }

    fn unpair(&mut self, layer: LayerId) {
        if let Some(old) = self.pairs.remove(&layer) {
            self.pairs.remove(&old);
        }
    }

    /// First configured layer, or front copper when empty
    pub fn top(&self) -> LayerId {
        self.pairs.keys().next().copied().unwrap_or(F_CU)
    }

    /// Partner of [`Self::top`], or back copper when empty
    pub fn bottom(&self) -> LayerId {
        self.pairs.values().next().copied().unwrap_or(B_CU)
    }

    /// Layer paired with `layer`, if any
    pub fn paired(&self, layer: LayerId) -> Option<LayerId> {
        self.pairs.get(&layer).copied()
    }

    /// Number of directed entries; always even
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Number of unordered pairs
    pub fn pair_count(&self) -> usize {
        self.pairs.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LayerId, LayerId)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_defaults_to_outer_layers() {
        let map = LayerPairMap::new();
        assert_eq!(map.top(), F_CU);
        assert_eq!(map.bottom(), B_CU);
        assert!(map.is_empty());
    }

    #[test]
    fn test_add_is_order_independent() {
        let mut a = LayerPairMap::new();
        let mut b = LayerPairMap::new();
        a.add(3, 1);
        b.add(1, 3);
        assert_eq!(a, b);
        assert_eq!(a.top(), 1);
        assert_eq!(a.bottom(), 3);
        assert_eq!(a.paired(3), Some(1));
        assert_eq!(a.paired(2), None);
    }

    #[test]
    fn test_readd_is_idempotent() {
        let mut map = LayerPairMap::new();
        map.add(1, 2);
        map.add(2, 1);
        map.add(1, 2);
        assert_eq!(map.len(), 2);
        assert_eq!(map.pair_count(), 1);
    }

    #[test]
    fn test_overlapping_pair_replaces_old_partner() {
        let mut map = LayerPairMap::new();
        map.add(1, 3);
        map.add(3, 5);
        assert_eq!(map.paired(1), None);
        assert_eq!(map.paired(3), Some(5));
        assert_eq!(map.paired(5), Some(3));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_self_pair_ignored() {
        let mut map = LayerPairMap::new();
        map.add(7, 7);
        assert!(map.is_empty());
    }

    #[test]
    fn test_smallest_key_wins() {
        let mut map = LayerPairMap::new();
        map.add(4, 5);
        map.add(2, 3);
        assert_eq!((map.top(), map.bottom()), (2, 3));
        assert_eq!(map.pair_count(), 2);
    }
}

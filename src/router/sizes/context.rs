//! Routing context: where a routing gesture starts

use crate::board::{ConnectivityGraph, ItemId, NetId, Point};

/// Input to sizing resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoutingContext {
    /// Item the route starts from or continues
    pub anchor: Option<ItemId>,
    /// Net to route when there is no anchor; ignored when an anchor is given
    pub net: Option<NetId>,
}

impl RoutingContext {
    pub fn from_anchor(anchor: ItemId) -> Self {
        Self { anchor: Some(anchor), net: None }
    }

    pub fn from_net(net: NetId) -> Self {
        Self { anchor: None, net: Some(net) }
    }

    /// Context for a click at `point`: the nearest item within `radius` becomes the anchor
    pub fn pick(graph: &ConnectivityGraph, point: Point, radius: f64, net: Option<NetId>) -> Self {
        Self {
            anchor: graph.item_at(point, radius),
            net,
        }
    }
}

//! Core board primitives used by the router
//!
//! Lengths and coordinates are integer nanometres.

use serde::{Deserialize, Serialize};

/// Copper layer identifier
pub type LayerId = i32;

/// Net identifier
pub type NetId = u32;

/// Front outer copper layer
pub const F_CU: LayerId = 0;

/// Back outer copper layer
pub const B_CU: LayerId = 31;

/// A 2D board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub(crate) fn as_f64(&self) -> [f64; 2] {
        [self.x as f64, self.y as f64]
    }
}

/// Inclusive span of copper layers an item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerRange {
    pub start: LayerId,
    pub end: LayerId,
}

impl LayerRange {
    /// Span between two layers in either order
    pub fn new(a: LayerId, b: LayerId) -> Self {
        Self { start: a.min(b), end: a.max(b) }
    }

    /// Single-layer span
    pub fn single(layer: LayerId) -> Self {
        Self { start: layer, end: layer }
    }

    /// Through-board span from front to back copper
    pub fn through() -> Self {
        Self::new(F_CU, B_CU)
    }
}

/// Item kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Via,
    Solid,
    Segment,
    Arc,
}

/// Kind-specific item geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Shape {
    /// Plated through hole connecting copper layers
    Via { pos: Point, diameter: i32, drill: i32 },
    /// Anchor pad (component pad or other fixed copper)
    Solid { pos: Point },
    /// Straight trace segment
    Segment { a: Point, b: Point, width: i32 },
    /// Arc trace; `mid` lies on the arc
    Arc { start: Point, mid: Point, end: Point, width: i32 },
}

/// A routable board item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub shape: Shape,
    pub layers: LayerRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net: Option<NetId>,
}

impl Item {
    pub fn via(pos: Point, diameter: i32, drill: i32, net: Option<NetId>) -> Self {
        Self {
            shape: Shape::Via { pos, diameter, drill },
            layers: LayerRange::through(),
            net,
        }
    }

    pub fn solid(pos: Point, layers: LayerRange, net: Option<NetId>) -> Self {
        Self { shape: Shape::Solid { pos }, layers, net }
    }

    pub fn segment(a: Point, b: Point, width: i32, layer: LayerId, net: Option<NetId>) -> Self {
        Self {
            shape: Shape::Segment { a, b, width },
            layers: LayerRange::single(layer),
            net,
        }
    }

    pub fn arc(start: Point, mid: Point, end: Point, width: i32, layer: LayerId, net: Option<NetId>) -> Self {
        Self {
            shape: Shape::Arc { start, mid, end, width },
            layers: LayerRange::single(layer),
            net,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self.shape {
            Shape::Via { .. } => ItemKind::Via,
            Shape::Solid { .. } => ItemKind::Solid,
            Shape::Segment { .. } => ItemKind::Segment,
            Shape::Arc { .. } => ItemKind::Arc,
        }
    }

    /// Trace width for segments and arcs
    pub fn width(&self) -> Option<i32> {
        match self.shape {
            Shape::Segment { width, .. } | Shape::Arc { width, .. } => Some(width),
            _ => None,
        }
    }

    /// Points at which this item joins the connectivity graph
    pub fn anchors(&self) -> Vec<Point> {
        match self.shape {
            Shape::Via { pos, .. } | Shape::Solid { pos } => vec![pos],
            Shape::Segment { a, b, .. } if a == b => vec![a],
            Shape::Segment { a, b, .. } => vec![a, b],
            Shape::Arc { start, end, .. } if start == end => vec![start],
            Shape::Arc { start, end, .. } => vec![start, end],
        }
    }

    /// Axis-aligned bounds [min_x, min_y, max_x, max_y], inflated by half the copper size
    pub fn bounds(&self) -> [f64; 4] {
        let (points, half): (Vec<Point>, f64) = match self.shape {
            Shape::Via { pos, diameter, .. } => (vec![pos], diameter as f64 / 2.0),
            Shape::Solid { pos } => (vec![pos], 0.0),
            Shape::Segment { a, b, width } => (vec![a, b], width as f64 / 2.0),
            Shape::Arc { start, mid, end, width } => (vec![start, mid, end], width as f64 / 2.0),
        };

        let mut bounds = [f64::MAX, f64::MAX, f64::MIN, f64::MIN];
        for p in points {
            let [x, y] = p.as_f64();
            bounds[0] = bounds[0].min(x - half);
            bounds[1] = bounds[1].min(y - half);
            bounds[2] = bounds[2].max(x + half);
            bounds[3] = bounds[3].max(y + half);
        }
        bounds
    }
}

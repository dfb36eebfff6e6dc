//! Sizing and net-class resolution for an interactive PCB router
//!
//! Given the item a route starts from (a via, pad or trace) and its net,
//! [`SizesSettings::init`] decides the track width, via size and
//! differential-pair geometry for the next routing operation. The snapshot
//! also carries the layer pair used when the router drops a via.
//!
//! ```
//! use pns_sizes::{ConnectivityGraph, Item, Point, RoutingContext, RulesConfig, SizesSettings, SizingInputs, F_CU};
//!
//! let mut graph = ConnectivityGraph::new();
//! let via = graph.add_item(Item::via(Point::new(0, 0), 800_000, 400_000, Some(1)));
//! graph.add_item(Item::segment(Point::new(0, 0), Point::new(1_000_000, 0), 180_000, F_CU, Some(1)));
//!
//! let mut rules = RulesConfig::default();
//! rules.design.use_connected_track_width = true;
//!
//! let mut sizes = SizesSettings::new();
//! sizes.init(&SizingInputs::new(&graph, &rules), &RoutingContext::from_anchor(via)).unwrap();
//! assert_eq!(sizes.track_width(), 180_000);
//! ```

pub mod board;
pub mod rules;
pub mod router;

pub use board::{
    ConnectivityGraph, Item, ItemId, ItemKind, LayerId, LayerRange, NetId, NetTable, Point, Shape,
    B_CU, F_CU,
};
pub use rules::{DesignSettings, DiffPairDimension, NetClass, NetClasses, RulesConfig};
pub use router::sizes::{
    inherit_track_width, LayerPairMap, RoutingContext, SizeSource, SizesSettings, SizingError,
    SizingInputs, ViaType,
};

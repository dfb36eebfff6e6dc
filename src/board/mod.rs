//! Board model queried by the router sizing engine
//!
//! The sizing engine only reads from these types; the interactive router
//! owns and edits them.
//!
//! # Submodules
//! - `types` - Points, layers, item shapes
//! - `graph` - Item arena and position-keyed joints
//! - `spatial` - R-tree picking of the item under a point
//! - `nets` - Net id to net-class assignment

mod types;
mod graph;
mod spatial;
mod nets;

pub use types::{
    Point,
    LayerId,
    NetId,
    LayerRange,
    ItemKind,
    Shape,
    Item,
    F_CU,
    B_CU,
};

pub use graph::{ConnectivityGraph, ItemId, Joint, JointKey};

pub use spatial::IndexedItem;

pub use nets::{NetInfo, NetTable};

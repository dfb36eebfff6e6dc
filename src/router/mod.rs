//! Interactive router support
//!
//! # Submodules
//! - `sizes` - Sizing and net-class resolution for routing gestures

pub mod sizes;

pub use sizes::{
    SizesSettings,
    SizeSource,
    ViaType,
    SizingInputs,
    RoutingContext,
    SizingError,
    LayerPairMap,
};

//! Router sizing: resolves track width, via size, diff-pair geometry and the
//! via layer pair for the next routing operation.
//!
//! Track width precedence, highest first:
//! 1. width of the narrowest trace already connected at the anchor
//!    (`use_connected_track_width`)
//! 2. the net class width (`use_net_class_track`)
//! 3. the design settings' current width
//!
//! Vias come from the net class or the current values. Diff pairs come from
//! the net class, the custom overrides, or the selected preset.
//!
//! # Submodules
//! - `settings` - The sizing snapshot and its accessors
//! - `resolve` - Net class lookup, width inheritance, precedence
//! - `layer_pairs` - Symmetric layer-pair map
//! - `context` - Routing start context
//! - `error` - Contract violations

mod settings;
mod resolve;
mod layer_pairs;
mod context;
mod error;

pub use settings::{SizesSettings, SizeSource, ViaType};
pub use resolve::{SizingInputs, inherit_track_width};
pub use layer_pairs::LayerPairMap;
pub use context::RoutingContext;
pub use error::SizingError;

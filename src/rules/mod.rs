//! Routing rules: net classes and board design settings
//!
//! # Submodules
//! - `net_class` - Net classes and the class repository
//! - `design_settings` - Current sizes, diff-pair presets, source flags
//! - `config` - JSON configuration loading

mod net_class;
mod design_settings;
mod config;

pub use net_class::{NetClass, NetClasses, DEFAULT_NET_CLASS};
pub use design_settings::{DesignSettings, DiffPairDimension, PresetLookup};
pub use config::RulesConfig;

//! Board design settings consulted by the router

use serde::{Deserialize, Serialize};

/// Preset differential-pair dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffPairDimension {
    pub width: i32,
    pub gap: i32,
    pub via_gap: i32,
}

impl DiffPairDimension {
    pub const fn new(width: i32, gap: i32, via_gap: i32) -> Self {
        Self { width, gap, via_gap }
    }
}

/// Global "current" sizes, preset lists and the flags that pick a sizing source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Inherit the width of traces already connected at the start point
    pub use_connected_track_width: bool,
    pub use_net_class_track: bool,
    pub use_net_class_via: bool,
    pub use_net_class_diff_pair: bool,
    pub use_custom_diff_pair_dimensions: bool,

    pub current_track_width: i32,
    pub current_via_diameter: i32,
    pub current_via_drill: i32,
    pub current_diff_pair: DiffPairDimension,

    pub custom_diff_pair: DiffPairDimension,

    /// Preset diff-pair list and the selected entry
    pub diff_pair_presets: Vec<DiffPairDimension>,
    pub diff_pair_index: usize,
}

impl Default for DesignSettings {
    fn default() -> Self {
        let board_default = DiffPairDimension::new(200_000, 250_000, 250_000);
        Self {
            use_connected_track_width: false,
            use_net_class_track: true,
            use_net_class_via: true,
            use_net_class_diff_pair: true,
            use_custom_diff_pair_dimensions: false,
            current_track_width: 250_000,
            current_via_diameter: 800_000,
            current_via_drill: 400_000,
            current_diff_pair: board_default,
            custom_diff_pair: board_default,
            diff_pair_presets: vec![board_default],
            diff_pair_index: 0,
        }
    }
}

/// How a preset lookup was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetLookup {
    Exact(DiffPairDimension),
    /// Index past the end; the last preset was used
    Clamped { requested: usize, used: usize, dims: DiffPairDimension },
    /// Preset list is empty
    Empty,
}

impl DesignSettings {
    /// Preset at the selected index, clamping out-of-range indices to the last entry
    pub fn selected_diff_pair_preset(&self) -> PresetLookup {
        let requested = self.diff_pair_index;
        match self.diff_pair_presets.get(requested) {
            Some(dims) => PresetLookup::Exact(*dims),
            None => match self.diff_pair_presets.last() {
                Some(dims) => PresetLookup::Clamped {
                    requested,
                    used: self.diff_pair_presets.len() - 1,
                    dims: *dims,
                },
                None => PresetLookup::Empty,
            },
        }
    }
}

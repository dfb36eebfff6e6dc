//! Sizing snapshot consumed by the router for one routing operation

use super::layer_pairs::LayerPairMap;
use crate::board::LayerId;
use crate::rules::DesignSettings;
use serde::Serialize;

/// Via construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ViaType {
    #[default]
    Through,
    BlindBuried,
    Micro,
}

/// Rule that produced a resolved value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SizeSource {
    /// Inherited from traces connected at the anchor
    Connected,
    NetClass,
    Custom,
    Preset,
    /// Design settings' current value
    #[default]
    Current,
    /// Set by hand through a setter
    Explicit,
}

/// Resolved track, via and diff-pair sizes plus the layer-pair map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizesSettings {
    pub(super) track_width: i32,
    pub(super) via_diameter: i32,
    pub(super) via_drill: i32,
    pub(super) diff_pair_width: i32,
    pub(super) diff_pair_gap: i32,
    pub(super) diff_pair_via_gap: i32,
    pub(super) diff_pair_via_gap_same_as_trace_gap: bool,
    pub(super) via_type: ViaType,
    pub(super) layer_pairs: LayerPairMap,

    pub(super) track_width_source: SizeSource,
    pub(super) via_source: SizeSource,
    pub(super) diff_pair_source: SizeSource,
}

impl Default for SizesSettings {
    fn default() -> Self {
        Self {
            track_width: 155_000, // 6.1 mil
            via_diameter: 600_000,
            via_drill: 250_000,
            diff_pair_width: 125_000,
            diff_pair_gap: 180_000,
            diff_pair_via_gap: 180_000,
            diff_pair_via_gap_same_as_trace_gap: false,
            via_type: ViaType::Through,
            layer_pairs: LayerPairMap::new(),
            track_width_source: SizeSource::Current,
            via_source: SizeSource::Current,
            diff_pair_source: SizeSource::Current,
        }
    }
}

impl SizesSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the design settings' current values, bypassing net-aware resolution.
    /// Layer pairs, via type and the via-gap flag are left alone.
    pub fn import_current(&mut self, settings: &DesignSettings) {
        self.track_width = settings.current_track_width;
        self.via_diameter = settings.current_via_diameter;
        self.via_drill = settings.current_via_drill;
        self.diff_pair_width = settings.current_diff_pair.width;
        self.diff_pair_gap = settings.current_diff_pair.gap;
        self.diff_pair_via_gap = settings.current_diff_pair.via_gap;

        self.track_width_source = SizeSource::Current;
        self.via_source = SizeSource::Current;
        self.diff_pair_source = SizeSource::Current;

        tracing::debug!(
            "Imported current sizes: track {} via {}/{} diff pair {}/{}/{}",
            self.track_width,
            self.via_diameter,
            self.via_drill,
            self.diff_pair_width,
            self.diff_pair_gap,
            self.diff_pair_via_gap
        );
    }

    pub fn track_width(&self) -> i32 {
        self.track_width
    }

    pub fn set_track_width(&mut self, width: i32) {
        self.track_width = width;
        self.track_width_source = SizeSource::Explicit;
    }

    pub fn via_diameter(&self) -> i32 {
        self.via_diameter
    }

    pub fn set_via_diameter(&mut self, diameter: i32) {
        self.via_diameter = diameter;
        self.via_source = SizeSource::Explicit;
    }

    pub fn via_drill(&self) -> i32 {
        self.via_drill
    }

    pub fn set_via_drill(&mut self, drill: i32) {
        self.via_drill = drill;
        self.via_source = SizeSource::Explicit;
    }

    pub fn diff_pair_width(&self) -> i32 {
        self.diff_pair_width
    }

    pub fn set_diff_pair_width(&mut self, width: i32) {
        self.diff_pair_width = width;
        self.diff_pair_source = SizeSource::Explicit;
    }

    pub fn diff_pair_gap(&self) -> i32 {
        self.diff_pair_gap
    }

    pub fn set_diff_pair_gap(&mut self, gap: i32) {
        self.diff_pair_gap = gap;
        self.diff_pair_source = SizeSource::Explicit;
    }

    /// Via gap of the pair; follows the trace gap when
    /// [`Self::diff_pair_via_gap_same_as_trace_gap`] is set
    pub fn diff_pair_via_gap(&self) -> i32 {
        if self.diff_pair_via_gap_same_as_trace_gap {
            self.diff_pair_gap
        } else {
            self.diff_pair_via_gap
        }
    }

    pub fn set_diff_pair_via_gap(&mut self, gap: i32) {
        self.diff_pair_via_gap = gap;
        self.diff_pair_source = SizeSource::Explicit;
    }

    pub fn diff_pair_via_gap_same_as_trace_gap(&self) -> bool {
        self.diff_pair_via_gap_same_as_trace_gap
    }

    pub fn set_diff_pair_via_gap_same_as_trace_gap(&mut self, enable: bool) {
        self.diff_pair_via_gap_same_as_trace_gap = enable;
    }

    pub fn via_type(&self) -> ViaType {
        self.via_type
    }

    pub fn set_via_type(&mut self, via_type: ViaType) {
        self.via_type = via_type;
    }

    pub fn track_width_source(&self) -> SizeSource {
        self.track_width_source
    }

    pub fn via_source(&self) -> SizeSource {
        self.via_source
    }

    pub fn diff_pair_source(&self) -> SizeSource {
        self.diff_pair_source
    }

    pub fn clear_layer_pairs(&mut self) {
        self.layer_pairs.clear();
    }

    pub fn add_layer_pair(&mut self, a: LayerId, b: LayerId) {
        self.layer_pairs.add(a, b);
    }

    /// Top layer of the first configured pair, front copper when none
    pub fn layer_top(&self) -> LayerId {
        self.layer_pairs.top()
    }

    /// Bottom layer of the first configured pair, back copper when none
    pub fn layer_bottom(&self) -> LayerId {
        self.layer_pairs.bottom()
    }

    pub fn paired_layer(&self, layer: LayerId) -> Option<LayerId> {
        self.layer_pairs.paired(layer)
    }

    pub fn layer_pair_count(&self) -> usize {
        self.layer_pairs.pair_count()
    }

    pub fn layer_pairs(&self) -> &LayerPairMap {
        &self.layer_pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DiffPairDimension;

    #[test]
    fn test_import_current_copies_scalars() {
        let settings = DesignSettings {
            current_track_width: 300_000,
            current_via_diameter: 700_000,
            current_via_drill: 300_000,
            current_diff_pair: DiffPairDimension::new(150_000, 160_000, 170_000),
            ..DesignSettings::default()
        };
        let mut sizes = SizesSettings::new();
        sizes.add_layer_pair(1, 2);
        sizes.set_via_type(ViaType::Micro);
        sizes.import_current(&settings);

        assert_eq!(sizes.track_width(), 300_000);
        assert_eq!(sizes.via_diameter(), 700_000);
        assert_eq!(sizes.via_drill(), 300_000);
        assert_eq!(sizes.diff_pair_width(), 150_000);
        assert_eq!(sizes.diff_pair_gap(), 160_000);
        assert_eq!(sizes.diff_pair_via_gap(), 170_000);
        assert_eq!(sizes.layer_top(), 1);
        assert_eq!(sizes.via_type(), ViaType::Micro);
        assert_eq!(sizes.track_width_source(), SizeSource::Current);
    }

    #[test]
    fn test_via_gap_follows_trace_gap() {
        let mut sizes = SizesSettings::new();
        sizes.set_diff_pair_gap(100);
        sizes.set_diff_pair_via_gap(400);
        assert_eq!(sizes.diff_pair_via_gap(), 400);
        sizes.set_diff_pair_via_gap_same_as_trace_gap(true);
        assert_eq!(sizes.diff_pair_via_gap(), 100);
        assert_eq!(sizes.diff_pair_source(), SizeSource::Explicit);
    }
}

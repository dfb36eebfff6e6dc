//! Sizing resolution: net class lookup, width inheritance and source precedence

use super::context::RoutingContext;
use super::error::SizingError;
use super::settings::{SizeSource, SizesSettings};
use crate::board::{ConnectivityGraph, Item, ItemId, ItemKind, NetId, NetTable, Shape};
use crate::rules::{DesignSettings, DiffPairDimension, NetClass, NetClasses, PresetLookup, RulesConfig};

/// Read-only inputs of one resolution
#[derive(Debug, Clone, Copy)]
pub struct SizingInputs<'a> {
    pub graph: &'a ConnectivityGraph,
    pub nets: &'a NetTable,
    pub net_classes: &'a NetClasses,
    pub design: &'a DesignSettings,
}

impl<'a> SizingInputs<'a> {
    pub fn new(graph: &'a ConnectivityGraph, rules: &'a RulesConfig) -> Self {
        Self {
            graph,
            nets: &rules.nets,
            net_classes: &rules.net_classes,
            design: &rules.design,
        }
    }
}

/// Width of the narrowest trace already connected at `anchor`, or 0 when
/// there is nothing to inherit from.
///
/// A segment anchor gives its own width. Vias and pads look at the joint at
/// their position and take the minimum width over the other segments linked
/// there.
pub fn inherit_track_width(graph: &ConnectivityGraph, anchor: ItemId) -> Result<i32, SizingError> {
    let item = graph.item(anchor).ok_or(SizingError::DetachedAnchor(anchor))?;

    let pos = match item.shape {
        Shape::Segment { width, .. } => return Ok(width),
        Shape::Via { pos, .. } | Shape::Solid { pos } => pos,
        Shape::Arc { .. } => return Ok(0),
    };

    // A live via or pad is always linked at its own position
    let links = graph.links_at(pos, item.net);

    let narrowest = links
        .iter()
        .filter(|id| **id != anchor)
        .filter_map(|id| graph.item(*id))
        .filter(|linked| linked.kind() == ItemKind::Segment)
        .filter_map(Item::width)
        .min();

    tracing::trace!(
        "Joint at ({}, {}) has {} links, narrowest segment {:?}",
        pos.x,
        pos.y,
        links.len(),
        narrowest
    );

    Ok(narrowest.unwrap_or(0))
}

impl SizesSettings {
    /// Resolve sizes for a routing gesture starting from `ctx`.
    ///
    /// On error the previous snapshot is kept. The layer-pair map is never
    /// touched.
    pub fn init(&mut self, inputs: &SizingInputs<'_>, ctx: &RoutingContext) -> Result<(), SizingError> {
        let design = inputs.design;

        let net = resolve_net(inputs.graph, ctx)?;
        let class = inputs.net_classes.class_for_net(inputs.nets, net);
        tracing::debug!("Resolving sizes for net {:?} with net class '{}'", net, class.name);

        let (track_width, track_width_source) = resolve_track_width(inputs, ctx, class)?;

        let (via_diameter, via_drill, via_source) = if design.use_net_class_via {
            (class.via_diameter, class.via_drill, SizeSource::NetClass)
        } else {
            (design.current_via_diameter, design.current_via_drill, SizeSource::Current)
        };

        let (diff_pair, diff_pair_source) = resolve_diff_pair(design, class);

        self.track_width = track_width;
        self.track_width_source = track_width_source;
        self.via_diameter = via_diameter;
        self.via_drill = via_drill;
        self.via_source = via_source;
        self.diff_pair_width = diff_pair.width;
        self.diff_pair_gap = diff_pair.gap;
        self.diff_pair_via_gap = diff_pair.via_gap;
        self.diff_pair_source = diff_pair_source;

        tracing::debug!(
            "Resolved track {} ({:?}), via {}/{} ({:?}), diff pair {}/{}/{} ({:?})",
            self.track_width,
            self.track_width_source,
            self.via_diameter,
            self.via_drill,
            self.via_source,
            self.diff_pair_width,
            self.diff_pair_gap,
            self.diff_pair_via_gap,
            self.diff_pair_source
        );

        Ok(())
    }
}

/// Anchor's net when there is an anchor, otherwise the explicit net
fn resolve_net(graph: &ConnectivityGraph, ctx: &RoutingContext) -> Result<Option<NetId>, SizingError> {
    match ctx.anchor {
        Some(anchor) => graph
            .item(anchor)
            .map(|item| item.net)
            .ok_or(SizingError::DetachedAnchor(anchor)),
        None => Ok(ctx.net),
    }
}

fn resolve_track_width(
    inputs: &SizingInputs<'_>,
    ctx: &RoutingContext,
    class: &NetClass,
) -> Result<(i32, SizeSource), SizingError> {
    let design = inputs.design;

    if design.use_connected_track_width {
        if let Some(anchor) = ctx.anchor {
            let width = inherit_track_width(inputs.graph, anchor)?;
            if width != 0 {
                return Ok((width, SizeSource::Connected));
            }
        }
    }

    if design.use_net_class_track && class.track_width != 0 {
        return Ok((class.track_width, SizeSource::NetClass));
    }

    Ok((design.current_track_width, SizeSource::Current))
}

fn resolve_diff_pair(design: &DesignSettings, class: &NetClass) -> (DiffPairDimension, SizeSource) {
    if design.use_net_class_diff_pair {
        let dims = DiffPairDimension::new(class.diff_pair_width, class.diff_pair_gap, class.diff_pair_via_gap);
        return (dims, SizeSource::NetClass);
    }

    if design.use_custom_diff_pair_dimensions {
        return (design.custom_diff_pair, SizeSource::Custom);
    }

    match design.selected_diff_pair_preset() {
        PresetLookup::Exact(dims) => (dims, SizeSource::Preset),
        PresetLookup::Clamped { requested, used, dims } => {
            tracing::warn!(
                "Diff pair preset index {} out of range, using preset {}",
                requested,
                used
            );
            (dims, SizeSource::Preset)
        }
        PresetLookup::Empty => {
            tracing::warn!("No diff pair presets configured, using current diff pair dimensions");
            (design.current_diff_pair, SizeSource::Current)
        }
    }
}

use std::collections::BTreeMap;

use foundation::math::Vec2;
use foundation::time::Time;
use layers::markers::{MarkersLayer, MarkersLayerSnapshot, Projector};
use layers::regions::{RegionsLayer, RegionsLayerSnapshot};
use layers::tooltip::{Tooltip, TooltipStyle, tooltip_for};
use scene::World;
use scene::entity::EntityId;
use scene::interaction::{HoverState, RegionPointerState};

/// Everything one rendered frame needs, fully resolved to screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFrame {
    pub viewport_px: Vec2,
    pub background: String,
    pub regions: RegionsLayerSnapshot,
    pub markers: MarkersLayerSnapshot,
    pub tooltip: Option<Tooltip>,
    /// Visible failure banner, e.g. when the boundary fetch failed.
    pub notice: Option<String>,
}

/// Composes a frame from the world and the current interaction state.
pub fn compose_frame<P: Projector>(
    world: &World,
    projector: &P,
    viewport_px: Vec2,
    time: Time,
    hover: &HoverState,
    region_states: &BTreeMap<EntityId, RegionPointerState>,
    notice: Option<String>,
) -> MapFrame {
    let regions = RegionsLayer::new(1).extract(world, projector, region_states);
    let markers = MarkersLayer::new(2).extract(world, projector, time);
    let tooltip = tooltip_for(hover, &TooltipStyle::default());

    MapFrame {
        viewport_px,
        background: "#000".to_string(),
        regions,
        markers,
        tooltip,
        notice,
    }
}

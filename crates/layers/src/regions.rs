use std::collections::BTreeMap;

use foundation::math::Vec2;
use scene::interaction::RegionPointerState;
use scene::picking::RegionTarget;
use scene::{World, entity::EntityId};

use crate::layer::{Layer, LayerId};
use crate::markers::Projector;
use crate::symbology::{RegionStyle, RegionTheme};

/// One drawable boundary region with its resolved interaction style.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShape {
    pub entity: EntityId,
    pub name: String,
    pub rings_px: Vec<Vec<Vec2>>,
    pub style: RegionStyle,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RegionsLayerSnapshot {
    pub shapes: Vec<RegionShape>,
}

impl RegionsLayerSnapshot {
    pub fn pick_targets(&self) -> Vec<RegionTarget> {
        self.shapes
            .iter()
            .map(|s| RegionTarget {
                entity: s.entity,
                rings_px: s.rings_px.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionsLayer {
    id: LayerId,
    pub theme: RegionTheme,
}

impl RegionsLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            theme: RegionTheme::default(),
        }
    }

    /// Extracts drawable regions in ascending entity order.
    ///
    /// `pointer_states` carries the regions currently hovered or pressed;
    /// absent entries mean the default style.
    pub fn extract<P: Projector>(
        &self,
        world: &World,
        projector: &P,
        pointer_states: &BTreeMap<EntityId, RegionPointerState>,
    ) -> RegionsLayerSnapshot {
        let mut shapes = Vec::new();
        for (entity, component) in world.regions_by_entity() {
            let Some(boundary) = world.boundary(component.id) else {
                continue;
            };
            let name = world
                .properties(entity)
                .map(|p| p.name.clone())
                .unwrap_or_default();

            let rings_px = boundary
                .rings
                .iter()
                .map(|ring| ring.iter().map(|p| projector.project(*p)).collect())
                .collect();

            let state = pointer_states.get(&entity).copied().unwrap_or_default();
            shapes.push(RegionShape {
                entity,
                name,
                rings_px,
                style: self.theme.style_for(state),
            });
        }

        RegionsLayerSnapshot { shapes }
    }
}

impl Layer for RegionsLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}

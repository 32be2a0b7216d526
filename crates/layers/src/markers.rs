use foundation::geo::LonLat;
use foundation::math::{MercatorCamera, Vec2};
use foundation::time::Time;
use scene::picking::MarkerTarget;
use scene::{World, entity::EntityId};

use crate::layer::{Layer, LayerId};
use crate::pulse::{CORE_PULSE, GLOW_PULSE, Pulse, PulseSample};
use crate::symbology::{RankEncoding, encode_rank};

/// Screen projection seam supplied by the view.
pub trait Projector {
    fn project(&self, position: LonLat) -> Vec2;
}

impl<T: Projector + ?Sized> Projector for &T {
    fn project(&self, position: LonLat) -> Vec2 {
        (**self).project(position)
    }
}

impl Projector for MercatorCamera {
    fn project(&self, position: LonLat) -> Vec2 {
        MercatorCamera::project(self, position)
    }
}

/// One drawable marker: projected position, rank visuals, and the current
/// animation samples for its two circles.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSprite {
    pub entity: EntityId,
    pub name: String,
    pub center_px: Vec2,
    pub encoding: RankEncoding,
    pub glow: PulseSample,
    pub core: PulseSample,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkersLayerSnapshot {
    pub sprites: Vec<MarkerSprite>,
}

impl MarkersLayerSnapshot {
    /// Pick targets for the snapshot, using the glow disc as the hit area.
    pub fn pick_targets(&self) -> Vec<MarkerTarget> {
        self.sprites
            .iter()
            .map(|s| MarkerTarget {
                entity: s.entity,
                center_px: s.center_px,
                radius_px: s.encoding.glow_radius,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkersLayer {
    id: LayerId,
    pub glow_pulse: Pulse,
    pub core_pulse: Pulse,
}

impl MarkersLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            glow_pulse: GLOW_PULSE,
            core_pulse: CORE_PULSE,
        }
    }

    /// Extracts drawable markers in ascending entity order.
    ///
    /// Entities without a name are skipped: the name is the hover label and
    /// the mark address, so an anonymous marker has no interactive meaning.
    pub fn extract<P: Projector>(
        &self,
        world: &World,
        projector: &P,
        time: Time,
    ) -> MarkersLayerSnapshot {
        let glow = self.glow_pulse.sample(time);
        let core = self.core_pulse.sample(time);

        let mut sprites = Vec::new();
        for (entity, placement, ranking) in world.markers_by_entity() {
            let Some(props) = world.properties(entity) else {
                continue;
            };

            sprites.push(MarkerSprite {
                entity,
                name: props.name.clone(),
                center_px: projector.project(placement.position),
                encoding: encode_rank(ranking.rank),
                glow,
                core,
            });
        }

        MarkersLayerSnapshot { sprites }
    }
}

impl Layer for MarkersLayer {
    fn id(&self) -> LayerId {
        self.id
    }
}

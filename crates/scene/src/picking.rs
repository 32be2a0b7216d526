use foundation::math::Vec2;

use crate::entity::EntityId;

/// A marker's screen-space footprint: its projected center and the radius
/// within which pointer contact counts as a hit (normally the glow radius,
/// the larger of the two drawn circles).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerTarget {
    pub entity: EntityId,
    pub center_px: Vec2,
    pub radius_px: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub entity: EntityId,
    pub distance_px: f64,
}

/// Deterministic screen-space picking for marker targets.
///
/// Ordering contract:
/// - Only targets whose disc contains the pointer are considered.
/// - The smallest pointer-to-center distance wins.
/// - Distance ties break on the lower `EntityId::index()`.
pub fn pick_marker(targets: &[MarkerTarget], pointer_px: Vec2) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for target in targets {
        if target.radius_px <= 0.0 {
            continue;
        }
        let distance = target.center_px.distance(pointer_px);
        if distance > target.radius_px {
            continue;
        }

        best = match best {
            None => Some(PickHit {
                entity: target.entity,
                distance_px: distance,
            }),
            Some(current) => {
                let closer = distance < current.distance_px
                    || (distance == current.distance_px
                        && target.entity.index() < current.entity.index());
                if closer {
                    Some(PickHit {
                        entity: target.entity,
                        distance_px: distance,
                    })
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// A region's screen-space footprint: projected boundary rings.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTarget {
    pub entity: EntityId,
    pub rings_px: Vec<Vec<Vec2>>,
}

/// Picks the region containing the pointer.
///
/// Containment uses the even-odd rule over all rings, so holes punch out of
/// the outer ring. When targets overlap, the lower `EntityId::index()` wins.
pub fn pick_region(targets: &[RegionTarget], pointer_px: Vec2) -> Option<EntityId> {
    targets
        .iter()
        .filter(|t| point_in_rings(&t.rings_px, pointer_px))
        .map(|t| t.entity)
        .min_by_key(|e| e.index())
}

/// Even-odd point-in-polygon test over a set of rings.
pub fn point_in_rings(rings: &[Vec<Vec2>], point: Vec2) -> bool {
    let mut inside = false;
    for ring in rings {
        if ring.len() < 3 {
            continue;
        }
        let mut j = ring.len() - 1;
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[j];
            let crosses = (a.y > point.y) != (b.y > point.y);
            if crosses {
                let x_at_y = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if point.x < x_at_y {
                    inside = !inside;
                }
            }
            j = i;
        }
    }
    inside
}

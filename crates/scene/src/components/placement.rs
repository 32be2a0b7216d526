use foundation::geo::LonLat;

/// Geographic anchor of an entity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub position: LonLat,
}

impl Placement {
    pub fn at(position: LonLat) -> Self {
        Self { position }
    }
}

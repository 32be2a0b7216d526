use foundation::geo::LonLat;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BoundaryId(pub u32);

/// Closed administrative boundary: an outer ring plus optional holes, in
/// geographic coordinates. Rings are not required to repeat their first
/// vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub rings: Vec<Vec<LonLat>>,
}

impl Boundary {
    pub fn new(rings: Vec<Vec<LonLat>>) -> Self {
        Self { rings }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComponentBoundary {
    pub id: BoundaryId,
}

impl ComponentBoundary {
    pub fn new(id: BoundaryId) -> Self {
        Self { id }
    }
}

use crate::components::{
    Boundary, BoundaryId, ComponentBoundary, Placement, Properties, Ranking, Visibility,
};
use crate::entity::EntityId;

#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    placements: Vec<Option<Placement>>,
    properties: Vec<Option<Properties>>,
    rankings: Vec<Option<Ranking>>,
    visibility: Vec<Option<Visibility>>,
    boundary_components: Vec<Option<ComponentBoundary>>,
    boundaries: Vec<Boundary>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId(self.next_index);
        self.next_index += 1;
        self.ensure_capacity(id.index() as usize);
        id
    }

    pub fn set_placement(&mut self, entity: EntityId, placement: Placement) {
        self.ensure_capacity(entity.index() as usize);
        self.placements[entity.index() as usize] = Some(placement);
    }

    pub fn set_properties(&mut self, entity: EntityId, properties: Properties) {
        self.ensure_capacity(entity.index() as usize);
        self.properties[entity.index() as usize] = Some(properties);
    }

    pub fn set_ranking(&mut self, entity: EntityId, ranking: Ranking) {
        self.ensure_capacity(entity.index() as usize);
        self.rankings[entity.index() as usize] = Some(ranking);
    }

    pub fn set_visibility(&mut self, entity: EntityId, visibility: Visibility) {
        self.ensure_capacity(entity.index() as usize);
        self.visibility[entity.index() as usize] = Some(visibility);
    }

    pub fn add_boundary(&mut self, boundary: Boundary) -> BoundaryId {
        let id = BoundaryId(self.boundaries.len() as u32);
        self.boundaries.push(boundary);
        id
    }

    pub fn set_boundary(&mut self, entity: EntityId, component: ComponentBoundary) {
        self.ensure_capacity(entity.index() as usize);
        self.boundary_components[entity.index() as usize] = Some(component);
    }

    pub fn placement(&self, entity: EntityId) -> Option<Placement> {
        self.placements.get(entity.index() as usize).and_then(|p| *p)
    }

    pub fn properties(&self, entity: EntityId) -> Option<&Properties> {
        self.properties
            .get(entity.index() as usize)
            .and_then(|p| p.as_ref())
    }

    pub fn ranking(&self, entity: EntityId) -> Option<Ranking> {
        self.rankings.get(entity.index() as usize).and_then(|r| *r)
    }

    pub fn boundary(&self, id: BoundaryId) -> Option<&Boundary> {
        self.boundaries.get(id.0 as usize)
    }

    pub fn boundary_component(&self, entity: EntityId) -> Option<ComponentBoundary> {
        self.boundary_components
            .get(entity.index() as usize)
            .and_then(|b| *b)
    }

    /// Visible entities carrying both a placement and a ranking, in ascending
    /// entity-index order.
    pub fn markers_by_entity(&self) -> Vec<(EntityId, Placement, Ranking)> {
        let mut out = Vec::new();
        for (idx, placement) in self.placements.iter().enumerate() {
            let Some(placement) = placement else { continue };
            let Some(ranking) = self.rankings.get(idx).and_then(|r| *r) else {
                continue;
            };
            if !self.is_visible(idx) {
                continue;
            }

            out.push((EntityId(idx as u32), *placement, ranking));
        }
        out
    }

    /// Visible entities carrying a boundary, in ascending entity-index order.
    pub fn regions_by_entity(&self) -> Vec<(EntityId, ComponentBoundary)> {
        let mut out = Vec::new();
        for (idx, component) in self.boundary_components.iter().enumerate() {
            let Some(component) = component else { continue };
            if !self.is_visible(idx) {
                continue;
            }

            out.push((EntityId(idx as u32), *component));
        }
        out
    }

    fn is_visible(&self, idx: usize) -> bool {
        self.visibility
            .get(idx)
            .and_then(|v| *v)
            .map(|v| v.visible)
            .unwrap_or(true)
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.placements.len() <= idx {
            let new_len = idx + 1;
            self.placements.resize(new_len, None);
            self.properties.resize(new_len, None);
            self.rankings.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.boundary_components.resize(new_len, None);
        }
    }
}

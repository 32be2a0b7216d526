use scene::World;
use scene::components::{Boundary, ComponentBoundary, Placement, Properties, Ranking};

use crate::roster::Roster;
use crate::topology::Topology;

/// Spawns one region entity per decoded boundary feature.
pub fn ingest_topology(world: &mut World, topology: &Topology) {
    for feature in &topology.features {
        let entity = world.spawn();
        let boundary = world.add_boundary(Boundary::new(feature.rings.clone()));
        world.set_boundary(entity, ComponentBoundary::new(boundary));
        world.set_properties(entity, Properties::named(feature.name.clone()));
    }
}

/// Spawns one marker entity per ranked place, in roster order.
pub fn ingest_roster(world: &mut World, roster: &Roster) {
    for place in &roster.places {
        let entity = world.spawn();
        world.set_placement(entity, Placement::at(place.position()));
        world.set_ranking(entity, Ranking::new(place.rank));
        world.set_properties(entity, Properties::named(place.name.clone()));
    }
}

/// Builds the view scene: regions first (drawn underneath), then markers.
///
/// `topology` is optional so the scene stays buildable when the remote
/// boundary fetch failed; markers come from local configuration and render
/// either way.
pub fn build_world(roster: &Roster, topology: Option<&Topology>) -> World {
    let mut world = World::new();
    if let Some(topology) = topology {
        ingest_topology(&mut world, topology);
    }
    ingest_roster(&mut world, roster);
    world
}

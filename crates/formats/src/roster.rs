use foundation::geo::LonLat;
use scene::interaction::RosterOrder;
use serde::{Deserialize, Serialize};

/// One configured place: display name, geographic position, prominence rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlace {
    pub name: String,
    /// `[longitude, latitude]` in degrees.
    pub coordinates: [f64; 2],
    pub rank: u32,
}

impl RankedPlace {
    pub fn position(&self) -> LonLat {
        LonLat::new(self.coordinates[0], self.coordinates[1])
    }
}

/// Injected, immutable marker configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    pub places: Vec<RankedPlace>,
}

#[derive(Debug)]
pub enum RosterError {
    Parse(serde_json::Error),
    DuplicateName(String),
    InvalidRank { name: String },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Parse(e) => write!(f, "roster parse error: {e}"),
            RosterError::DuplicateName(name) => {
                write!(f, "duplicate place name: {name}")
            }
            RosterError::InvalidRank { name } => {
                write!(f, "place {name} has rank 0 (ranks start at 1)")
            }
        }
    }
}

impl std::error::Error for RosterError {}

impl Roster {
    pub fn from_json_str(payload: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(payload).map_err(RosterError::Parse)?;
        roster.validate()?;
        Ok(roster)
    }

    /// Names are identity (hover labels, mark requests), so they must be
    /// unique; ranks start at 1.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.places.len());
        for place in &self.places {
            if place.rank == 0 {
                return Err(RosterError::InvalidRank {
                    name: place.name.clone(),
                });
            }
            if seen.contains(&place.name.as_str()) {
                return Err(RosterError::DuplicateName(place.name.clone()));
            }
            seen.push(place.name.as_str());
        }
        Ok(())
    }

    /// Listing order for the given toggle state. Total and stable: rank ties
    /// break on name, name ties on rank.
    pub fn sorted(&self, order: RosterOrder) -> Vec<RankedPlace> {
        let mut out = self.places.clone();
        match order {
            RosterOrder::ByRank => {
                out.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
            }
            RosterOrder::ByName => {
                out.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.rank.cmp(&b.rank)));
            }
        }
        out
    }
}

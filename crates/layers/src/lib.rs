pub mod layer;
pub mod markers;
pub mod pulse;
pub mod regions;
pub mod symbology;
pub mod tooltip;

pub use layer::*;

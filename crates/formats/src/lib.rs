pub mod roster;
pub mod scene_ingest;
pub mod topology;

pub use roster::*;
pub use scene_ingest::*;
pub use topology::*;

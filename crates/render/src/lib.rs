pub mod frame;
pub mod svg;

pub use frame::*;
pub use svg::*;

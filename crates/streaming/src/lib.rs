pub mod marks;
pub mod pipeline;
pub mod residency;
pub mod source;

pub use marks::*;
pub use pipeline::*;
pub use residency::*;
pub use source::*;

pub mod color;
pub mod document;
pub mod geometry;
pub mod space_plan;

pub use color::Color;
pub use document::PageSize;
pub use geometry::{Position, Size};
pub use space_plan::{SpacePlan, SpacePlanKind};

mod column;
mod empty;
mod padding;
mod page_break;
mod rectangle;
mod svg_image;

pub use column::Column;
pub use empty::EmptyElement;
pub use padding::Padding;
pub use page_break::PageBreak;
pub use rectangle::Rectangle;
pub use svg_image::SvgImageElement;

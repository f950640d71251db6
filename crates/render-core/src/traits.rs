use crate::error::RenderError;
use crate::svg::SvgImage;
use crate::types::Picture;
use folio_types::{Color, Position, Size};

/// The drawing surface elements render into.
///
/// Transform operations mutate a single shared stack. Anything that changes
/// it inside `Element::draw` must restore it before returning: `translate`
/// is paired with a translate by the reversed offset, `scale` is wrapped in
/// `save`/`restore`.
pub trait Canvas {
    fn translate(&mut self, offset: Position);

    fn scale(&mut self, sx: f32, sy: f32);

    fn save(&mut self);

    fn restore(&mut self);

    fn draw_rectangle(&mut self, size: Size, color: Color) -> Result<(), RenderError>;

    fn draw_svg(&mut self, image: &SvgImage, available: Size) -> Result<(), RenderError>;

    fn draw_picture(&mut self, picture: &Picture) -> Result<(), RenderError>;
}

/// A canvas that also knows about document and page boundaries.
pub trait DocumentCanvas: Canvas {
    fn begin_document(&mut self) -> Result<(), RenderError>;

    fn begin_page(&mut self, size: Size) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn end_document(&mut self) -> Result<(), RenderError>;
}

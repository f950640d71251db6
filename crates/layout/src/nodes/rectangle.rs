use crate::LayoutError;
use crate::interface::Element;
use crate::node_kind::ElementKind;
use folio_render_core::Canvas;
use folio_types::{Color, Size, SpacePlan};
use std::any::Any;

/// A fixed-size filled box. Either fits whole or wraps.
#[derive(Debug, Clone)]
pub struct Rectangle {
    size: Size,
    color: Color,
}

impl Rectangle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            color: Color::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Element for Rectangle {
    fn kind(&self) -> ElementKind {
        ElementKind::Rectangle
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() || !self.size.fits_within(available) {
            return SpacePlan::Wrap;
        }
        SpacePlan::FullRender(self.size)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        debug_assert!(
            self.size.fits_within(available),
            "Rectangle of {} drawn into {}",
            self.size,
            available
        );
        canvas.draw_rectangle(self.size, self.color)?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_whole_or_wraps() {
        let rect = Rectangle::new(50.0, 40.0);
        let whole = SpacePlan::FullRender(Size::new(50.0, 40.0));
        assert_eq!(rect.measure(Size::new(100.0, 90.0)), whole);
        assert_eq!(rect.measure(Size::new(50.0005, 40.0)), whole);
        assert_eq!(rect.measure(Size::new(100.0, 39.0)), SpacePlan::Wrap);
        assert_eq!(rect.measure(Size::new(-1.0, 90.0)), SpacePlan::Wrap);
    }
}

use folio::layout::ElementKind;
use folio::render::Canvas;
use folio::{BoxedElement, Column, Element, LayoutError, Rectangle, Size, SpacePlan, SvgImage};
use std::any::Any;

/// A column of `count` equally sized rectangles
pub fn blocks(count: usize, width: f32, height: f32, spacing: f32) -> Column {
    (0..count).fold(Column::new(spacing), |column, _| {
        column.item(Rectangle::new(width, height))
    })
}

pub fn boxed(element: impl Element + 'static) -> BoxedElement {
    Box::new(element)
}

pub fn svg(width: &str, height: &str) -> SvgImage {
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"><rect width="10" height="10"/></svg>"#,
        width, height
    );
    SvgImage::parse(&source).expect("valid svg fixture")
}

/// Reports partial progress forever.
#[derive(Debug)]
pub struct Endless;

impl Element for Endless {
    fn kind(&self) -> ElementKind {
        ElementKind::Custom("Endless")
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }
        SpacePlan::PartialRender(Size::new(available.width, 1.0))
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        canvas.draw_rectangle(Size::new(available.width, 1.0), Default::default())?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

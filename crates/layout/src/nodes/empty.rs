use crate::LayoutError;
use crate::interface::Element;
use crate::node_kind::ElementKind;
use folio_render_core::Canvas;
use folio_types::{Size, SpacePlan};
use std::any::Any;

/// Occupies no space and never renders anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyElement;

impl Element for EmptyElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Empty
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }
        SpacePlan::Empty
    }

    fn draw(&mut self, _canvas: &mut dyn Canvas, _available: Size) -> Result<(), LayoutError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

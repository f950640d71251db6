use crate::LayoutError;
use crate::interface::{BoxedElement, Element, replace_slot};
use crate::node_kind::ElementKind;
use folio_render_core::Canvas;
use folio_types::{Position, Size, SpacePlan};
use std::any::Any;

/// Insets an optional child on each side.
#[derive(Debug, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    child: Option<BoxedElement>,
}

impl Padding {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            child: None,
        }
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn child(mut self, element: impl Element + 'static) -> Self {
        self.child = Some(Box::new(element));
        self
    }

    pub fn set_child(&mut self, element: Option<BoxedElement>) {
        self.child = element;
    }

    fn inner_space(&self, available: Size) -> Size {
        Size::new(
            available.width - self.left - self.right,
            available.height - self.top - self.bottom,
        )
    }

    fn outer_size(&self, inner: Size) -> Size {
        Size::new(
            inner.width + self.left + self.right,
            inner.height + self.top + self.bottom,
        )
    }
}

impl Element for Padding {
    fn kind(&self) -> ElementKind {
        ElementKind::Padding
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }

        let Some(child) = &self.child else {
            return SpacePlan::Empty;
        };

        let inner = self.inner_space(available);
        if inner.is_negative() {
            return SpacePlan::Wrap;
        }

        match child.measure(inner) {
            SpacePlan::PartialRender(size) => SpacePlan::PartialRender(self.outer_size(size)),
            SpacePlan::FullRender(size) => SpacePlan::FullRender(self.outer_size(size)),
            other => other,
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        let inner = self.inner_space(available);
        let offset = Position::new(self.left, self.top);

        let Some(child) = &mut self.child else {
            return Ok(());
        };

        canvas.translate(offset);
        let result = child.draw(canvas, inner);
        canvas.translate(offset.reverse());
        result
    }

    fn children(&self) -> Vec<Option<&dyn Element>> {
        vec![self.child.as_ref().map(|c| c.as_ref() as &dyn Element)]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        match &mut self.child {
            Some(child) => vec![child.as_mut() as &mut dyn Element],
            None => Vec::new(),
        }
    }

    fn create_proxy(&mut self, create: &mut dyn FnMut(BoxedElement) -> BoxedElement) {
        if let Some(child) = &mut self.child {
            replace_slot(child, create);
        }
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
    use crate::nodes::{Column, Rectangle};

    #[test]
    fn insets_are_added_to_child_size() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0).child(Rectangle::new(10.0, 10.0));
        assert_eq!(
            padding.measure(Size::new(100.0, 100.0)),
            SpacePlan::FullRender(Size::new(14.0, 16.0))
        );
    }

    #[test]
    fn insets_larger_than_space_wrap() {
        let padding = Padding::all(60.0).child(Rectangle::new(1.0, 1.0));
        assert_eq!(padding.measure(Size::new(100.0, 100.0)), SpacePlan::Wrap);
    }

    #[test]
    fn measure_is_idempotent() {
        let padding = Padding::all(5.0).child(
            Column::new(0.0)
                .item(Rectangle::new(20.0, 50.0))
                .item(Rectangle::new(20.0, 50.0)),
        );
        let page = Size::new(100.0, 100.0);

        let first = padding.measure(page);
        let _ = padding.measure(Size::new(15.0, 15.0));
        let _ = padding.measure(Size::new(400.0, 400.0));

        assert_eq!(padding.measure(page), first);
        assert_eq!(first, SpacePlan::PartialRender(Size::new(30.0, 60.0)));
    }

    #[test]
    fn absent_child_is_an_empty_slot() {
        let padding = Padding::all(5.0);
        assert_eq!(padding.measure(Size::new(100.0, 100.0)), SpacePlan::Empty);
        assert_eq!(padding.children().len(), 1);
        assert!(padding.children()[0].is_none());
    }
}

use crate::LayoutError;
use crate::interface::{Element, ElementState, RenderedState, Stateful};
use crate::node_kind::ElementKind;
use folio_render_core::Canvas;
use folio_types::{Size, SpacePlan};
use std::any::Any;

/// Forces the remaining content onto the next page.
///
/// Before its first draw it reports a zero-size partial render, which ends
/// the enclosing column's pass. Afterwards it is consumed as empty.
#[derive(Debug, Clone, Default)]
pub struct PageBreak {
    is_rendered: bool,
}

impl PageBreak {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Element for PageBreak {
    fn kind(&self) -> ElementKind {
        ElementKind::PageBreak
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }

        if self.is_rendered {
            return SpacePlan::Empty;
        }

        SpacePlan::PartialRender(Size::zero())
    }

    fn draw(&mut self, _canvas: &mut dyn Canvas, _available: Size) -> Result<(), LayoutError> {
        self.is_rendered = true;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_stateful(&self) -> Option<&dyn Stateful> {
        Some(self)
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn Stateful> {
        Some(self)
    }
}

impl Stateful for PageBreak {
    fn clone_state(&self) -> ElementState {
        ElementState::Rendered(RenderedState {
            is_rendered: self.is_rendered,
        })
    }

    fn set_state(&mut self, state: ElementState) -> Result<(), LayoutError> {
        self.is_rendered = state.as_rendered()?.is_rendered;
        Ok(())
    }

    fn reset_state(&mut self, _hard_reset: bool) {
        self.is_rendered = false;
    }
}

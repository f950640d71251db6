use crate::LayoutError;
use crate::interface::{BoxedElement, Element, ElementState, Stateful, replace_slot};
use crate::node_kind::ElementKind;
use crate::nodes::EmptyElement;
use folio_render_core::Canvas;
use folio_types::{Size, SpacePlan};
use std::any::Any;
use std::cell::{Cell, RefCell};

/// Oldest entries are evicted past this many distinct spaces.
const MAX_ENTRIES: usize = 32;

/// Memoizes `measure` of the wrapped element, keyed on the available space.
///
/// Keys compare with the epsilon-tolerant `Size` equality. The memo is dropped
/// whenever the subtree's progress may have changed: on draw, on reset and
/// when a snapshot is restored.
#[derive(Debug)]
pub struct CacheProxy {
    child: BoxedElement,
    entries: RefCell<Vec<(Size, SpacePlan)>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl CacheProxy {
    pub fn new(child: BoxedElement) -> Self {
        Self {
            child,
            entries: RefCell::new(Vec::new()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Wraps `element` if it is cacheable, otherwise returns it unchanged.
    pub fn wrap_if_cacheable(element: BoxedElement) -> BoxedElement {
        if element.as_cacheable().is_some() {
            Box::new(CacheProxy::new(element))
        } else {
            element
        }
    }

    pub fn inner(&self) -> &dyn Element {
        self.child.as_ref()
    }

    /// Moves the wrapped element out, leaving an empty placeholder behind.
    pub(crate) fn take_inner(&mut self) -> BoxedElement {
        self.clear();
        std::mem::replace(&mut self.child, Box::new(EmptyElement))
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn lookup(&self, available: Size) -> Option<SpacePlan> {
        self.entries
            .borrow()
            .iter()
            .find(|(key, _)| *key == available)
            .map(|(_, plan)| *plan)
    }
}

impl Element for CacheProxy {
    fn kind(&self) -> ElementKind {
        ElementKind::CacheProxy
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if let Some(plan) = self.lookup(available) {
            self.hits.set(self.hits.get() + 1);
            log::trace!("Measure cache hit for {} at {}", self.child.kind().as_str(), available);
            return plan;
        }

        self.misses.set(self.misses.get() + 1);
        let plan = self.child.measure(available);

        let mut entries = self.entries.borrow_mut();
        if entries.len() >= MAX_ENTRIES {
            entries.remove(0);
        }
        entries.push((available, plan));
        plan
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        self.clear();
        self.child.draw(canvas, available)
    }

    fn children(&self) -> Vec<Option<&dyn Element>> {
        vec![Some(self.child.as_ref() as &dyn Element)]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        vec![self.child.as_mut() as &mut dyn Element]
    }

    fn create_proxy(&mut self, create: &mut dyn FnMut(BoxedElement) -> BoxedElement) {
        self.clear();
        replace_slot(&mut self.child, create);
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

impl Stateful for CacheProxy {
    fn clone_state(&self) -> ElementState {
        ElementState::Memo
    }

    fn set_state(&mut self, state: ElementState) -> Result<(), LayoutError> {
        state.as_memo()?;
        self.clear();
        Ok(())
    }

    fn reset_state(&mut self, _hard_reset: bool) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::RenderedState;
    use crate::nodes::{Column, Rectangle};
    use crate::test_utils::{CountingElement, draw_on_page};

    #[test]
    fn repeated_measure_is_served_from_memo() {
        let (counter, calls) = CountingElement::new(Rectangle::new(10.0, 10.0));
        let proxy = CacheProxy::new(Box::new(counter));

        let space = Size::new(100.0, 100.0);
        let first = proxy.measure(space);
        let second = proxy.measure(Size::new(100.0004, 100.0));
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
        assert_eq!((proxy.hits(), proxy.misses()), (1, 1));

        proxy.measure(Size::new(50.0, 50.0));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn draw_invalidates_the_memo() {
        let column = Column::new(0.0)
            .item(Rectangle::new(10.0, 60.0))
            .item(Rectangle::new(10.0, 60.0));
        let mut proxy = CacheProxy::new(Box::new(column));
        let page = Size::new(100.0, 100.0);

        assert_eq!(proxy.measure(page), SpacePlan::PartialRender(Size::new(10.0, 60.0)));
        draw_on_page(&mut proxy, page);
        assert_eq!(proxy.measure(page), SpacePlan::FullRender(Size::new(10.0, 60.0)));
    }

    #[test]
    fn memoized_measure_matches_the_inner_element() {
        let build = || {
            Column::new(0.0)
                .item(Rectangle::new(10.0, 60.0))
                .item(Rectangle::new(10.0, 60.0))
        };
        let plain = build();
        let proxy = CacheProxy::new(Box::new(build()));
        let spaces = [
            Size::new(100.0, 100.0),
            Size::new(100.0, 50.0),
            Size::new(100.0, 130.0),
            Size::new(100.0, 100.0),
        ];

        for space in spaces {
            assert_eq!(proxy.measure(space), plain.measure(space));
            assert_eq!(proxy.measure(space), plain.measure(space));
        }
        assert_eq!(proxy.misses(), 3);
    }

    #[test]
    fn restoring_state_drops_the_memo() {
        let column = Column::new(0.0)
            .item(Rectangle::new(10.0, 60.0))
            .item(Rectangle::new(10.0, 60.0));
        let mut proxy = CacheProxy::new(Box::new(column));
        let page = Size::new(100.0, 100.0);

        proxy.measure(page);
        let before = proxy.misses();
        proxy.set_state(proxy.clone_state()).unwrap();
        proxy.measure(page);
        assert_eq!(proxy.misses(), before + 1);

        let rendered = ElementState::Rendered(RenderedState { is_rendered: false });
        let mismatch = proxy.set_state(rendered);
        assert!(matches!(mismatch, Err(LayoutError::StateMismatch("Memo", "Rendered"))));
    }

    #[test]
    fn only_cacheable_elements_are_wrapped() {
        let wrapped = CacheProxy::wrap_if_cacheable(Box::new(Column::new(0.0)));
        assert_eq!(wrapped.kind(), ElementKind::CacheProxy);

        let plain = CacheProxy::wrap_if_cacheable(Box::new(Rectangle::new(1.0, 1.0)));
        assert_eq!(plain.kind(), ElementKind::Rectangle);
    }
}

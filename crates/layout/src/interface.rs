use crate::LayoutError;
use crate::node_kind::ElementKind;
use crate::nodes::EmptyElement;
use folio_render_core::Canvas;
use folio_types::{SpacePlan, Size};
use std::any::Any;
use std::fmt::Debug;

pub type BoxedElement = Box<dyn Element>;

// --- State Definitions (Type-Safe) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnState {
    pub current_index: usize,
}

/// Progress of an element whose content is emitted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedState {
    pub is_rendered: bool,
}

/// Opaque snapshot produced by [`Stateful::clone_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementState {
    Column(ColumnState),
    Rendered(RenderedState),
    /// Decorators whose only state is a memo that must be dropped on restore.
    Memo,
}

impl ElementState {
    pub fn as_column(self) -> Result<ColumnState, LayoutError> {
        match self {
            ElementState::Column(s) => Ok(s),
            _ => Err(LayoutError::StateMismatch("Column", self.variant_name())),
        }
    }

    pub fn as_rendered(self) -> Result<RenderedState, LayoutError> {
        match self {
            ElementState::Rendered(s) => Ok(s),
            _ => Err(LayoutError::StateMismatch("Rendered", self.variant_name())),
        }
    }

    pub fn as_memo(self) -> Result<(), LayoutError> {
        match self {
            ElementState::Memo => Ok(()),
            _ => Err(LayoutError::StateMismatch("Memo", self.variant_name())),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            ElementState::Column(_) => "Column",
            ElementState::Rendered(_) => "Rendered",
            ElementState::Memo => "Memo",
        }
    }
}

// --- Capabilities ---

/// Progress that survives across page-draw calls and can be snapshotted for
/// speculative measurement.
///
/// `set_state(clone_state())` must not change observable behaviour.
pub trait Stateful {
    fn clone_state(&self) -> ElementState;

    fn set_state(&mut self, state: ElementState) -> Result<(), LayoutError>;

    /// A soft reset clears per-page flags. A hard reset also clears anything
    /// that must not leak into a freshly started document.
    fn reset_state(&mut self, hard_reset: bool);
}

/// Full reset to the pre-first-page condition, once per generation run.
pub trait Resettable {
    fn reset(&mut self);
}

/// Marker: `measure` results may be memoized per available space by an
/// enclosing [`CacheProxy`](crate::CacheProxy).
pub trait Cacheable {}

// --- The Element Contract ---

/// A node of the document layout tree.
pub trait Element: Debug {
    fn kind(&self) -> ElementKind;

    /// Predicts what `draw` would do with the same budget. Never advances
    /// committed progress, so it may be called any number of times.
    fn measure(&self, available: Size) -> SpacePlan;

    /// Renders into the canvas' current frame and advances progress. The
    /// budget is never smaller than one a preceding `measure` accepted.
    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError>;

    /// Direct child slots in draw order. `None` marks an absent optional slot.
    fn children(&self) -> Vec<Option<&dyn Element>> {
        Vec::new()
    }

    /// Occupied child slots in draw order.
    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        Vec::new()
    }

    /// Replaces every occupied child slot with `create(child)`, keeping order.
    /// Empty slots are left empty.
    fn create_proxy(&mut self, _create: &mut dyn FnMut(BoxedElement) -> BoxedElement) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn as_stateful(&self) -> Option<&dyn Stateful> {
        None
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn Stateful> {
        None
    }

    fn as_resettable_mut(&mut self) -> Option<&mut dyn Resettable> {
        None
    }

    fn as_cacheable(&self) -> Option<&dyn Cacheable> {
        None
    }
}

/// Moves the child out of `slot`, passes it through `create` and stores the
/// result back in the same slot.
pub(crate) fn replace_slot(
    slot: &mut BoxedElement,
    create: &mut dyn FnMut(BoxedElement) -> BoxedElement,
) {
    let child = std::mem::replace(slot, Box::new(EmptyElement));
    *slot = create(child);
}

use crate::LayoutError;
use crate::interface::{
    BoxedElement, Cacheable, ColumnState, Element, ElementState, Resettable, Stateful,
    replace_slot,
};
use crate::node_kind::ElementKind;
use folio_render_core::Canvas;
use folio_types::{Position, Size, SpacePlan};
use std::any::Any;

/// One child placement produced by [`Column::plan_layout`].
#[derive(Debug, Clone, Copy)]
struct RenderingCommand {
    index: usize,
    plan: SpacePlan,
    size: Size,
    offset: Position,
}

/// Stacks its children vertically, packing as many as fit into each page.
///
/// Progress is the index of the first child not yet consumed by a draw.
/// Once every child is consumed the index wraps back to zero, so the same
/// column can be rendered again (for example inside a repeated section).
#[derive(Debug, Default)]
pub struct Column {
    items: Vec<BoxedElement>,
    spacing: f32,
    current_index: usize,
}

impl Column {
    pub fn new(spacing: f32) -> Self {
        Self {
            items: Vec::new(),
            spacing,
            current_index: 0,
        }
    }

    pub fn with_items(spacing: f32, items: Vec<BoxedElement>) -> Self {
        Self {
            items,
            spacing,
            current_index: 0,
        }
    }

    pub fn item(mut self, element: impl Element + 'static) -> Self {
        self.items.push(Box::new(element));
        self
    }

    pub fn push(&mut self, element: BoxedElement) {
        self.items.push(element);
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Simulates packing from the current index. `measure` and `draw` both go
    /// through here so a draw visits exactly the commands a measure predicted.
    fn plan_layout(&self, available: Size) -> Vec<RenderingCommand> {
        let mut top_offset = 0.0f32;
        let mut target_width = 0.0f32;
        let mut commands = Vec::new();

        for (index, item) in self.items.iter().enumerate().skip(self.current_index) {
            let available_height = available.height - top_offset;
            if available_height < -Size::EPSILON {
                break;
            }

            let plan = item.measure(Size::new(available.width, available_height));
            if plan.is_wrap() {
                break;
            }

            // an item that takes no space gets no spacing either
            if matches!(plan, SpacePlan::Empty) {
                top_offset -= self.spacing;
            }

            commands.push(RenderingCommand {
                index,
                plan,
                size: plan.size(),
                offset: Position::new(0.0, top_offset),
            });

            target_width = target_width.max(plan.width());

            if matches!(plan, SpacePlan::PartialRender(_)) {
                break;
            }

            top_offset += plan.height() + self.spacing;
        }

        for command in &mut commands {
            command.size = Size::new(target_width, command.size.height);
        }

        commands
    }
}

impl Element for Column {
    fn kind(&self) -> ElementKind {
        ElementKind::Column
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }

        if self.items.is_empty() || self.current_index == self.items.len() {
            return SpacePlan::Empty;
        }

        let commands = self.plan_layout(available);
        let Some(last) = commands.last() else {
            return SpacePlan::Wrap;
        };

        let width = commands.iter().map(|c| c.size.width).fold(0.0, f32::max);
        let height = last.offset.y + last.size.height;
        let size = Size::new(width, height);

        if !size.fits_within(available) {
            return SpacePlan::Wrap;
        }

        if commands.iter().all(|c| matches!(c.plan, SpacePlan::Empty)) {
            return SpacePlan::Empty;
        }

        let consumed = commands.iter().filter(|c| c.plan.is_consumed()).count();
        if self.current_index + consumed == self.items.len() {
            SpacePlan::FullRender(size)
        } else {
            SpacePlan::PartialRender(size)
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        let commands = self.plan_layout(available);

        for command in &commands {
            let target = Size::new(available.width, command.size.height);

            canvas.translate(command.offset);
            let result = self.items[command.index].draw(canvas, target);
            canvas.translate(command.offset.reverse());
            result?;
        }

        self.current_index += commands.iter().filter(|c| c.plan.is_consumed()).count();

        if self.current_index >= self.items.len() {
            self.reset();
        }
        Ok(())
    }

    fn children(&self) -> Vec<Option<&dyn Element>> {
        self.items
            .iter()
            .map(|item| Some(item.as_ref() as &dyn Element))
            .collect()
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        self.items
            .iter_mut()
            .map(|item| item.as_mut() as &mut dyn Element)
            .collect()
    }

    fn create_proxy(&mut self, create: &mut dyn FnMut(BoxedElement) -> BoxedElement) {
        for item in &mut self.items {
            replace_slot(item, create);
        }
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

    fn as_resettable_mut(&mut self) -> Option<&mut dyn Resettable> {
        Some(self)
    }

    fn as_cacheable(&self) -> Option<&dyn Cacheable> {
        Some(self)
    }
}

impl Cacheable for Column {}

impl Resettable for Column {
    fn reset(&mut self) {
        self.current_index = 0;
    }
}

impl Stateful for Column {
    fn clone_state(&self) -> ElementState {
        ElementState::Column(ColumnState {
            current_index: self.current_index,
        })
    }

    fn set_state(&mut self, state: ElementState) -> Result<(), LayoutError> {
        let state = state.as_column()?;
        if state.current_index > self.items.len() {
            return Err(LayoutError::SnapshotMismatch(format!(
                "column index {} is out of range for {} children",
                state.current_index,
                self.items.len()
            )));
        }
        self.current_index = state.current_index;
        Ok(())
    }

    fn reset_state(&mut self, _hard_reset: bool) {
        self.current_index = 0;
    }
}

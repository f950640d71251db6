//! Instrumented elements and helpers for layout tests.

use crate::LayoutError;
use crate::interface::{Element, Resettable};
use crate::node_kind::ElementKind;
use folio_render_core::{Canvas, DocumentCanvas, PageRecording, RecordingCanvas};
use folio_types::{Color, Position, Size, SpacePlan};
use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

/// Draws `element` onto a single recorded page of `page` size.
pub fn draw_on_page(element: &mut dyn Element, page: Size) -> PageRecording {
    let mut canvas = RecordingCanvas::new();
    canvas.begin_document().expect("begin document");
    canvas.begin_page(page).expect("begin page");
    element.draw(&mut canvas, page).expect("draw");
    canvas.end_page().expect("end page");
    canvas.end_document().expect("end document");
    canvas.into_pages().remove(0)
}

/// Top-left corners of every rectangle on a page.
pub fn rectangle_origins(page: &PageRecording) -> Vec<Position> {
    page.picture.rectangles().map(|(origin, _)| origin).collect()
}

/// Forwards to an inner element and counts `measure` calls.
#[derive(Debug)]
pub struct CountingElement<E> {
    inner: E,
    measures: Rc<Cell<usize>>,
}

impl<E: Element> CountingElement<E> {
    /// Returns the wrapper and a handle to its measure counter.
    pub fn new(inner: E) -> (Self, Rc<Cell<usize>>) {
        let measures = Rc::new(Cell::new(0));
        (
            Self {
                inner,
                measures: measures.clone(),
            },
            measures,
        )
    }
}

impl<E: Element + 'static> Element for CountingElement<E> {
    fn kind(&self) -> ElementKind {
        ElementKind::Custom("Counting")
    }

    fn measure(&self, available: Size) -> SpacePlan {
        self.measures.set(self.measures.get() + 1);
        self.inner.measure(available)
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        self.inner.draw(canvas, available)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A leaf made of equally sized lines that can be split across pages,
/// like a paragraph of fixed-height text lines.
#[derive(Debug, Clone)]
pub struct LinesElement {
    line: Size,
    lines: usize,
    drawn: usize,
}

impl LinesElement {
    pub fn new(line_width: f32, line_height: f32, lines: usize) -> Self {
        Self {
            line: Size::new(line_width, line_height),
            lines,
            drawn: 0,
        }
    }

    pub fn drawn(&self) -> usize {
        self.drawn
    }

    fn lines_fitting(&self, available: Size) -> usize {
        if self.line.width > available.width + Size::EPSILON {
            return 0;
        }
        let remaining = self.lines - self.drawn;
        let fit = ((available.height + Size::EPSILON) / self.line.height).floor();
        (fit.max(0.0) as usize).min(remaining)
    }
}

impl Element for LinesElement {
    fn kind(&self) -> ElementKind {
        ElementKind::Custom("Lines")
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }
        if self.drawn == self.lines {
            return SpacePlan::Empty;
        }

        let fit = self.lines_fitting(available);
        if fit == 0 {
            return SpacePlan::Wrap;
        }

        let size = Size::new(self.line.width, self.line.height * fit as f32);
        if fit == self.lines - self.drawn {
            SpacePlan::FullRender(size)
        } else {
            SpacePlan::PartialRender(size)
        }
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        let fit = self.lines_fitting(available);
        for i in 0..fit {
            let offset = Position::new(0.0, self.line.height * i as f32);
            canvas.translate(offset);
            let result = canvas.draw_rectangle(self.line, Color::gray(128));
            canvas.translate(offset.reverse());
            result?;
        }
        self.drawn += fit;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_resettable_mut(&mut self) -> Option<&mut dyn Resettable> {
        Some(self)
    }
}

impl Resettable for LinesElement {
    fn reset(&mut self) {
        self.drawn = 0;
    }
}

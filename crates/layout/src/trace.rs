//! Element traces for layout failures.
//!
//! When content cannot be placed on a fresh page, every element is wrapped
//! in a [`LayoutTraceProxy`], the failing page is measured once more, and the
//! recorded measurements are collected into a [`LayoutTrace`] tree.

use crate::LayoutError;
use crate::interface::{BoxedElement, Element, replace_slot};
use crate::node_kind::ElementKind;
use crate::nodes::EmptyElement;
use folio_render_core::Canvas;
use folio_types::{Size, SpacePlan};
use serde::Serialize;
use std::any::Any;
use std::cell::Cell;
use std::fmt;

/// Records the most recent measurement of the wrapped element.
#[derive(Debug)]
pub struct LayoutTraceProxy {
    child: BoxedElement,
    last_measure: Cell<Option<(Size, SpacePlan)>>,
}

impl LayoutTraceProxy {
    pub fn new(child: BoxedElement) -> Self {
        Self {
            child,
            last_measure: Cell::new(None),
        }
    }

    /// Wraps authored elements; decorators are left as they are.
    pub fn wrap(element: BoxedElement) -> BoxedElement {
        if element.kind().is_proxy() {
            element
        } else {
            Box::new(LayoutTraceProxy::new(element))
        }
    }

    pub fn last_measure(&self) -> Option<(Size, SpacePlan)> {
        self.last_measure.get()
    }

    pub fn inner(&self) -> &dyn Element {
        self.child.as_ref()
    }

    /// Moves the wrapped element out, leaving an empty placeholder behind.
    pub(crate) fn take_inner(&mut self) -> BoxedElement {
        self.last_measure.set(None);
        std::mem::replace(&mut self.child, Box::new(EmptyElement))
    }
}

impl Element for LayoutTraceProxy {
    fn kind(&self) -> ElementKind {
        ElementKind::LayoutTraceProxy
    }

    fn measure(&self, available: Size) -> SpacePlan {
        let plan = self.child.measure(available);
        self.last_measure.set(Some((available, plan)));
        plan
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        self.child.draw(canvas, available)
    }

    fn children(&self) -> Vec<Option<&dyn Element>> {
        vec![Some(self.child.as_ref() as &dyn Element)]
    }

    fn children_mut(&mut self) -> Vec<&mut dyn Element> {
        vec![self.child.as_mut() as &mut dyn Element]
    }

    fn create_proxy(&mut self, create: &mut dyn FnMut(BoxedElement) -> BoxedElement) {
        replace_slot(&mut self.child, create);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// One measured element and the measured elements beneath it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTrace {
    pub element: String,
    pub available_space: Size,
    pub space_plan: SpacePlan,
    pub children: Vec<LayoutTrace>,
}

impl LayoutTrace {
    /// Collects the measurements recorded by trace proxies under `root`.
    /// Elements that were not measured are left out.
    pub fn collect(root: &dyn Element) -> Option<LayoutTrace> {
        collect_nodes(root).into_iter().next()
    }

    /// The chain of wrapping elements from the root down to the innermost one
    /// that could not be placed.
    pub fn failing_path(&self) -> Vec<&LayoutTrace> {
        let mut path = Vec::new();
        let mut current = Some(self);
        while let Some(node) = current.filter(|n| n.space_plan.is_wrap()) {
            path.push(node);
            current = node.children.iter().rev().find(|c| c.space_plan.is_wrap());
        }
        path
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}{} [available: {}] -> {}",
            "",
            self.element,
            self.available_space,
            self.space_plan,
            indent = depth * 2
        )?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for LayoutTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

fn collect_nodes(element: &dyn Element) -> Vec<LayoutTrace> {
    let children = element
        .children()
        .into_iter()
        .flatten()
        .flat_map(collect_nodes)
        .collect::<Vec<_>>();

    match element.as_any().downcast_ref::<LayoutTraceProxy>() {
        Some(proxy) => match proxy.last_measure() {
            Some((available_space, space_plan)) => vec![LayoutTrace {
                element: proxy.inner().kind().as_str().to_string(),
                available_space,
                space_plan,
                children,
            }],
            None => Vec::new(),
        },
        None => children,
    }
}

//! Whole-tree passes: decorator injection and removal, resets, and state
//! snapshots.

use crate::LayoutError;
use crate::cache::CacheProxy;
use crate::interface::{BoxedElement, Element, ElementState};
use crate::node_kind::ElementKind;
use crate::trace::LayoutTraceProxy;

/// Rewrites the tree bottom-up, replacing every element with `create(element)`.
///
/// Children are rebuilt before their parent and each occupied slot is visited
/// exactly once. Child order, child counts and empty slots are preserved.
pub fn rebuild_tree(
    mut root: BoxedElement,
    create: &mut dyn FnMut(BoxedElement) -> BoxedElement,
) -> BoxedElement {
    root.create_proxy(&mut |child| rebuild_tree(child, &mut *create));
    create(root)
}

/// Removes every [`CacheProxy`] and [`LayoutTraceProxy`] from the tree.
pub fn strip_proxies(root: BoxedElement) -> BoxedElement {
    rebuild_tree(root, &mut |element| unwrap_proxy(element, |kind| kind.is_proxy()))
}

/// Removes decorators of one kind, leaving any others in place.
pub fn strip_proxy_kind(root: BoxedElement, kind: ElementKind) -> BoxedElement {
    rebuild_tree(root, &mut |element| unwrap_proxy(element, |k| k == kind))
}

// Post-order rebuilding means a decorator's child is already unwrapped by the
// time the decorator itself is visited, so one level is enough.
fn unwrap_proxy(mut element: BoxedElement, matches: impl Fn(ElementKind) -> bool) -> BoxedElement {
    if !matches(element.kind()) {
        return element;
    }

    let any = element.as_any_mut();
    if let Some(proxy) = any.downcast_mut::<CacheProxy>() {
        return proxy.take_inner();
    }
    if let Some(proxy) = any.downcast_mut::<LayoutTraceProxy>() {
        return proxy.take_inner();
    }
    element
}

/// Returns every element to its pre-first-page condition, parents first.
pub fn reset_tree(root: &mut dyn Element, hard_reset: bool) {
    if let Some(resettable) = root.as_resettable_mut() {
        resettable.reset();
    }
    if let Some(stateful) = root.as_stateful_mut() {
        stateful.reset_state(hard_reset);
    }
    for child in root.children_mut() {
        reset_tree(child, hard_reset);
    }
}

/// Visits every element of the tree in pre-order.
pub fn for_each_element(root: &dyn Element, f: &mut dyn FnMut(&dyn Element)) {
    f(root);
    for child in root.children().into_iter().flatten() {
        for_each_element(child, f);
    }
}

/// Progress of an entire subtree, captured before a speculative draw so it
/// can be rolled back afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    states: Vec<Option<ElementState>>,
}

impl TreeSnapshot {
    pub fn capture(root: &dyn Element) -> Self {
        let mut states = Vec::new();
        for_each_element(root, &mut |element| {
            states.push(element.as_stateful().map(|s| s.clone_state()));
        });
        Self { states }
    }

    /// Number of elements covered, stateful or not.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Writes the captured states back. Fails if the tree no longer has the
    /// shape it had when the snapshot was taken.
    pub fn restore(&self, root: &mut dyn Element) -> Result<(), LayoutError> {
        let mut states = self.states.iter().cloned();
        restore_into(root, &mut states)?;

        let leftover = states.count();
        if leftover > 0 {
            return Err(LayoutError::SnapshotMismatch(format!(
                "{} captured states have no matching element",
                leftover
            )));
        }
        Ok(())
    }
}

fn restore_into(
    element: &mut dyn Element,
    states: &mut dyn Iterator<Item = Option<ElementState>>,
) -> Result<(), LayoutError> {
    let Some(state) = states.next() else {
        return Err(LayoutError::SnapshotMismatch(format!(
            "no captured state left for {}",
            element.kind().as_str()
        )));
    };

    let kind = element.kind();
    match (element.as_stateful_mut(), state) {
        (Some(stateful), Some(state)) => stateful.set_state(state)?,
        (None, None) => {}
        (Some(_), None) | (None, Some(_)) => {
            return Err(LayoutError::SnapshotMismatch(format!(
                "{} changed its stateful capability",
                kind.as_str()
            )));
        }
    }

    for child in element.children_mut() {
        restore_into(child, states)?;
    }
    Ok(())
}

use crate::LayoutError;
use crate::algorithms::paginate;
use crate::cache::CacheProxy;
use crate::config::LayoutConfig;
use crate::interface::{BoxedElement, Element};
use crate::node_kind::ElementKind;
use crate::nodes::EmptyElement;
use crate::trace::{LayoutTrace, LayoutTraceProxy};
use crate::tree::{rebuild_tree, strip_proxies, strip_proxy_kind};
use folio_render_core::DocumentCanvas;
use folio_types::Size;

/// Owns a document tree and lays it out onto canvases.
///
/// Decorators requested by the configuration are injected once at
/// construction. The tree can be rendered any number of times; every run
/// starts from a hard reset.
#[derive(Debug)]
pub struct LayoutEngine {
    root: BoxedElement,
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(root: BoxedElement, config: LayoutConfig) -> Self {
        let root = if config.cache_measurements {
            rebuild_tree(root, &mut CacheProxy::wrap_if_cacheable)
        } else {
            root
        };
        Self { root, config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The laid out tree, including any injected cache decorators.
    pub fn root(&self) -> &dyn Element {
        self.root.as_ref()
    }

    /// Returns the tree as it was authored.
    pub fn into_root(self) -> BoxedElement {
        strip_proxies(self.root)
    }

    /// Paginates the tree onto `canvas`, returning the size of every page.
    ///
    /// When content does not fit and failure tracing is enabled, the returned
    /// [`LayoutError::ContentDoesNotFit`] carries a [`LayoutTrace`] of the
    /// failing page.
    pub fn render<C: DocumentCanvas>(
        &mut self,
        page_size: Size,
        canvas: &mut C,
    ) -> Result<Vec<Size>, LayoutError> {
        match paginate(self.root.as_mut(), page_size, canvas, &self.config) {
            Err(LayoutError::ContentDoesNotFit {
                page_number,
                available_space,
                trace: None,
            }) if self.config.trace_layout_failures => Err(LayoutError::ContentDoesNotFit {
                page_number,
                available_space,
                trace: self.trace_failure(available_space),
            }),
            result => result,
        }
    }

    // Measurement never commits progress, so re-measuring the tree in the
    // state it failed in reproduces the failing pass exactly.
    fn trace_failure(&mut self, available: Size) -> Option<LayoutTrace> {
        let root = std::mem::replace(&mut self.root, Box::new(EmptyElement));
        let traced = rebuild_tree(root, &mut LayoutTraceProxy::wrap);

        traced.measure(available);
        let trace = LayoutTrace::collect(traced.as_ref());

        self.root = strip_proxy_kind(traced, ElementKind::LayoutTraceProxy);
        if let Some(trace) = &trace {
            log::debug!("Layout trace of the failing page:\n{}", trace);
        }
        trace
    }
}

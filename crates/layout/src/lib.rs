use folio_render_core::RenderError;
use folio_types::Size;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Content does not fit on page {page_number}: nothing can be placed in {available_space}.{}", trace_suffix(.trace))]
    ContentDoesNotFit {
        page_number: usize,
        available_space: Size,
        trace: Option<LayoutTrace>,
    },
    #[error("Layout produced more than {0} pages; the content never completes.")]
    InfiniteDocument(usize),
    #[error("State mismatch: Expected state for {0}, got {1}.")]
    StateMismatch(&'static str, &'static str),
    #[error("Snapshot does not match the element tree: {0}")]
    SnapshotMismatch(String),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

fn trace_suffix(trace: &Option<LayoutTrace>) -> String {
    trace.as_ref().map(|t| format!("\n{}", t)).unwrap_or_default()
}

pub mod algorithms;
pub mod cache;
pub mod config;
pub(crate) mod engine;
pub mod interface;
pub mod node_kind;
pub mod nodes;
pub mod trace;
pub mod tree;

pub use self::cache::CacheProxy;
pub use self::config::LayoutConfig;
pub use self::engine::LayoutEngine;
pub use self::interface::{
    BoxedElement, Cacheable, ColumnState, Element, ElementState, RenderedState, Resettable,
    Stateful,
};
pub use self::node_kind::ElementKind;
pub use self::nodes::{Column, EmptyElement, Padding, PageBreak, Rectangle, SvgImageElement};
pub use self::trace::{LayoutTrace, LayoutTraceProxy};
pub use self::tree::TreeSnapshot;

// Re-export the value types nodes are written against to prevent type mismatches
pub use folio_types::{Position, SpacePlan, SpacePlanKind};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

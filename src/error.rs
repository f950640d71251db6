// src/error.rs
use folio_layout::LayoutError;
use folio_render_core::RenderError;
use thiserror::Error;

/// Everything that can go wrong while generating a document.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid generator configuration: {0}")]
    Config(String),
}

impl GenerationError {
    /// The layout trace attached to a content-does-not-fit failure, if any.
    pub fn layout_trace(&self) -> Option<&folio_layout::LayoutTrace> {
        match self {
            GenerationError::Layout(LayoutError::ContentDoesNotFit { trace, .. }) => trace.as_ref(),
            _ => None,
        }
    }
}

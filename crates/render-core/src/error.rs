use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Canvas transform stack is unbalanced: {0} save(s) left open at end of page.")]
    UnbalancedState(usize),
    #[error("Canvas transform was not restored at end of page (origin left at {0}).")]
    TransformNotRestored(String),
    #[error("Drawing command issued outside of a page.")]
    NoActivePage,
    #[error("Invalid SVG document: {0}")]
    InvalidSvg(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<roxmltree::Error> for RenderError {
    fn from(err: roxmltree::Error) -> Self {
        RenderError::InvalidSvg(err.to_string())
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}

//! Drawing-surface abstractions for the layout engine.
//!
//! This crate provides the capability the layout core issues commands to:
//! - `Canvas` / `DocumentCanvas` traits for transform scopes, primitives and page boundaries
//! - `RecordingCanvas` and `FreeCanvas` implementations
//! - SVG image resources and recorded pictures
//! - Error types for rendering operations

mod error;
mod recording;
mod svg;
mod traits;
mod types;

pub use error::RenderError;
pub use recording::{FreeCanvas, RecordingCanvas};
pub use svg::{SvgImage, SvgSize, SvgUnit};
pub use traits::{Canvas, DocumentCanvas};
pub use types::{DrawCommand, DrawOperation, PageRecording, Picture, Transform};

//! Folio lays out trees of visual elements onto fixed-size pages.
//!
//! Documents are built from [`Element`]s such as [`Column`] and [`Rectangle`],
//! handed to a [`GeneratorBuilder`], and drawn onto any
//! [`DocumentCanvas`](folio_render_core::DocumentCanvas).
//!
//! ```
//! use folio::{Column, GeneratorBuilder, PageSize, Rectangle};
//!
//! let mut generator = GeneratorBuilder::new()
//!     .with_page_size(PageSize::Custom { width: 100.0, height: 90.0 })
//!     .with_content(
//!         Column::new(0.0)
//!             .item(Rectangle::new(50.0, 40.0))
//!             .item(Rectangle::new(50.0, 40.0))
//!             .item(Rectangle::new(50.0, 40.0)),
//!     )
//!     .build()?;
//!
//! let pages = generator.generate_recording()?;
//! assert_eq!(pages.len(), 2);
//! # Ok::<(), folio::GenerationError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod preview;

pub use config::GeneratorSettings;
pub use error::GenerationError;
pub use generator::{DocumentGenerator, GeneratorBuilder};
pub use preview::{
    DocumentPreview, GenericError, InspectionElement, JsonPreviewSink, LayoutErrorReport,
    PageSnapshot, PreviewSink,
};

// Re-export the workspace crates so users need a single dependency.
pub use folio_layout as layout;
pub use folio_render_core as render;
pub use folio_types as types;

pub use folio_layout::{
    BoxedElement, Column, Element, EmptyElement, LayoutConfig, LayoutError, LayoutTrace, Padding,
    PageBreak, Rectangle, SvgImageElement,
};
pub use folio_render_core::{FreeCanvas, PageRecording, RecordingCanvas, SvgImage};
pub use folio_types::{Color, PageSize, Position, Size, SpacePlan};

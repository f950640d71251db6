// src/generator.rs

use crate::config::GeneratorSettings;
use crate::error::GenerationError;
use crate::preview::{DocumentPreview, GenericError, LayoutErrorReport, PreviewSink};
use folio_layout::{BoxedElement, Element, LayoutConfig, LayoutEngine, LayoutError};
use folio_render_core::{DocumentCanvas, FreeCanvas, PageRecording, RecordingCanvas};
use folio_types::{PageSize, Size};

/// A builder for creating a [`DocumentGenerator`].
#[derive(Default)]
pub struct GeneratorBuilder {
    settings: GeneratorSettings,
    content: Option<BoxedElement>,
}

impl GeneratorBuilder {
    /// Creates a new `GeneratorBuilder` with A4 pages and the default layout configuration.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the root element of the document.
    pub fn with_content(mut self, content: impl Element + 'static) -> Self {
        self.content = Some(Box::new(content));
        self
    }

    pub fn with_root(mut self, root: BoxedElement) -> Self {
        self.content = Some(root);
        self
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.settings.page_size = page_size;
        self
    }

    pub fn with_landscape(mut self, landscape: bool) -> Self {
        self.settings.landscape = landscape;
        self
    }

    /// Overrides the layout limits and decorator switches.
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.settings = GeneratorSettings {
            landscape: self.settings.landscape,
            ..GeneratorSettings::from_layout_config(self.settings.page_size, config)
        };
        self
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces all settings with those parsed from a JSON document.
    pub fn with_settings_json(mut self, json: &str) -> Result<Self, GenerationError> {
        self.settings = GeneratorSettings::from_json(json)?;
        Ok(self)
    }

    /// Consumes the builder and creates the `DocumentGenerator`.
    pub fn build(self) -> Result<DocumentGenerator, GenerationError> {
        let content = self.content.ok_or_else(|| {
            GenerationError::Config(
                "No content has been configured. Use `with_content` or `with_root`.".to_string(),
            )
        })?;
        self.settings.validate()?;

        let page_size = self.settings.page_dimensions();
        log::debug!("Building generator for {} pages", page_size);

        Ok(DocumentGenerator {
            engine: LayoutEngine::new(content, self.settings.layout_config()),
            page_size,
        })
    }
}

/// Lays a document out onto pages and hands them to a canvas or a previewer.
#[derive(Debug)]
pub struct DocumentGenerator {
    engine: LayoutEngine,
    page_size: Size,
}

impl DocumentGenerator {
    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    /// Draws every page onto `canvas` and returns the page sizes.
    pub fn generate<C: DocumentCanvas>(
        &mut self,
        canvas: &mut C,
    ) -> Result<Vec<Size>, GenerationError> {
        let pages = self.engine.render(self.page_size, canvas)?;
        log::debug!("Generated {} page(s) of {}", pages.len(), self.page_size);
        Ok(pages)
    }

    /// Generates the document and returns what was drawn on each page.
    pub fn generate_recording(&mut self) -> Result<Vec<PageRecording>, GenerationError> {
        let mut canvas = RecordingCanvas::new();
        self.generate(&mut canvas)?;
        Ok(canvas.into_pages())
    }

    /// Runs the layout without drawing anything and counts the pages.
    pub fn page_count(&mut self) -> Result<usize, GenerationError> {
        let mut canvas = FreeCanvas::new();
        self.generate(&mut canvas)?;
        Ok(canvas.page_count())
    }

    /// Generates the document and reports the outcome to `sink`.
    ///
    /// A layout failure is reported with its trace, any other failure as a
    /// generic error chain. The generation error itself is still returned.
    pub fn generate_preview(
        &mut self,
        sink: &mut dyn PreviewSink,
    ) -> Result<Vec<PageRecording>, GenerationError> {
        match self.generate_recording() {
            Ok(pages) => {
                let preview = DocumentPreview::new(&pages, self.engine.root());
                sink.show_document_preview(&preview)?;
                Ok(pages)
            }
            Err(error) => {
                let reported = match &error {
                    GenerationError::Layout(LayoutError::ContentDoesNotFit { trace, .. }) => {
                        sink.show_layout_error(&LayoutErrorReport {
                            trace: trace.clone(),
                        })
                    }
                    other => sink.show_generic_error(&GenericError::from_error(other)),
                };
                if let Err(sink_error) = reported {
                    log::warn!("Failed to report generation error to previewer: {}", sink_error);
                }
                Err(error)
            }
        }
    }

    /// Returns the document tree as it was authored.
    pub fn into_root(self) -> BoxedElement {
        self.engine.into_root()
    }
}

pub mod fixtures;

use folio::{BoxedElement, GenerationError, GeneratorBuilder, PageRecording, PageSize};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A custom page size in points.
pub fn page(width: f32, height: f32) -> PageSize {
    PageSize::Custom { width, height }
}

/// Generate a document onto recorded pages with the default configuration
pub fn generate_pages(
    content: BoxedElement,
    page_size: PageSize,
) -> Result<Vec<PageRecording>, GenerationError> {
    GeneratorBuilder::new()
        .with_page_size(page_size)
        .with_root(content)
        .build()?
        .generate_recording()
}

//! The page-draw driver: measures the root once per page and draws it until
//! the content reports completion.

use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::interface::Element;
use crate::tree::reset_tree;
use folio_render_core::DocumentCanvas;
use folio_types::{Size, SpacePlan};

/// Lays `root` out onto pages of `page_size` and returns the size of every
/// page produced.
///
/// The tree is hard-reset first, so the same tree can be paginated again.
/// Measure and draw of a page always receive the same space. A root that
/// cannot place anything on a fresh page fails with
/// [`LayoutError::ContentDoesNotFit`] (without a trace; the engine attaches
/// one). A root still reporting partial progress after
/// [`LayoutConfig::max_pages`] pages fails with
/// [`LayoutError::InfiniteDocument`].
pub fn paginate<C: DocumentCanvas>(
    root: &mut dyn Element,
    page_size: Size,
    canvas: &mut C,
    config: &LayoutConfig,
) -> Result<Vec<Size>, LayoutError> {
    reset_tree(root, true);
    canvas.begin_document()?;

    let mut pages = Vec::new();
    loop {
        let page_number = pages.len() + 1;
        let plan = root.measure(page_size);
        log::debug!("Page {}: {} on {}", page_number, plan, page_size);

        if plan.is_wrap() {
            log::warn!(
                "Layout failed on page {}: {} cannot be placed in {}",
                page_number,
                root.kind().as_str(),
                page_size
            );
            return Err(LayoutError::ContentDoesNotFit {
                page_number,
                available_space: page_size,
                trace: None,
            });
        }

        canvas.begin_page(page_size)?;
        root.draw(canvas, page_size)?;
        canvas.end_page()?;
        pages.push(page_size);

        if !matches!(plan, SpacePlan::PartialRender(_)) {
            // An all-empty pass ends the document even if a later child wrapped.
            if matches!(plan, SpacePlan::Empty) && root.measure(page_size).is_wrap() {
                log::warn!(
                    "Page {}: {} reported completion, but its remaining content \
                     does not fit in {} and is not drawn",
                    page_number,
                    root.kind().as_str(),
                    page_size
                );
            }
            break;
        }

        if pages.len() >= config.max_pages {
            log::warn!("Stopping after {} pages; content keeps reporting progress", pages.len());
            return Err(LayoutError::InfiniteDocument(config.max_pages));
        }
    }

    canvas.end_document()?;
    log::debug!("Pagination finished with {} page(s)", pages.len());
    Ok(pages)
}

//! Payloads for an external document previewer.
//!
//! A previewer receives one of three messages after each generation run: the
//! produced pages with the element hierarchy, a layout trace when content
//! did not fit, or a flattened error chain for any other failure. Only the
//! payloads and a JSON writer are provided here; transport is up to the
//! embedding application.

use crate::error::GenerationError;
use folio_layout::{Element, LayoutError, LayoutTrace};
use folio_render_core::{PageRecording, RenderError};
use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::io::Write;

/// One produced page. The resource id lets a previewer match the snapshot
/// to the picture it was sent alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub resource_id: String,
    pub page_number: usize,
    pub width: f32,
    pub height: f32,
}

impl PageSnapshot {
    pub fn new(page_number: usize, page: &PageRecording) -> Self {
        Self {
            resource_id: format!("{:032x}", rand::random::<u128>()),
            page_number,
            width: page.size.width,
            height: page.size.height,
        }
    }
}

/// The authored element tree, without injected decorators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionElement {
    pub element_type: String,
    pub children: Vec<InspectionElement>,
}

impl InspectionElement {
    pub fn from_tree(root: &dyn Element) -> Self {
        let mut element = root;
        while element.kind().is_proxy() {
            match element.children().into_iter().flatten().next() {
                Some(child) => element = child,
                None => break,
            }
        }

        Self {
            element_type: element.kind().as_str().to_string(),
            children: element
                .children()
                .into_iter()
                .flatten()
                .map(InspectionElement::from_tree)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPreview {
    pub page_snapshots: Vec<PageSnapshot>,
    pub document_hierarchy: InspectionElement,
}

impl DocumentPreview {
    pub fn new(pages: &[PageRecording], root: &dyn Element) -> Self {
        Self {
            page_snapshots: pages
                .iter()
                .enumerate()
                .map(|(index, page)| PageSnapshot::new(index + 1, page))
                .collect(),
            document_hierarchy: InspectionElement::from_tree(root),
        }
    }
}

/// An error and its causes, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericError {
    pub error_type: String,
    pub message: String,
    pub stack_trace: String,
    pub inner: Option<Box<GenericError>>,
}

impl GenericError {
    /// Flattens `error` and its `source()` chain. The stack trace is captured
    /// at the outermost level only and is empty unless backtraces are enabled.
    pub fn from_error<E: Error + 'static>(error: &E) -> Self {
        let mut report = Self::single(error);
        if known_type_name(error).is_none() {
            report.error_type = std::any::type_name::<E>().to_string();
        }
        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            report.stack_trace = backtrace.to_string();
        }
        report
    }

    fn single(error: &(dyn Error + 'static)) -> Self {
        Self {
            error_type: known_type_name(error).unwrap_or_else(|| FOREIGN_ERROR.to_string()),
            message: error.to_string(),
            stack_trace: String::new(),
            inner: error.source().map(|source| Box::new(Self::single(source))),
        }
    }

    /// Number of errors in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.inner.as_ref().map_or(0, |inner| inner.depth())
    }
}

// Sources reached through `source()` are type-erased.
const FOREIGN_ERROR: &str = "std::error::Error";

fn known_type_name(error: &(dyn Error + 'static)) -> Option<String> {
    if let Some(error) = error.downcast_ref::<GenerationError>() {
        let variant = match error {
            GenerationError::Layout(_) => "Layout",
            GenerationError::Render(_) => "Render",
            GenerationError::Json(_) => "Json",
            GenerationError::Io(_) => "Io",
            GenerationError::Config(_) => "Config",
        };
        return Some(format!("GenerationError::{}", variant));
    }
    if let Some(error) = error.downcast_ref::<LayoutError>() {
        let variant = match error {
            LayoutError::ContentDoesNotFit { .. } => "ContentDoesNotFit",
            LayoutError::InfiniteDocument(_) => "InfiniteDocument",
            LayoutError::StateMismatch(..) => "StateMismatch",
            LayoutError::SnapshotMismatch(_) => "SnapshotMismatch",
            LayoutError::Render(_) => "Render",
        };
        return Some(format!("LayoutError::{}", variant));
    }
    if let Some(error) = error.downcast_ref::<RenderError>() {
        let variant = match error {
            RenderError::UnbalancedState(_) => "UnbalancedState",
            RenderError::TransformNotRestored(_) => "TransformNotRestored",
            RenderError::NoActivePage => "NoActivePage",
            RenderError::InvalidSvg(_) => "InvalidSvg",
            RenderError::Other(_) => "Other",
        };
        return Some(format!("RenderError::{}", variant));
    }
    if error.is::<std::io::Error>() {
        return Some("std::io::Error".to_string());
    }
    if error.is::<serde_json::Error>() {
        return Some("serde_json::Error".to_string());
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutErrorReport {
    pub trace: Option<LayoutTrace>,
}

/// Receives the outcome of a generation run.
pub trait PreviewSink {
    fn show_document_preview(&mut self, preview: &DocumentPreview) -> Result<(), GenerationError>;

    fn show_generic_error(&mut self, error: &GenericError) -> Result<(), GenerationError>;

    fn show_layout_error(&mut self, report: &LayoutErrorReport) -> Result<(), GenerationError>;
}

#[derive(Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
enum PreviewMessage<'a> {
    DocumentPreview(&'a DocumentPreview),
    GenericError(&'a GenericError),
    LayoutError(&'a LayoutErrorReport),
}

/// Writes each message as one line of JSON:
/// `{"kind":"documentPreview","payload":{..}}`.
pub struct JsonPreviewSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonPreviewSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn send(&mut self, message: PreviewMessage<'_>) -> Result<(), GenerationError> {
        serde_json::to_writer(&mut self.writer, &message)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> PreviewSink for JsonPreviewSink<W> {
    fn show_document_preview(&mut self, preview: &DocumentPreview) -> Result<(), GenerationError> {
        self.send(PreviewMessage::DocumentPreview(preview))
    }

    fn show_generic_error(&mut self, error: &GenericError) -> Result<(), GenerationError> {
        self.send(PreviewMessage::GenericError(error))
    }

    fn show_layout_error(&mut self, report: &LayoutErrorReport) -> Result<(), GenerationError> {
        self.send(PreviewMessage::LayoutError(report))
    }
}

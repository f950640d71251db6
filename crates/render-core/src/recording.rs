use crate::error::RenderError;
use crate::svg::SvgImage;
use crate::traits::{Canvas, DocumentCanvas};
use crate::types::{DrawCommand, DrawOperation, PageRecording, Picture, Transform};
use folio_types::{Color, Position, Size};

/// Records every primitive with its absolute transform, one [`Picture`] per
/// page. Also verifies that each page ends with the transform stack restored.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pages: Vec<PageRecording>,
    current: Option<PageRecording>,
    transform: Transform,
    saved: Vec<Transform>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[PageRecording] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageRecording> {
        self.pages
    }

    /// The transform currently applied to new primitives.
    pub fn current_transform(&self) -> Transform {
        self.transform
    }

    fn record(&mut self, operation: DrawOperation) -> Result<(), RenderError> {
        let page = self.current.as_mut().ok_or(RenderError::NoActivePage)?;
        page.picture.commands.push(DrawCommand {
            transform: self.transform,
            operation,
        });
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, offset: Position) {
        self.transform = self.transform.translated(offset);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.scaled(sx, sy);
    }

    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(transform) => self.transform = transform,
            None => log::warn!("restore() called without a matching save()"),
        }
    }

    fn draw_rectangle(&mut self, size: Size, color: Color) -> Result<(), RenderError> {
        self.record(DrawOperation::Rectangle { size, color })
    }

    fn draw_svg(&mut self, image: &SvgImage, available: Size) -> Result<(), RenderError> {
        self.record(DrawOperation::Svg {
            image: image.clone(),
            available,
        })
    }

    fn draw_picture(&mut self, picture: &Picture) -> Result<(), RenderError> {
        let base = self.transform;
        let page = self.current.as_mut().ok_or(RenderError::NoActivePage)?;
        page.picture
            .commands
            .extend(picture.commands.iter().map(|cmd| DrawCommand {
                transform: base.then(cmd.transform),
                operation: cmd.operation.clone(),
            }));
        Ok(())
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn begin_document(&mut self) -> Result<(), RenderError> {
        self.pages.clear();
        self.current = None;
        self.transform = Transform::IDENTITY;
        self.saved.clear();
        Ok(())
    }

    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        if self.current.is_some() {
            return Err(RenderError::Other(
                "begin_page() called while a page is still open".to_string(),
            ));
        }
        self.current = Some(PageRecording {
            size,
            picture: Picture::default(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        if !self.saved.is_empty() {
            return Err(RenderError::UnbalancedState(self.saved.len()));
        }
        let origin = self.transform.origin();
        if origin.x.abs() > Size::EPSILON || origin.y.abs() > Size::EPSILON {
            return Err(RenderError::TransformNotRestored(origin.to_string()));
        }
        self.transform = Transform::IDENTITY;

        let page = self.current.take().ok_or(RenderError::NoActivePage)?;
        self.pages.push(page);
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        if self.current.is_some() {
            return Err(RenderError::Other(
                "end_document() called while a page is still open".to_string(),
            ));
        }
        Ok(())
    }
}

/// Discards all output and only counts pages. Used for dry runs.
#[derive(Debug, Default)]
pub struct FreeCanvas {
    page_count: usize,
}

impl FreeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl Canvas for FreeCanvas {
    fn translate(&mut self, _offset: Position) {}

    fn scale(&mut self, _sx: f32, _sy: f32) {}

    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn draw_rectangle(&mut self, _size: Size, _color: Color) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_svg(&mut self, _image: &SvgImage, _available: Size) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_picture(&mut self, _picture: &Picture) -> Result<(), RenderError> {
        Ok(())
    }
}

impl DocumentCanvas for FreeCanvas {
    fn begin_document(&mut self) -> Result<(), RenderError> {
        self.page_count = 0;
        Ok(())
    }

    fn begin_page(&mut self, _size: Size) -> Result<(), RenderError> {
        self.page_count += 1;
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_document(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_page(canvas: &mut RecordingCanvas) {
        canvas.begin_document().unwrap();
        canvas.begin_page(Size::new(100.0, 100.0)).unwrap();
    }

    #[test]
    fn records_absolute_positions() {
        let mut canvas = RecordingCanvas::new();
        open_page(&mut canvas);

        let offset = Position::new(10.0, 20.0);
        canvas.translate(offset);
        canvas.draw_rectangle(Size::new(5.0, 5.0), Color::BLACK).unwrap();
        canvas.translate(offset.reverse());
        canvas.end_page().unwrap();

        let rects: Vec<_> = canvas.pages()[0].picture.rectangles().collect();
        assert_eq!(rects, vec![(Position::new(10.0, 20.0), Size::new(5.0, 5.0))]);
    }

    #[test]
    fn translation_inside_scale_is_scaled() {
        let mut canvas = RecordingCanvas::new();
        open_page(&mut canvas);

        canvas.save();
        canvas.scale(2.0, 3.0);
        canvas.translate(Position::new(1.0, 1.0));
        assert_eq!(canvas.current_transform().origin(), Position::new(2.0, 3.0));
        canvas.restore();

        assert_eq!(canvas.current_transform(), Transform::IDENTITY);
        canvas.end_page().unwrap();
    }

    #[test]
    fn unbalanced_save_fails_the_page() {
        let mut canvas = RecordingCanvas::new();
        open_page(&mut canvas);
        canvas.save();
        assert!(matches!(canvas.end_page(), Err(RenderError::UnbalancedState(1))));
    }

    #[test]
    fn leaked_translation_fails_the_page() {
        let mut canvas = RecordingCanvas::new();
        open_page(&mut canvas);
        canvas.translate(Position::new(0.0, 4.0));
        assert!(matches!(
            canvas.end_page(),
            Err(RenderError::TransformNotRestored(_))
        ));
    }

    #[test]
    fn drawing_outside_a_page_is_rejected() {
        let mut canvas = RecordingCanvas::new();
        canvas.begin_document().unwrap();
        assert!(matches!(
            canvas.draw_rectangle(Size::zero(), Color::BLACK),
            Err(RenderError::NoActivePage)
        ));
    }

    #[test]
    fn pictures_replay_relative_to_current_origin() {
        let mut picture_source = RecordingCanvas::new();
        open_page(&mut picture_source);
        picture_source.translate(Position::new(1.0, 1.0));
        picture_source.draw_rectangle(Size::new(2.0, 2.0), Color::WHITE).unwrap();
        picture_source.translate(Position::new(-1.0, -1.0));
        picture_source.end_page().unwrap();
        let picture = picture_source.into_pages().remove(0).picture;

        let mut canvas = RecordingCanvas::new();
        open_page(&mut canvas);
        canvas.translate(Position::new(10.0, 0.0));
        canvas.draw_picture(&picture).unwrap();
        canvas.translate(Position::new(-10.0, 0.0));
        canvas.end_page().unwrap();

        let origins: Vec<_> = canvas.pages()[0].picture.rectangles().map(|(p, _)| p).collect();
        assert_eq!(origins, vec![Position::new(11.0, 1.0)]);
    }

    #[test]
    fn free_canvas_counts_pages() {
        let mut canvas = FreeCanvas::new();
        canvas.begin_document().unwrap();
        for _ in 0..3 {
            canvas.begin_page(Size::new(10.0, 10.0)).unwrap();
            canvas.end_page().unwrap();
        }
        canvas.end_document().unwrap();
        assert_eq!(canvas.page_count(), 3);
    }
}

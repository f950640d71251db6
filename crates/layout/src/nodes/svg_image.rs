use crate::LayoutError;
use crate::interface::{Element, ElementState, RenderedState, Stateful};
use crate::node_kind::ElementKind;
use folio_render_core::{Canvas, SvgImage, SvgUnit};
use folio_types::{Size, SpacePlan};
use std::any::Any;

const INCH_TO_CENTIMETRE: f32 = 2.54;
const INCH_TO_POINTS: f32 = 72.0;
/// SVG user units are taken at 90 dpi, so one SVG pixel is 90/72 of a point.
const POINT_TO_PIXEL: f32 = 90.0 / 72.0;

/// Draws an SVG image stretched over whatever space its parent grants.
///
/// The image claims no space of its own and is emitted only once: after the
/// first draw it reports [`SpacePlan::None`] until reset.
#[derive(Debug, Clone)]
pub struct SvgImageElement {
    image: SvgImage,
    is_rendered: bool,
}

impl SvgImageElement {
    pub fn new(image: SvgImage) -> Self {
        Self {
            image,
            is_rendered: false,
        }
    }

    pub fn is_rendered(&self) -> bool {
        self.is_rendered
    }

    /// Scale factors mapping the image's intrinsic size onto `available`.
    pub fn scale_for(&self, available: Size) -> (f32, f32) {
        let size = self.image.size();
        (
            space_scale(available.width, size.width, size.width_unit),
            space_scale(available.height, size.height, size.height_unit),
        )
    }
}

fn space_scale(available: f32, image_size: f32, unit: SvgUnit) -> f32 {
    if image_size.abs() < Size::EPSILON {
        return 1.0;
    }

    match unit {
        SvgUnit::Percentage => 100.0 / image_size,
        unit if unit.is_absolute() => available / to_points(image_size, unit),
        _ => available / image_size,
    }
}

fn to_points(value: f32, unit: SvgUnit) -> f32 {
    let points = match unit {
        SvgUnit::Centimeters => value / INCH_TO_CENTIMETRE * INCH_TO_POINTS,
        SvgUnit::Millimeters => value / 10.0 / INCH_TO_CENTIMETRE * INCH_TO_POINTS,
        SvgUnit::Inches => value * INCH_TO_POINTS,
        SvgUnit::Points => value,
        SvgUnit::Picas => value * 12.0,
        SvgUnit::Pixels | SvgUnit::Percentage => value,
    };
    points * POINT_TO_PIXEL
}

impl Element for SvgImageElement {
    fn kind(&self) -> ElementKind {
        ElementKind::SvgImage
    }

    fn measure(&self, available: Size) -> SpacePlan {
        if available.is_negative() {
            return SpacePlan::Wrap;
        }

        if self.is_rendered {
            return SpacePlan::None;
        }

        SpacePlan::FullRender(Size::zero())
    }

    fn draw(&mut self, canvas: &mut dyn Canvas, available: Size) -> Result<(), LayoutError> {
        if self.is_rendered {
            return Ok(());
        }

        let (sx, sy) = self.scale_for(available);

        canvas.save();
        canvas.scale(sx, sy);
        let result = canvas.draw_svg(&self.image, available);
        canvas.restore();
        result?;

        self.is_rendered = true;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn as_stateful(&self) -> Option<&dyn Stateful> {
        Some(self)
    }

    fn as_stateful_mut(&mut self) -> Option<&mut dyn Stateful> {
        Some(self)
    }
}

impl Stateful for SvgImageElement {
    fn clone_state(&self) -> ElementState {
        ElementState::Rendered(RenderedState {
            is_rendered: self.is_rendered,
        })
    }

    fn set_state(&mut self, state: ElementState) -> Result<(), LayoutError> {
        self.is_rendered = state.as_rendered()?.is_rendered;
        Ok(())
    }

    fn reset_state(&mut self, _hard_reset: bool) {
        self.is_rendered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::{DocumentCanvas, DrawOperation, RecordingCanvas};

    fn image(width: &str, height: &str) -> SvgImageElement {
        let source = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"></svg>"#,
            width, height
        );
        SvgImageElement::new(SvgImage::parse(&source).unwrap())
    }

    #[test]
    fn claims_no_space_and_renders_once() {
        let mut svg = image("10", "10");
        let space = Size::new(100.0, 100.0);
        assert_eq!(svg.measure(space), SpacePlan::FullRender(Size::zero()));
        assert_eq!(svg.measure(Size::new(-1.0, 5.0)), SpacePlan::Wrap);

        let mut canvas = RecordingCanvas::new();
        canvas.begin_document().unwrap();
        canvas.begin_page(space).unwrap();
        svg.draw(&mut canvas, space).unwrap();
        svg.draw(&mut canvas, space).unwrap();
        canvas.end_page().unwrap();

        assert_eq!(svg.measure(space), SpacePlan::None);
        let picture = &canvas.pages()[0].picture;
        assert_eq!(picture.len(), 1);
        assert!(matches!(picture.commands[0].operation, DrawOperation::Svg { .. }));
        assert_eq!(picture.commands[0].transform.sx, 10.0);
    }

    #[test]
    fn measure_is_idempotent() {
        let svg = image("10mm", "10mm");
        let page = Size::new(100.0, 100.0);

        let first = svg.measure(page);
        let _ = svg.measure(Size::new(1.0, 1.0));
        assert_eq!(svg.measure(page), first);
        assert!(!svg.is_rendered());
    }

    #[test]
    fn scale_depends_on_unit() {
        let space = Size::new(90.0, 90.0);

        let (sx, sy) = image("50%", "200%").scale_for(space);
        assert!((sx - 2.0).abs() < 1e-4);
        assert!((sy - 0.5).abs() < 1e-4);

        // 1in = 72pt = 90 svg px
        let (sx, _) = image("1in", "1in").scale_for(space);
        assert!((sx - 1.0).abs() < 1e-4);

        let (sx, _) = image("45px", "45px").scale_for(space);
        assert!((sx - 2.0).abs() < 1e-4);
    }

    #[test]
    fn state_round_trips_and_reset_clears() {
        let mut svg = image("10", "10");
        svg.set_state(ElementState::Rendered(RenderedState { is_rendered: true }))
            .unwrap();
        assert_eq!(svg.measure(Size::new(1.0, 1.0)), SpacePlan::None);

        let snapshot = svg.clone_state();
        svg.reset_state(false);
        assert!(!svg.is_rendered());
        svg.set_state(snapshot).unwrap();
        assert!(svg.is_rendered());

        let mismatch = svg.set_state(ElementState::Memo);
        assert!(matches!(mismatch, Err(LayoutError::StateMismatch("Rendered", "Memo"))));
    }
}

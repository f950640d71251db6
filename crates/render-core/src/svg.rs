//! SVG image resources.
//!
//! Only the intrinsic size of the root `<svg>` element is interpreted here;
//! rasterization is left to the canvas backend.

use crate::error::RenderError;
use std::sync::Arc;

/// Unit of an intrinsic SVG dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgUnit {
    Pixels,
    Percentage,
    Centimeters,
    Millimeters,
    Inches,
    Points,
    Picas,
}

impl SvgUnit {
    /// True for units with a fixed physical length.
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            SvgUnit::Centimeters
                | SvgUnit::Millimeters
                | SvgUnit::Inches
                | SvgUnit::Points
                | SvgUnit::Picas
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgSize {
    pub width: f32,
    pub width_unit: SvgUnit,
    pub height: f32,
    pub height_unit: SvgUnit,
}

/// A parsed SVG document ready to be handed to a canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgImage {
    source: Arc<str>,
    size: SvgSize,
}

impl SvgImage {
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let document = roxmltree::Document::parse(source)?;
        let root = document.root_element();
        if root.tag_name().name() != "svg" {
            return Err(RenderError::InvalidSvg(format!(
                "expected <svg> root element, found <{}>",
                root.tag_name().name()
            )));
        }

        let view_box = root.attribute("viewBox").and_then(parse_view_box);

        let (width, width_unit) = match root.attribute("width") {
            Some(value) => parse_length(value)?,
            None => view_box
                .map(|(w, _)| (w, SvgUnit::Pixels))
                .unwrap_or((100.0, SvgUnit::Percentage)),
        };
        let (height, height_unit) = match root.attribute("height") {
            Some(value) => parse_length(value)?,
            None => view_box
                .map(|(_, h)| (h, SvgUnit::Pixels))
                .unwrap_or((100.0, SvgUnit::Percentage)),
        };

        log::trace!(
            "Parsed SVG image: {}{:?} x {}{:?}",
            width,
            width_unit,
            height,
            height_unit
        );

        Ok(Self {
            source: Arc::from(source),
            size: SvgSize {
                width,
                width_unit,
                height,
                height_unit,
            },
        })
    }

    pub fn size(&self) -> SvgSize {
        self.size
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

fn parse_view_box(value: &str) -> Option<(f32, f32)> {
    let parts: Vec<f32> = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [_, _, w, h] => Some((*w, *h)),
        _ => None,
    }
}

fn parse_length(value: &str) -> Result<(f32, SvgUnit), RenderError> {
    let value = value.trim();
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let number: f32 = number
        .parse()
        .map_err(|_| RenderError::InvalidSvg(format!("invalid length '{}'", value)))?;

    let unit = match unit.trim() {
        "" | "px" => SvgUnit::Pixels,
        "%" => SvgUnit::Percentage,
        "cm" => SvgUnit::Centimeters,
        "mm" => SvgUnit::Millimeters,
        "in" => SvgUnit::Inches,
        "pt" => SvgUnit::Points,
        "pc" => SvgUnit::Picas,
        other => {
            return Err(RenderError::InvalidSvg(format!(
                "unsupported length unit '{}'",
                other
            )));
        }
    };
    Ok((number, unit))
}

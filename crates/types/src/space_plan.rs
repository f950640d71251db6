use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of measuring an element against an available space.
///
/// A plan is a prediction: producing one never advances an element's
/// committed progress. Only drawing does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "size")]
pub enum SpacePlan {
    /// Nothing fits in the given space.
    Wrap,
    /// Occupies no space and has nothing left to render.
    Empty,
    /// Some, but not all, of the content would be rendered.
    PartialRender(Size),
    /// All remaining content would be rendered.
    FullRender(Size),
    /// The content was already emitted by an earlier draw.
    None,
}

/// Field-less mirror of [`SpacePlan`], handy for matching and counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacePlanKind {
    Wrap,
    Empty,
    PartialRender,
    FullRender,
    None,
}

impl SpacePlan {
    pub fn wrap() -> Self {
        SpacePlan::Wrap
    }

    pub fn empty() -> Self {
        SpacePlan::Empty
    }

    pub fn none() -> Self {
        SpacePlan::None
    }

    pub fn partial_render(size: Size) -> Self {
        SpacePlan::PartialRender(size)
    }

    pub fn full_render(size: Size) -> Self {
        SpacePlan::FullRender(size)
    }

    pub fn kind(&self) -> SpacePlanKind {
        match self {
            SpacePlan::Wrap => SpacePlanKind::Wrap,
            SpacePlan::Empty => SpacePlanKind::Empty,
            SpacePlan::PartialRender(_) => SpacePlanKind::PartialRender,
            SpacePlan::FullRender(_) => SpacePlanKind::FullRender,
            SpacePlan::None => SpacePlanKind::None,
        }
    }

    /// The space this plan occupies. Zero for the size-less variants.
    pub fn size(&self) -> Size {
        match self {
            SpacePlan::PartialRender(size) | SpacePlan::FullRender(size) => *size,
            SpacePlan::Wrap | SpacePlan::Empty | SpacePlan::None => Size::zero(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size().width
    }

    pub fn height(&self) -> f32 {
        self.size().height
    }

    pub fn is_wrap(&self) -> bool {
        matches!(self, SpacePlan::Wrap)
    }

    /// True when drawing this plan disposes of the element entirely.
    pub fn is_consumed(&self) -> bool {
        matches!(self, SpacePlan::Empty | SpacePlan::FullRender(_))
    }
}

impl SpacePlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpacePlanKind::Wrap => "Wrap",
            SpacePlanKind::Empty => "Empty",
            SpacePlanKind::PartialRender => "PartialRender",
            SpacePlanKind::FullRender => "FullRender",
            SpacePlanKind::None => "None",
        }
    }
}

impl fmt::Display for SpacePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacePlan::PartialRender(size) | SpacePlan::FullRender(size) => {
                write!(f, "{} ({})", self.kind().as_str(), size)
            }
            _ => f.write_str(self.kind().as_str()),
        }
    }
}

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Page dimensions, either a named paper size or explicit points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    A5,
    Letter,
    #[serde(untagged)]
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// Dimensions in points (1/72 inch), portrait orientation.
    pub fn dimensions(&self) -> Size {
        match self {
            PageSize::A4 => Size::new(595.4, 842.0),
            PageSize::A5 => Size::new(420.0, 595.4),
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::Custom { width, height } => Size::new(*width, *height),
        }
    }

    pub fn landscape(&self) -> Size {
        let portrait = self.dimensions();
        Size::new(portrait.height, portrait.width)
    }
}

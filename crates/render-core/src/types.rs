use crate::svg::SvgImage;
use folio_types::{Color, Position, Size};

/// Affine transform restricted to scale and translation, which is all the
/// layout engine ever issues.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Translation is expressed in the current (already scaled) frame.
    pub fn translated(self, offset: Position) -> Self {
        Self {
            tx: self.tx + offset.x * self.sx,
            ty: self.ty + offset.y * self.sy,
            ..self
        }
    }

    pub fn scaled(self, sx: f32, sy: f32) -> Self {
        Self {
            sx: self.sx * sx,
            sy: self.sy * sy,
            ..self
        }
    }

    pub fn origin(&self) -> Position {
        Position::new(self.tx, self.ty)
    }

    pub fn then(self, inner: Transform) -> Self {
        Transform {
            sx: self.sx * inner.sx,
            sy: self.sy * inner.sy,
            tx: self.tx + inner.tx * self.sx,
            ty: self.ty + inner.ty * self.sy,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOperation {
    Rectangle { size: Size, color: Color },
    Svg { image: SvgImage, available: Size },
}

/// A primitive together with the transform that was active when it was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub transform: Transform,
    pub operation: DrawOperation,
}

impl DrawCommand {
    pub fn origin(&self) -> Position {
        self.transform.origin()
    }
}

/// A recorded, replayable sequence of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Picture {
    pub commands: Vec<DrawCommand>,
}

impl Picture {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Rectangles in draw order, as `(origin, size)` pairs.
    pub fn rectangles(&self) -> impl Iterator<Item = (Position, Size)> + '_ {
        self.commands.iter().filter_map(|cmd| match &cmd.operation {
            DrawOperation::Rectangle { size, .. } => Some((cmd.origin(), *size)),
            DrawOperation::Svg { .. } => None,
        })
    }
}

/// One produced page: its size and everything drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecording {
    pub size: Size,
    pub picture: Picture,
}

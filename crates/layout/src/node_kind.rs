/// Represents the specific type of an element in the layout tree.
///
/// Used for layout traces and hierarchy dumps instead of stringly-typed names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Column,
    Padding,
    Rectangle,
    SvgImage,
    PageBreak,
    Empty,
    CacheProxy,
    LayoutTraceProxy,
    /// Elements defined outside this crate.
    Custom(&'static str),
}

impl ElementKind {
    /// Decorators injected by the tree rebuilder rather than authored content.
    pub fn is_proxy(&self) -> bool {
        matches!(self, ElementKind::CacheProxy | ElementKind::LayoutTraceProxy)
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Column => "Column",
            ElementKind::Padding => "Padding",
            ElementKind::Rectangle => "Rectangle",
            ElementKind::SvgImage => "SvgImage",
            ElementKind::PageBreak => "PageBreak",
            ElementKind::Empty => "Empty",
            ElementKind::CacheProxy => "CacheProxy",
            ElementKind::LayoutTraceProxy => "LayoutTraceProxy",
            ElementKind::Custom(name) => *name,
        }
    }
}

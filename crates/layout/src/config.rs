#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Upper bound on the number of pages a single generation run may produce.
    /// Content that keeps reporting partial progress past this point is
    /// treated as never completing.
    ///
    /// Defaults to `1000`.
    pub max_pages: usize,

    /// Wrap every cacheable element in a measurement cache before layout.
    ///
    /// - **Enabled**: repeated trial measurements of the same subtree with the
    ///   same available space are answered from a memo.
    /// - **Disabled**: every measurement walks the subtree again. Output is
    ///   identical either way.
    ///
    /// Defaults to `true`.
    pub cache_measurements: bool,

    /// Re-measure the failing page with tracing decorators when content does
    /// not fit, and attach the resulting element trace to the error.
    ///
    /// Defaults to `true`.
    pub trace_layout_failures: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_pages: 1000,
            cache_measurements: true,
            trace_layout_failures: true,
        }
    }
}

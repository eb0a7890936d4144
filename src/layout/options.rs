//! Layout options and configuration.

/// Options for grouping lines into paragraphs.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Maximum vertical gap (exclusive) between two lines of one paragraph
    pub vertical_spacing_threshold: f32,

    /// Font size tolerance in points. Informational: merging compares
    /// normalized 0.5pt size classes instead.
    pub font_size_tolerance: f32,

    /// Page-width fractions used to classify line alignment
    pub alignment: AlignmentBounds,

    /// Recompute text case (and alignment, when `page_width` is set) from
    /// each line before grouping
    pub derive_features: bool,

    /// Page width in points for alignment classification
    pub page_width: Option<f32>,

    /// Whether to group pages in parallel
    pub parallel: bool,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertical spacing threshold.
    pub fn with_spacing_threshold(mut self, threshold: f32) -> Self {
        self.vertical_spacing_threshold = threshold;
        self
    }

    /// Set the font size tolerance.
    pub fn with_font_size_tolerance(mut self, tolerance: f32) -> Self {
        self.font_size_tolerance = tolerance;
        self
    }

    /// Set the alignment bounds.
    pub fn with_alignment_bounds(mut self, bounds: AlignmentBounds) -> Self {
        self.alignment = bounds;
        self
    }

    /// Recompute line features before grouping. With a page width, line
    /// alignment is reclassified against the alignment bounds.
    pub fn with_feature_derivation(mut self, page_width: Option<f32>) -> Self {
        self.derive_features = true;
        self.page_width = page_width;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            vertical_spacing_threshold: 15.0,
            font_size_tolerance: 0.5,
            alignment: AlignmentBounds::default(),
            derive_features: false,
            page_width: None,
            parallel: true,
        }
    }
}

/// Alignment boundaries as fractions of the page width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentBounds {
    /// Lines starting left of this fraction are left aligned
    pub left_max: f32,
    /// Lines starting right of this fraction are right aligned
    pub right_min: f32,
    /// Lower bound of the centered band (line midpoint)
    pub center_min: f32,
    /// Upper bound of the centered band (line midpoint)
    pub center_max: f32,
}

impl AlignmentBounds {
    /// Tight profile: 0.15 / 0.75 / 0.25 / 0.75.
    pub fn standard() -> Self {
        Self {
            left_max: 0.15,
            right_min: 0.75,
            center_min: 0.25,
            center_max: 0.75,
        }
    }

    /// Looser profile: 0.20 / 0.70 / 0.30 / 0.70.
    pub fn relaxed() -> Self {
        Self {
            left_max: 0.20,
            right_min: 0.70,
            center_min: 0.30,
            center_max: 0.70,
        }
    }
}

impl Default for AlignmentBounds {
    fn default() -> Self {
        Self::standard()
    }
}

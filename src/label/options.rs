//! Labeling options: font keywords, score weights and score bands.

/// Options for structure labeling.
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Font-name fragments marking a bold or display face (matched lowercase)
    pub bold_font_keywords: Vec<String>,

    /// Additive weights of the header score
    pub weights: ScoreWeights,

    /// Score bands deciding how much corroboration a heading needs
    pub bands: ScoreBands,

    /// Paragraphs longer than this (in chars) are always body text
    pub max_heading_chars: usize,
}

impl LabelOptions {
    /// Create new label options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bold font keyword list.
    pub fn with_bold_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bold_font_keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    /// Set the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the score bands.
    pub fn with_bands(mut self, bands: ScoreBands) -> Self {
        self.bands = bands;
        self
    }

    /// Set the maximum heading length.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.max_heading_chars = chars;
        self
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            bold_font_keywords: [
                "bold",
                "heavy",
                "black",
                "semibold",
                "demibold",
                "extrabold",
                "heading",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            weights: ScoreWeights::default(),
            bands: ScoreBands::default(),
            max_heading_chars: 350,
        }
    }
}

/// Weights of the additive header score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Multiplier of `rank / max(h1, h2, h3, 1)`
    pub font_size_ratio: f32,
    /// Paragraph is bold
    pub bold: f32,
    /// Multiplier of the bold line ratio
    pub bold_ratio: f32,
    /// Font name contains a bold or heading keyword
    pub bold_family: f32,
    /// Font name is Arial or Helvetica
    pub common_family: f32,
    /// Multiplier of `min(avg_line_height / line_height_unit, 1)`
    pub line_height: f32,
    /// Line height giving the full line-height bonus
    pub line_height_unit: f32,
    /// ALL CAPS
    pub upper_case: f32,
    /// Title Case
    pub title_case: f32,
    /// Centered
    pub center: f32,
    /// Left aligned
    pub left: f32,
    /// Box top above `top_band_limit`
    pub top_band: f32,
    /// Box top above `upper_band_limit`
    pub upper_band: f32,
    /// Vertical limit of the top band
    pub top_band_limit: f32,
    /// Vertical limit of the upper band
    pub upper_band_limit: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            font_size_ratio: 30.0,
            bold: 25.0,
            bold_ratio: 20.0,
            bold_family: 15.0,
            common_family: 5.0,
            line_height: 10.0,
            line_height_unit: 20.0,
            upper_case: 10.0,
            title_case: 8.0,
            center: 10.0,
            left: 7.0,
            top_band: 7.0,
            upper_band: 5.0,
            top_band_limit: 150.0,
            upper_band_limit: 400.0,
        }
    }
}

/// Header score bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBands {
    /// Lower edge of the strong band
    pub strong: f32,
    /// Strong scores at or above this become H3 without a size match
    pub strong_fallback: f32,
    /// Lower edge of the moderate band
    pub moderate: f32,
    /// Bold moderate scores at or above this become H3 without a size match
    pub moderate_fallback: f32,
    /// Lower edge of the weak band
    pub weak: f32,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            strong: 65.0,
            strong_fallback: 75.0,
            moderate: 45.0,
            moderate_fallback: 55.0,
            weak: 25.0,
        }
    }
}

// src/config.rs

// Run configuration assembled from the build-time constants.
// Passed explicitly into the aggregator and renderer so tests can substitute sites.

use plotters::style::RGBColor;

use crate::constants::{
    COLOR_BOX_FILL_EVEN, COLOR_BOX_FILL_ODD, DEFAULT_SITES, PLOT_HEIGHT, PLOT_WIDTH,
    ROTATION_PLOT_TITLE, ROTATION_Y_LABEL, SITE_X_LABEL, TRANSLATION_PLOT_TITLE,
    TRANSLATION_Y_LABEL,
};

/// A test site and the filename prefix its logs share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSpec {
    pub name: String,
    pub prefix: String,
}

impl SiteSpec {
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
        }
    }

    /// Exact, case-sensitive prefix match on a bare file name.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Sites in display order.
    pub sites: Vec<SiteSpec>,
}

impl AnalysisConfig {
    pub fn new(sites: Vec<SiteSpec>) -> Self {
        Self { sites }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sites: DEFAULT_SITES
                .iter()
                .map(|&(name, prefix)| SiteSpec::new(name, prefix))
                .collect(),
        }
    }
}

/// Which per-file error sequence a figure shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Translation,
    Rotation,
}

impl ErrorKind {
    /// Short tag used in output file names and CSV exports.
    pub fn tag(self) -> &'static str {
        match self {
            ErrorKind::Translation => "translation",
            ErrorKind::Rotation => "rotation",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fill colors, alternated across consecutive boxes.
    pub box_colors: [RGBColor; 2],
    pub width: u32,
    pub height: u32,
}

impl RenderConfig {
    pub fn for_kind(kind: ErrorKind) -> Self {
        let (title, y_label) = match kind {
            ErrorKind::Translation => (TRANSLATION_PLOT_TITLE, TRANSLATION_Y_LABEL),
            ErrorKind::Rotation => (ROTATION_PLOT_TITLE, ROTATION_Y_LABEL),
        };
        Self {
            title: title.to_string(),
            x_label: SITE_X_LABEL.to_string(),
            y_label: y_label.to_string(),
            box_colors: [COLOR_BOX_FILL_EVEN, COLOR_BOX_FILL_ODD],
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }

    /// Fill color of the box at `index` (0-based site position).
    pub fn box_color(&self, index: usize) -> RGBColor {
        self.box_colors[index % 2]
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::for_kind(ErrorKind::Translation)
    }
}


// src/config.rs

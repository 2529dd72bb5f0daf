// src/constants.rs

use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// Transform block location inside a registration log.
// The block is printed as three bracketed rows: [ r0 r1 r2 t ].
pub const TRANSFORM_BLOCK_FIRST_LINE: usize = 11;
pub const TRANSFORM_BLOCK_ROWS: usize = 3;
pub const TRANSFORM_BLOCK_TOKENS_PER_ROW: usize = 4;

// Test sites as (display name, log filename prefix).
pub const DEFAULT_SITES: [(&str, &str); 4] = [
    ("Sequoia", "resultSequoia"),
    ("Valcartier 1", "result1"),
    ("Valcartier 2", "result5"),
    ("Savanne", "result_savanne"),
];

// Box statistics.
pub const WHISKER_IQR_FACTOR: f64 = 1.5;
pub const MEDIAN_LABEL_DECIMALS: usize = 2;

// --- Plot Color Assignments ---
pub const COLOR_BOX_FILL_EVEN: RGBColor = RGBColor(189, 183, 107); // darkkhaki
pub const COLOR_BOX_FILL_ODD: RGBColor = RGBColor(65, 105, 225); // royalblue
pub const COLOR_BOX_OUTLINE: RGBColor = RGBColor(0, 0, 0);
pub const COLOR_FLIER: RGBColor = RGBColor(255, 0, 0);
pub const COLOR_GRID: RGBColor = RGBColor(211, 211, 211); // lightgrey
pub const GRID_OPACITY: f64 = 0.5;

// Box geometry, in x-axis units (one site per unit).
pub const BOX_WIDTH: f64 = 0.5;
pub const WHISKER_CAP_WIDTH: f64 = 0.25;

// Stroke widths for lines
pub const LINE_WIDTH_BOX: u32 = 1;
pub const LINE_WIDTH_MEDIAN: u32 = 2;

// Marker sizes in pixels
pub const MEAN_MARKER_SIZE: i32 = 7;
pub const FLIER_MARKER_SIZE: i32 = 4;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 22;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_SITE_LABEL: i32 = 13;
pub const FONT_SIZE_MEDIAN_LABEL: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Plot titles and axis labels.
pub const TRANSLATION_PLOT_TITLE: &str = "Translation error for each test site";
pub const TRANSLATION_Y_LABEL: &str = "||t_algorithm - t_targets|| (meters)";
pub const ROTATION_PLOT_TITLE: &str = "Rotation error for each test site";
pub const ROTATION_Y_LABEL: &str = "||R_algorithm - R_targets||_2";
pub const SITE_X_LABEL: &str = "Site";

// src/constants.rs

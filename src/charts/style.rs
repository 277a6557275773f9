//! Chart styling constants
//!
//! Colors, margins and labels shared by the map, bar and pie figures.

use plotly::common::{Font, Line, Marker, Title};
use plotly::layout::Margin;
use plotly::Layout;

/// Number of economies shown by name in the bar and pie charts
pub const TOP_N: usize = 5;

/// Label given to every pie slice outside the top economies
pub const OTHER_LABEL: &str = "Other";

/// Source column label used in hover text
pub const GDP_LABEL: &str = "GDP (USD)";

/// Bar chart value-axis label
pub const GDP_AXIS_LABEL: &str = "GDP (USD in Billions)";

pub const COUNTRY_LABEL: &str = "Country";
pub const CODE_LABEL: &str = "Code";

pub const PAPER_BGCOLOR: &str = "white";
pub const FONT_COLOR: &str = "black";

/// Bar and slice outlines
pub const OUTLINE_COLOR: &str = "black";
pub const OUTLINE_WIDTH: f64 = 2.0;

/// Country borders on the map
pub const BORDER_COLOR: &str = "#d1d1d1";
pub const BORDER_WIDTH: f64 = 0.5;

pub const OCEAN_COLOR: &str = "#c9d2e0";
/// Lakes and rivers
pub const WATER_COLOR: &str = "#99c0db";

/// Orthographic globe rotation that centers Africa
pub const AFRICA_LON: f64 = 17.0;
pub const AFRICA_LAT: f64 = 0.0;

/// Natural Earth resolution (1:110m)
pub const GEO_RESOLUTION: u32 = 110;

pub const BAR_TICK_ANGLE: f64 = 25.0;

/// Centered figure titles
pub const TITLE_X: f64 = 0.5;

/// Map margins (l, r, t, b)
pub const MAP_MARGIN: [usize; 4] = [20, 20, 10, 10];

/// Bar and pie margins (l, r, t, b)
pub const CHART_MARGIN: [usize; 4] = [30, 30, 60, 60];

/// Plasma sequential palette, dark to bright
pub const PLASMA: [&str; 10] = [
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

/// Plasma as evenly spaced Plotly colorscale stops
pub fn plasma_colorscale() -> Vec<(f64, String)> {
    let last = (PLASMA.len() - 1) as f64;
    PLASMA
        .iter()
        .enumerate()
        .map(|(i, color)| (i as f64 / last, color.to_string()))
        .collect()
}

fn margin([l, r, t, b]: [usize; 4]) -> Margin {
    Margin::new().left(l).right(r).top(t).bottom(b)
}

/// White background, black text
pub fn base_layout(margins: [usize; 4]) -> Layout {
    Layout::new()
        .paper_background_color(PAPER_BGCOLOR)
        .font(Font::new().color(FONT_COLOR))
        .margin(margin(margins))
}

/// Base layout plus a centered title, used by the bar and pie charts
pub fn titled_layout(title: &str) -> Layout {
    base_layout(CHART_MARGIN).title(Title::with_text(title).x(TITLE_X))
}

/// Marker with an outline around each region, bar or slice
pub fn outlined(color: &str, width: f64) -> Marker {
    Marker::new().line(Line::new().color(color.to_string()).width(width))
}

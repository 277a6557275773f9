//! Page Layout
//!
//! Static description of the dashboard page: a title, the year slider and
//! three chart regions. Built once from the dataset's year range and
//! rendered to HTML by [`render_html`].

pub mod html;

pub use html::{escape_html, render_html};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::Dataset;

pub const PAGE_TITLE: &str = "African GDP Dashboard";
pub const SLIDER_ID: &str = "year-slider";
pub const MAP_ID: &str = "world-map";
pub const BAR_ID: &str = "gdp-bar-chart";
pub const PIE_ID: &str = "gdp-pie-chart";

/// Endpoint the slider calls on every change
pub const CHARTS_ENDPOINT: &str = "/api/v1/charts";

/// Year spans wider than this still get one mark per year, with a warning
pub const WIDE_SLIDER_SPAN: u64 = 200;

/// CSS declarations keyed by property name
pub type Style = BTreeMap<String, String>;

fn style(pairs: &[(&str, &str)]) -> Style {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Render a style map as an inline `style` attribute value
pub fn to_css(style: &Style) -> String {
    style
        .iter()
        .map(|(k, v)| format!("{}: {};", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full page description
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageLayout {
    pub title: String,
    pub page_style: Style,
    pub title_style: Style,
    pub slider: SliderSpec,
    pub rows: Vec<GraphRow>,
    pub charts_endpoint: String,
}

/// Stepped year slider
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderSpec {
    pub id: String,
    pub min: i32,
    pub max: i32,
    pub value: i32,
    pub step: i32,
    pub marks: Vec<SliderMark>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderMark {
    pub value: i32,
    pub label: String,
}

/// A flex row of chart regions
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphRow {
    pub style: Style,
    pub graphs: Vec<GraphSlot>,
}

/// Placeholder a figure is drawn into
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphSlot {
    pub id: String,
    pub chart: ChartKind,
    pub style: Style,
}

/// Which figure of a `ChartSet` fills a slot
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Map,
    Bar,
    Pie,
}

impl PageLayout {
    /// Iterate all graph slots, top to bottom, left to right
    pub fn graphs(&self) -> impl Iterator<Item = &GraphSlot> {
        self.rows.iter().flat_map(|row| row.graphs.iter())
    }
}

/// Build the page for a loaded dataset
pub fn build_layout(dataset: &Dataset) -> PageLayout {
    let range = dataset.year_range();
    if range.span() > WIDE_SLIDER_SPAN {
        tracing::warn!(
            range = %range,
            marks = range.span(),
            "Dataset year range is unusually wide, check the Year column"
        );
    }

    let slider = SliderSpec {
        id: SLIDER_ID.to_string(),
        min: range.min,
        max: range.max,
        value: range.min,
        step: 1,
        marks: range
            .iter()
            .map(|year| SliderMark {
                value: year,
                label: year.to_string(),
            })
            .collect(),
    };

    let row_style = style(&[("display", "flex"), ("background-color", "white")]);

    let map_row = GraphRow {
        style: row_style.clone(),
        graphs: vec![GraphSlot {
            id: MAP_ID.to_string(),
            chart: ChartKind::Map,
            style: style(&[
                ("border", "1px solid black"),
                ("height", "400px"),
                ("width", "100%"),
                ("margin-top", "20px"),
                ("margin-bottom", "10px"),
                ("background-color", "#000000"),
            ]),
        }],
    };

    let bar_pie_row = GraphRow {
        style: row_style,
        graphs: vec![
            GraphSlot {
                id: BAR_ID.to_string(),
                chart: ChartKind::Bar,
                style: style(&[
                    ("border", "1px solid black"),
                    ("height", "400px"),
                    ("width", "49%"),
                    ("float", "right"),
                    ("margin-right", "5px"),
                    ("margin-bottom", "20px"),
                    ("background-color", "#000000"),
                ]),
            },
            GraphSlot {
                id: PIE_ID.to_string(),
                chart: ChartKind::Pie,
                style: style(&[
                    ("border", "1px solid black"),
                    ("height", "400px"),
                    ("width", "49%"),
                    ("float", "left"),
                    ("margin-left", "5px"),
                    ("margin-right", "10px"),
                    ("margin-bottom", "20px"),
                    ("background-color", "#000000"),
                ]),
            },
        ],
    };

    PageLayout {
        title: PAGE_TITLE.to_string(),
        page_style: style(&[
            ("background-color", "white"),
            ("color", "#FFFFFF"),
            ("margin", "0"),
        ]),
        title_style: style(&[
            ("text-align", "center"),
            ("color", "black"),
            ("font-family", "sans-serif"),
            ("padding-top", "30px"),
        ]),
        slider,
        rows: vec![map_row, bar_pie_row],
        charts_endpoint: CHARTS_ENDPOINT.to_string(),
    }
}

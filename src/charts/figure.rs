//! Map figure model
//!
//! The bar and pie charts are `plotly::Plot`s. The `plotly` crate has no
//! choropleth trace, and its `Layout` has no `geo` or `coloraxis`
//! attributes, so the map figure is modelled here. It reuses the crate's
//! `Layout`, `Marker` and `Title` for everything they can express and
//! serializes to the same `{data, layout}` JSON shape.

use plotly::common::{Marker, Title};
use plotly::Layout;
use serde::Serialize;

/// Map figure: one choropleth trace plus its layout
#[derive(Serialize)]
pub struct MapFigure {
    pub data: Vec<ChoroplethTrace>,
    pub layout: MapLayout,
}

impl MapFigure {
    /// Number of regions drawn
    pub fn region_count(&self) -> usize {
        self.data.iter().map(|t| t.locations.len()).sum()
    }
}

/// Regions keyed by location code, colored by `z`
#[derive(Serialize)]
#[serde(tag = "type", rename = "choropleth")]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub locationmode: String,
    pub z: Vec<f64>,
    pub hovertext: Vec<String>,
    pub hovertemplate: String,
    pub coloraxis: String,
    pub marker: Marker,
}

/// `plotly::Layout` extended with the map-only attributes
#[derive(Serialize)]
pub struct MapLayout {
    #[serde(flatten)]
    pub base: Layout,
    pub geo: Geo,
    pub coloraxis: ColorAxis,
}

/// Map projection and base-layer styling
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Geo {
    pub projection: Projection,
    pub showframe: bool,
    pub showcoastlines: bool,
    pub showcountries: bool,
    pub countrycolor: String,
    pub showocean: bool,
    pub oceancolor: String,
    pub showlakes: bool,
    pub lakecolor: String,
    pub showrivers: bool,
    pub rivercolor: String,
    pub resolution: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
    pub rotation: Rotation,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Rotation {
    pub lon: f64,
    pub lat: f64,
}

/// Shared continuous color scale
#[derive(Serialize)]
pub struct ColorAxis {
    pub colorscale: Vec<(f64, String)>,
    pub colorbar: ColorBar,
}

#[derive(Serialize)]
pub struct ColorBar {
    pub title: Title,
}

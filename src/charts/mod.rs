//! Dashboard Charts
//!
//! Turns the rows for a selected year into three Plotly figures. The bar and
//! pie charts are built with the `plotly` crate; the map uses the
//! choropleth model in [`figure`].
//!
//! - **map**: choropleth of every economy, centered on Africa
//! - **bar**: the five largest economies
//! - **pie**: GDP shares, with everything outside the top five labelled `Other`
//!
//! ```text
//! year → Dataset::filter_year → rank_by_gdp → { map, bar, pie }
//! ```

pub mod bar;
pub mod figure;
pub mod map;
pub mod pie;
pub mod style;
pub mod update;

pub use bar::bar_figure;
pub use figure::MapFigure;
pub use map::map_figure;
pub use pie::{pie_figure, relabel_other};
pub use update::{rank_by_gdp, update_charts, ChartSet};

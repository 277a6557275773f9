//! Bar chart of the largest economies for a year.

use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Bar, Plot};

use super::style::*;
use crate::dataset::EconomicRecord;

/// Build the bar figure from rows already ranked by GDP, largest first.
///
/// Only the first `TOP_N` rows are drawn.
pub fn bar_figure(ranked: &[&EconomicRecord], year: i32) -> Plot {
    let top = &ranked[..ranked.len().min(TOP_N)];

    let countries: Vec<String> = top.iter().map(|r| r.country.clone()).collect();
    let values: Vec<f64> = top.iter().map(|r| r.gdp_usd).collect();
    let trace = Bar::new(countries, values).marker(outlined(OUTLINE_COLOR, OUTLINE_WIDTH));

    let title = format!("Largest {} African Economies in {}", TOP_N, year);
    let layout = titled_layout(&title)
        .x_axis(
            Axis::new()
                .title(Title::with_text(COUNTRY_LABEL))
                .tick_angle(BAR_TICK_ANGLE),
        )
        .y_axis(Axis::new().title(Title::with_text(GDP_AXIS_LABEL)));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

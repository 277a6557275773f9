//! Pie chart of GDP shares.
//!
//! Rows outside the top economies keep their own slice but are relabelled
//! `Other`. The values are not summed here; Plotly merges slices that share
//! a label when it draws the pie.

use plotly::{Pie, Plot};

use super::style::*;
use crate::dataset::EconomicRecord;

/// Build the pie figure from rows already ranked by GDP, largest first
pub fn pie_figure(ranked: &[&EconomicRecord], year: i32) -> Plot {
    let values: Vec<f64> = ranked.iter().map(|r| r.gdp_usd).collect();
    let trace = Pie::new(values)
        .labels(relabel_other(ranked))
        .marker(outlined(OUTLINE_COLOR, OUTLINE_WIDTH));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(titled_layout(&format!("GDP Distribution in {}", year)));
    plot
}

/// Slice labels: the top `TOP_N` rows keep their country name, the rest
/// become `Other`. A row with missing GDP never counts as a top economy.
pub fn relabel_other(ranked: &[&EconomicRecord]) -> Vec<String> {
    let mut named = 0;
    ranked
        .iter()
        .map(|r| {
            if named < TOP_N && !r.gdp_missing() {
                named += 1;
                r.country.clone()
            } else {
                OTHER_LABEL.to_string()
            }
        })
        .collect()
}

//! Chart update
//!
//! Recomputes all three figures for a selected year. The result is a pure
//! function of the dataset and the year.

use plotly::Plot;
use serde::Serialize;

use super::bar::bar_figure;
use super::figure::MapFigure;
use super::map::map_figure;
use super::pie::pie_figure;
use crate::dataset::{cmp_gdp_desc, Dataset, EconomicRecord};

/// The three linked figures for one year, each serialized as Plotly
/// `{data, layout}` figure JSON
#[derive(Serialize)]
pub struct ChartSet {
    pub year: i32,
    pub map: MapFigure,
    pub bar: Plot,
    pub pie: Plot,
}

/// Build the map, bar and pie figures for `year`.
///
/// The year is not checked against the dataset's range. A year without rows
/// produces figures with empty data.
pub fn update_charts(dataset: &Dataset, year: i32) -> ChartSet {
    let rows = dataset.filter_year(year);
    let ranked = rank_by_gdp(&rows);

    tracing::debug!(year, rows = rows.len(), "Updating charts");

    ChartSet {
        year,
        map: map_figure(&rows),
        bar: bar_figure(&ranked, year),
        pie: pie_figure(&ranked, year),
    }
}

/// Rows ordered by GDP, largest first. Ties keep their source order and
/// missing values go last.
pub fn rank_by_gdp<'a>(rows: &[&'a EconomicRecord]) -> Vec<&'a EconomicRecord> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| cmp_gdp_desc(a, b));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::style::OTHER_LABEL;
    use serde_json::{json, Value};

    fn scenario() -> Dataset {
        Dataset::new(vec![
            EconomicRecord::new("Kenya", "KEN", 2020, 100.0),
            EconomicRecord::new("Nigeria", "NGA", 2020, 450.0),
            EconomicRecord::new("Ethiopia", "ETH", 2020, 60.0),
            EconomicRecord::new("Egypt", "EGY", 2020, 400.0),
            EconomicRecord::new("Ghana", "GHA", 2020, 70.0),
            EconomicRecord::new("SouthAfrica", "ZAF", 2020, 350.0),
            EconomicRecord::new("Nigeria", "NGA", 2018, 421.0),
            EconomicRecord::new("Egypt", "EGY", 2018, 250.0),
            EconomicRecord::new("Nigeria", "NGA", 2021, 440.0),
        ])
        .unwrap()
    }

    fn charts_json(dataset: &Dataset, year: i32) -> Value {
        serde_json::to_value(update_charts(dataset, year)).unwrap()
    }

    fn entries(value: &Value, key: &str) -> Vec<Value> {
        value[key].as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn test_scenario_bar_top_five() {
        let charts = charts_json(&scenario(), 2020);
        let bar = &charts["bar"]["data"][0];

        assert_eq!(
            bar["x"],
            json!(["Nigeria", "Egypt", "SouthAfrica", "Kenya", "Ghana"])
        );
        assert_eq!(bar["y"], json!([450.0, 400.0, 350.0, 100.0, 70.0]));
    }

    #[test]
    fn test_scenario_pie_relabels_tail() {
        let charts = charts_json(&scenario(), 2020);
        let pie = &charts["pie"]["data"][0];

        assert_eq!(
            pie["labels"],
            json!(["Nigeria", "Egypt", "SouthAfrica", "Kenya", "Ghana", OTHER_LABEL])
        );
        assert_eq!(pie["values"], json!([450.0, 400.0, 350.0, 100.0, 70.0, 60.0]));
    }

    #[test]
    fn test_map_has_every_filtered_row() {
        let dataset = scenario();
        let charts = update_charts(&dataset, 2020);
        assert_eq!(charts.map.region_count(), dataset.count_for_year(2020));

        let value = serde_json::to_value(&charts).unwrap();
        let mut codes: Vec<String> = entries(&value["map"]["data"][0], "locations")
            .iter()
            .filter_map(|c| c.as_str().map(str::to_string))
            .collect();
        codes.sort();
        assert_eq!(codes, vec!["EGY", "ETH", "GHA", "KEN", "NGA", "ZAF"]);
    }

    #[test]
    fn test_bar_sorted_and_bounded_for_every_year() {
        let dataset = scenario();
        for year in dataset.year_range().iter() {
            let charts = charts_json(&dataset, year);
            let values: Vec<f64> = entries(&charts["bar"]["data"][0], "y")
                .iter()
                .filter_map(Value::as_f64)
                .collect();

            assert!(values.len() <= 5);
            assert!(values.windows(2).all(|w| w[0] >= w[1]));
            assert_eq!(
                entries(&charts["pie"]["data"][0], "values").len(),
                dataset.count_for_year(year)
            );
        }
    }

    #[test]
    fn test_idempotent() {
        let dataset = scenario();
        assert_eq!(charts_json(&dataset, 2020), charts_json(&dataset, 2020));
    }

    #[test]
    fn test_boundary_years() {
        let dataset = scenario();

        let first = charts_json(&dataset, dataset.min_year());
        assert_eq!(first["year"], 2018);
        assert_eq!(first["bar"]["data"][0]["x"], json!(["Nigeria", "Egypt"]));

        let last = charts_json(&dataset, dataset.max_year());
        assert_eq!(last["year"], 2021);
        assert_eq!(last["pie"]["data"][0]["labels"], json!(["Nigeria"]));
    }

    #[test]
    fn test_year_without_rows_is_blank() {
        let dataset = scenario();

        for year in [2019, 1960] {
            let charts = charts_json(&dataset, year);
            assert!(entries(&charts["map"]["data"][0], "locations").is_empty());
            assert!(entries(&charts["bar"]["data"][0], "x").is_empty());
            assert!(entries(&charts["pie"]["data"][0], "values").is_empty());
            assert_eq!(
                charts["bar"]["layout"]["title"]["text"],
                format!("Largest 5 African Economies in {}", year)
            );
        }
    }

    #[test]
    fn test_rank_ties_keep_source_order() {
        let rows = vec![
            EconomicRecord::new("A", "AAA", 2020, 10.0),
            EconomicRecord::new("B", "BBB", 2020, 20.0),
            EconomicRecord::new("C", "CCC", 2020, 10.0),
        ];
        let refs: Vec<&EconomicRecord> = rows.iter().collect();
        let ranked = rank_by_gdp(&refs);
        let names: Vec<&str> = ranked.iter().map(|r| r.country.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_serialized_shape() {
        let charts = charts_json(&scenario(), 2020);

        assert_eq!(charts["year"], 2020);
        assert_eq!(charts["map"]["data"][0]["type"], "choropleth");
        assert_eq!(charts["bar"]["data"][0]["type"], "bar");
        assert_eq!(charts["pie"]["data"][0]["type"], "pie");
        assert_eq!(charts["bar"]["layout"]["xaxis"]["tickangle"], 25.0);
        assert_eq!(charts["map"]["layout"]["geo"]["projection"]["type"], "orthographic");
    }
}

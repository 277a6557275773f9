//! Choropleth map of GDP by country, centered on Africa.

use plotly::common::Title;

use super::figure::{
    ChoroplethTrace, ColorAxis, ColorBar, Geo, MapFigure, MapLayout, Projection, Rotation,
};
use super::style::*;
use crate::dataset::EconomicRecord;

/// Build the map figure from the rows of one year, one region per row
pub fn map_figure(rows: &[&EconomicRecord]) -> MapFigure {
    let trace = ChoroplethTrace {
        locations: rows.iter().map(|r| r.code.clone()).collect(),
        locationmode: "ISO-3".to_string(),
        z: rows.iter().map(|r| r.gdp_usd).collect(),
        hovertext: rows.iter().map(|r| r.country.clone()).collect(),
        hovertemplate: format!(
            "<b>%{{hovertext}}</b><br><br>{}=%{{location}}<br>{}=%{{z}}<extra></extra>",
            CODE_LABEL, GDP_LABEL
        ),
        coloraxis: "coloraxis".to_string(),
        marker: outlined(BORDER_COLOR, BORDER_WIDTH),
    };

    let layout = MapLayout {
        base: base_layout(MAP_MARGIN).title(Title::with_text("")),
        geo: africa_geo(),
        coloraxis: ColorAxis {
            colorscale: plasma_colorscale(),
            colorbar: ColorBar {
                title: Title::with_text("GDP"),
            },
        },
    };

    MapFigure {
        data: vec![trace],
        layout,
    }
}

fn africa_geo() -> Geo {
    Geo {
        projection: Projection {
            kind: "orthographic".to_string(),
            rotation: Rotation {
                lon: AFRICA_LON,
                lat: AFRICA_LAT,
            },
        },
        showframe: false,
        showcoastlines: false,
        showcountries: true,
        countrycolor: BORDER_COLOR.to_string(),
        showocean: true,
        oceancolor: OCEAN_COLOR.to_string(),
        showlakes: true,
        lakecolor: WATER_COLOR.to_string(),
        showrivers: true,
        rivercolor: WATER_COLOR.to_string(),
        resolution: GEO_RESOLUTION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_one_region_per_row() {
        let rows = vec![
            EconomicRecord::new("Nigeria", "NGA", 2020, 450.0),
            EconomicRecord::new("Egypt", "EGY", 2020, 400.0),
        ];
        let refs: Vec<&EconomicRecord> = rows.iter().collect();
        let figure = map_figure(&refs);
        assert_eq!(figure.region_count(), 2);

        let value = serde_json::to_value(&figure).unwrap();
        let trace = &value["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locations"], json!(["NGA", "EGY"]));
        assert_eq!(trace["z"], json!([450.0, 400.0]));
        assert_eq!(trace["hovertext"], json!(["Nigeria", "Egypt"]));
        assert_eq!(trace["marker"]["line"]["color"], "#d1d1d1");
        assert_eq!(trace["marker"]["line"]["width"], 0.5);
    }

    #[test]
    fn test_geo_centered_on_africa() {
        let figure = map_figure(&[]);
        assert_eq!(figure.region_count(), 0);

        let value = serde_json::to_value(&figure.layout).unwrap();
        assert_eq!(value["geo"]["projection"]["type"], "orthographic");
        assert_eq!(value["geo"]["projection"]["rotation"]["lon"], 17.0);
        assert_eq!(value["geo"]["projection"]["rotation"]["lat"], 0.0);
        assert_eq!(value["geo"]["oceancolor"], "#c9d2e0");
        assert_eq!(value["geo"]["lakecolor"], "#99c0db");
        assert_eq!(value["geo"]["rivercolor"], "#99c0db");
        assert_eq!(value["geo"]["showcoastlines"], false);
        assert_eq!(value["geo"]["resolution"], 110);
        assert_eq!(value["coloraxis"]["colorbar"]["title"]["text"], "GDP");
        assert_eq!(value["title"]["text"], "");
        assert_eq!(value["paper_bgcolor"], "white");
        assert_eq!(value["margin"], json!({"l": 20, "r": 20, "t": 10, "b": 10}));
    }
}

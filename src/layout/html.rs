//! HTML rendering for the dashboard page.
//!
//! The page pulls Plotly.js from its CDN and asks the charts endpoint for
//! fresh figures whenever the slider settles on a new year.

use super::{to_css, PageLayout};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Client script. `__LAYOUT__` is replaced with the page layout as JSON.
const SCRIPT: &str = r#"
const layout = __LAYOUT__;
const slider = document.getElementById(layout.slider.id);
const current = document.getElementById("year-value");

async function draw(year) {
  const response = await fetch(`${layout.charts_endpoint}?year=${encodeURIComponent(year)}`);
  if (!response.ok) {
    throw new Error(`chart update failed with status ${response.status}`);
  }
  const charts = await response.json();
  for (const row of layout.rows) {
    for (const slot of row.graphs) {
      const figure = charts[slot.chart];
      Plotly.react(slot.id, figure.data, figure.layout, { responsive: true });
    }
  }
}

slider.addEventListener("input", (event) => {
  current.textContent = event.target.value;
});
slider.addEventListener("change", (event) => {
  draw(event.target.value);
});
draw(slider.value);
"#;

/// Escape text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render a complete HTML document for the page
pub fn render_html(layout: &PageLayout) -> Result<String, serde_json::Error> {
    // `</` would close the script element early
    let layout_json = serde_json::to_string(layout)?.replace("</", "<\\/");

    let slider = &layout.slider;
    let marks: String = slider
        .marks
        .iter()
        .map(|m| format!(r#"<option value="{}" label="{}"></option>"#, m.value, escape_html(&m.label)))
        .collect();
    let mark_labels: String = slider
        .marks
        .iter()
        .map(|m| format!("<span>{}</span>", escape_html(&m.label)))
        .collect();

    let rows: String = layout
        .rows
        .iter()
        .map(|row| {
            let graphs: String = row
                .graphs
                .iter()
                .map(|g| {
                    format!(
                        r#"<div id="{}" style="{}"></div>"#,
                        escape_html(&g.id),
                        escape_html(&to_css(&g.style))
                    )
                })
                .collect();
            format!(
                r#"<div style="{}">{}</div>"#,
                escape_html(&to_css(&row.style)),
                graphs
            )
        })
        .collect();

    let title = escape_html(&layout.title);
    let slider_id = escape_html(&slider.id);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{plotly}"></script>
</head>
<body style="{page_style}">
<h1 style="{title_style}">{title}</h1>
<div style="color: black; font-family: sans-serif; padding: 0 20px;">
<input type="range" id="{slider_id}" min="{min}" max="{max}" step="{step}" value="{value}" list="{slider_id}-marks" style="width: 100%;">
<datalist id="{slider_id}-marks">{marks}</datalist>
<div style="display: flex; justify-content: space-between; font-size: 12px;">{mark_labels}</div>
<p style="text-align: center;">Year: <strong id="year-value">{value}</strong></p>
</div>
{rows}
<script>{script}</script>
</body>
</html>
"#,
        plotly = PLOTLY_JS,
        page_style = escape_html(&to_css(&layout.page_style)),
        title_style = escape_html(&to_css(&layout.title_style)),
        min = slider.min,
        max = slider.max,
        step = slider.step,
        value = slider.value,
        script = SCRIPT.replace("__LAYOUT__", &layout_json),
    ))
}

use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::models::{CategorySeries, MonthlySeries};
use crate::theme::Theme;

pub const MONTHLY_CANVAS: &str = "monthly-chart";
pub const CATEGORY_CANVAS: &str = "category-chart";

const INCOME_FILL: &str = "#198754";
const INCOME_BORDER: &str = "#146c43";
const EXPENSE_FILL: &str = "#dc3545";
const EXPENSE_BORDER: &str = "#b02a37";

const PIE_COLORS: &[&str] = &[
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#36A2EB",
];

/// Text/grid/border colors fed into the chart configs so the charts follow
/// the active theme.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ChartPalette {
    pub text: &'static str,
    pub grid: &'static str,
    pub segment_border: &'static str,
}

impl ChartPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => ChartPalette {
                text: "#212529",
                grid: "rgba(0, 0, 0, 0.1)",
                segment_border: "#ffffff",
            },
            Theme::Dark => ChartPalette {
                text: "#dee2e6",
                grid: "rgba(255, 255, 255, 0.15)",
                segment_border: "#212529",
            },
        }
    }
}

pub fn monthly_chart_config(series: &MonthlySeries, palette: &ChartPalette) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": series.labels,
            "datasets": [
                {
                    "label": "Income",
                    "data": series.income,
                    "backgroundColor": INCOME_FILL,
                    "borderColor": INCOME_BORDER,
                    "borderWidth": 1,
                },
                {
                    "label": "Expenses",
                    "data": series.expenses,
                    "backgroundColor": EXPENSE_FILL,
                    "borderColor": EXPENSE_BORDER,
                    "borderWidth": 1,
                },
            ],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": {
                    "ticks": { "color": palette.text },
                    "grid": { "color": palette.grid },
                },
                "y": {
                    "beginAtZero": true,
                    "ticks": { "color": palette.text },
                    "grid": { "color": palette.grid },
                },
            },
            "plugins": {
                "legend": {
                    "position": "top",
                    "labels": { "color": palette.text },
                },
            },
        },
    })
}

pub fn category_chart_config(series: &CategorySeries, palette: &ChartPalette) -> Value {
    let colors: Vec<&str> = PIE_COLORS
        .iter()
        .cycle()
        .take(series.labels.len())
        .copied()
        .collect();
    json!({
        "type": "pie",
        "data": {
            "labels": series.labels,
            "datasets": [{
                "data": series.data,
                "backgroundColor": colors,
                "borderColor": palette.segment_border,
                "borderWidth": 2,
            }],
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": { "color": palette.text },
                },
            },
        },
    })
}

/// Seam between the view-state bookkeeping and the actual chart library, so
/// the lifecycle rules are testable without a canvas.
pub trait ChartBackend {
    type Handle;

    fn create(&self, canvas_id: &str, config: &Value) -> Option<Self::Handle>;
    fn destroy(&self, handle: Self::Handle);
    fn clear(&self, canvas_id: &str);
}

#[wasm_bindgen]
extern "C" {
    /// The page-global Chart.js constructor (loaded from index.html).
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartInstance;

    #[wasm_bindgen(constructor, js_class = "Chart")]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> ChartInstance;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartInstance);
}

fn canvas_by_id(canvas_id: &str) -> Option<HtmlCanvasElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

/// Production backend driving Chart.js.
pub struct ChartJs;

impl ChartBackend for ChartJs {
    type Handle = ChartInstance;

    fn create(&self, canvas_id: &str, config: &Value) -> Option<ChartInstance> {
        let canvas = canvas_by_id(canvas_id)?;
        let config = js_sys::JSON::parse(&config.to_string()).ok()?;
        Some(ChartInstance::new(&canvas, &config))
    }

    fn destroy(&self, handle: ChartInstance) {
        handle.destroy();
    }

    fn clear(&self, canvas_id: &str) {
        if let Some(canvas) = canvas_by_id(canvas_id) {
            if let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
            {
                ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> ChartPalette {
        ChartPalette::for_theme(Theme::Light)
    }

    #[test]
    fn monthly_config_pairs_both_datasets() {
        let series = MonthlySeries {
            labels: vec!["Jan 2024".into(), "Feb 2024".into()],
            income: vec![100.0, 50.0],
            expenses: vec![40.0, 60.0],
        };
        let config = monthly_chart_config(&series, &palette());
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["datasets"].as_array().unwrap().len(), 2);
        assert_eq!(config["data"]["datasets"][0]["label"], "Income");
    }

    #[test]
    fn category_config_uses_one_color_per_slice() {
        let series = CategorySeries {
            labels: (0..10).map(|i| format!("cat{}", i)).collect(),
            data: vec![1.0; 10],
        };
        let config = category_chart_config(&series, &palette());
        let colors = config["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .unwrap();
        assert_eq!(colors.len(), 10);
    }

    #[test]
    fn palettes_differ_between_themes() {
        assert_ne!(
            ChartPalette::for_theme(Theme::Light),
            ChartPalette::for_theme(Theme::Dark)
        );
    }
}

use contracts::dashboards::d100_inventory::ChartSeriesBundle;
use js_sys::{Function, Reflect};
use leptos::html::Canvas;
use leptos::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Name of the global function provided by `assets/charts.js`
const RENDER_FN: &str = "renderChart";

/// Canvas handed to the chart renderer once it is mounted.
#[component]
pub fn ChartCanvas(bundle: ChartSeriesBundle, #[prop(optional)] height: Option<u32>) -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if let Err(err) = render_chart(&canvas, &bundle) {
            log::error!("Failed to render {:?} chart: {:?}", bundle.kind, err);
        }
    });

    view! {
        <div class="chart-container" style=format!("height: {}px;", height.unwrap_or(300))>
            <canvas node_ref=canvas_ref></canvas>
        </div>
    }
}

fn render_chart(canvas: &HtmlCanvasElement, bundle: &ChartSeriesBundle) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;

    let render_value = Reflect::get(&window, &JsValue::from_str(RENDER_FN))?;
    if !render_value.is_function() {
        return Err(JsValue::from_str("renderChart is not a function"));
    }
    let render_fn: Function = render_value.dyn_into()?;
    let data_value = bundle
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    render_fn.call2(&window, canvas, &data_value)?;
    Ok(())
}

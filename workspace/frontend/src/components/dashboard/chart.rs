use client::projection::{ZoneChart, ZoneShare};
use plotly::Layout;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::shared::loading::Loading;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_ID: &str = "chart-zone-segregation";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart: ZoneChart,
}

#[function_component(ZoneShareChart)]
pub fn zone_share_chart(props: &Props) -> Html {
    match &props.chart {
        ZoneChart::Hidden => html! {},
        ZoneChart::Loading => html! { <Loading text="Loading zone data..." /> },
        ZoneChart::Unavailable => html! {
            <div class="text-center py-8 text-gray-500">
                <i class="fas fa-chart-pie text-4xl mb-4 opacity-50"></i>
                <p>{"Zone data not available"}</p>
            </div>
        },
        ZoneChart::Ready(shares) => html! { <PlotlyPie shares={shares.clone()} /> },
    }
}

#[derive(Properties, PartialEq)]
struct PlotlyPieProps {
    shares: Vec<ZoneShare>,
}

#[function_component(PlotlyPie)]
fn plotly_pie(props: &PlotlyPieProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.shares.clone()), move |(container_ref, shares)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_ID);
            if let Err(e) = draw(shares) {
                log::error!("Failed to draw zone chart: {:?}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:380px;"></div>
    }
}

fn draw(shares: &[ZoneShare]) -> Result<(), JsValue> {
    let trace = serde_json::json!([{
        "type": "pie",
        "labels": shares.iter().map(|s| s.zone_name.as_str()).collect::<Vec<_>>(),
        "values": shares.iter().map(|s| s.households).collect::<Vec<_>>(),
        "text": shares.iter().map(|s| s.label.as_str()).collect::<Vec<_>>(),
        "textinfo": "text",
        "hoverinfo": "text",
        "sort": false,
        "hole": 0.35
    }]);

    let layout = Layout::new().height(380).show_legend(false);
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let data_js = js_sys::JSON::parse(&trace.to_string())?;
    let layout_js = to_js(&layout)?;
    let config_js = js_sys::JSON::parse(&config.to_string())?;

    newPlot(CHART_ID, data_js, layout_js, config_js);
    Ok(())
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

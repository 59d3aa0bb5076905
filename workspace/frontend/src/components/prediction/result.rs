use client::projection::project_prediction;
use common::PredictionResult;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub result: PredictionResult,
}

#[function_component(PredictionResultCard)]
pub fn prediction_result_card(props: &Props) -> Html {
    let view = project_prediction(&props.result);

    html! {
        <div class="stats stats-vertical md:stats-horizontal shadow bg-base-200 w-full">
            <div class="stat">
                <div class="stat-title">{"Predicted Segregation Rate"}</div>
                <div class="stat-value text-success">{view.rate}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{"Predicted Households"}</div>
                <div class="stat-value">{view.households}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{"Model"}</div>
                <div class="stat-value text-lg font-mono">{view.model}</div>
            </div>
        </div>
    }
}

use client::RequestState;
use common::ZoneName;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use super::result::PredictionResultCard;
use crate::hooks::use_prediction;
use crate::shared::error::ErrorAlert;

#[function_component(PredictionPanel)]
pub fn prediction_panel() -> Html {
    let (controller, state) = use_prediction();
    let is_loading = state.is_loading();

    let on_total = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_total(input.value());
        })
    };

    let on_covered = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.set_covered(input.value());
        })
    };

    let on_zone = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ZoneName>() {
                Ok(zone) => controller.set_zone(zone),
                Err(err) => log::warn!("Ignoring zone selection: {}", err),
            }
        })
    };

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                log::debug!("Prediction submitted");
                controller.submit().await;
            });
        })
    };

    html! {
        <>
            <form onsubmit={on_submit} class="space-y-4" novalidate={true}>
                <div class="form-control">
                    <label class="label" for="total_households">
                        <span class="label-text">{"Total Households"}</span>
                    </label>
                    <input
                        id="total_households"
                        type="number"
                        min="1"
                        step="1"
                        class="input input-bordered w-full"
                        placeholder="e.g. 1000"
                        value={state.form.total_households.clone()}
                        oninput={on_total}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="covered_households">
                        <span class="label-text">{"Covered Households"}</span>
                    </label>
                    <input
                        id="covered_households"
                        type="number"
                        min="0"
                        step="1"
                        class="input input-bordered w-full"
                        placeholder="e.g. 800"
                        value={state.form.covered_households.clone()}
                        oninput={on_covered}
                    />
                </div>

                <div class="form-control">
                    <label class="label" for="zone_name">
                        <span class="label-text">{"Zone"}</span>
                    </label>
                    <select id="zone_name" class="select select-bordered w-full" onchange={on_zone}>
                        { for ZoneName::ALL.iter().map(|zone| html! {
                            <option
                                key={zone.as_str()}
                                value={zone.as_str()}
                                selected={*zone == state.form.zone}
                            >
                                {zone.as_str()}
                            </option>
                        })}
                    </select>
                </div>

                <button type="submit" class="btn btn-primary w-full" disabled={is_loading}>
                    if is_loading {
                        <span class="loading loading-spinner loading-sm"></span>
                        {" Predicting..."}
                    } else {
                        <i class="fas fa-chart-line"></i>
                        {" Predict"}
                    }
                </button>
            </form>

            <div class="mt-4">
                {match &state.outcome {
                    RequestState::Failure(err) => html! { <ErrorAlert message={err.to_string()} /> },
                    RequestState::Success(result) => html! { <PredictionResultCard result={result.clone()} /> },
                    RequestState::Idle | RequestState::Loading => html! {},
                }}
            </div>
        </>
    }
}

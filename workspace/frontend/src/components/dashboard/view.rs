use client::projection::project_dashboard;
use yew::prelude::*;

use super::chart::ZoneShareChart;
use super::stats::CityStats;
use crate::components::prediction::PredictionPanel;
use crate::hooks::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let state = use_dashboard();
    let view = project_dashboard(&state.snapshot);
    log::trace!("Rendering dashboard: {:?}", view.zones);

    html! {
        <>
            <CityStats city={view.city} />
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Source Segregation by Zone"}</h2>
                        <ZoneShareChart chart={view.zones} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Predict Segregation Rate"}</h2>
                        <PredictionPanel />
                    </div>
                </div>
            </div>
        </>
    }
}

use client::projection::CityPanel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub city: Option<CityPanel>,
}

/// City-wide snapshot. Renders nothing when the snapshot has no totals.
#[function_component(CityStats)]
pub fn city_stats(props: &Props) -> Html {
    let Some(city) = &props.city else {
        return html! {};
    };

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Total Households"}</div>
                    <div class="stat-value">{&city.total_households}</div>
                    <div class="stat-desc">{format!("Across {} zones", city.zones_reporting)}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Covered Households"}</div>
                    <div class="stat-value text-info">{&city.covered_households}</div>
                    if let Some(rate) = &city.coverage_rate {
                        <div class="stat-desc">{format!("{} doorstep coverage", rate)}</div>
                    }
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Segregating at Source"}</div>
                    <div class="stat-value text-success">{&city.segregated_households}</div>
                </div>
            </div>
            <div class="stats shadow bg-base-100">
                <div class="stat">
                    <div class="stat-title">{"Segregation Rate"}</div>
                    <div class="stat-value text-primary">{&city.segregation_rate}</div>
                    <div class="stat-desc">{"Of all households"}</div>
                </div>
            </div>
        </div>
    }
}

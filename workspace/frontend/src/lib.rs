use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod shared;
pub mod settings;

use components::dashboard::Dashboard;
use components::layout::layout::Layout;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Layout title="Waste Segregation Dashboard">
            <Dashboard />
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== SegWatch Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    if settings.api_base_url().is_empty() {
        log::debug!("API base URL: same origin");
    } else {
        log::debug!("API base URL: {}", settings.api_base_url());
    }

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

use client::{ChangeNotifier, DashboardLoader, DashboardState, PredictionController, PredictionState};
use std::rc::Rc;
use yew::prelude::*;

use crate::api_client::{api, BrowserTransport};

pub type Prediction = Rc<PredictionController<BrowserTransport>>;

/// Re-renders the calling component whenever the controller reports a
/// transition.
#[hook]
fn use_change_notifier() -> ChangeNotifier {
    let update = use_force_update();
    Rc::new(move || update.force_update())
}

/// Loads the city snapshot once, on first render.
#[hook]
pub fn use_dashboard() -> DashboardState {
    let notify = use_change_notifier();
    let loader = use_memo((), move |_| DashboardLoader::new(api(), notify));

    {
        let loader = loader.clone();
        use_effect_with((), move |_| {
            log::debug!("Dashboard mounted, requesting snapshot");
            wasm_bindgen_futures::spawn_local(async move {
                loader.load().await;
            });
            || ()
        });
    }

    loader.snapshot()
}

/// Prediction controller tied to the calling component, with the state it
/// held at this render.
#[hook]
pub fn use_prediction() -> (Prediction, PredictionState) {
    let notify = use_change_notifier();
    let controller = use_memo((), move |_| PredictionController::new(api(), notify));
    let state = controller.snapshot();
    (controller, state)
}

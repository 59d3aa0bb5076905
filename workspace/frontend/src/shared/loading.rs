use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub compact: bool,
}

/// Spinner with a caption, shown while a request is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let spinner = if props.compact { "loading-sm" } else { "loading-lg" };

    html! {
        <div class="flex flex-col justify-center items-center py-8 gap-3" aria-busy="true">
            <span class={classes!("loading", "loading-spinner", spinner)}></span>
            <p class="text-sm text-gray-500">{&props.text}</p>
        </div>
    }
}

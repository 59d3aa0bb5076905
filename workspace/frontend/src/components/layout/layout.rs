use yew::prelude::*;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 p-6 max-w-7xl w-full mx-auto">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 text-xs text-base-content/60">
                <span>{"Household figures are reported by the zonal offices and refreshed on reload."}</span>
            </footer>
        </div>
    }
}

use yew::prelude::*;
use log::info;

mod config;
mod contact;
mod error;
mod hooks;
mod overlay;
mod reveal;
mod sections;
mod viewport;
mod zoom;

mod components {
    pub mod nav;
}
mod pages {
    pub mod examples;
    pub mod header;
    pub mod home;
    pub mod pricing;
    pub mod why;
    pub mod workflow;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio page");
    yew::Renderer::<App>::new().render();
}

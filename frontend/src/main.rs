mod api;
mod components;
mod config;
mod pages;
mod route;

use yew::prelude::*;
use yew_router::prelude::*;

use components::{Footer, Navbar};
use route::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app">
                <Navbar />
                <div class="main-content">
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting, inference service at {}", config::inference_base_url());
    yew::Renderer::<App>::new().render();
}

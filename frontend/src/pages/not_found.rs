use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="page not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found"}</p>
            <Link<Route> to={Route::Home}>{"Return Home"}</Link<Route>>
        </main>
    }
}

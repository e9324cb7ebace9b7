use yew::prelude::*;
use yew_router::prelude::*;

use crate::route::{is_active, Route};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let current = use_route::<Route>();

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="brand">{"InfraScan"}</Link<Route>>
                <div class="nav-links">
                    { for Route::NAV.into_iter().map(|target| {
                        let classes = classes!(
                            "nav-link",
                            is_active(current, target).then_some("active")
                        );
                        html! {
                            <Link<Route> to={target} {classes}>{ target.title() }</Link<Route>>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}

use js_sys::Date;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="app-footer">
            <p>{ format!("© {} InfraScan. All rights reserved.", year) }</p>
        </footer>
    }
}

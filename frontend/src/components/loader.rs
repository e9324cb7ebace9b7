use yew::prelude::*;

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="loader" role="status">
            <div class="spinner"></div>
            <span>{"Processing... please wait"}</span>
        </div>
    }
}

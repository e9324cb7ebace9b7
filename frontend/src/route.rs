use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{About, Home, NotFound, Upload};

#[derive(Routable, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes listed in the navigation bar, in display order.
    pub const NAV: [Route; 3] = [Route::Home, Route::Upload, Route::About];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Upload => "Upload",
            Route::About => "About",
            Route::NotFound => "Not Found",
        }
    }
}

/// Whether the link to `target` should be highlighted for `current`.
pub fn is_active(current: Option<Route>, target: Route) -> bool {
    current == Some(target)
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Upload => html! { <Upload /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

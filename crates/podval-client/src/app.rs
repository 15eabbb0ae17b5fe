//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_query_config;
use crate::pages::{GamePage, HomePage, NotFoundPage};
use crate::routes::Route;

#[function_component(AppRoutes)]
fn app_routes() -> Html {
    let config = use_query_config();

    let switch = move |route: Route| match route {
        Route::Home => html! { <HomePage config={config} /> },
        Route::Game => html! { <GamePage config={config} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };

    html! { <Switch<Route> render={switch} /> }
}

/// Root application component with router.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <nav class="top-nav">
                <Link<Route> to={Route::Home}>{ "🏠 Лобби" }</Link<Route>>
                <Link<Route> to={Route::Game}>{ "⚔️ Раунд" }</Link<Route>>
            </nav>
            <AppRoutes />
        </BrowserRouter>
    }
}

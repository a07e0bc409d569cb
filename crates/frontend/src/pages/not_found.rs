use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Dashboard}>{"Back to the dashboard"}</Link<Route>>
        </section>
    }
}

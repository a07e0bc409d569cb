use crate::routes::{Route, switch};
use sportiva_frontend_common::{RoleProvider, SessionProvider};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <RoleProvider>
                <BrowserRouter>
                    <main class="app">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </RoleProvider>
        </SessionProvider>
    }
}

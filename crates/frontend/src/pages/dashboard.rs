use crate::components::Greeting;
use crate::routes::Route;
use sportiva_core::Role;
use sportiva_frontend_common::components::PageSkeleton;
use sportiva_frontend_common::services::AuthService;
use sportiva_frontend_common::session::SessionAction;
use sportiva_frontend_common::{
    PermissionGate, ProtectedRouteOptions, use_protected_route, use_session,
};
use yew::prelude::*;
use yew_router::prelude::*;

/// Overview for any signed-in user, with one card per role
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let route = use_protected_route(ProtectedRouteOptions::authenticated());
    let signing_out = use_state(|| false);

    let on_sign_out = {
        let session = session.clone();
        let signing_out = signing_out.clone();
        Callback::from(move |_: MouseEvent| {
            if *signing_out {
                return;
            }
            signing_out.set(true);
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                AuthService::new().sign_out().await;
                session.dispatch(SessionAction::SignOut);
            });
        })
    };

    if route.is_loading {
        return html! { <PageSkeleton /> };
    }
    let Some(user) = route.user.filter(|_| route.is_authorized) else {
        return Html::default();
    };

    let become_trainer = html! {
        <div class="card card-muted">
            <h2>{"Trainer"}</h2>
            <Link<Route> to={Route::AddRole}>{"Become a trainer"}</Link<Route>>
        </div>
    };
    let become_manager = html! {
        <div class="card card-muted">
            <h2>{"Gym Manager"}</h2>
            <Link<Route> to={Route::AddRole}>{"Register your gym"}</Link<Route>>
        </div>
    };

    html! {
        <section class="page dashboard">
            <header class="dashboard-header">
                <Greeting user_id={user.id.clone()} />
                if let Some(email) = &user.email {
                    <p class="muted">{email}</p>
                }
                <button
                    type="button"
                    class="btn btn-secondary"
                    onclick={on_sign_out}
                    disabled={*signing_out}
                >
                    {"Sign out"}
                </button>
            </header>

            <div class="cards">
                <PermissionGate required_roles={vec![Role::Member]}>
                    <div class="card">
                        <h2>{"Member"}</h2>
                        <Link<Route> to={Route::MemberDashboard}>{"Your gyms"}</Link<Route>>
                    </div>
                </PermissionGate>
                <PermissionGate required_roles={vec![Role::Trainer]} fallback={become_trainer}>
                    <div class="card">
                        <h2>{"Trainer"}</h2>
                        <Link<Route> to={Route::TrainerDashboard}>{"Trainer dashboard"}</Link<Route>>
                    </div>
                </PermissionGate>
                <PermissionGate required_roles={vec![Role::GymManager]} fallback={become_manager}>
                    <div class="card">
                        <h2>{"Gym Manager"}</h2>
                        <Link<Route> to={Route::Gym}>{"Manage your gyms"}</Link<Route>>
                    </div>
                </PermissionGate>
            </div>
        </section>
    }
}

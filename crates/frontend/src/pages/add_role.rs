use crate::components::forms::{RegisterGymManagerForm, RegisterTrainerForm};
use crate::routes::Route;
use sportiva_core::Role;
use sportiva_frontend_common::components::PageSkeleton;
use sportiva_frontend_common::{
    PermissionGate, ProtectedRouteOptions, use_protected_route, use_roles,
};
use yew::prelude::*;
use yew_router::prelude::*;

/// Registration for the trainer and gym-manager roles
#[function_component(AddRolePage)]
pub fn add_role_page() -> Html {
    let route = use_protected_route(ProtectedRouteOptions::authenticated());
    let roles = use_roles();
    let completed = use_state(|| Option::<Role>::None);

    let on_complete = |role: Role| {
        let roles = roles.clone();
        let completed = completed.clone();
        Callback::from(move |()| {
            completed.set(Some(role));
            // Reload so the gates below pick up the new role
            roles.refresh();
        })
    };

    if route.is_loading {
        return html! { <PageSkeleton /> };
    }
    let Some(user) = route.user.filter(|_| route.is_authorized) else {
        return Html::default();
    };

    html! {
        <section class="page add-role">
            <h1>{"Add a role"}</h1>
            if let Some(role) = *completed {
                <p class="form-success">
                    {format!("You are now registered as a {}.", role.label())}
                </p>
            }

            <PermissionGate
                required_roles={vec![Role::Trainer]}
                fallback={html! {
                    <RegisterTrainerForm
                        user_id={user.id.clone()}
                        on_complete={on_complete(Role::Trainer)}
                    />
                }}
            >
                <p class="muted">{"You are registered as a trainer."}</p>
            </PermissionGate>

            <PermissionGate
                required_roles={vec![Role::GymManager]}
                fallback={html! {
                    <RegisterGymManagerForm
                        user_id={user.id.clone()}
                        on_complete={on_complete(Role::GymManager)}
                    />
                }}
            >
                <p class="muted">{"You are registered as a gym manager."}</p>
            </PermissionGate>

            <Link<Route> to={Route::Dashboard}>{"Back to the dashboard"}</Link<Route>>
        </section>
    }
}

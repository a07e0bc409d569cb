use crate::components::ManagedGymList;
use crate::components::forms::{AddUserToGymForm, CreateGymForm};
use sportiva_core::Role;
use sportiva_frontend_common::components::{AccessDenied, InlineError, ListSkeleton, PageSkeleton};
use sportiva_frontend_common::hooks::{FetchState, use_fetch};
use sportiva_frontend_common::services::GymService;
use sportiva_frontend_common::{ProtectedRouteOptions, use_protected_route};
use yew::prelude::*;

/// Gym management; managers only, others see a notice instead of a redirect
#[function_component(GymPage)]
pub fn gym_page() -> Html {
    let route = use_protected_route(
        ProtectedRouteOptions::requiring([Role::GymManager]).without_redirect(),
    );

    if route.is_loading {
        return html! { <PageSkeleton /> };
    }
    match route.user.filter(|_| route.is_authorized) {
        Some(user) => html! { <ManageGyms user_id={user.id} /> },
        None => html! {
            <section class="page gym">
                <AccessDenied message="Only gym managers can manage gyms." />
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct ManageGymsProps {
    user_id: AttrValue,
}

#[function_component(ManageGyms)]
fn manage_gyms(props: &ManageGymsProps) -> Html {
    let gyms = use_fetch(props.user_id.clone(), |user_id| async move {
        GymService::new().gyms_by_manager(&user_id).await
    });

    let on_created = {
        let reload = gyms.reload_callback();
        Callback::from(move |id: String| {
            tracing::debug!(gym_id = %id, "reloading managed gyms");
            reload.emit(());
        })
    };

    let listing = match gyms.state() {
        FetchState::Loading => html! { <ListSkeleton /> },
        FetchState::Failed(message) => html! {
            <InlineError message={message.clone()} on_retry={gyms.reload_callback()} />
        },
        FetchState::Loaded(list) => html! {
            <>
                <ManagedGymList gyms={list.clone()} />
                <AddUserToGymForm added_by={props.user_id.clone()} gyms={list.clone()} />
            </>
        },
    };

    html! {
        <section class="page gym">
            <h1>{"Your gyms"}</h1>
            {listing}
            <CreateGymForm owner_user_id={props.user_id.clone()} {on_created} />
        </section>
    }
}

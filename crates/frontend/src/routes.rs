use crate::pages::{
    AddRolePage, AuthPage, DashboardPage, GymPage, MemberDashboard, NotFoundPage,
    TrainerDashboard,
};
use sportiva_core::Role;
use sportiva_frontend_common::WithRoleAccess;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/member")]
    MemberDashboard,
    #[at("/dashboard/trainer")]
    TrainerDashboard,
    #[at("/dashboard/roles/add")]
    AddRole,
    #[at("/gym")]
    Gym,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Auth => html! { <AuthPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::MemberDashboard => html! {
            <WithRoleAccess<MemberDashboard> required_role={Role::Member} inner={()} />
        },
        Route::TrainerDashboard => html! {
            <WithRoleAccess<TrainerDashboard> required_role={Role::Trainer} inner={()} />
        },
        Route::AddRole => html! { <AddRolePage /> },
        Route::Gym => html! { <GymPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

use crate::components::UserGymList;
use sportiva_frontend_common::session::use_session_user;
use yew::prelude::*;

/// Gyms the member belongs to
#[function_component(MemberDashboard)]
pub fn member_dashboard() -> Html {
    let Some(user) = use_session_user() else {
        return Html::default();
    };

    html! {
        <section class="page dashboard-member">
            <h1>{"Member dashboard"}</h1>
            <h2>{"Your gyms"}</h2>
            <UserGymList user_id={user.id} />
        </section>
    }
}

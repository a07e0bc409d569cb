use crate::components::UserGymList;
use sportiva_frontend_common::session::use_session_user;
use yew::prelude::*;

/// Gyms the trainer works at
#[function_component(TrainerDashboard)]
pub fn trainer_dashboard() -> Html {
    let Some(user) = use_session_user() else {
        return Html::default();
    };

    html! {
        <section class="page dashboard-trainer">
            <h1>{"Trainer dashboard"}</h1>
            <h2>{"Gyms you train at"}</h2>
            <UserGymList
                user_id={user.id}
                empty_message="No gym has added you as a trainer yet."
            />
        </section>
    }
}

use sportiva_core::{ManagedGym, UserGym};
use sportiva_frontend_common::components::{InlineError, ListSkeleton};
use sportiva_frontend_common::hooks::{FetchState, use_fetch};
use sportiva_frontend_common::services::UserService;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserGymListProps {
    pub user_id: AttrValue,
    #[prop_or(AttrValue::Static("You are not part of any gym yet."))]
    pub empty_message: AttrValue,
}

/// Gyms the user belongs to
#[function_component(UserGymList)]
pub fn user_gym_list(props: &UserGymListProps) -> Html {
    let gyms = use_fetch(props.user_id.clone(), |user_id| async move {
        UserService::new().user_gyms(&user_id).await
    });

    match gyms.state() {
        FetchState::Loading => html! { <ListSkeleton /> },
        FetchState::Failed(message) => html! {
            <InlineError message={message.clone()} on_retry={gyms.reload_callback()} />
        },
        FetchState::Loaded(list) if list.is_empty() => html! {
            <p class="muted">{props.empty_message.clone()}</p>
        },
        FetchState::Loaded(list) => html! {
            <ul class="gym-list">
                { for list.iter().map(user_gym_item) }
            </ul>
        },
    }
}

fn user_gym_item(gym: &UserGym) -> Html {
    html! {
        <li key={gym.gym_id.clone()}>
            <span class="gym-name">{&gym.gym_name}</span>
            if let Some(city) = &gym.gym_city {
                <span class="gym-city">{city}</span>
            }
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct ManagedGymListProps {
    pub gyms: Vec<ManagedGym>,
}

#[function_component(ManagedGymList)]
pub fn managed_gym_list(props: &ManagedGymListProps) -> Html {
    if props.gyms.is_empty() {
        return html! { <p class="muted">{"You have not created any gyms yet."}</p> };
    }

    html! {
        <ul class="gym-list">
            { for props.gyms.iter().map(|gym| html! {
                <li key={gym.id.clone()}>
                    <span class="gym-name">{&gym.name}</span>
                    if let Some(city) = &gym.city {
                        <span class="gym-city">{city}</span>
                    }
                </li>
            }) }
        </ul>
    }
}

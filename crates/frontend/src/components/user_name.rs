use sportiva_frontend_common::components::{CardSkeleton, InlineError};
use sportiva_frontend_common::hooks::{FetchState, use_fetch};
use sportiva_frontend_common::services::UserService;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GreetingProps {
    pub user_id: AttrValue,
}

/// Welcome line with the user's full name
#[function_component(Greeting)]
pub fn greeting(props: &GreetingProps) -> Html {
    let name = use_fetch(props.user_id.clone(), |user_id| async move {
        UserService::new().user_name(&user_id).await
    });

    match name.state() {
        FetchState::Loading => html! { <CardSkeleton /> },
        FetchState::Loaded(name) => html! {
            <h1>{format!("Welcome, {}", name.full_name())}</h1>
        },
        FetchState::Failed(message) => html! {
            <InlineError message={message.clone()} on_retry={name.reload_callback()} />
        },
    }
}
